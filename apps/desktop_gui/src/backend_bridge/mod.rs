//! Backend worker thread: owns the tokio runtime and performs network I/O.

pub mod commands;
pub mod runtime;
