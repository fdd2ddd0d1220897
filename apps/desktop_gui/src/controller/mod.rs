//! Controller layer: UI events and command orchestration around the
//! submission state machine.

pub mod events;
pub mod orchestration;
