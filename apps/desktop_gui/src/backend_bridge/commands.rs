//! Backend commands queued from UI to backend worker.

use shared::domain::AnalysisRequest;

#[derive(Debug)]
pub enum BackendCommand {
    Analyze { request: AnalysisRequest },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Analyze { .. } => "analyze",
        }
    }
}
