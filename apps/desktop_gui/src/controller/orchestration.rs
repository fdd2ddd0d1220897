//! Command orchestration helpers from UI actions to backend command queue.

use client_core::{InteractionController, TransportError};
use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext};

/// Runs the submission guard and queues the accepted request. If the queue
/// cannot take it, the attempt is resolved as a transport failure right away
/// so the in-flight flag never outlives a request that was never sent.
pub fn dispatch_analysis(
    cmd_tx: &Sender<BackendCommand>,
    controller: &mut InteractionController,
) -> Result<bool, UiError> {
    let Some(request) = controller.submit_requested() else {
        return Ok(false);
    };

    let cmd = BackendCommand::Analyze { request };
    let cmd_name = cmd.name();
    let reason = match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            return Ok(true);
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "ui->backend command queue is full");
            "UI command queue is full; please retry"
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "ui->backend command queue disconnected");
            "Backend command processor disconnected (possible startup/runtime failure); restart the app"
        }
    };

    controller.resolve(Err(TransportError::WorkerUnavailable(reason.to_string())));
    Err(UiError::from_message(UiErrorContext::Analyze, reason))
}
