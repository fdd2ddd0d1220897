//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::SentimentTransport;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Spawns the backend worker. Commands are handled one at a time; `wake` is
/// called after every event so the UI can repaint without polling.
pub fn launch<T, W>(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    transport: T,
    wake: W,
) -> thread::JoinHandle<()>
where
    T: SentimentTransport + 'static,
    W: Fn() + Send + 'static,
{
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                wake();
                return;
            }
        };

        let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));
        wake();

        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::Analyze { request } => {
                        let result = transport.submit(request.text()).await;
                        // Every accepted request must yield exactly one result.
                        if ui_tx.send(UiEvent::AnalysisFinished(result)).is_err() {
                            tracing::debug!("ui event queue closed; stopping backend worker");
                            break;
                        }
                        wake();
                    }
                }
            }
        });
        tracing::debug!("backend worker stopped");
    })
}
