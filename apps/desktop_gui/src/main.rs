mod backend_bridge;
mod controller;
mod ui;

use anyhow::anyhow;
use clap::Parser;
use client_core::{load_settings, SentimentClient};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{theme::load_theme, SentimentApp};

#[derive(Parser, Debug)]
#[command(name = "x-sentiment-gui", version)]
struct Args {
    /// Base URL of the backend serving `POST /predict`.
    #[arg(long)]
    backend_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let mut settings = load_settings()?;
    if let Some(url) = args.backend_url {
        settings = settings.with_backend_url(url)?;
    }
    let client = SentimentClient::from_settings(&settings);
    tracing::info!(endpoint = client.predict_url(), "using sentiment backend");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("X-Sentiment Pro")
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([560.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "X-Sentiment Pro",
        options,
        Box::new(move |cc| {
            let wake_ctx = cc.egui_ctx.clone();
            backend_bridge::runtime::launch(cmd_rx, ui_tx, client, move || {
                wake_ctx.request_repaint()
            });
            let theme = load_theme(cc.storage, cc.egui_ctx.system_theme());
            Ok(Box::new(SentimentApp::new(
                cmd_tx,
                ui_rx,
                settings.backend_url,
                theme,
            )))
        }),
    )
    .map_err(|err| anyhow!("desktop ui exited with error: {err}"))
}
