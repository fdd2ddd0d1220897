use anyhow::{anyhow, bail, Result};
use clap::Parser;
use client_core::{load_settings, InteractionController, SentimentClient, SentimentTransport};
use shared::domain::AnalysisOutcome;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

/// Classify text with the sentiment backend. Without TEXT, each non-blank
/// line read from stdin is analyzed in turn.
#[derive(Parser, Debug)]
#[command(name = "x-sentiment", version)]
struct Args {
    /// Base URL of the backend serving `POST /predict`.
    #[arg(long)]
    backend_url: Option<String>,
    text: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings()?;
    if let Some(url) = args.backend_url {
        settings = settings.with_backend_url(url)?;
    }
    let client = SentimentClient::from_settings(&settings);
    tracing::info!(endpoint = client.predict_url(), "using sentiment backend");

    let mut controller = InteractionController::new();
    match args.text {
        Some(text) => {
            let outcome = analyze(&mut controller, &client, &text)
                .await
                .ok_or_else(|| anyhow!("text to analyze is empty"))?;
            if let AnalysisOutcome::Failed(message) = outcome {
                bail!(message);
            }
            println!("{}", render_outcome(&outcome));
        }
        None => {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                match analyze(&mut controller, &client, &line).await {
                    Some(AnalysisOutcome::Failed(message)) => eprintln!("error: {message}"),
                    Some(outcome) => println!("{}", render_outcome(&outcome)),
                    None => continue,
                }
            }
        }
    }

    Ok(())
}

async fn analyze<T>(
    controller: &mut InteractionController,
    transport: &T,
    text: &str,
) -> Option<AnalysisOutcome>
where
    T: SentimentTransport + ?Sized,
{
    controller.set_input_text(text);
    controller.submit(transport).await.cloned()
}

fn render_outcome(outcome: &AnalysisOutcome) -> String {
    match outcome {
        AnalysisOutcome::Unknown => "unknown (backend returned an unrecognized label)".to_string(),
        other => other.to_string(),
    }
}
