mod display;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use clauseguard_client::{AnalyzeClient, mock};
use clauseguard_core::Tone;

#[derive(Parser)]
#[command(name = "clauseguard", version, about = "Contract risk analysis at the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a contract file and print the findings report.
    Analyze {
        /// Contract document to upload (PDF or DOCX).
        file: PathBuf,

        /// Base URL of the analysis service.
        #[arg(long, env = "CLAUSEGUARD_API_URL", default_value = "http://localhost:8000")]
        url: String,

        /// Tone for the negotiation draft: formal, friendly, or assertive.
        #[arg(long, default_value = "formal")]
        tone: Tone,

        /// Use the built-in sample analysis instead of calling the service.
        #[arg(long)]
        mock: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("clauseguard v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    match cli.command {
        Command::Analyze {
            file,
            url,
            tone,
            mock: use_mock,
        } => {
            let result = if use_mock {
                mock::sample_analysis()
            } else {
                let contents = std::fs::read(&file)
                    .with_context(|| format!("reading contract file {}", file.display()))?;
                let name = file
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "contract".to_string());
                AnalyzeClient::new(url)?
                    .analyze(&name, contents)
                    .await
                    .context("contract analysis failed; nothing to display")?
            };

            display::print_report(&result, tone)?;
        }
    }

    Ok(())
}
