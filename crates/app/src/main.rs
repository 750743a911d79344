//! Restbench - Command line entry point
//!
//! Parses the CLI, initializes logging, and dispatches to the
//! application layer. All state lives behind the backend service; the
//! only local persistence is the session file.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod cli;
mod render;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "restbench=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = cli::Cli::parse();
    match cli::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Failures are terminal to the action, not to the tool; the
            // backend's own message is preferred when it sent one.
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
