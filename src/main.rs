//! `rulechat`: terminal client for the rule-generator chat endpoint.
//!
//! Reads lines from stdin, prints rendered messages to stdout, logs to stderr.
//! Set `RUST_LOG=debug` to see detector decisions.

mod clipboard;
mod config;
mod error;
mod session;
mod terminal;

use clap::Parser;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use crate::clipboard::Osc52Clipboard;
use crate::config::Cli;
use crate::error::ClientError;
use crate::session::Session;
use crate::terminal::SharedWriter;

#[tokio::main]
async fn main() -> Result<(), ClientError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let url = cli.endpoint_url()?;

    let out = SharedWriter::new(std::io::stdout());
    let session = Session::new(out.clone(), Osc52Clipboard::new(out), cli.color_mode());

    session::run(&url, BufReader::new(tokio::io::stdin()), &session).await?;
    tracing::info!("session ended");
    Ok(())
}
