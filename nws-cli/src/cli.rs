use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use nws_core::{Config, NwsClient, app};

use crate::terminal::TerminalPrompt;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "nws-forecast", version, about = "Hourly NWS forecasts for a station or coordinate")]
pub struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug). RUST_LOG wins when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        init_tracing(self.verbose);

        let config = Config::load(self.config.as_deref()).context("Failed to load configuration")?;
        tracing::debug!(?config, "configuration loaded");

        let client = NwsClient::new(&config).context("Failed to build HTTP client")?;
        let mut prompt = TerminalPrompt::new();

        app::run(&client, &mut prompt).await?;
        Ok(())
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
