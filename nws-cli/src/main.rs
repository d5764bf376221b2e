//! Binary crate for the `nws-forecast` console.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Logging setup
//! - Terminal input/output

use clap::Parser;

mod cli;
mod terminal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
