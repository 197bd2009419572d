//! Binary crate for the `ubike` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Loading credentials from the environment
//! - Printing fetched records in a readable form

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    pretty_env_logger::init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
