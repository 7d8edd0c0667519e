//! CLI entry point for seeded regex puzzle generation

use clap::Parser;
use regex_quiz::io::cli::{Cli, Runner};
use tracing_subscriber::EnvFilter;

fn main() -> regex_quiz::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| cli.log_filter().into()),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let runner = Runner::new(cli);
    runner.run()
}
