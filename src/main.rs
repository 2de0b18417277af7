use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use console::style;
use tracing::info;
use tracing_subscriber::EnvFilter;

use imagesheet::cli::Cli;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let summary = cli
        .run()
        .with_context(|| format!("could not update images from '{}'", cli.input.display()))?;

    info!(
        pairs = summary.pairs,
        bytes = summary.bytes,
        output = %summary.output.display(),
        "stylesheet written"
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", style("error:").red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
