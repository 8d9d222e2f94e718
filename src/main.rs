use clap::Parser;
use miette::{IntoDiagnostic, Result};
use q2wc::cli::Cli;
use q2wc::logging::{self, LogOptions};

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&LogOptions::new(cli.debug, cli.logfile.as_deref())).into_diagnostic()?;

    q2wc::cli::convert::run(&cli)?;

    Ok(())
}
