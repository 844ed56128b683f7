use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use range_regex::{
    app,
    cli::{self, Args},
    logging, presentation,
};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::setup_logging(args.verbose, args.quiet);

    match try_main(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: &Args) -> Result<()> {
    let config = cli::build_config(args)?;
    let outcome = app::run(&config)?;
    let stdout = std::io::stdout();
    presentation::write_output(&mut stdout.lock(), &outcome, &config)?;
    Ok(())
}
