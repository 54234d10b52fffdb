use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use throttler::cli::{build_cli, config_from_matches, limits_from_matches, scan_args};
use throttler::commands;

fn main() -> ExitCode {
    throttler::init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{}", format!("{:#}", e).red());
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let scan = scan_args(std::env::args_os());
    for problem in &scan.problems {
        println!("{}", problem.yellow());
    }

    let matches = build_cli().get_matches_from(scan.args);

    if matches.get_flag("version") {
        commands::version();
        return Ok(());
    }

    let (limits, problems) = limits_from_matches(&matches);
    for problem in &problems {
        println!("{}", problem.yellow());
    }

    let config = config_from_matches(&matches, limits)?;
    log::debug!("Configuration: {:?}", config);

    commands::throttle(&config)?;
    Ok(())
}
