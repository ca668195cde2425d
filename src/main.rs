use anyhow::{Context, Result};
use std::process::ExitCode;
use tidyclass::cli::{parse_args, setup, Cli};
use tidyclass::commands::{init_config, print_summary, sort_command, SortOptions};

fn run(cli: Cli) -> Result<u8> {
    let root = std::env::current_dir().context("Failed to determine working directory")?;

    if cli.init {
        init_config(&root, cli.force)?;
        return Ok(0);
    }

    let summary = sort_command(SortOptions {
        file: cli.file.clone(),
        root,
        config_path: cli.config.clone(),
        overrides: cli.overrides(),
        check: cli.check,
    })?;
    print_summary(&summary, cli.format)?;

    Ok(summary.exit_code() as u8)
}

fn main() -> ExitCode {
    let cli = parse_args();

    setup::init_logging(cli.verbosity, cli.plain);
    if cli.plain {
        colored::control::set_override(false);
    }

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
