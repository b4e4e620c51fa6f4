//! loom CLI entry point: argument parsing, logging setup, command dispatch.

use clap::Parser;
use loom_cli::{cli, commands, error, logger, ui};
use loom_config::EnvironmentInputs;
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init(args.no_color, args.quiet);

    // Mode flags are captured once, here.
    let env = EnvironmentInputs::from_process();

    let result = match args.command {
        cli::Command::Resolve(resolve_args) => commands::resolve_execute(resolve_args, env),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Rule(rule_args) => commands::rule_execute(rule_args, env),
    };

    result.map_err(error::cli_error_to_miette)
}
