//! Command-line interface definition.
//!
//! - `loom resolve` - print the build configuration as JSON
//! - `loom check` - validate project settings and page templates
//! - `loom rule <FILE>` - show which rule handles a file
//!
//! The build mode always comes from `NODE_ENV`; there is no flag for it.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// loom - build configuration for Pug/SCSS/Babel projects
#[derive(Parser, Debug)]
#[command(
    name = "loom",
    version,
    about = "Resolve the asset-pipeline build configuration",
    long_about = "loom derives a complete bundler configuration from NODE_ENV \
                  (development, production or watch) and the project's loom.toml."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress status lines and logs; errors and command output still print
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resolved configuration as JSON
    Resolve(ResolveArgs),

    /// Validate settings and make sure every page template exists
    Check(CheckArgs),

    /// Show which rule handles a file
    Rule(RuleArgs),
}

/// Where to find the project and its settings.
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Project root directory
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Settings file (defaults to loom.toml or package.json in the root)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Print single-line JSON
    #[arg(long)]
    pub compact: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

#[derive(Args, Debug)]
pub struct RuleArgs {
    /// File to classify
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub project: ProjectArgs,
}
