//! `loom resolve`: print the build configuration for the engine.

use std::io::Write;

use loom_config::{ConfigResolver, EnvironmentInputs};

use crate::cli::ResolveArgs;
use crate::commands::load_settings;
use crate::error::Result;

pub fn execute(args: ResolveArgs, env: EnvironmentInputs) -> Result<()> {
    let settings = load_settings(&args.project)?;
    let resolver = ConfigResolver::new(settings, env)?;

    tracing::info!(
        mode = resolver.mode().build_mode().as_str(),
        watch = resolver.mode().is_watch(),
        "resolving build configuration"
    );

    let json = resolver.resolve().to_json_string(!args.compact)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}
