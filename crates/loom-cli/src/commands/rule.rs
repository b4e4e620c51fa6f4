//! `loom rule <FILE>`: report the rule that would process a file.

use std::io::Write;

use loom_config::{ConfigResolver, EnvironmentInputs, RuleAction, is_in_source};
use serde_json::json;

use crate::cli::RuleArgs;
use crate::commands::load_settings;
use crate::error::{CliError, Result};
use crate::ui;

pub fn execute(args: RuleArgs, env: EnvironmentInputs) -> Result<()> {
    let settings = load_settings(&args.project)?;

    let absolute = settings.root().join(&args.file);
    if !is_in_source(&settings, &absolute) {
        ui::warning(&format!(
            "{} is outside {}; the engine will only see it if something imports it",
            args.file.display(),
            settings.source_dir
        ));
    }

    let config = ConfigResolver::new(settings, env)?.resolve();
    let rule = config
        .rule_for(&args.file)
        .ok_or_else(|| CliError::Unmatched(args.file.clone()))?;

    let summary = match &rule.action {
        RuleAction::Pipeline { stages } => json!({
            "category": rule.category.as_str(),
            "test": rule.test.as_str(),
            "loaders": stages.iter().map(|s| s.loader.as_str()).collect::<Vec<_>>(),
        }),
        RuleAction::Asset { policy, generator } => json!({
            "category": rule.category.as_str(),
            "test": rule.test.as_str(),
            "policy": policy.label(),
            "filename": generator.filename,
        }),
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{summary}")?;
    Ok(())
}
