//! `loom check`: validate settings and page templates without resolving.

use loom_config::{FsValidator, SettingsValidator};

use crate::cli::CheckArgs;
use crate::commands::load_settings;
use crate::error::Result;
use crate::ui;

pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking project settings...");

    let settings = load_settings(&args.project)?;
    FsValidator.validate(&settings)?;

    for page in &settings.pages {
        ui::success(&format!("  {} <- {}", page.filename, page.template.display()));
    }
    ui::success("Settings are valid!");
    Ok(())
}
