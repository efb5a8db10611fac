use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::config::{config_dir, PropgenConfig};
use crate::ui;

pub fn validate(config_path: &str) -> Result<()> {
    let path = Path::new(config_path);
    let config = PropgenConfig::load(path)?;
    let targets = config.resolved_targets(&config_dir(path))?;

    ui::print_success(&format!("{} is valid", path.display()));
    println!("  Project: {}", config.project.name.bold());
    for target in targets {
        println!(
            "  {} {} {} {}",
            ui::symbols::BULLET.dimmed(),
            target.backend.to_string().cyan(),
            target.input.display(),
            format!("{} {}", ui::symbols::ARROW, target.output.display()).dimmed()
        );
        if !target.input.exists() {
            tracing::warn!(input = %target.input.display(), "target input does not exist yet");
        }
    }

    Ok(())
}
