use anyhow::{Context, Result};
use std::path::Path;

use crate::commands::generate::{render, write_rendered, GenerateRequest};
use crate::config::{config_dir, PropgenConfig};
use crate::ui;

/// Run every target in propgen.toml.
///
/// Every target is rendered before any file is written, so one bad target
/// leaves all outputs as they were.
pub fn build(config_path: &str) -> Result<()> {
    let path = Path::new(config_path);
    let config = PropgenConfig::load(path)?;
    let targets = config.resolved_targets(&config_dir(path))?;

    ui::print_step(&format!(
        "Building {} target(s) for {}",
        targets.len(),
        config.project.name
    ));

    let mut rendered = Vec::with_capacity(targets.len());
    for target in &targets {
        tracing::debug!(
            backend = %target.backend,
            input = %target.input.display(),
            output = %target.output.display(),
            "rendering target"
        );
        let request = GenerateRequest {
            backend: target.backend,
            input: target.input.clone(),
            output: Some(target.output.clone()),
            depfile: target.depfile.clone(),
            write_if_changed: target.write_if_changed,
        };
        let text = render(&request)
            .with_context(|| format!("Target {} failed", target.output.display()))?;
        rendered.push((request, text));
    }

    for (request, text) in &rendered {
        write_rendered(request, text)?;
    }

    ui::print_success("All targets generated");
    Ok(())
}
