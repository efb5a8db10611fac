//! Writing generated files and their dependency files.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Unchanged,
}

/// Write `contents` to `path`, creating parent directories.
///
/// With `only_if_changed`, an existing file with identical contents is not
/// touched, so its timestamp does not trigger rebuilds.
pub fn write_output(path: &Path, contents: &str, only_if_changed: bool) -> Result<WriteOutcome> {
    if only_if_changed {
        if let Ok(existing) = fs::read_to_string(path) {
            if existing == contents {
                tracing::debug!(path = %path.display(), "output unchanged");
                return Ok(WriteOutcome::Unchanged);
            }
        }
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, contents)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(WriteOutcome::Written)
}

/// Make-style `target: dep ...` rule.
pub fn depfile_contents(target: &Path, deps: &[&Path]) -> String {
    let mut rule = escape_make(target);
    rule.push(':');
    for dep in deps {
        rule.push(' ');
        rule.push_str(&escape_make(dep));
    }
    rule.push('\n');
    rule
}

/// Quote a path for a make rule: `$` doubles, space and `#` take a backslash.
fn escape_make(path: &Path) -> String {
    let raw = path.display().to_string();
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '$' => escaped.push_str("$$"),
            ' ' | '#' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn write_depfile(path: &Path, target: &Path, deps: &[&Path]) -> Result<()> {
    write_output(path, &depfile_contents(target, deps), false).map(|_| ())
}
