use anyhow::{Context, Result};
use propgen::Backend;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Main configuration structure for propgen.toml
///
/// Only `propgen build` needs it; the `gen-*` commands take everything on
/// the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropgenConfig {
    pub project: ProjectConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub targets: Vec<TargetConfig>,
}

/// Project-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
}

/// Settings shared by every target unless the target overrides them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Leave an output file alone when its contents would not change (default: true)
    #[serde(default = "default_write_if_changed")]
    pub write_if_changed: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            write_if_changed: default_write_if_changed(),
        }
    }
}

fn default_write_if_changed() -> bool {
    true
}

/// One generated file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Record dump to read (`llvm-tblgen --dump-json` output)
    pub input: String,

    /// Which include file to produce
    pub backend: Backend,

    /// File to write
    pub output: String,

    /// Make-style dependency file to write next to the output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depfile: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write_if_changed: Option<bool>,
}

/// A target with every path resolved against the config file's directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub input: PathBuf,
    pub backend: Backend,
    pub output: PathBuf,
    pub depfile: Option<PathBuf>,
    pub write_if_changed: bool,
}

impl PropgenConfig {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Self::from_toml(&contents)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            targets = config.targets.len(),
            "loaded config"
        );
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: PropgenConfig = toml::from_str(contents).context("Failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.project.name.trim().is_empty() {
            anyhow::bail!("Project name cannot be empty");
        }

        if self.targets.is_empty() {
            anyhow::bail!("No [[targets]] configured");
        }

        let mut outputs = HashSet::new();
        for target in &self.targets {
            if target.input.is_empty() || target.output.is_empty() {
                anyhow::bail!("Every target needs both an input and an output");
            }
            if !outputs.insert(normalize(Path::new(&target.output))) {
                anyhow::bail!("Duplicate target output: {}", target.output);
            }
        }

        Ok(())
    }

    /// Targets with paths made absolute relative to `config_dir`
    ///
    /// Fails when two targets end up writing the same file, which the raw
    /// strings alone cannot show (`out.inc` vs `/src/out.inc`).
    pub fn resolved_targets(&self, config_dir: &Path) -> Result<Vec<ResolvedTarget>> {
        let resolve = |raw: &str| {
            let path = Path::new(raw);
            if path.is_relative() {
                normalize(&config_dir.join(path))
            } else {
                normalize(path)
            }
        };

        let targets: Vec<ResolvedTarget> = self
            .targets
            .iter()
            .map(|target| ResolvedTarget {
                input: resolve(&target.input),
                backend: target.backend,
                output: resolve(&target.output),
                depfile: target.depfile.as_deref().map(resolve),
                write_if_changed: target
                    .write_if_changed
                    .unwrap_or(self.defaults.write_if_changed),
            })
            .collect();

        let mut outputs = HashSet::new();
        for target in &targets {
            if !outputs.insert(target.output.as_path()) {
                anyhow::bail!("Duplicate target output: {}", target.output.display());
            }
        }

        Ok(targets)
    }
}

/// Drop `.` components so `./out.inc` and `out.inc` compare equal.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Directory relative paths in a config file are resolved against
pub fn config_dir(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."))
        .to_path_buf()
}
