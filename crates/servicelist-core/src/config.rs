use crate::error::{Result, ServiceListError};
use crate::instruction::BuildParams;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Contents of `servicelist.yaml`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_input")]
    pub input: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default)]
    pub build: BuildParams,
}

fn default_input() -> PathBuf {
    PathBuf::from(paths::DEFAULT_INPUT)
}

fn default_output() -> PathBuf {
    PathBuf::from(paths::DEFAULT_OUTPUT)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            build: BuildParams::default(),
        }
    }
}

impl Config {
    /// Load `servicelist.yaml` from `root`, falling back to defaults when the
    /// file is absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path).map_err(|e| {
            ServiceListError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_yaml(&data)
    }

    pub fn from_yaml(data: &str) -> Result<Self> {
        // An empty file deserializes to null rather than an empty mapping.
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(data)?)
    }

    pub fn input_path(&self, root: &Path) -> PathBuf {
        paths::resolve(root, &self.input)
    }

    pub fn output_path(&self, root: &Path) -> PathBuf {
        paths::resolve(root, &self.output)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        let b = &self.build;

        // 1. Build parameters the builder would refuse
        if let Err(ServiceListError::Config(message)) = b.validate() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message,
            });
        } else {
            // 2. A range with fewer than two checkpoints is almost always a typo
            let message = match b.checkpoints().take(2).count() {
                0 => Some("holds no checkpoint"),
                1 => Some("holds a single checkpoint"),
                _ => None,
            };
            if let Some(message) = message {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!(
                        "distance range {}..{} {message} at step {}",
                        b.min_distance, b.max_distance, b.step
                    ),
                });
            }
        }

        // 3. Saving over the rule file would destroy it
        if self.input == self.output {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: format!(
                    "input and output both point at '{}'",
                    self.input.display()
                ),
            });
        }

        if self.input.as_os_str().is_empty() || self.output.as_os_str().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "input and output paths must not be empty".to_string(),
            });
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
