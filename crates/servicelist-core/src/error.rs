use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceListError {
    #[error("rule file not found or unreadable: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid rule data in {origin}: {reason}")]
    Parse { origin: String, reason: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("cannot write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ServiceListError>;
