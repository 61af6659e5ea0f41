use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_includes_path() {
        let err = ConfigError::Io {
            path: "/project/vcbuild.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("vcbuild.json"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn key_not_found_formats() {
        let err = ConfigError::KeyNotFound("linker.subsystem".into());
        assert!(err.to_string().contains("linker.subsystem"));
    }

    #[test]
    fn invalid_value_formats() {
        let err = ConfigError::InvalidValue {
            key: "compiler.warnings.level".into(),
            reason: "not an integer".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("compiler.warnings.level"));
        assert!(msg.contains("not an integer"));
    }
}
