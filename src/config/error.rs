//! Errors raised while reading or writing `config.yml`.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `load` has not picked a configuration directory yet
    #[error("No hacker-stories configuration directory selected")]
    FilePathNotSet,

    /// No home directory to put `.config/hacker-stories` under
    #[error("Cannot locate ~/.config/hacker-stories without a home directory")]
    HomeDirectoryNotFound,

    #[error("Cannot read settings from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    #[error("Cannot write settings to {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot create settings directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot encode settings as YAML: {0}")]
    SerializationFailed(String),

    /// `config.yml` exists but is not a settings map
    #[error("Malformed settings in config.yml: {0}")]
    DeserializationFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_errors_name_the_application() {
        assert!(ConfigError::FilePathNotSet
            .to_string()
            .contains("hacker-stories"));
        assert!(ConfigError::HomeDirectoryNotFound
            .to_string()
            .contains(".config/hacker-stories"));
    }

    #[test]
    fn malformed_settings_carry_parser_message() {
        let error = ConfigError::DeserializationFailed("invalid type: sequence".to_string());
        assert_eq!(
            error.to_string(),
            "Malformed settings in config.yml: invalid type: sequence"
        );
    }

    #[test]
    fn write_failures_include_path() {
        let error = ConfigError::SaveFailed {
            path: PathBuf::from("/home/pg/.config/hacker-stories/config.yml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = error.to_string();
        assert!(message.contains("/home/pg/.config/hacker-stories/config.yml"));
        assert!(message.contains("denied"));
    }
}
