//! Configuration management module.
//!
//! This module handles loading and saving the application configuration:
//! the search API base URL, the default search term and the theme.

mod error;

pub use error::ConfigError;

use crate::error::AppResult;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const STORAGE_FILE_NAME: &str = "storage.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/hacker-stories";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub api_base_url: String,
    pub default_query: String,
    pub theme_name: String,
    dir_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct FileSpec {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_query")]
    pub default_query: String,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
}

fn default_api_base_url() -> String {
    crate::hn::DEFAULT_BASE_URL.to_string()
}

fn default_query() -> String {
    "React".to_string()
}

fn default_theme_name() -> String {
    "hacker-news".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance with default values and no file path.
    ///
    pub fn new() -> Config {
        Config {
            api_base_url: default_api_base_url(),
            default_query: default_query(),
            theme_name: default_theme_name(),
            dir_path: None,
        }
    }

    /// Load the configuration from the custom directory if provided or the
    /// default one otherwise. The directory is created if missing, and a
    /// configuration file with default values is written if none exists.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> AppResult<()> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        // Try to create dir path if it doesn't exist
        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }
        self.dir_path = Some(dir_path);
        let file_path = self.file_path()?;

        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.api_base_url = data.api_base_url;
            self.default_query = data.default_query;
            self.theme_name = data.theme_name;
        } else {
            self.save()?;
        }

        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> AppResult<()> {
        let file_path = self.file_path()?;
        let data = FileSpec {
            api_base_url: self.api_base_url.clone(),
            default_query: self.default_query.clone(),
            theme_name: self.theme_name.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;
        let mut file = fs::File::create(&file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Returns the path of the configuration file.
    ///
    pub fn file_path(&self) -> AppResult<PathBuf> {
        let dir_path = self.dir_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        Ok(dir_path.join(FILE_NAME))
    }

    /// Returns the path of the key-value storage file kept next to the
    /// configuration file.
    ///
    pub fn storage_path(&self) -> AppResult<PathBuf> {
        let dir_path = self.dir_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        Ok(dir_path.join(STORAGE_FILE_NAME))
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> AppResult<PathBuf> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(DEFAULT_DIRECTORY_PATH)),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}
