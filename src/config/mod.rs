//! Configuration management module.
//!
//! This module handles loading and saving the application configuration,
//! including the API endpoint, theme, log level and widget mount points.

mod error;

pub use error::ConfigError;

use crate::catalog;
use crate::error::AppResult;
use crate::randomuser::DEFAULT_ENDPOINT;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/address-generator";

/// Defines one mount point: a widget instance with optional presets.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
}

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub endpoint: String,
    pub request_timeout_secs: u64,
    pub theme_name: String,
    pub log_level: String,
    pub mounts: Vec<MountSpec>,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub mounts: Vec<MountSpec>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance with default values.
    ///
    pub fn new() -> Config {
        Config {
            endpoint: default_endpoint(),
            request_timeout_secs: default_request_timeout_secs(),
            theme_name: default_theme_name(),
            log_level: default_log_level(),
            mounts: vec![],
            file_path: None,
        }
    }

    /// Load the configuration from the custom directory if provided or the
    /// default one otherwise. A missing file is created with defaults.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> AppResult<()> {
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        self.file_path = Some(file_path.clone());

        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.endpoint = data.endpoint;
            self.request_timeout_secs = data.request_timeout_secs;
            self.theme_name = data.theme_name;
            self.log_level = data.log_level;
            self.mounts = data.mounts;
        } else {
            self.save()?;
        }

        self.validate()?;
        Ok(())
    }

    /// Serialize the configuration and write it to disk.
    ///
    pub fn save(&self) -> AppResult<()> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            endpoint: self.endpoint.clone(),
            request_timeout_secs: self.request_timeout_secs,
            theme_name: self.theme_name.clone(),
            log_level: self.log_level.clone(),
            mounts: self.mounts.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;
        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
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

    /// Reject mount points that name a country outside the catalog.
    ///
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, mount) in self.mounts.iter().enumerate() {
            if let Some(code) = &mount.country {
                if catalog::find(code).is_none() {
                    return Err(ConfigError::UnknownCountry {
                        index,
                        code: code.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Mount points to start with. A widget count from the command line wins
    /// over configured mounts; with neither, a single root widget is mounted.
    ///
    pub fn mount_points(&self, widget_count: Option<usize>) -> Vec<MountSpec> {
        match widget_count {
            Some(count) => vec![MountSpec::default(); count.max(1)],
            None if self.mounts.is_empty() => vec![MountSpec::default()],
            None => self.mounts.clone(),
        }
    }

    /// Log level filter, falling back to info for unrecognized names.
    ///
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> AppResult<PathBuf> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(Path::new(DEFAULT_DIRECTORY_PATH))),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested");

        let mut config = Config::new();
        config.load(path.to_str()).unwrap();

        assert!(path.join(FILE_NAME).exists());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.theme_name, "tokyo-night");
        assert_eq!(config.mount_points(None), vec![MountSpec::default()]);
    }

    #[test]
    fn test_load_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(FILE_NAME),
            "endpoint: http://localhost:8080/api/\nlog_level: debug\nmounts:\n  - country: us\n    quantity: 0\n  - {}\n",
        )
        .unwrap();

        let mut config = Config::new();
        config.load(dir.path().to_str()).unwrap();

        assert_eq!(config.endpoint, "http://localhost:8080/api/");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.level_filter(), LevelFilter::Debug);
        assert_eq!(
            config.mounts,
            vec![
                MountSpec {
                    country: Some("us".to_string()),
                    quantity: Some(0),
                },
                MountSpec::default(),
            ]
        );
    }

    #[test]
    fn test_load_rejects_unknown_country() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(FILE_NAME),
            "mounts:\n  - country: XX\n",
        )
        .unwrap();

        let mut config = Config::new();
        let error = config.load(dir.path().to_str()).unwrap_err();
        assert!(error.to_string().contains("Unknown country 'XX'"));
    }

    #[test]
    fn test_load_rejects_invalid_yaml() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FILE_NAME), "mounts: [").unwrap();

        let mut config = Config::new();
        assert!(config.load(dir.path().to_str()).is_err());
    }

    #[test]
    fn test_widget_count_overrides_mounts() {
        let mut config = Config::new();
        config.mounts = vec![MountSpec {
            country: Some("FR".to_string()),
            quantity: None,
        }];
        assert_eq!(config.mount_points(None).len(), 1);
        assert_eq!(config.mount_points(Some(3)), vec![MountSpec::default(); 3]);
        assert_eq!(config.mount_points(Some(0)).len(), 1);
    }

    #[test]
    fn test_save_without_path_fails() {
        assert!(Config::new().save().is_err());
    }

    #[test]
    fn test_unknown_log_level_falls_back_to_info() {
        let mut config = Config::new();
        config.log_level = "chatty".to_string();
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }
}
