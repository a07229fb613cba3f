use super::config::ConfigLoadOptions;
use super::RUN_ID_ENV_VAR;
use crate::client::options::parse_base_url;
use crate::client::{BaseUrlError, ClientOptions, HttpAnalysisService, DEFAULT_BASE_URL};
use clap::{ArgGroup, Parser};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;
use url::Url;

pub const CONFIG_DIR_NAME: &str = ".classify";
pub const CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file {} does not exist", path.display())]
    MissingFile { path: PathBuf },
    #[error("Unable to read {}. {error:?}", path.display())]
    IoError {
        path: PathBuf,
        error: std::io::Error,
    },
    #[error("Unable to parse {}. {error}", path.display())]
    ParseError {
        path: PathBuf,
        error: serde_yaml::Error,
    },
    #[error(transparent)]
    BaseUrl(#[from] BaseUrlError),
    #[error("Unable to get a working dir. {0:?}")]
    WorkingDir(std::io::Error),
}

#[derive(Parser, Debug, Default)]
#[clap(group = ArgGroup::new("config_options"))]
pub struct ConfigOptions {
    /// Read settings from this YAML file instead of searching for one.
    #[arg(long, env = "CLASSIFY_CONFIG", global(true))]
    config: Option<PathBuf>,

    /// Address of the analysis backend. Overrides the config file.
    #[arg(long, env = "CLASSIFY_BASE_URL", global(true))]
    base_url: Option<String>,

    /// Override the working directory
    #[arg(long, short = 'C', global(true))]
    working_dir: Option<PathBuf>,

    /// The run-id names the log file for this execution. Re-using a run-id
    /// overwrites the old log.
    #[arg(long, global(true), env = RUN_ID_ENV_VAR)]
    run_id: Option<String>,
}

impl ConfigOptions {
    pub fn generate_run_id() -> String {
        let id = nanoid::nanoid!(4, &nanoid::alphabet::SAFE);
        let now = chrono::Local::now();
        let current_time = now.format("%Y%m%d");
        format!("{}-{}", current_time, id)
    }

    pub fn get_run_id(&self) -> String {
        self.run_id.clone().unwrap_or_else(Self::generate_run_id)
    }

    /// `run_id` is the id already chosen for this execution's log file.
    pub fn to_load_options(&self, run_id: &str) -> ConfigLoadOptions {
        ConfigLoadOptions {
            disable_default_config: self.config.is_some(),
            config_file: self.config.clone(),
            base_url: self.base_url.clone(),
            working_dir: self.working_dir.clone(),
            run_id: Some(run_id.to_string()),
        }
    }

    pub async fn load_config(&self, run_id: &str) -> Result<FoundConfig, ConfigError> {
        FoundConfig::load(&self.to_load_options(run_id)).await
    }
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    base_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FoundConfig {
    pub working_dir: PathBuf,
    pub base_url: Url,
    pub config_path: Option<PathBuf>,
    pub run_id: String,
}

impl FoundConfig {
    pub async fn load(options: &ConfigLoadOptions) -> Result<Self, ConfigError> {
        let working_dir = options.get_working_dir().map_err(ConfigError::WorkingDir)?;

        let config_path = match &options.config_file {
            Some(path) if !path.exists() => {
                return Err(ConfigError::MissingFile { path: path.clone() });
            }
            Some(path) => Some(path.clone()),
            None if options.disable_default_config => None,
            None => find_config_file(&working_dir),
        };

        let file = match &config_path {
            Some(path) => read_config_file(path).await?,
            None => ConfigFile::default(),
        };

        let base_url = options
            .base_url
            .as_deref()
            .or(file.base_url.as_deref())
            .unwrap_or(DEFAULT_BASE_URL);

        let found = Self {
            working_dir,
            base_url: parse_base_url(base_url)?,
            config_path,
            run_id: options
                .run_id
                .clone()
                .unwrap_or_else(ConfigOptions::generate_run_id),
        };
        debug!("Loaded config {:?}", found);

        Ok(found)
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            base_url: self.base_url.clone(),
        }
    }

    pub fn service(&self) -> Arc<HttpAnalysisService> {
        Arc::new(HttpAnalysisService::new(self.client_options()))
    }
}

pub fn build_config_path(working_dir: &Path) -> Vec<PathBuf> {
    let mut paths = vec![working_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)];
    if let Some(dirs) = ProjectDirs::from("", "", "entity-classify") {
        paths.push(dirs.config_dir().join(CONFIG_FILE_NAME));
    }
    paths
}

fn find_config_file(working_dir: &Path) -> Option<PathBuf> {
    build_config_path(working_dir).into_iter().find(|path| {
        debug!("Checking if {} exists", path.display());
        path.exists()
    })
}

async fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|error| ConfigError::IoError {
            path: path.to_path_buf(),
            error,
        })?;

    if text.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    serde_yaml::from_str(&text).map_err(|error| ConfigError::ParseError {
        path: path.to_path_buf(),
        error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::fs;

    #[test]
    fn test_config_options_are_valid_arguments() {
        ConfigOptions::command().debug_assert();
    }

    #[tokio::test]
    async fn test_load_config_keeps_given_run_id() {
        let dir = tempfile::tempdir().unwrap();
        let options = ConfigOptions::parse_from([
            "classify",
            "--base-url",
            "http://analysis:8080",
            "-C",
            dir.path().to_str().unwrap(),
        ]);

        let found = options.load_config("20260101-abcd").await.unwrap();
        assert_eq!("20260101-abcd", found.run_id);
        assert_eq!("http://analysis:8080/", found.base_url.as_str());
    }

    fn explicit(dir: &Path) -> ConfigLoadOptions {
        ConfigLoadOptions {
            working_dir: Some(dir.to_path_buf()),
            disable_default_config: true,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_defaults_without_config() {
        let dir = tempfile::tempdir().unwrap();
        let found = FoundConfig::load(&explicit(dir.path())).await.unwrap();

        assert_eq!("http://localhost:8080/", found.base_url.as_str());
        assert!(found.config_path.is_none());
        assert!(!found.run_id.is_empty());
    }

    #[tokio::test]
    async fn test_reads_working_dir_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".classify")).unwrap();
        fs::write(
            dir.path().join(".classify/config.yaml"),
            "baseUrl: http://analysis.local:9000\n",
        )
        .unwrap();

        let options = ConfigLoadOptions::with_working_dir(dir.path().to_path_buf());
        let found = FoundConfig::load(&options).await.unwrap();

        assert_eq!("http://analysis.local:9000/", found.base_url.as_str());
        assert_eq!(
            Some(dir.path().join(".classify/config.yaml")),
            found.config_path
        );
    }

    #[tokio::test]
    async fn test_override_beats_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.yaml");
        fs::write(&path, "baseUrl: http://from-file:1\n").unwrap();

        let options = ConfigLoadOptions {
            base_url: Some("http://from-flag:2".to_string()),
            run_id: Some("fixed".to_string()),
            ..ConfigLoadOptions::explicit_file(path)
        };
        let found = FoundConfig::load(&options).await.unwrap();

        assert_eq!("http://from-flag:2/", found.base_url.as_str());
        assert_eq!("fixed", found.run_id);
    }

    #[tokio::test]
    async fn test_missing_explicit_file() {
        let options = ConfigLoadOptions::explicit_file(PathBuf::from("/nope/config.yaml"));
        let err = FoundConfig::load(&options).await.unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile { .. }));
    }

    #[tokio::test]
    async fn test_invalid_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        fs::write(&path, "baseUrl: [not, a, string]\n").unwrap();

        let err = FoundConfig::load(&ConfigLoadOptions::explicit_file(path))
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[tokio::test]
    async fn test_invalid_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let options = ConfigLoadOptions {
            base_url: Some("localhost".to_string()),
            ..explicit(dir.path())
        };
        let err = FoundConfig::load(&options).await.unwrap_err();
        assert!(matches!(err, ConfigError::BaseUrl(_)));
    }
}
