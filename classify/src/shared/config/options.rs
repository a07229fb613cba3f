//! CLI-independent configuration loading options.
//!
//! The base URL of the analysis backend is resolved in this order:
//!
//! 1. An explicit override (`--base-url` / `CLASSIFY_BASE_URL`)
//! 2. `baseUrl` in the config file
//! 3. `http://localhost:8080`
//!
//! The config file is the explicit `config_file` when set, otherwise the
//! first of `<working_dir>/.classify/config.yaml` and the user config
//! directory's `config.yaml` that exists.
//!
//! ```rust
//! use entity_classify::shared::config::ConfigLoadOptions;
//! use std::path::PathBuf;
//!
//! let options = ConfigLoadOptions::with_base_url("http://analysis:8080");
//! assert_eq!(Some("http://analysis:8080".to_string()), options.base_url);
//!
//! let options = ConfigLoadOptions::explicit_file(PathBuf::from("/etc/classify.yaml"));
//! assert!(options.disable_default_config);
//! ```

use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct ConfigLoadOptions {
    /// Config file to read. When set, it must exist.
    pub config_file: Option<PathBuf>,

    /// When true, the default config file locations are not searched.
    pub disable_default_config: bool,

    /// Overrides `baseUrl` from any config file.
    pub base_url: Option<String>,

    /// Directory used to find `.classify/config.yaml`. Defaults to the
    /// current directory.
    pub working_dir: Option<PathBuf>,

    /// Custom run ID for this execution. Generated when `None`.
    pub run_id: Option<String>,
}

impl ConfigLoadOptions {
    pub fn explicit_file(path: PathBuf) -> Self {
        Self {
            config_file: Some(path),
            disable_default_config: true,
            ..Default::default()
        }
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: Some(base_url.to_string()),
            ..Default::default()
        }
    }

    pub fn with_working_dir(working_dir: PathBuf) -> Self {
        Self {
            working_dir: Some(working_dir),
            ..Default::default()
        }
    }

    pub fn get_working_dir(&self) -> std::io::Result<PathBuf> {
        match &self.working_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ConfigLoadOptions::default();
        assert!(options.config_file.is_none());
        assert!(!options.disable_default_config);
        assert!(options.base_url.is_none());
        assert!(options.working_dir.is_none());
        assert!(options.run_id.is_none());
    }

    #[test]
    fn test_explicit_file() {
        let path = PathBuf::from("/path/config.yaml");
        let options = ConfigLoadOptions::explicit_file(path.clone());
        assert_eq!(Some(path), options.config_file);
        assert!(options.disable_default_config);
    }

    #[test]
    fn test_get_working_dir_with_override() {
        let dir = PathBuf::from("/override/dir");
        let options = ConfigLoadOptions::with_working_dir(dir.clone());
        assert_eq!(dir, options.get_working_dir().unwrap());
    }
}
