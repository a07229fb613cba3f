mod config_load;
pub mod config;
mod logging;

pub const RUN_ID_ENV_VAR: &str = "CLASSIFY_RUN_ID";

pub mod prelude {
    pub use super::config::ConfigLoadOptions;
    pub use super::config_load::{
        build_config_path, ConfigError, ConfigOptions, FoundConfig, CONFIG_DIR_NAME,
        CONFIG_FILE_NAME,
    };
    pub use super::logging::{
        log_file_path, spinner_style, ConfiguredLogger, LoggingError, LoggingOpts,
        LoggingProgress, STDOUT_WRITER,
    };
    pub use super::RUN_ID_ENV_VAR;
}
