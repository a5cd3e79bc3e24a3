//! Logging configuration for the Fieldkit Linux app
//!
//! Installs a `tracing` subscriber with a console layer and an optional
//! file layer. The file rolls daily unless an explicit path was asked for.
//! Presets exist for development and production; `FIELDKIT_ENV` picks one,
//! a YAML file can replace it, and `RUST_LOG` overrides the console filter.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_appender::rolling::{self, RollingFileAppender};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// YAML configuration structures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YamlLoggingConfig {
    pub console: ConsoleConfig,
    pub file: FileConfig,
    #[serde(default)]
    pub features: FeaturesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    pub enabled: bool,
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub enabled: bool,
    pub level: String,
    pub directory: String,
    pub filename: String,
}

/// How the log file is named on disk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FileRotation {
    /// `<name>.log.<date>`, a new file every day
    #[default]
    Daily,
    /// Exactly `<name>`, never rotated
    Never,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeaturesConfig {
    pub thread_ids: bool,
    pub source_location: bool,
}

/// Logging configuration for the application
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Directory where log files will be stored
    pub log_dir: PathBuf,
    /// Base name for log files (default: "fieldkit"); the full file name
    /// when rotation is off
    pub log_file_name: String,
    pub rotation: FileRotation,
    /// Log level for console output
    pub console_level: String,
    /// Log level for file output
    pub file_level: String,
    pub enable_console: bool,
    pub enable_file: bool,
    pub include_thread_ids: bool,
    pub include_source_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: get_default_log_dir(),
            log_file_name: "fieldkit".to_string(),
            rotation: FileRotation::Daily,
            console_level: "INFO".to_string(),
            file_level: "DEBUG".to_string(),
            enable_console: true,
            enable_file: true,
            include_thread_ids: false,
            include_source_location: false,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration with custom log directory
    pub fn new(log_dir: PathBuf) -> Self {
        Self {
            log_dir,
            ..Default::default()
        }
    }

    /// Set console log level
    pub fn console_level(mut self, level: &str) -> Self {
        self.console_level = level.to_string();
        self
    }

    /// Write the log file to an explicit path instead of the cache directory
    pub fn log_file(mut self, path: &Path) -> Self {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.log_dir = parent.to_path_buf();
        } else {
            self.log_dir = PathBuf::from(".");
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            self.log_file_name = name.to_string();
        }
        self.rotation = FileRotation::Never;
        self.enable_file = true;
        self
    }

    /// Create development configuration with more verbose logging
    pub fn development() -> Self {
        Self {
            console_level: "DEBUG".to_string(),
            file_level: "TRACE".to_string(),
            include_thread_ids: true,
            include_source_location: true,
            ..Default::default()
        }
    }

    /// Create production configuration; the file layer stays off unless asked for
    pub fn production() -> Self {
        Self {
            console_level: "WARN".to_string(),
            file_level: "INFO".to_string(),
            enable_file: false,
            ..Default::default()
        }
    }

    /// Path of the log file, or the prefix of the dated files when rolling daily
    pub fn current_log_file(&self) -> PathBuf {
        match self.rotation {
            FileRotation::Daily => self.log_dir.join(format!("{}.log", self.log_file_name)),
            FileRotation::Never => self.log_dir.join(&self.log_file_name),
        }
    }

    fn file_appender(&self) -> RollingFileAppender {
        match self.rotation {
            FileRotation::Daily => {
                rolling::daily(&self.log_dir, format!("{}.log", self.log_file_name))
            }
            FileRotation::Never => rolling::never(&self.log_dir, &self.log_file_name),
        }
    }
}

/// Console and file layers for a configuration
fn build_layers(config: &LoggingConfig) -> Result<Vec<BoxedLayer>> {
    if config.enable_file {
        fs::create_dir_all(&config.log_dir)
            .with_context(|| format!("Failed to create log directory: {:?}", config.log_dir))?;
    }

    let mut layers: Vec<BoxedLayer> = Vec::new();

    if config.enable_console {
        // RUST_LOG wins over the configured console level
        let console_filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.console_level))
            .unwrap_or_else(|_| EnvFilter::new("INFO"));

        let console_layer = fmt::layer()
            .with_target(false)
            .with_thread_ids(config.include_thread_ids)
            .with_file(config.include_source_location)
            .with_line_number(config.include_source_location)
            .with_ansi(std::io::stderr().is_terminal())
            .with_writer(std::io::stderr)
            .with_filter(console_filter);

        layers.push(console_layer.boxed());
    }

    if config.enable_file {
        let file_filter =
            EnvFilter::try_new(&config.file_level).unwrap_or_else(|_| EnvFilter::new("DEBUG"));

        let file_appender = config.file_appender();

        let file_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(config.include_thread_ids)
            .with_file(config.include_source_location)
            .with_line_number(config.include_source_location)
            .with_ansi(false)
            .with_writer(file_appender)
            .with_filter(file_filter);

        layers.push(file_layer.boxed());
    }

    Ok(layers)
}

/// Initialize logging with the given configuration
pub fn initialize_logging(config: LoggingConfig) -> Result<()> {
    let layers = build_layers(&config)?;

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    info!("Fieldkit logging initialized");
    info!(
        "Console logging: {} (level: {})",
        config.enable_console, config.console_level
    );
    if config.enable_file {
        info!(
            "File logging: {} (level: {}, rotation: {:?})",
            config.current_log_file().display(),
            config.file_level,
            config.rotation
        );
    }

    Ok(())
}

/// Load logging configuration from YAML file
pub fn load_config_from_file(config_path: &Path, environment: &str) -> Result<LoggingConfig> {
    let config_content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

    let yaml_configs: HashMap<String, YamlLoggingConfig> = serde_yaml::from_str(&config_content)
        .with_context(|| format!("Failed to parse YAML config file: {:?}", config_path))?;

    let yaml_config = yaml_configs
        .get(environment)
        .or_else(|| yaml_configs.get("default"))
        .ok_or_else(|| {
            anyhow::anyhow!(
                "No configuration found for environment '{}' and no default config",
                environment
            )
        })?;

    yaml_to_logging_config(yaml_config)
}

fn yaml_to_logging_config(yaml: &YamlLoggingConfig) -> Result<LoggingConfig> {
    Ok(LoggingConfig {
        log_dir: expand_directory_path(&yaml.file.directory)?,
        log_file_name: yaml.file.filename.clone(),
        rotation: FileRotation::Daily,
        console_level: yaml.console.level.clone(),
        file_level: yaml.file.level.clone(),
        enable_console: yaml.console.enabled,
        enable_file: yaml.file.enabled,
        include_thread_ids: yaml.features.thread_ids,
        include_source_location: yaml.features.source_location,
    })
}

/// Expand `~/` and `./` prefixes
fn expand_directory_path(path_str: &str) -> Result<PathBuf> {
    if let Some(rest) = path_str.strip_prefix("~/") {
        return Ok(dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path_str)));
    }
    if let Some(rest) = path_str.strip_prefix("./") {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        return Ok(cwd.join(rest));
    }
    Ok(PathBuf::from(path_str))
}

/// Resolve the configuration for the current environment
///
/// A logging YAML file, when present, replaces the built-in preset.
pub fn resolve_config() -> LoggingConfig {
    let environment = get_environment();
    let config_path = get_config_file_path();

    if config_path.exists() {
        match load_config_from_file(&config_path, &environment) {
            Ok(config) => return config,
            Err(e) => {
                // No subscriber yet, so this goes to stderr
                eprintln!("Failed to load logging config file: {e:#}. Using defaults.");
            }
        }
    }

    get_default_config_for_environment(&environment)
}

/// Get the current environment name
pub fn get_environment() -> String {
    std::env::var("FIELDKIT_ENV")
        .or_else(|_| std::env::var("RUST_ENV"))
        .unwrap_or_else(|_| {
            if cfg!(debug_assertions) {
                "development".to_string()
            } else {
                "production".to_string()
            }
        })
}

/// Get the path to the logging configuration file
pub fn get_config_file_path() -> PathBuf {
    if let Ok(config_path) = std::env::var("FIELDKIT_LOG_CONFIG") {
        return PathBuf::from(config_path);
    }

    let mut candidates = vec![PathBuf::from("./config/logging.yaml")];
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("fieldkit/logging.yaml"));
    }

    candidates
        .into_iter()
        .find(|p| p.exists())
        .unwrap_or_else(|| PathBuf::from("./config/logging.yaml"))
}

fn get_default_config_for_environment(environment: &str) -> LoggingConfig {
    match environment {
        "development" | "dev" => LoggingConfig::development(),
        "production" | "prod" => LoggingConfig::production(),
        "testing" | "test" => LoggingConfig {
            console_level: "DEBUG".to_string(),
            file_level: "DEBUG".to_string(),
            include_thread_ids: true,
            include_source_location: true,
            ..LoggingConfig::new(PathBuf::from("./target/test-logs"))
        },
        _ => LoggingConfig::default(),
    }
}

/// Get the default log directory
pub fn get_default_log_dir() -> PathBuf {
    if let Some(cache_dir) = dirs::cache_dir() {
        cache_dir.join("fieldkit").join("logs")
    } else {
        PathBuf::from("/tmp/fieldkit/logs")
    }
}

/// Check that a level string parses as a filter directive
pub fn validate_level(level: &str) -> Result<()> {
    EnvFilter::try_new(level)
        .map(|_| ())
        .with_context(|| format!("Invalid log level '{level}'"))
}
