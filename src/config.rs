use crate::types::{DEFAULT_DESIRED_BUCKETS, MAX_DESIRED_BUCKETS};
use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub bucketing: BucketingConfig,
    pub output: OutputConfig,
}

/// Timeline bucketing defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketingConfig {
    pub desired_buckets: usize,
}

/// Report output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when the CLI is not given `--format`
    pub default_format: String,
    /// Directory for JSON/CSV/Plotly files written without `--output`
    pub plots_dir: PathBuf,
}

impl Default for BucketingConfig {
    fn default() -> Self {
        Self {
            desired_buckets: DEFAULT_DESIRED_BUCKETS,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "console".to_string(),
            plots_dir: PathBuf::from("./output_data/plots"),
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        let bucketing = BucketingConfig::default();
        let output = OutputConfig::default();
        let config = Config::builder()
            .set_default("bucketing.desired_buckets", bucketing.desired_buckets as i64)?
            .set_default("output.default_format", output.default_format)?
            .set_default(
                "output.plots_dir",
                output.plots_dir.to_string_lossy().to_string(),
            )?
            // Load from config.toml if it exists
            .add_source(File::with_name("config").required(false))
            // BUCKETS_BUCKETING__DESIRED_BUCKETS, BUCKETS_OUTPUT__PLOTS_DIR, ...
            .add_source(
                config::Environment::with_prefix("BUCKETS")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        // Short alias for the most commonly overridden setting
        if let Ok(plots_dir) = env::var("BUCKETS_PLOTS_DIR") {
            app_config.output.plots_dir = PathBuf::from(plots_dir);
        }

        app_config.validate()?;
        Ok(app_config)
    }

    /// Get default config values for CLI argument defaults
    pub fn get_defaults() -> Result<Self, ConfigError> {
        // Try to load config for defaults, but don't fail if not found
        match Self::load() {
            Ok(config) => Ok(config),
            Err(_) => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let desired = self.bucketing.desired_buckets;
        if desired == 0 || desired > MAX_DESIRED_BUCKETS {
            return Err(ConfigError::Message(format!(
                "bucketing.desired_buckets must be between 1 and {}, got {}",
                MAX_DESIRED_BUCKETS, desired
            )));
        }
        Ok(())
    }
}
