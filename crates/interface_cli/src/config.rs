//! CLI configuration

use domain_rating::RatingOptions;
use serde::Deserialize;

/// Optional config file, looked up in the working directory with any
/// extension the `config` crate understands
pub const CONFIG_FILE: &str = "gccv-quote";

/// Environment variable prefix (`QUOTE_LOG_LEVEL`, `QUOTE_OUTPUT`, ...)
pub const ENV_PREFIX: &str = "QUOTE";

/// How the breakdown is written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level or filter directive
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
    pub output: OutputFormat,
    /// Add the CNG kit value to the consumables basis
    pub consumable_includes_cng: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_json: false,
            output: OutputFormat::Text,
            consumable_includes_cng: true,
        }
    }
}

impl CliConfig {
    /// Loads configuration from the optional config file and the environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::load(Self::environment())
    }

    /// Loads configuration with the given environment source layered over
    /// the config file
    pub fn load(environment: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    /// Environment source with the CLI prefix
    pub fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX).try_parsing(true)
    }

    /// Calculation switches carried by this configuration
    pub fn rating_options(&self) -> RatingOptions {
        RatingOptions {
            consumable_includes_cng: self.consumable_includes_cng,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> CliConfig {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        CliConfig::load(CliConfig::environment().source(Some(source))).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]);
        assert_eq!(config, CliConfig::default());
        assert!(config.rating_options().consumable_includes_cng);
    }

    #[test]
    fn test_environment_overrides() {
        let config = load(&[
            ("QUOTE_LOG_LEVEL", "debug"),
            ("QUOTE_OUTPUT", "json"),
            ("QUOTE_CONSUMABLE_INCLUDES_CNG", "false"),
        ]);

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.output, OutputFormat::Json);
        assert!(!config.rating_options().consumable_includes_cng);
    }
}
