use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Provider the backend uses when none is given on the command line
    #[serde(default = "default_provider")]
    pub default_provider: String,
    /// Map of provider name to provider configuration
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
    /// Backend listen address
    #[serde(default)]
    pub server: ServerConfig,
    /// Where the client sends generation requests
    #[serde(default)]
    pub client: ClientConfig,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_provider: default_provider(),
            providers: HashMap::new(),
            server: ServerConfig::default(),
            client: ClientConfig::default(),
            timeout: default_timeout(),
        }
    }
}

/// Settings of one LLM provider, keyed by provider name in [`AppConfig::providers`]
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Disabled providers are refused by the factory
    pub enabled: bool,
    /// Model identifier (e.g., "gpt-5-mini", "gemini-2.5-flash")
    pub model: String,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Output token cap for one recipe
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Falls back to the provider's `*_API_KEY` environment variable
    pub api_key: Option<String>,
    /// Overrides the public API host, e.g. for a proxy
    pub base_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    /// Full URL of the generate-recipe endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

fn default_provider() -> String {
    "openai".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_timeout() -> u64 {
    30
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_endpoint() -> String {
    format!(
        "http://{}:{}/api/generate-recipe",
        default_host(),
        default_port()
    )
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with SMARTCOOK__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: SMARTCOOK__PROVIDERS__OPENAI__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Look up the configuration of a named provider
    pub fn provider(&self, name: &str) -> Option<&ProviderConfig> {
        self.providers.get(name)
    }
}

/// Load configuration from file and environment variables
///
/// See [`AppConfig::load`] for the source priority.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: SMARTCOOK__SERVER__PORT
        .add_source(
            Environment::with_prefix("SMARTCOOK")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_default_values() {
        assert_eq!(default_provider(), "openai");
        assert_eq!(default_temperature(), 0.7);
        assert_eq!(default_max_tokens(), 2000);
        assert_eq!(default_timeout(), 30);
        assert_eq!(
            default_endpoint(),
            "http://127.0.0.1:3000/api/generate-recipe"
        );
    }

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.default_provider, "openai");
        assert!(config.providers.is_empty());
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_deserialize_from_toml() {
        let toml = r#"
            default_provider = "google"
            timeout = 10

            [server]
            port = 8080

            [providers.google]
            enabled = true
            model = "gemini-2.5-flash"
        "#;

        let config: AppConfig = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.default_provider, "google");
        assert_eq!(config.timeout, 10);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");

        let google = config.provider("google").unwrap();
        assert!(google.enabled);
        assert_eq!(google.model, "gemini-2.5-flash");
        assert_eq!(google.temperature, 0.7);
        assert!(google.api_key.is_none());
    }
}
