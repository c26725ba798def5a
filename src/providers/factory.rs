use crate::config::{AppConfig, ProviderConfig};
use crate::providers::{
    AnthropicProvider, FakeProvider, GoogleProvider, LlmError, LlmProvider, OpenAIProvider,
};

pub struct ProviderFactory;

impl ProviderFactory {
    /// Build the named provider from its settings
    pub fn create(
        provider_name: &str,
        config: &ProviderConfig,
    ) -> Result<Box<dyn LlmProvider>, LlmError> {
        if !config.enabled {
            return Err(LlmError::NotConfigured(format!(
                "Provider '{}' is not enabled in configuration",
                provider_name
            )));
        }

        match provider_name {
            "openai" => Ok(Box::new(OpenAIProvider::new(config)?)),
            "anthropic" => Ok(Box::new(AnthropicProvider::new(config)?)),
            "google" => Ok(Box::new(GoogleProvider::new(config)?)),
            "fake" => Ok(Box::new(FakeProvider::new())),
            _ => Err(LlmError::UnknownProvider(provider_name.to_string())),
        }
    }

    /// Create a provider by name, looking its settings up in the configuration.
    ///
    /// The fake provider needs no configuration entry.
    pub fn by_name(
        provider_name: &str,
        config: &AppConfig,
    ) -> Result<Box<dyn LlmProvider>, LlmError> {
        if provider_name == "fake" && config.provider("fake").is_none() {
            return Ok(Box::new(FakeProvider::new()));
        }

        let provider_config = config.provider(provider_name).ok_or_else(|| {
            LlmError::NotConfigured(format!(
                "Provider '{}' not found in configuration",
                provider_name
            ))
        })?;

        Self::create(provider_name, provider_config)
    }

    /// The provider named by `default_provider`
    pub fn get_default_provider(config: &AppConfig) -> Result<Box<dyn LlmProvider>, LlmError> {
        Self::by_name(&config.default_provider, config)
    }

    /// Names accepted by [`ProviderFactory::create`]
    pub fn available_providers() -> Vec<&'static str> {
        vec!["openai", "anthropic", "google", "fake"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyed(model: &str) -> ProviderConfig {
        ProviderConfig {
            enabled: true,
            model: model.to_string(),
            temperature: 0.2,
            max_tokens: 1500,
            api_key: Some("sk-recipes".to_string()),
            base_url: None,
        }
    }

    #[test]
    fn test_every_hosted_provider_keeps_its_model() {
        for (name, model) in [
            ("openai", "gpt-4o-mini"),
            ("anthropic", "claude-sonnet-4-5"),
            ("google", "gemini-2.5-flash"),
        ] {
            let provider = ProviderFactory::create(name, &keyed(model)).unwrap();
            assert_eq!(provider.provider_name(), name);
            assert_eq!(provider.model_name(), model);
        }
    }

    #[test]
    fn test_rejects_unknown_and_disabled() {
        let err = ProviderFactory::create("ollama", &keyed("llama3"))
            .err()
            .unwrap();
        assert!(matches!(err, LlmError::UnknownProvider(name) if name == "ollama"));

        let mut config = keyed("gpt-4o-mini");
        config.enabled = false;
        let err = ProviderFactory::create("openai", &config).err().unwrap();
        assert!(matches!(err, LlmError::NotConfigured(_)));
    }

    #[test]
    fn test_default_provider_comes_from_config() {
        let mut app_config = AppConfig {
            default_provider: "google".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(
            ProviderFactory::get_default_provider(&app_config),
            Err(LlmError::NotConfigured(_))
        ));

        app_config
            .providers
            .insert("google".to_string(), keyed("gemini-2.5-flash"));
        let provider = ProviderFactory::get_default_provider(&app_config).unwrap();
        assert_eq!(provider.provider_name(), "google");
    }

    #[test]
    fn test_fake_provider_needs_no_config() {
        let provider = ProviderFactory::by_name("fake", &AppConfig::default()).unwrap();
        assert_eq!(provider.provider_name(), "fake");
        assert!(ProviderFactory::available_providers().contains(&"fake"));
    }
}
