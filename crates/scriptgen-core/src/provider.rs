use crate::error::{Result, ScriptgenError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Provider {
    #[default]
    Gemini,
    Openai,
    Grok,
}

pub struct ProviderConfig {
    pub api_url: &'static str,
    pub model: &'static str,
    pub env_var: &'static str,
}

impl Provider {
    pub fn config(&self) -> ProviderConfig {
        match self {
            Provider::Gemini => ProviderConfig {
                api_url: "https://generativelanguage.googleapis.com/v1beta/openai/chat/completions",
                model: "gemini-2.0-flash",
                env_var: "GOOGLE_API_KEY",
            },
            Provider::Openai => ProviderConfig {
                api_url: "https://api.openai.com/v1/chat/completions",
                model: "gpt-4o-mini",
                env_var: "OPENAI_API_KEY",
            },
            Provider::Grok => ProviderConfig {
                api_url: "https://api.x.ai/v1/chat/completions",
                model: "grok-4-fast",
                env_var: "XAI_API_KEY",
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Provider::Gemini => "Gemini",
            Provider::Openai => "OpenAI",
            Provider::Grok => "Grok",
        }
    }

    /// Validate that the API key is set for this provider
    pub fn validate_api_key(&self) -> Result<String> {
        self.api_key_from(|key| std::env::var(key).ok())
    }

    /// Resolve the API key through `lookup`; unset and blank keys both fail.
    pub fn api_key_from(&self, lookup: impl Fn(&str) -> Option<String>) -> Result<String> {
        let env_var = self.config().env_var;
        lookup(env_var)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ScriptgenError::MissingApiKey {
                env_var: env_var.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_provider_is_gemini() {
        let config = Provider::default().config();
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.env_var, "GOOGLE_API_KEY");
    }

    #[test]
    fn test_unset_api_key_is_missing() {
        let err = Provider::Openai.api_key_from(|_| None).unwrap_err();
        assert!(
            matches!(err, ScriptgenError::MissingApiKey { ref env_var } if env_var == "OPENAI_API_KEY")
        );
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        let err = Provider::Gemini
            .api_key_from(|_| Some("   \t".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("GOOGLE_API_KEY"));
    }

    #[test]
    fn test_api_key_read_from_provider_variable() {
        let key = Provider::Grok
            .api_key_from(|var| (var == "XAI_API_KEY").then(|| "xai-123".to_string()))
            .unwrap();
        assert_eq!(key, "xai-123");
    }

    #[test]
    fn test_every_provider_speaks_chat_completions() {
        for provider in [Provider::Gemini, Provider::Openai, Provider::Grok] {
            assert!(provider.config().api_url.ends_with("/chat/completions"));
        }
    }
}
