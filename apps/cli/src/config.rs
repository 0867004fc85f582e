use scriptgen_core::{Provider, Result};

/// Overrides the provider's chat completions endpoint
pub const API_URL_VAR: &str = "SCRIPTGEN_API_URL";
/// Overrides the provider's default model
pub const MODEL_VAR: &str = "SCRIPTGEN_MODEL";

/// Runtime configuration resolved from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub provider: Provider,
    pub api_key: String,
    pub api_url: String,
    pub model: String,
}

impl Config {
    /// Fails if the provider's API key variable is unset or blank.
    pub fn from_env(provider: Provider) -> Result<Self> {
        Self::from_lookup(provider, |key| std::env::var(key).ok())
    }

    /// Resolve every setting through `lookup`. Blank overrides fall back to
    /// the provider defaults.
    fn from_lookup(provider: Provider, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = provider.api_key_from(&lookup)?;
        let defaults = provider.config();
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            provider,
            api_key,
            api_url: optional(API_URL_VAR).unwrap_or_else(|| defaults.api_url.to_string()),
            model: optional(MODEL_VAR).unwrap_or_else(|| defaults.model.to_string()),
        })
    }
}

/// Load `.env` if present; a missing file is not an error.
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}
