use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptgenError {
    #[error("Topic is empty")]
    EmptyTopic,

    #[error("Creativity level must be between 0.0 and 1.0, got {value}")]
    InvalidCreativity { value: f32 },

    #[error("Unknown {kind} '{value}'")]
    UnknownSetting { kind: &'static str, value: String },

    #[error("Missing API key: {env_var} environment variable is not set")]
    MissingApiKey { env_var: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Model returned an empty response")]
    EmptyResponse,

    #[error("Model output is not a script: {reason}")]
    MalformedOutput { reason: String },

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScriptgenError>;
