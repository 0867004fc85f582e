//! Scriptgen Core Library
//!
//! Builds a schema-guided prompt from a topic and a handful of preferences,
//! asks a hosted model for a YouTube video script, validates the reply and
//! renders it for display or export.

pub mod client;
pub mod error;
pub mod export;
pub mod format;
pub mod generator;
pub mod parser;
pub mod prompt;
pub mod provider;
pub mod settings;
pub mod types;

// Re-export commonly used items at crate root
pub use client::{ChatClient, MAX_OUTPUT_TOKENS, TextGenerator};
pub use error::{Result, ScriptgenError};
pub use export::{ExportFormat, load_script, save_export};
pub use format::{
    View, export_file_name, export_text, format_full_script, format_metadata, format_overview,
    format_script_readable,
};
pub use generator::ScriptGenerator;
pub use parser::{extract_json, parse_script};
pub use prompt::{ScriptRequest, build_prompt, format_instructions, script_schema};
pub use provider::{Provider, ProviderConfig};
pub use settings::{Audience, Creativity, Mood, ScriptSettings, Setting, Tone, VideoDuration};
pub use types::{GeneratedScript, ScriptSection, ScriptStats};
