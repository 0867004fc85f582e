use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::info;

use crate::{
    error::Result,
    format::{export_file_name, export_text},
    parser::parse_script,
    types::GeneratedScript,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
        }
    }

    pub fn render(&self, script: &GeneratedScript) -> Result<String> {
        match self {
            ExportFormat::Text => Ok(export_text(script)),
            ExportFormat::Json => Ok(serde_json::to_string_pretty(script)?),
        }
    }
}

/// Write a script export into `dir`, named after the topic
pub async fn save_export(
    script: &GeneratedScript,
    topic: &str,
    format: ExportFormat,
    dir: &Path,
) -> Result<PathBuf> {
    let path = dir.join(export_file_name(topic, format.extension()));
    let contents = format.render(script)?;
    fs::create_dir_all(dir).await?;
    fs::write(&path, contents).await?;
    info!(path = %path.display(), "script exported");
    Ok(path)
}

/// Load a previously exported JSON script, validating it like model output
pub async fn load_script(path: &Path) -> Result<GeneratedScript> {
    let json_content = fs::read_to_string(path).await?;
    parse_script(&json_content)
}
