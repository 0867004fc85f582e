//! One generation cycle: validate the topic, build the prompt, call the
//! model once and validate its output.

use chrono::{Datelike, Local};
use tracing::{debug, info};

use crate::{
    client::TextGenerator,
    error::Result,
    parser::parse_script,
    prompt::{ScriptRequest, build_prompt},
    settings::ScriptSettings,
    types::GeneratedScript,
};

pub struct ScriptGenerator<G> {
    backend: G,
}

impl<G: TextGenerator> ScriptGenerator<G> {
    pub fn new(backend: G) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &G {
        &self.backend
    }

    /// Generate a script for `topic`. A blank topic fails with
    /// [`EmptyTopic`](crate::ScriptgenError::EmptyTopic) before the backend
    /// is touched.
    pub async fn generate(&self, topic: &str, settings: ScriptSettings) -> Result<GeneratedScript> {
        let request = ScriptRequest::new(topic, settings)?;
        self.generate_request(&request).await
    }

    pub async fn generate_request(&self, request: &ScriptRequest) -> Result<GeneratedScript> {
        self.generate_for_year(request, Local::now().year()).await
    }

    pub async fn generate_for_year(
        &self,
        request: &ScriptRequest,
        year: i32,
    ) -> Result<GeneratedScript> {
        let prompt = build_prompt(request, year);
        let temperature = request.settings().creativity.value();

        info!(topic = request.topic(), temperature, "generating script");
        let raw = self.backend.generate(&prompt, temperature).await?;
        debug!(response_chars = raw.len(), "model responded");

        let script = parse_script(&raw)?;
        info!(
            sections = script.main_sections.len(),
            tags = script.tags.len(),
            "script parsed"
        );
        Ok(script)
    }
}
