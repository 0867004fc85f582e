//! Prompt construction for script generation.
//!
//! The prompt is plain text: the user's choices interpolated into a fixed
//! instruction block, followed by format instructions carrying the JSON
//! Schema of [`GeneratedScript`](crate::types::GeneratedScript).

use serde_json::{Value, json};

use crate::{
    error::{Result, ScriptgenError},
    settings::{ScriptSettings, Setting},
};

/// A topic plus settings. Only constructible with a non-blank topic; the
/// topic itself is kept as entered.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptRequest {
    topic: String,
    settings: ScriptSettings,
}

impl ScriptRequest {
    pub fn new(topic: &str, settings: ScriptSettings) -> Result<Self> {
        if topic.trim().is_empty() {
            return Err(ScriptgenError::EmptyTopic);
        }
        Ok(Self {
            topic: topic.to_string(),
            settings,
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn settings(&self) -> &ScriptSettings {
        &self.settings
    }
}

/// JSON Schema of the expected model output
pub fn script_schema() -> Value {
    let string = json!({ "type": "string" });
    let string_list = json!({ "type": "array", "items": { "type": "string" } });

    json!({
        "title": "GeneratedScript",
        "type": "object",
        "properties": {
            "title": string,
            "hook": string,
            "introduction": string,
            "main_sections": {
                "type": "array",
                "items": { "$ref": "#/$defs/ScriptSection" }
            },
            "conclusion": string,
            "tags": string_list,
            "estimated_duration": string
        },
        "required": [
            "title",
            "hook",
            "introduction",
            "main_sections",
            "conclusion",
            "tags",
            "estimated_duration"
        ],
        "$defs": {
            "ScriptSection": {
                "title": "ScriptSection",
                "type": "object",
                "properties": {
                    "title": string,
                    "content": string,
                    "sub_points": string_list
                },
                "required": ["title", "content", "sub_points"]
            }
        }
    })
}

pub fn format_instructions() -> String {
    format!(
        r#"The output MUST be a single JSON instance that conforms to the JSON schema below.
Output ONLY the JSON object: no markdown, no commentary before or after it.

For example, for the schema {{"properties": {{"foo": {{"type": "array", "items": {{"type": "string"}}}}}}, "required": ["foo"]}}
the object {{"foo": ["bar", "baz"]}} is a well-formatted instance of the schema, while {{"properties": {{"foo": ["bar", "baz"]}}}} is not.

Here is the output schema:
```
{schema}
```"#,
        schema = script_schema()
    )
}

/// Render the full prompt for `request`. `year` is interpolated so tags can
/// reference the current year.
pub fn build_prompt(request: &ScriptRequest, year: i32) -> String {
    let settings = request.settings();
    let mood = settings.mood.label();
    let tone = settings.tone.label();
    let audience = settings.audience.label();
    let duration = settings.duration.label();

    format!(
        r#"You are a helpful YouTube content assistant. Generate a COMPLETE and FULL script based on the following parameters:

Topic: {topic}
Mood: {mood}
Duration: {duration}
Target Audience: {audience}
Tone: {tone}
Creativity Level: {creativity}
Current Year: {year}

Generate a FULL DETAILED SCRIPT (not just outlines) with:
- A catchy title that matches the {mood} mood
- A hook (1-2 sentences) that appeals to {audience}
- A complete introduction in a {tone} tone
- 4-6 main sections, each with:
  * A section title
  * Full detailed content (2-3 sentences minimum)
  * 2-4 sub-points for that section (these are bullet points under each main section)
- A strong conclusion with a call-to-action
- 5-8 relevant YouTube tags incorporating {year}
- Estimated duration appropriate for {duration}

Format each main section as an object with title, content, and sub_points list.

{instructions}
"#,
        topic = request.topic(),
        creativity = settings.creativity,
        instructions = format_instructions(),
    )
}
