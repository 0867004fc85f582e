use crate::{
    error::{Result, ScriptgenError},
    types::GeneratedScript,
};

/// Text between the first ``` fence and the last one, without the language
/// tag. Backticks inside JSON strings stay part of the body.
fn fenced_block(text: &str) -> Option<&str> {
    let start = text.find("```")?;
    let after = text[start + 3..].trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    let body = match after.rfind("```") {
        Some(end) => &after[..end],
        None => after,
    };
    Some(body.trim())
}

/// Locate the JSON object in raw model output.
///
/// Prefers a fenced block when it holds a whole object, otherwise takes the
/// span from the first `{` to the last `}`.
pub fn extract_json(text: &str) -> Option<&str> {
    let candidate = fenced_block(text)
        .filter(|block| block.starts_with('{') && block.ends_with('}'))
        .unwrap_or(text);
    let start = candidate.find('{')?;
    let end = candidate.rfind('}')?;
    (end > start).then(|| &candidate[start..=end])
}

/// Validate raw model output against the script schema.
///
/// Every field is required; there is no partial result.
pub fn parse_script(raw: &str) -> Result<GeneratedScript> {
    let json = extract_json(raw).ok_or_else(|| ScriptgenError::MalformedOutput {
        reason: "no JSON object found in model output".to_string(),
    })?;
    let script: GeneratedScript = serde_json::from_str(json)?;
    Ok(script)
}
