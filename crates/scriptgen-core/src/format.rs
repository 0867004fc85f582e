use crate::types::GeneratedScript;

/// Which part of a script to render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    Overview,
    FullScript,
    Metadata,
    #[default]
    All,
}

/// Hook, introduction and estimated duration
pub fn format_overview(script: &GeneratedScript) -> String {
    let mut output = String::new();

    output.push_str("## Hook\n\n");
    output.push_str(&script.hook);
    output.push_str("\n\n");

    output.push_str("## Introduction\n\n");
    output.push_str(&script.introduction);
    output.push_str("\n\n");

    output.push_str("## Duration\n\n");
    output.push_str(&format!("⏱️ {}\n", script.estimated_duration));

    output
}

/// Numbered sections with their key points, then the conclusion
pub fn format_full_script(script: &GeneratedScript) -> String {
    let mut output = String::new();

    output.push_str("## 📖 Full Script\n\n");
    for (i, section) in script.main_sections.iter().enumerate() {
        output.push_str(&format!("### {}. {}\n\n", i + 1, section.title));
        output.push_str(&format!("{}\n\n", section.content));

        if !section.sub_points.is_empty() {
            output.push_str("**Key Points:**\n");
            for point in &section.sub_points {
                output.push_str(&format!("  • {}\n", point));
            }
            output.push('\n');
        }
        output.push_str("---\n\n");
    }

    output.push_str("## 📝 Conclusion\n\n");
    output.push_str(&script.conclusion);
    output.push('\n');

    output
}

/// Tags and section/sub-point/tag counts
pub fn format_metadata(script: &GeneratedScript) -> String {
    let stats = script.stats();
    let mut output = String::new();

    output.push_str("## 🏷️ Tags\n\n");
    output.push_str(&script.tags.join(", "));
    output.push_str("\n\n");

    output.push_str("## 📊 Statistics\n\n");
    output.push_str(&format!("Number of Sections: {}\n", stats.sections));
    output.push_str(&format!("Total Sub-Points: {}\n", stats.sub_points));
    output.push_str(&format!("Number of Tags: {}\n", stats.tags));

    output
}

/// Format a script as human-readable markdown
pub fn format_script_readable(script: &GeneratedScript, view: View) -> String {
    let mut output = format!("# {}\n\n", script.title);

    match view {
        View::Overview => output.push_str(&format_overview(script)),
        View::FullScript => output.push_str(&format_full_script(script)),
        View::Metadata => output.push_str(&format_metadata(script)),
        View::All => {
            output.push_str(&format_overview(script));
            output.push('\n');
            output.push_str(&format_full_script(script));
            output.push('\n');
            output.push_str(&format_metadata(script));
        }
    }

    output
}

/// Flat plain-text document written by the text export
pub fn export_text(script: &GeneratedScript) -> String {
    let mut sections_text = String::new();
    for (i, section) in script.main_sections.iter().enumerate() {
        sections_text.push_str(&format!("{}. {}\n", i + 1, section.title));
        sections_text.push_str(&format!("{}\n\n", section.content));
        if !section.sub_points.is_empty() {
            sections_text.push_str("Key Points:\n");
            for point in &section.sub_points {
                sections_text.push_str(&format!("  • {}\n", point));
            }
            sections_text.push('\n');
        }
    }

    format!(
        "
TITLE: {title}

HOOK:
{hook}

INTRODUCTION:
{introduction}

MAIN SECTIONS:
{sections_text}

CONCLUSION:
{conclusion}

TAGS:
{tags}

ESTIMATED DURATION:
{duration}
",
        title = script.title,
        hook = script.hook,
        introduction = script.introduction,
        conclusion = script.conclusion,
        tags = script.tags.join(", "),
        duration = script.estimated_duration,
    )
}

const TOPIC_STEM_CHARS: usize = 20;

/// `youtube_script_<first 20 chars of topic>.<extension>`, with characters
/// that are not allowed in file names replaced by `_`.
pub fn export_file_name(topic: &str, extension: &str) -> String {
    let stem: String = topic
        .chars()
        .take(TOPIC_STEM_CHARS)
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("youtube_script_{}.{}", stem, extension)
}
