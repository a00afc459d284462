//! Markdown rendering of extracted messages.

use crate::models::NormalizedMessage;

/// Render an ordered message sequence as a Markdown transcript.
///
/// Each message becomes a level-3 heading (`### Role – time`), a blank
/// line, the content verbatim, and a trailing blank line. Messages with
/// empty content are dropped entirely, heading included.
pub fn to_markdown(messages: &[NormalizedMessage]) -> String {
    let mut lines: Vec<String> = Vec::new();

    for message in messages {
        if message.content.is_empty() {
            continue;
        }
        lines.push(format!("### {} – {}", capitalize(&message.role), message.time));
        lines.push(String::new());
        lines.push(message.content.clone());
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Uppercase the first character and lowercase the rest.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}
