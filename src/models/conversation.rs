use serde::Deserialize;
use serde_json::{Map, Value};

/// Top-level conversation payload.
///
/// Only the `mapping` field matters; everything else in the payload
/// (`title`, `create_time`, `current_node`, ...) is ignored. `mapping` is
/// kept optional so that its absence can be reported with a dedicated
/// message instead of a generic decode error. A JSON `null` mapping is
/// treated the same as an absent one.
#[derive(Debug, Deserialize)]
pub struct ConversationDocument {
    #[serde(default)]
    pub mapping: Option<Map<String, Value>>,
}

/// A message as found nested in a mapping entry's `message` field.
///
/// `author`, `content` and `id` are required; a node carrying a message
/// without them is malformed and fails extraction for the whole run.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageNode {
    pub author: Author,
    pub content: MessageContent,
    #[serde(default)]
    pub create_time: Option<f64>,
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    pub role: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageContent {
    /// Absent `parts` (e.g. tool messages with only a `text` body) is
    /// equivalent to an empty sequence.
    #[serde(default)]
    pub parts: Vec<ContentPart>,
}

/// One element of `content.parts`.
///
/// Parts come in two usable shapes: a plain string, or an object that may
/// carry a `text` field. Anything else (numbers, arrays, nulls) is carried
/// through as [`ContentPart::Other`] and dropped during extraction.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ContentPart {
    Text(String),
    Fragment(Map<String, Value>),
    Other(Value),
}

impl ContentPart {
    /// Text segment this part contributes to the joined message content.
    ///
    /// String parts pass through unchanged; object parts contribute their
    /// `text` field when it is a string, otherwise the empty string; other
    /// shapes contribute nothing at all.
    pub fn text_segment(&self) -> Option<&str> {
        match self {
            ContentPart::Text(text) => Some(text),
            ContentPart::Fragment(map) => {
                Some(map.get("text").and_then(Value::as_str).unwrap_or_default())
            }
            ContentPart::Other(_) => None,
        }
    }
}
