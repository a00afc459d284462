//! ChatGPT Transcript - Convert conversation payloads to Markdown
//!
//! This library converts a raw ChatGPT conversation payload (the JSON object
//! returned by the conversation API, as captured from the browser Network
//! tab) into a chronologically ordered Markdown transcript. It supports:
//!
//! - Loading and decoding a payload file into a typed document
//! - Extracting messages from the unordered `mapping` of conversation nodes
//! - Filtering by author role (user, assistant, or both)
//! - Formatting timestamps in a fixed display timezone
//! - Rendering the ordered messages as Markdown
//!
//! # Example
//!
//! ```no_run
//! use std::collections::BTreeSet;
//! use std::path::Path;
//!
//! use chatgpt_transcript::{extract_messages, load_payload, to_markdown};
//!
//! let document = load_payload(Path::new("payload.json"))?;
//! let mapping = document.mapping.expect("payload has a mapping");
//! let keep_roles: BTreeSet<String> =
//!     ["user".to_string(), "assistant".to_string()].into();
//! let messages = extract_messages(&mapping, &keep_roles, chrono_tz::America::Chicago)?;
//! println!("{}", to_markdown(&messages));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod extractor;
pub mod models;
pub mod parsers;
pub mod renderer;

// Re-export commonly used types
pub use extractor::{UNKNOWN_TIME, epoch_to_readable, extract_messages};
pub use models::{ConversationDocument, MessageNode, NormalizedMessage};
pub use parsers::load_payload;
pub use renderer::to_markdown;
