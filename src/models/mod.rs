//! Data models for ChatGPT conversation payloads.
//!
//! This module defines the data structures used throughout the application:
//!
//! - [`ConversationDocument`] - Top-level payload with its node mapping
//! - [`MessageNode`] - A single message nested inside a mapping entry
//! - [`ContentPart`] - One element of a message's `content.parts` sequence
//! - [`NormalizedMessage`] - Flat record produced by the extractor
//!
//! Payload shapes use serde for deserialization; mapping nodes are held as
//! raw JSON values and only committed to [`MessageNode`] during extraction,
//! so that a malformed node can be reported with its node id.

pub mod conversation;
pub mod transcript;

pub use conversation::{Author, ContentPart, ConversationDocument, MessageContent, MessageNode};
pub use transcript::NormalizedMessage;
