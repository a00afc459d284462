//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value, json};

/// Builder for conversation payloads
///
/// Nodes are kept in insertion order, matching how a real payload's
/// mapping is laid out in the document.
pub struct PayloadBuilder {
    mapping: Map<String, Value>,
}

impl PayloadBuilder {
    /// Create a builder with an empty mapping
    pub fn new() -> Self {
        Self { mapping: Map::new() }
    }

    /// Add a node carrying the given message
    pub fn with_message(mut self, node_id: &str, message: &MessageBuilder) -> Self {
        self.mapping.insert(node_id.to_string(), json!({"message": message.to_value()}));
        self
    }

    /// Add a node without a message (e.g. the root node of a payload)
    pub fn with_empty_node(mut self, node_id: &str) -> Self {
        self.mapping.insert(node_id.to_string(), json!({"message": null}));
        self
    }

    /// Add a node with a raw message value (for malformed-shape tests)
    pub fn with_raw_message(mut self, node_id: &str, message: Value) -> Self {
        self.mapping.insert(node_id.to_string(), json!({"message": message}));
        self
    }

    /// The mapping object, as the extractor consumes it
    pub fn mapping(&self) -> Map<String, Value> {
        self.mapping.clone()
    }

    /// Full payload document as a JSON string
    pub fn to_json(&self) -> String {
        json!({"title": "Test conversation", "mapping": self.mapping.clone()}).to_string()
    }
}

impl Default for PayloadBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for message nodes inside a payload mapping
pub struct MessageBuilder {
    role: String,
    parts: Vec<Value>,
    create_time: Option<f64>,
    id: String,
    status: Option<String>,
}

impl MessageBuilder {
    /// Create a new user message
    pub fn user() -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![json!("Test message")],
            create_time: Some(1_700_000_000.0),
            id: "msg-user".to_string(),
            status: None,
        }
    }

    /// Create a new assistant message
    pub fn assistant() -> Self {
        Self {
            role: "assistant".to_string(),
            parts: vec![json!("Test response")],
            create_time: Some(1_700_000_060.0),
            id: "msg-assistant".to_string(),
            status: Some("finished_successfully".to_string()),
        }
    }

    /// Set the author role
    pub fn role(mut self, role: &str) -> Self {
        self.role = role.to_string();
        self
    }

    /// Set a single plain-text part
    pub fn text(mut self, text: &str) -> Self {
        self.parts = vec![json!(text)];
        self
    }

    /// Set the full parts sequence
    pub fn parts(mut self, parts: Vec<Value>) -> Self {
        self.parts = parts;
        self
    }

    /// Set the creation timestamp (Unix epoch seconds)
    pub fn create_time(mut self, create_time: f64) -> Self {
        self.create_time = Some(create_time);
        self
    }

    /// Remove the creation timestamp
    pub fn without_create_time(mut self) -> Self {
        self.create_time = None;
        self
    }

    /// Set the message id
    pub fn id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Convert to the JSON value stored under a node's `message` field
    pub fn to_value(&self) -> Value {
        let mut message = json!({
            "author": {"role": self.role},
            "content": {"content_type": "text", "parts": self.parts},
            "id": self.id,
        });
        if let Some(create_time) = self.create_time {
            message["create_time"] = json!(create_time);
        }
        if let Some(status) = &self.status {
            message["status"] = json!(status);
        }
        message
    }
}

/// Write a payload file into the given directory and return its path
pub fn write_payload(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write payload file");
    path
}

/// Helper to create a realistic two-message payload (user then assistant)
pub fn realistic_payload() -> PayloadBuilder {
    PayloadBuilder::new()
        .with_empty_node("client-created-root")
        .with_message(
            "node-user",
            &MessageBuilder::user().text("Hello").create_time(1_700_000_000.0),
        )
        .with_message(
            "node-assistant",
            &MessageBuilder::assistant().text("Hi! How can I help?").create_time(1_700_000_060.0),
        )
}
