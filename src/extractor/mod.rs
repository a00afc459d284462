//! Message extraction and ordering.
//!
//! Walks the unordered `mapping` of conversation nodes, keeps the messages
//! whose author role was requested, flattens each into a
//! [`NormalizedMessage`], and returns them in transcript order: messages
//! with a known timestamp first, chronologically, then the rest in the
//! order they appeared in the mapping.
//!
//! A node whose `message` is present but malformed (missing `author.role`,
//! `content` or `id`) fails the whole extraction. Corrupt input aborts the
//! run before any output is written; nothing is skipped silently.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use chrono::DateTime;
use chrono_tz::Tz;
use serde_json::{Map, Value};

use crate::models::{ContentPart, MessageNode, NormalizedMessage};

/// Sentinel used in place of a formatted timestamp when a message has no
/// usable `create_time`.
pub const UNKNOWN_TIME: &str = "unknown";

/// Convert Unix epoch seconds to a readable string in the given timezone.
///
/// Formats as `YYYY-MM-DD HH:MM:SS <zone abbreviation>`. `None`,
/// non-finite values, and values outside chrono's representable range all
/// yield [`UNKNOWN_TIME`].
pub fn epoch_to_readable(ts: Option<f64>, tz: Tz) -> String {
    let Some(secs) = ts else {
        return UNKNOWN_TIME.to_string();
    };
    if !secs.is_finite() {
        return UNKNOWN_TIME.to_string();
    }

    let whole = secs.floor();
    let nanos = ((secs - whole) * 1_000_000_000.0) as u32;
    match DateTime::from_timestamp(whole as i64, nanos) {
        Some(utc) => utc.with_timezone(&tz).format("%Y-%m-%d %H:%M:%S %Z").to_string(),
        None => UNKNOWN_TIME.to_string(),
    }
}

/// Extract, normalize and order the messages of a conversation mapping.
///
/// Nodes without a `message` (absent or null) are skipped. Each remaining
/// message must deserialize into [`MessageNode`]; a malformed one aborts
/// extraction with an error naming the offending node. Only messages whose
/// `author.role` is in `keep_roles` are collected.
///
/// Content is the newline-join of the message's part segments (see
/// [`ContentPart::text_segment`]), preserving part order. An empty `parts`
/// sequence yields empty content; the renderer drops such records later.
pub fn extract_messages(
    mapping: &Map<String, Value>,
    keep_roles: &BTreeSet<String>,
    tz: Tz,
) -> Result<Vec<NormalizedMessage>> {
    let mut collected = Vec::new();

    for (node_id, node) in mapping {
        let Some(raw) = node.get("message") else { continue };
        if raw.is_null() {
            continue;
        }

        let message: MessageNode = serde_json::from_value(raw.clone())
            .with_context(|| format!("Malformed message in node '{node_id}'"))?;

        if !keep_roles.contains(&message.author.role) {
            continue;
        }

        let segments: Vec<&str> =
            message.content.parts.iter().filter_map(ContentPart::text_segment).collect();

        collected.push(NormalizedMessage {
            role: message.author.role,
            time: epoch_to_readable(message.create_time, tz),
            content: segments.join("\n"),
            id: message.id,
            status: message.status,
        });
    }

    // Timestamped messages sort before "unknown" ones; within each bucket
    // the fixed YYYY-MM-DD HH:MM:SS format makes the lexicographic order
    // chronological. The sort is stable, so ties keep mapping order.
    collected.sort_by(|a, b| {
        (a.time == UNKNOWN_TIME, a.time.as_str()).cmp(&(b.time == UNKNOWN_TIME, b.time.as_str()))
    });

    Ok(collected)
}
