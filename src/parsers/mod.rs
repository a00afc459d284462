//! Payload loading.
//!
//! # Error Handling Strategy
//!
//! This tool follows a **fail fast** approach: the whole payload is read
//! and decoded in one step, and both I/O failures and JSON syntax errors
//! surface with an `Error reading JSON` context so the binary reports them
//! on a single line. There is no partial or streaming parse; a payload
//! small enough to export from a browser fits comfortably in memory.
//!
//! Uses `anyhow::Result` with context throughout. Since this is a CLI tool
//! (not a library for programmatic consumption), errors are boxed and
//! consumers don't match on error types.

pub mod payload;

pub use payload::load_payload;
