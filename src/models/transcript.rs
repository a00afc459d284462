/// Flat message record produced by the extractor.
///
/// One record per kept mapping node, created once per extraction pass and
/// consumed by the renderer. `id` and `status` are carried through for
/// debugging and potential future use but are never rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedMessage {
    /// Author role, copied from `author.role` ("user", "assistant", ...).
    pub role: String,
    /// Formatted local timestamp, or the literal `"unknown"` when the
    /// message has no `create_time`.
    pub time: String,
    /// All text parts joined with newlines, in original part order.
    pub content: String,
    pub id: String,
    pub status: Option<String>,
}
