use serde::{Deserialize, Serialize};

/// A file attached to a task, carried inline as a base64 data URI.
///
/// Attachments are immutable once added and owned exclusively by their task.
/// Removal is by positional index within the task's attachment list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    /// Original file name, e.g. `mockup.png`.
    pub name: String,
    /// MIME type, e.g. `image/png`.
    pub mime_type: String,
    /// Full data URI: `data:<mime>;base64,<payload>`.
    pub data: String,
}
