use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::attachment::Attachment;
use super::column::ColumnId;

/// A unit of work on the board.
///
/// Tasks are owned by the board; the `id` is immutable once created, while
/// every other field mutates in place through the board's mutators. A task
/// without `points` is untracked and never contributes to the burndown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub column: ColumnId,
    pub title: String,
    pub description: String,
    /// Story-point estimate. `None` means the task is untracked.
    pub points: Option<u32>,
    /// Files attached to this task, in the order they were added.
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// Input for creating a new task.
///
/// New tasks always land in the backlog with no attachments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskInput {
    pub title: String,
    pub description: String,
    /// Story-point estimate. `None` means the task is untracked.
    pub points: Option<u32>,
}
