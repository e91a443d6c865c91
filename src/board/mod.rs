//! The board state container and its mutators.
//!
//! All task and sprint state lives in one in-memory snapshot behind a
//! single writer. Mutators apply synchronously and atomically; derived
//! views ([`projection`], [`burndown`]) are pure functions recomputed from
//! the snapshot on every read.
//!
//! Mutations that reference an unknown task id are silent no-ops. Callers
//! must not rely on an error signal for that case; the board deliberately
//! tolerates stale ids from the view layer (a drag completing after a
//! delete, for example).

pub mod burndown;
pub mod projection;

use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Attachment, ColumnId, CreateTaskInput, Sprint, Task};

pub use burndown::BurndownPoint;
pub use projection::ColumnTasks;

/// Validation errors raised by the board's mutators.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}

/// A full copy of the board state: every task plus the active sprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub tasks: Vec<Task>,
    pub sprint: Sprint,
}

struct BoardState {
    tasks: Vec<Task>,
    sprint: Sprint,
}

/// The single-writer state container for one board session.
///
/// Cheap to clone; all clones share the same state.
#[derive(Clone)]
pub struct Board {
    state: Arc<Mutex<BoardState>>,
}

impl Board {
    /// An empty board with a fresh two-week sprint starting today.
    pub fn new() -> Self {
        Self::with_sprint(Sprint::starting(Utc::now().date_naive()))
    }

    /// An empty board with an explicit sprint.
    pub fn with_sprint(sprint: Sprint) -> Self {
        Self {
            state: Arc::new(Mutex::new(BoardState {
                tasks: Vec::new(),
                sprint,
            })),
        }
    }

    // ============================================================
    // Reads
    // ============================================================

    pub fn snapshot(&self) -> BoardSnapshot {
        let state = self.state.lock().expect("board lock poisoned");
        BoardSnapshot {
            tasks: state.tasks.clone(),
            sprint: state.sprint.clone(),
        }
    }

    pub fn tasks(&self) -> Vec<Task> {
        let state = self.state.lock().expect("board lock poisoned");
        state.tasks.clone()
    }

    pub fn get_task(&self, id: Uuid) -> Option<Task> {
        let state = self.state.lock().expect("board lock poisoned");
        state.tasks.iter().find(|t| t.id == id).cloned()
    }

    pub fn sprint(&self) -> Sprint {
        let state = self.state.lock().expect("board lock poisoned");
        state.sprint.clone()
    }

    /// Tasks grouped by column in display order. Empty columns are present.
    pub fn columns(&self) -> Vec<ColumnTasks> {
        let state = self.state.lock().expect("board lock poisoned");
        projection::partition(&state.tasks)
    }

    /// The burndown series for the current sprint and task snapshot.
    pub fn burndown(&self) -> Vec<BurndownPoint> {
        let state = self.state.lock().expect("board lock poisoned");
        burndown::series(&state.tasks, state.sprint.start_date, state.sprint.end_date)
    }

    // ============================================================
    // Mutators
    // ============================================================

    /// Append a new task to the backlog.
    ///
    /// Rejected without touching state when the title or description is
    /// empty.
    pub fn add_task(&self, input: CreateTaskInput) -> Result<Task, BoardError> {
        if input.title.trim().is_empty() {
            return Err(BoardError::EmptyField("title"));
        }
        if input.description.trim().is_empty() {
            return Err(BoardError::EmptyField("description"));
        }

        let task = Task {
            id: Uuid::new_v4(),
            column: ColumnId::Backlog,
            title: input.title,
            description: input.description,
            points: input.points,
            attachments: Vec::new(),
        };

        let mut state = self.state.lock().expect("board lock poisoned");
        state.tasks.push(task.clone());
        Ok(task)
    }

    /// Replace the task with `updated.id` wholesale. No-op if the id is
    /// unknown.
    pub fn update_task(&self, updated: Task) {
        let mut state = self.state.lock().expect("board lock poisoned");
        if let Some(existing) = state.tasks.iter_mut().find(|t| t.id == updated.id) {
            *existing = updated;
        }
    }

    /// Remove a task. No-op if the id is unknown; idempotent.
    pub fn delete_task(&self, id: Uuid) {
        let mut state = self.state.lock().expect("board lock poisoned");
        state.tasks.retain(|t| t.id != id);
    }

    /// Move a task to another column.
    ///
    /// This is the drag-and-drop completion contract: the column field is
    /// the only thing that changes. Ordering within the destination lane is
    /// derived from the flat order by the projection, never stored.
    pub fn move_task(&self, id: Uuid, target: ColumnId) {
        let mut state = self.state.lock().expect("board lock poisoned");
        if let Some(task) = state.tasks.iter_mut().find(|t| t.id == id) {
            task.column = target;
        }
    }

    /// Replace the sprint wholesale.
    ///
    /// Date ordering is the caller's concern; a sprint whose end does not
    /// come after its start is stored as-is and yields a degenerate
    /// single-point burndown.
    pub fn update_sprint(&self, sprint: Sprint) {
        let mut state = self.state.lock().expect("board lock poisoned");
        state.sprint = sprint;
    }

    /// Append an attachment to a task. No-op if the id is unknown.
    pub fn add_attachment(&self, task_id: Uuid, attachment: Attachment) {
        let mut state = self.state.lock().expect("board lock poisoned");
        if let Some(task) = state.tasks.iter_mut().find(|t| t.id == task_id) {
            task.attachments.push(attachment);
        }
    }

    /// Remove an attachment by position. No-op if the task is unknown or
    /// the index is out of range.
    pub fn remove_attachment(&self, task_id: Uuid, index: usize) {
        let mut state = self.state.lock().expect("board lock poisoned");
        if let Some(task) = state.tasks.iter_mut().find(|t| t.id == task_id) {
            if index < task.attachments.len() {
                task.attachments.remove(index);
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
