use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The active sprint for the board.
///
/// There is exactly one sprint per board session. Edits replace it
/// wholesale; `start_date < end_date` is enforced at the API boundary
/// rather than on the stored value, so a degenerate sprint produces a
/// single-point burndown instead of an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprint {
    pub id: Uuid,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// What the team commits to achieving this sprint.
    pub goal: String,
}

impl Sprint {
    /// A fresh two-week sprint starting on `start`.
    pub fn starting(start: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: "Sprint 1".to_string(),
            start_date: start,
            end_date: start + chrono::Duration::days(14),
            goal: String::new(),
        }
    }
}
