use serde::{Deserialize, Serialize};

use crate::models::{ColumnId, Task};

/// One lane of the projected board: a column plus its tasks in flat order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnTasks {
    pub column: ColumnId,
    pub title: String,
    pub tasks: Vec<Task>,
}

/// Group tasks by column, preserving their relative order.
///
/// Every column appears in the result in display order, with an empty task
/// list when nothing matches. Pure function over the flat task slice; the
/// board recomputes it on every read.
pub fn partition(tasks: &[Task]) -> Vec<ColumnTasks> {
    ColumnId::ALL
        .iter()
        .map(|&column| ColumnTasks {
            column,
            title: column.title().to_string(),
            tasks: tasks.iter().filter(|t| t.column == column).cloned().collect(),
        })
        .collect()
}
