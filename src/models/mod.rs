//! Domain models for the scrum board.
//!
//! # Core Concepts
//!
//! - [`Task`]: A unit of work, living in exactly one column at a time.
//!   Tasks carry optional story points and zero or more attachments.
//! - [`ColumnId`]: The fixed set of kanban lanes, in display order.
//! - [`Sprint`]: The single active sprint (name, dates, goal). Replaced
//!   wholesale on edit.
//! - [`Attachment`]: An inline base64 file attached to a task.
//!
//! All derived views (column grouping, burndown) are computed from these
//! records by the `board` module; the models themselves have no behavior.

mod attachment;
mod column;
mod sprint;
mod task;

pub use attachment::*;
pub use column::*;
pub use sprint::*;
pub use task::*;
