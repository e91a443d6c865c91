//! Scrum board server: a kanban task tracker with a single active sprint,
//! a derived burndown series, and AI-assisted planning features delegated
//! to an external model API.
//!
//! State lives in one in-memory [`board::Board`]; the HTTP layer in
//! [`api`] exposes mutation commands and derived read views over it.

pub mod ai;
pub mod api;
pub mod board;
pub mod models;
