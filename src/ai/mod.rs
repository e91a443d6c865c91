//! AI gateway boundary: story generation, retrospective summaries and
//! attachment analysis, delegated to an external model API.

mod client;
mod types;

pub use client::*;
pub use types::*;
