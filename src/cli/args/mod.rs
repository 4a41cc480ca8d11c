//! Shared CLI argument types
//!
//! This module contains reusable argument structs that can be flattened
//! into commands using `#[command(flatten)]`.

mod global;
mod state;

pub use global::GlobalOptions;
pub use state::StateArgs;
