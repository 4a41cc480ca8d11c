//! API trait definitions
//!
//! - [`TeamApi`] - Team information and membership operations

mod team;

pub use team::TeamApi;
