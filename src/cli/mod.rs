//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand
//! and returns the process exit code.

mod assess;
mod questions;
mod score;

pub use assess::{run_assess, take_assessment, Completion};
pub use questions::run_questions;
pub use score::{load_answers, run_score};
