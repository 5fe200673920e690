//! User interface and interaction
//!
//! This module contains all components related to user interaction,
//! including CLI parsing, console summaries, terminal colors,
//! and shell completion generation.

pub mod cli;
pub mod color;
pub mod completion;
pub mod output;

// Re-export commonly used items
pub use cli::{Cli, Commands, cli_to_config};
pub use completion::print_completions;
pub use output::{display_completion_message, display_summary};
