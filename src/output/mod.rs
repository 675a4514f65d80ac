//! Terminal output formatting
//!
//! The console sink and pretty-printing used by the shell commands.

mod console;
pub mod display;
pub mod formatters;

pub use console::ConsoleSink;
pub use display::{print_banner, print_board, print_stats_summary};
