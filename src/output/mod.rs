//! Terminal output formatting
//!
//! Colored tiles and summaries for line-mode play.

pub mod display;
pub mod formatters;

pub use display::{print_banner, print_board, print_summary};
