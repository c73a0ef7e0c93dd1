//! Terminal output formatting
//!
//! Display utilities for the CLI host and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_library_info, print_library_list, print_round_result, print_stats,
    print_status,
};
