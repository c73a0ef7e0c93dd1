//! Embedded word list
//!
//! Fallback library compiled into the binary at build time.

/// Library name the embedded list is installed under
pub const BUILTIN_NAME: &str = "builtin";

// Include generated word list from build script
include!(concat!(env!("OUT_DIR"), "/builtin.rs"));
