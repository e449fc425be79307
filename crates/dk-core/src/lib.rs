//! # dk-core
//!
//! Error definitions and global settings shared across the datekit
//! workspace crates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the shorthand `Result` alias.
pub mod errors;

/// Global library settings (evaluation date).
pub mod settings;

pub use errors::{Error, Result};
pub use settings::Settings;
