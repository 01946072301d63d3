//! pubkit: a fixed greeting.
//!
//! # Modules
//!
//! - [`greeter`]: the greeting itself
//! - [`config`]: settings for the `pubkit` binary
//! - [`error`]: Error types and Result alias

#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;
pub mod greeter;

// Re-export key types at crate root for convenience
pub use config::{OutputFormat, PubkitConfig};
pub use error::{Error, Result};
pub use greeter::{GREETING, Greeter, hello};
