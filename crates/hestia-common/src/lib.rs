//! hestia-common — Shared error types used across all Hestia crates.

pub mod error;

pub use error::{HestiaError, Result};
