//! Shared primitives for the brisket one-hot encoding crates.
//!
//! `brisket-core` holds the pieces every other brisket crate builds on:
//!
//! - **Error types** — [`BrisketError`] and [`Result`] for structured error handling

pub mod error;

pub use error::{BrisketError, Result};
