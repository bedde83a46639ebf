//! Core types, configuration, and errors for the spangrid layout engine.
//!
//! This crate provides the foundational types shared by the layout crate
//! and by callers that feed it:
//! - Breakpoints and per-breakpoint span assignments
//! - Pixel and dp lengths, sizes, measurement constraints, placements
//! - Layout configuration
//! - Error types

pub mod config;
pub mod errors;
pub mod types;

pub use config::*;
pub use errors::*;
pub use types::*;
