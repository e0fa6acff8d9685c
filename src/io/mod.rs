//! Input/output boundary: CLI, error types, rendering, and progress
//!
//! Everything here is an external collaborator of the engine; the engine
//! itself performs no I/O.

/// Command-line interface and run orchestration
pub mod cli;
/// Sampler constants and runtime defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// PNG export of finished tilings
pub mod image;
/// Progress display for sampling runs
pub mod progress;
/// Frame capture and GIF animation of the growing diamond
pub mod visualization;
