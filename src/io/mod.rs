//! Input/output, configuration and error handling

/// Command-line interface for generating and checking puzzles
pub mod cli;
/// Generation constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Progress display for seed surveys
pub mod progress;
