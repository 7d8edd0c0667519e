//! Puzzle acceptance rules and candidate checking

/// Player candidate evaluation against sample sets
pub mod candidate;
/// Minimum-count and substring leak filtering
pub mod solvability;
/// Alphanumeric word extraction
pub mod words;
