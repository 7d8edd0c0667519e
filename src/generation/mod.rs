//! Random generation of answer patterns and their sample strings

/// Recursive token grammar for answer patterns
pub mod pattern;
/// Seeded random source for a generation session
pub mod random;
/// Sample drawing, perturbation and classification
pub mod samples;
/// Pattern compilation and conforming string synthesis
pub mod synthesis;
