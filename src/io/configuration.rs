//! Generation constants and runtime configuration defaults

// Seeds
/// Largest legal puzzle seed, kept within 32 bits so seeds survive any consumer's integer parsing
pub const MAX_SEED: u64 = u32::MAX as u64;
/// Designated seed that every shipped ruleset resolves without exhausting its attempts
pub const SAFE_SEED: u64 = 0;
/// Number of times assembly may move to a fallback seed before giving up
pub const MAX_FALLBACK_DEPTH: usize = 1;

// Ruleset selection
/// Ruleset used when none is requested
pub const CURRENT_RULESET: &str = "12";

// Pattern grammar band edges, checked in order against one uniform draw per token
/// Upper edge of the character class band
pub const CLASS_BAND: f64 = 0.1;
/// Upper edge of the bounded repetition band
pub const REPETITION_BAND: f64 = 0.2;
/// Upper edge of the parenthesised group band
pub const GROUP_BAND: f64 = 0.3;
/// Upper edge of the metacharacter band
pub const METACHAR_BAND: f64 = 0.8;
/// Upper edge of the digit band; the remainder emits lowercase letters
pub const DIGIT_BAND: f64 = 0.9;

/// Metacharacters the grammar may emit as single tokens
pub const METACHARACTERS: [char; 5] = ['*', '+', '?', '.', '|'];
/// Alphabet used for class members and universal insertions
pub const ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyz0123456789";
/// Insertion character used when a pattern contains no alphanumerics
pub const FALLBACK_INSERTION: char = 'a';

// Synthesis
/// Printable ASCII range synthesised strings are drawn from
pub const PRINTABLE_RANGE: (char, char) = (' ', '~');

// Quiz
/// Number of puzzles in one quiz
pub const QUIZ_LENGTH: usize = 10;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Number of surveyed seeds between progress refreshes
pub const SURVEY_REFRESH_INTERVAL: u64 = 16;

// Default values for configurable parameters
/// Default number of seeds a survey visits
pub const DEFAULT_SURVEY_COUNT: u64 = 1000;
