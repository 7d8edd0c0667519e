//! Pattern-to-string synthesis over the regex syntax tree
//!
//! Strings are drawn with `rand_regex` from a copy of the pattern's HIR whose
//! character classes have been narrowed to printable ASCII. Without that step
//! `.` and negated classes would draw from all of Unicode.

use crate::generation::random::Prng;
use crate::io::configuration::PRINTABLE_RANGE;
use crate::validation::solvability::Rejection;
use rand::distr::Distribution;
use regex::Regex;
use regex_syntax::hir::{
    Capture, Class, ClassBytes, ClassBytesRange, ClassUnicode, ClassUnicodeRange, Hir, HirKind,
    Repetition,
};

/// A generated pattern that compiled both as a matcher and as a string sampler
///
/// The same matcher is reused for every classification made against the
/// pattern.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    matcher: Regex,
    sampler: rand_regex::Regex,
}

impl CompiledPattern {
    /// Compile `source`, capping unbounded repetitions at `max_repeat`
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::InvalidPattern`] if the source is not valid regex
    /// syntax, or [`Rejection::UnsupportedPattern`] if no string sampler can be
    /// built for it
    pub fn compile(source: &str, max_repeat: u32) -> Result<Self, Rejection> {
        let matcher = Regex::new(source).map_err(|e| Rejection::InvalidPattern {
            reason: e.to_string(),
        })?;
        let hir = regex_syntax::Parser::new()
            .parse(source)
            .map_err(|e| Rejection::InvalidPattern {
                reason: e.to_string(),
            })?;

        let sampler = rand_regex::Regex::with_hir(narrow_to_printable(&hir), max_repeat)
            .map_err(|e| Rejection::UnsupportedPattern {
                reason: e.to_string(),
            })?;
        if !sampler.is_utf8() {
            return Err(Rejection::UnsupportedPattern {
                reason: "sampler may produce non UTF-8 output".to_string(),
            });
        }

        Ok(Self {
            source: source.to_string(),
            matcher,
            sampler,
        })
    }

    /// Regex source this pattern was compiled from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Unanchored search, the same semantics used for candidate checking
    pub fn is_match(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }

    /// Draw a string that structurally conforms to the pattern
    pub fn synthesize(&self, prng: &mut Prng) -> String {
        Distribution::<String>::sample(&self.sampler, prng.rng_mut())
    }
}

/// Rebuild `hir` with every character class intersected with printable ASCII
///
/// Classes with no printable member are kept as they are.
pub fn narrow_to_printable(hir: &Hir) -> Hir {
    match hir.kind() {
        HirKind::Class(Class::Unicode(class)) => Hir::class(Class::Unicode(narrow_unicode(class))),
        HirKind::Class(Class::Bytes(class)) => Hir::class(Class::Bytes(narrow_bytes(class))),
        HirKind::Repetition(repetition) => Hir::repetition(Repetition {
            min: repetition.min,
            max: repetition.max,
            greedy: repetition.greedy,
            sub: Box::new(narrow_to_printable(&repetition.sub)),
        }),
        HirKind::Capture(capture) => Hir::capture(Capture {
            index: capture.index,
            name: capture.name.clone(),
            sub: Box::new(narrow_to_printable(&capture.sub)),
        }),
        HirKind::Concat(subs) => Hir::concat(subs.iter().map(narrow_to_printable).collect()),
        HirKind::Alternation(subs) => {
            Hir::alternation(subs.iter().map(narrow_to_printable).collect())
        }
        HirKind::Empty | HirKind::Literal(_) | HirKind::Look(_) => hir.clone(),
    }
}

fn narrow_unicode(class: &ClassUnicode) -> ClassUnicode {
    let (lo, hi) = PRINTABLE_RANGE;
    let mut narrowed = class.clone();
    narrowed.intersect(&ClassUnicode::new([ClassUnicodeRange::new(lo, hi)]));
    if narrowed.ranges().is_empty() {
        class.clone()
    } else {
        narrowed
    }
}

fn narrow_bytes(class: &ClassBytes) -> ClassBytes {
    let (lo, hi) = PRINTABLE_RANGE;
    let mut narrowed = class.clone();
    narrowed.intersect(&ClassBytes::new([ClassBytesRange::new(lo as u8, hi as u8)]));
    if narrowed.ranges().is_empty() {
        class.clone()
    } else {
        narrowed
    }
}
