use crate::generation::random::Prng;
use crate::io::configuration::{
    ALPHANUMERIC, CLASS_BAND, DIGIT_BAND, GROUP_BAND, METACHAR_BAND, METACHARACTERS,
    REPETITION_BAND,
};

/// Build a random regex source of `length` tokens
///
/// The output is not guaranteed to compile: nested quantifiers, quantifiers
/// with nothing to repeat and similar shapes are emitted freely and left for
/// the caller to discard.
pub fn generate_pattern(prng: &mut Prng, length: usize) -> String {
    emit_sequence(prng, length).0
}

/// Emit tokens until `budget` is spent, returning the source and tokens consumed
///
/// A group token spends the budget of its own contents, so the consumed count
/// of a call always equals its budget.
pub fn emit_sequence(prng: &mut Prng, budget: usize) -> (String, usize) {
    let mut source = String::new();
    let mut consumed = 0;

    while consumed < budget {
        let (token, cost) = emit_token(prng, budget - consumed);
        source.push_str(&token);
        consumed += cost;
    }

    (source, consumed)
}

/// Emit a single token given `remaining` budget (at least 1)
fn emit_token(prng: &mut Prng, remaining: usize) -> (String, usize) {
    let band = prng.next_float();

    if band < CLASS_BAND {
        (character_class(prng), 1)
    } else if band < REPETITION_BAND {
        (bounded_repetition(prng), 1)
    } else if band < GROUP_BAND {
        let inner_budget = prng.next_int_in(1, remaining + 1);
        let (inner, used) = emit_sequence(prng, inner_budget);
        (format!("({inner})"), used)
    } else if band < METACHAR_BAND {
        let index = prng.next_int(METACHARACTERS.len());
        (METACHARACTERS.get(index).copied().unwrap_or('.').to_string(), 1)
    } else if band < DIGIT_BAND {
        (random_char_from(prng, "0123456789").to_string(), 1)
    } else {
        (random_char_from(prng, "abcdefghijklmnopqrstuvwxyz").to_string(), 1)
    }
}

/// `[...]` of 2 to 4 alphanumerics, negated half the time
fn character_class(prng: &mut Prng) -> String {
    let negated = prng.coin();
    let size = prng.next_int_in(2, 5);
    let members: String = (0..size)
        .map(|_| random_char_from(prng, ALPHANUMERIC))
        .collect();

    if negated {
        format!("[^{members}]")
    } else {
        format!("[{members}]")
    }
}

/// `{m}` or `{m,n}` with `m` in 2..=4
fn bounded_repetition(prng: &mut Prng) -> String {
    let min = prng.next_int_in(2, 5);
    if prng.coin() {
        format!("{{{min}}}")
    } else {
        let max = min + prng.next_int_in(1, 3);
        format!("{{{min},{max}}}")
    }
}

/// Uniformly pick one character of a non-empty ASCII alphabet
///
/// # Panics
///
/// Panics if `alphabet` is empty
pub fn random_char_from(prng: &mut Prng, alphabet: &str) -> char {
    let index = prng.next_int(alphabet.len());
    alphabet.chars().nth(index).unwrap_or('a')
}
