//! Shared `proptest` strategies for the `sam` suffix automaton crate.
//!
//! Suffix automaton invariants only get exercised thoroughly on texts with
//! repeated substrings, so the strategies here deliberately draw from a
//! small alphabet rather than the full byte range — a text built from
//! `{a, b, c}` produces far more clones and shared suffix links per
//! character than one drawn from 256 symbols, for the same length budget.

use proptest::collection::vec;
use proptest::prelude::*;

/// A text of length `1..=max_len` drawn from a small alphabet, biased
/// towards repetition so construction exercises cloning and suffix-link
/// redirection rather than trivial chains.
pub fn small_alphabet_text(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    vec(prop_oneof![Just(b'a'), Just(b'b'), Just(b'c')], 1..=max_len.max(1))
}

/// A text over the full byte alphabet, for exercising the dense backend's
/// 256-wide transition table and confirming it agrees with the sparse one.
pub fn byte_text(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    vec(any::<u8>(), 0..=max_len)
}

/// Picks a (possibly empty) contiguous substring of `text`, returning it
/// alongside the start index it was drawn from. Used to generate patterns
/// that are guaranteed to occur at least once.
pub fn substring_of(text: &[u8]) -> impl Strategy<Value = (usize, Vec<u8>)> {
    let len = text.len();
    let text = text.to_vec();
    if len == 0 {
        return Just((0, Vec::new())).boxed();
    }
    (0..len, 0..=len)
        .prop_map(move |(start, raw_len)| {
            let start = start.min(text.len().saturating_sub(1));
            let end = (start + raw_len).min(text.len());
            (start, text[start..end].to_vec())
        })
        .boxed()
}

/// Brute-force reference implementation of "all start positions of `pattern`
/// in `text`", used as the oracle that `positions()` is checked against.
pub fn naive_positions(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    (0..=text.len() - pattern.len())
        .filter(|&i| &text[i..i + pattern.len()] == pattern)
        .collect()
}
