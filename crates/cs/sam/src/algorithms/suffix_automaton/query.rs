//! The query engine: `contains`, `first`, and `positions`.
//!
//! All three walk the automaton from the root following the pattern's
//! bytes; `positions` additionally needs the suffix-link tree built by
//! [`super::SuffixAutomaton::build_index`] to enumerate every state whose
//! class is a descendant of the matched state.

use super::arena::ROOT;
use super::transitions::Transitions;
use super::SuffixAutomaton;

impl<T: Transitions> SuffixAutomaton<T> {
    /// Does `pattern` occur anywhere in the text? `O(|pattern|)`.
    ///
    /// The empty pattern always returns `true` (the empty string is a
    /// substring of every text, including the empty text).
    pub fn contains(&self, pattern: impl AsRef<[u8]>) -> bool {
        self.walk(pattern.as_ref()).is_some()
    }

    /// The start index of the first occurrence of `pattern`, or `None` if
    /// it does not occur.
    ///
    /// For the empty pattern, returns `Some(0)` when the text is
    /// non-empty and `None` when the text is empty.
    pub fn first(&self, pattern: impl AsRef<[u8]>) -> Option<usize> {
        let pattern = pattern.as_ref();
        if pattern.is_empty() {
            return if self.text_len == 0 { None } else { Some(0) };
        }
        let state = self.walk(pattern)?;
        Some(self.arena.get(state).first + 1 - pattern.len())
    }

    /// Every start index at which `pattern` occurs, sorted ascending with
    /// no duplicates. Empty if `pattern` does not occur, and always empty
    /// for the empty pattern.
    ///
    /// Builds the suffix-link tree index on first call (see
    /// [`SuffixAutomaton::build_index`]); subsequent calls reuse it.
    pub fn positions(&mut self, pattern: impl AsRef<[u8]>) -> Vec<usize> {
        let pattern = pattern.as_ref();
        if pattern.is_empty() {
            return Vec::new();
        }
        let Some(state) = self.walk(pattern) else {
            return Vec::new();
        };

        self.build_index();

        let mut positions = Vec::new();
        let mut stack = vec![state];
        while let Some(node) = stack.pop() {
            let s = self.arena.get(node);
            if !s.is_clone {
                positions.push(s.first + 1 - pattern.len());
            }
            stack.extend(s.suffix_children.iter().copied());
        }
        positions.sort_unstable();
        positions
    }

    /// Walks the automaton from the root along `pattern`'s bytes,
    /// returning the final state if every symbol had a transition.
    fn walk(&self, pattern: &[u8]) -> Option<usize> {
        let mut state = ROOT;
        for &c in pattern {
            let degree = self.arena.get(state).transitions.degree();
            self.stats().record_lookup(degree);
            state = self.arena.get(state).transitions.get(c)?;
        }
        Some(state)
    }
}
