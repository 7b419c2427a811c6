//! Online suffix automaton construction and substring-occurrence queries.
//!
//! A suffix automaton is the minimal deterministic finite automaton (DFA)
//! recognizing every substring of a fixed text. It is built incrementally,
//! one symbol at a time, in O(n) states for a text of length n (at most
//! `2n` states for `n >= 2`). The construction below follows
//! the classic Blumer/Crochemore online algorithm: each new symbol
//! extends the suffix-link chain from the previous `last` state and,
//! where an existing endpos class must be subdivided, clones a state to
//! keep every class minimal (see [`construction`]).
//!
//! Three queries are built on top of the constructed automaton
//! ([`SuffixAutomaton::contains`], [`SuffixAutomaton::first`],
//! [`SuffixAutomaton::positions`]); `positions` additionally needs a
//! suffix-link *tree* (the reverse of the suffix-link graph), which is
//! built lazily on first use (see [`SuffixAutomaton::build_index`]).
//!
//! # Example
//! ```rust
//! use sam::algorithms::suffix_automaton::SuffixAutomaton;
//!
//! let text = "banana";
//! let sam = SuffixAutomaton::new(text);
//! assert!(sam.contains("ana"));
//! assert_eq!(sam.positions("ana"), vec![1, 3]);
//! ```

mod arena;
mod construction;
mod query;
mod transitions;

use arena::{Arena, ROOT};
use sam_core::QueryStats;

pub use transitions::{DenseTransitions, SparseTransitions, Transitions};

/// An online suffix automaton over a fixed text, generic over its
/// transition-table backend `T`.
///
/// Defaults to [`DenseTransitions`]; use [`SparseSuffixAutomaton`] (an
/// alias for `SuffixAutomaton<SparseTransitions>`) when the alphabet is
/// small or memory is tight.
#[derive(Debug)]
pub struct SuffixAutomaton<T: Transitions = DenseTransitions> {
    pub(crate) arena: Arena<T>,
    pub(crate) text_len: usize,
    index_built: bool,
    stats: QueryStats,
}

/// [`SuffixAutomaton`] configured with the sparse, sorted-vector
/// transition backend.
pub type SparseSuffixAutomaton = SuffixAutomaton<SparseTransitions>;

impl<T: Transitions> SuffixAutomaton<T> {
    /// Builds a suffix automaton over `text` in a single online pass.
    pub fn new(text: impl AsRef<[u8]>) -> Self {
        let text = text.as_ref();
        let mut arena = Arena::with_root(text.len());
        let mut last = ROOT;
        for &c in text {
            last = construction::extend(&mut arena, last, c);
        }
        construction::mark_terminals(&mut arena, last);

        Self {
            arena,
            text_len: text.len(),
            index_built: false,
            stats: QueryStats::new(),
        }
    }

    /// Number of states in the automaton, including the root and any
    /// clones. Always at most `2n` for a text of length `n >= 2` (`n + 1`
    /// otherwise).
    pub fn state_count(&self) -> usize {
        self.arena.len()
    }

    /// Length of the text the automaton was built from.
    pub fn text_len(&self) -> usize {
        self.text_len
    }

    /// Per-instance transition-table lookup counters, incremented by every
    /// call to [`SuffixAutomaton::contains`], [`SuffixAutomaton::first`],
    /// and [`SuffixAutomaton::positions`].
    pub fn stats(&self) -> &QueryStats {
        &self.stats
    }

    /// Populates the suffix-link tree (the reverse adjacency list of
    /// suffix links) that [`SuffixAutomaton::positions`] walks to collect
    /// every occurrence of a matched pattern.
    ///
    /// Idempotent: a second call is a no-op. Automatically called by the
    /// first [`SuffixAutomaton::positions`] query; expose this directly
    /// when an automaton will be shared across threads, so the one-shot
    /// write happens before publication rather than racing a reader (see
    /// the crate's concurrency notes).
    pub fn build_index(&mut self) {
        if self.index_built {
            return;
        }
        for i in 1..self.arena.len() {
            let link = self
                .arena
                .get(i)
                .link
                .expect("every non-root state has a suffix link");
            self.arena.get_mut(link).suffix_children.push(i);
        }
        self.index_built = true;
    }
}
