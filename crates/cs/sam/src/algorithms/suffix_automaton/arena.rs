//! The state arena: an append-only store of [`State`] records addressed
//! exclusively by index.
//!
//! States never reference each other through owning pointers. Indices into
//! the arena are stable for the lifetime of the automaton, so cloning a
//! state during construction (see [`super::construction`]) only has to
//! splice an index into the suffix-link chain, never back-patch a pointer
//! graph.

use super::transitions::Transitions;

/// Index of the root state. Always `0`; the root is the only state whose
/// `link` is `None`.
pub(crate) const ROOT: usize = 0;

/// One equivalence class of right-extensions ("endpos class") of the text.
#[derive(Debug, Clone)]
pub(crate) struct State<T: Transitions> {
    /// Length of the longest substring in this class.
    pub(crate) len: usize,
    /// Suffix link: parent in the suffix-link tree. `None` only for the root.
    pub(crate) link: Option<usize>,
    /// End position (0-based, inclusive) in the text of the first
    /// occurrence of any string in this class.
    pub(crate) first: usize,
    /// True iff this state was introduced by the clone step in
    /// [`super::construction`] rather than representing a first
    /// occurrence of its own.
    pub(crate) is_clone: bool,
    /// True iff this class contains a suffix of the text.
    pub(crate) terminal: bool,
    /// Outgoing edges labeled by alphabet symbol.
    pub(crate) transitions: T,
    /// Children of this state in the suffix-link tree, populated lazily
    /// by [`super::SuffixAutomaton::build_index`].
    pub(crate) suffix_children: Vec<usize>,
}

impl<T: Transitions> State<T> {
    fn new(len: usize, first: usize) -> Self {
        Self {
            len,
            link: None,
            first,
            is_clone: false,
            terminal: false,
            transitions: T::default(),
            suffix_children: Vec::new(),
        }
    }
}

/// An append-only, index-addressed collection of [`State`] records.
#[derive(Debug)]
pub(crate) struct Arena<T: Transitions> {
    states: Vec<State<T>>,
}

impl<T: Transitions> Arena<T> {
    /// Creates an arena containing only the root state, reserving capacity
    /// for a text of length `text_len` per the arena's size bound (at most
    /// `2n` states for `n >= 2`, at most `n + 1` otherwise).
    pub(crate) fn with_root(text_len: usize) -> Self {
        let capacity = if text_len <= 1 {
            text_len + 1
        } else {
            2 * text_len
        };
        let mut states = Vec::with_capacity(capacity.max(1));
        states.push(State::new(0, 0));
        Self { states }
    }

    /// Appends a new state and returns its index.
    pub(crate) fn new_state(&mut self, len: usize, first: usize) -> usize {
        self.states.push(State::new(len, first));
        self.states.len() - 1
    }

    pub(crate) fn get(&self, index: usize) -> &State<T> {
        &self.states[index]
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> &mut State<T> {
        &mut self.states[index]
    }

    pub(crate) fn len(&self) -> usize {
        self.states.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &State<T>> {
        self.states.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::suffix_automaton::transitions::DenseTransitions;

    #[test]
    fn root_is_preinitialized() {
        let arena: Arena<DenseTransitions> = Arena::with_root(5);
        assert_eq!(arena.len(), 1);
        let root = arena.get(ROOT);
        assert_eq!(root.len, 0);
        assert_eq!(root.link, None);
        assert!(!root.is_clone);
        assert!(!root.terminal);
    }

    #[test]
    fn new_state_returns_its_own_index() {
        let mut arena: Arena<DenseTransitions> = Arena::with_root(2);
        let a = arena.new_state(1, 0);
        let b = arena.new_state(2, 1);
        assert_eq!(a, 1);
        assert_eq!(b, 2);
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn capacity_matches_i7_bound() {
        let small: Arena<DenseTransitions> = Arena::with_root(0);
        assert!(small.states.capacity() >= 1);
        let single: Arena<DenseTransitions> = Arena::with_root(1);
        assert!(single.states.capacity() >= 2);
        let n = 10;
        let arena: Arena<DenseTransitions> = Arena::with_root(n);
        assert!(arena.states.capacity() >= 2 * n);
    }
}
