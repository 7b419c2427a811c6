//! Online construction: the Blumer/Crochemore-style extend step and
//! terminal marking.
//!
//! This is the subtle half of the automaton (see the module-level design
//! notes on [`super::SuffixAutomaton`]): each new symbol either attaches
//! cleanly below the previous `last` state, reuses an existing state as
//! the new suffix-link parent, or forces a clone that splits an endpos
//! class so the new character's class can attach at the correct length.

use super::arena::{Arena, ROOT};
use super::transitions::Transitions;

/// Extends `arena` with symbol `c`, given the current `last` state, and
/// returns the new `last`.
///
/// Implements steps 1-6 of the online extension: create `cur`, walk
/// ancestors lacking a `c`-transition, resolve or clone the first ancestor
/// that already has one, and redirect any ancestors pointing at a cloned
/// state.
pub(crate) fn extend<T: Transitions>(arena: &mut Arena<T>, last: usize, c: u8) -> usize {
    let last_len = arena.get(last).len;
    let cur = arena.new_state(last_len + 1, last_len);

    let mut p = Some(last);
    while let Some(pi) = p {
        if arena.get(pi).transitions.get(c).is_some() {
            break;
        }
        arena.get_mut(pi).transitions.add(c, cur);
        p = arena.get(pi).link;
    }

    match p {
        None => {
            // Climbed all the way to the root without finding a
            // c-transition: cur starts a fresh chain off the root.
            arena.get_mut(cur).link = Some(ROOT);
        }
        Some(pi) => {
            let q = arena
                .get(pi)
                .transitions
                .get(c)
                .expect("loop above stopped because this transition exists");

            if arena.get(q).len == arena.get(pi).len + 1 {
                // q is solid for p: cur simply attaches below q.
                arena.get_mut(cur).link = Some(q);
            } else {
                let clone = split(arena, pi, q, c);
                arena.get_mut(cur).link = Some(clone);
            }
        }
    }

    cur
}

/// Splits state `q`'s endpos class by inserting `clone` between `p` and
/// `q` in the suffix-link tree, then redirects every ancestor of `p` whose
/// `c`-transition still points at `q` to point at `clone` instead.
///
/// Returns the index of the new clone state.
fn split<T: Transitions>(arena: &mut Arena<T>, p: usize, q: usize, c: u8) -> usize {
    let clone_len = arena.get(p).len + 1;
    let q_first = arena.get(q).first;
    let clone = arena.new_state(clone_len, q_first);

    let q_transitions = arena.get(q).transitions.clone();
    let q_link = arena.get(q).link;
    {
        let clone_state = arena.get_mut(clone);
        clone_state.transitions = q_transitions;
        clone_state.link = q_link;
        clone_state.is_clone = true;
    }

    arena.get_mut(q).link = Some(clone);

    let mut redirect = Some(p);
    while let Some(ri) = redirect {
        if arena.get(ri).transitions.get(c) != Some(q) {
            break;
        }
        arena.get_mut(ri).transitions.update(c, clone);
        redirect = arena.get(ri).link;
    }

    clone
}

/// Marks every state on the suffix-link chain from `last` to the root as
/// terminal. Run once after the whole text has been consumed: `last`
/// changes on every extension, so marking incrementally would repeat work
/// for no benefit.
pub(crate) fn mark_terminals<T: Transitions>(arena: &mut Arena<T>, last: usize) {
    let mut state = last;
    loop {
        arena.get_mut(state).terminal = true;
        match arena.get(state).link {
            Some(link) => state = link,
            None => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::suffix_automaton::transitions::DenseTransitions;
    use proptest::prelude::*;
    use sam_tests::small_alphabet_text;

    fn build(text: &[u8]) -> Arena<DenseTransitions> {
        let mut arena = Arena::with_root(text.len());
        let mut last = ROOT;
        for &c in text {
            last = extend(&mut arena, last, c);
        }
        mark_terminals(&mut arena, last);
        arena
    }

    #[test]
    fn empty_text_has_only_root() {
        let arena = build(b"");
        assert_eq!(arena.len(), 1);
        assert!(arena.get(ROOT).terminal);
    }

    #[test]
    fn abab_state_count_within_bound() {
        // "abab" exercises the clone path; state count must stay <= 2n.
        let arena = build(b"abab");
        assert!(arena.len() <= 8);
    }

    #[test]
    fn link_lengths_strictly_decrease() {
        let arena = build(b"mississippi");
        for state in arena.iter().skip(1) {
            let link = state.link.expect("non-root state has a link");
            assert!(arena.get(link).len < state.len);
        }
    }

    #[test]
    fn clone_inherits_first_from_q_not_cur() {
        // "aaaa": extending with the third 'a' must clone state 1 (len 1,
        // first 0) rather than inventing a new first position.
        let arena = build(b"aaaa");
        let clones: Vec<_> = arena.iter().filter(|s| s.is_clone).collect();
        assert!(!clones.is_empty());
        for clone in clones {
            // A clone's `first` always matches some earlier, non-clone
            // state's `first` rather than the position the clone was
            // created at.
            assert!(arena.iter().any(|s| !s.is_clone && s.first == clone.first));
        }
    }

    #[test]
    fn state_bound_holds_for_random_like_text() {
        let text = b"abcabcabcbcaabbcc";
        let arena = build(text);
        assert!(arena.len() <= 2 * text.len());
    }

    #[test]
    fn link_chain_reaches_root_without_cycling() {
        let arena = build(b"abcabcabcbcaabbcc");
        for start in 1..arena.len() {
            let mut state = start;
            let mut steps = 0;
            while let Some(link) = arena.get(state).link {
                state = link;
                steps += 1;
                assert!(
                    steps <= arena.len(),
                    "suffix link chain from state {start} did not reach the root"
                );
            }
            assert_eq!(state, ROOT);
        }
    }

    #[test]
    fn terminal_states_are_exactly_the_suffix_chain_from_last() {
        let mut arena = Arena::with_root(4);
        let mut last = ROOT;
        for &c in b"abab" {
            last = extend(&mut arena, last, c);
        }
        mark_terminals(&mut arena, last);

        let mut expected_terminal = vec![false; arena.len()];
        let mut state = last;
        loop {
            expected_terminal[state] = true;
            match arena.get(state).link {
                Some(link) => state = link,
                None => break,
            }
        }

        for (i, state) in arena.iter().enumerate() {
            assert_eq!(state.terminal, expected_terminal[i], "state {i}");
        }
    }

    proptest! {
        // Every non-root state's suffix link points at a state with a
        // strictly smaller `len`, for randomly generated texts.
        #[test]
        fn link_length_strictly_decreases_over_random_text(text in small_alphabet_text(150)) {
            let arena = build(&text);
            for state in arena.iter().skip(1) {
                let link = state.link.expect("non-root state has a link");
                prop_assert!(arena.get(link).len < state.len);
            }
        }

        // Following suffix links from any state always reaches the root
        // in a bounded number of steps, never cycling.
        #[test]
        fn link_chain_reaches_root_without_cycling_over_random_text(text in small_alphabet_text(150)) {
            let arena = build(&text);
            for start in 1..arena.len() {
                let mut state = start;
                let mut steps = 0;
                while let Some(link) = arena.get(state).link {
                    state = link;
                    steps += 1;
                    prop_assert!(
                        steps <= arena.len(),
                        "suffix link chain from state {start} did not reach the root"
                    );
                }
                prop_assert_eq!(state, ROOT);
            }
        }

        // A state is terminal exactly when it lies on the suffix-link
        // chain walked from `last` back to the root after the final
        // symbol, for randomly generated texts.
        #[test]
        fn terminal_states_match_suffix_chain_from_last_over_random_text(text in small_alphabet_text(150)) {
            let mut arena = Arena::with_root(text.len());
            let mut last = ROOT;
            for &c in &text {
                last = extend(&mut arena, last, c);
            }
            mark_terminals(&mut arena, last);

            let mut expected_terminal = vec![false; arena.len()];
            let mut state = last;
            loop {
                expected_terminal[state] = true;
                match arena.get(state).link {
                    Some(link) => state = link,
                    None => break,
                }
            }

            for (i, state) in arena.iter().enumerate() {
                prop_assert_eq!(state.terminal, expected_terminal[i]);
            }
        }
    }
}
