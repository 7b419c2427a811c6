/*!
This crate provides an online suffix automaton (SAM) implementation, built
with a focus on:
- Performance optimizations
- Memory efficiency
- Comprehensive testing
- Clear documentation
- Modern Rust idioms

# Suffix Automaton

A suffix automaton is the minimal deterministic finite automaton that
recognizes exactly the substrings of a given text. It is built online in
O(n) time and space (for a fixed alphabet), and answers substring queries
in time proportional to the pattern length:

- [`contains`](algorithms::suffix_automaton::SuffixAutomaton::contains) — does the pattern occur at all?
- [`first`](algorithms::suffix_automaton::SuffixAutomaton::first) — the start index of its first occurrence
- [`positions`](algorithms::suffix_automaton::SuffixAutomaton::positions) — every start index, sorted ascending

The transition-table backend is a generic parameter
([`DenseTransitions`](algorithms::suffix_automaton::DenseTransitions) or
[`SparseTransitions`](algorithms::suffix_automaton::SparseTransitions)), so
callers pick the memory/speed tradeoff that fits their alphabet without the
core algorithm changing.

# Usage Example

```rust
use sam::algorithms::suffix_automaton::SuffixAutomaton;

let sam = SuffixAutomaton::new("mississippi");
assert!(sam.contains("issi"));
assert_eq!(sam.first("issi"), Some(1));
assert_eq!(sam.positions("s"), vec![2, 3, 5, 6]);
```

# Empty pattern behavior

`contains("")` is `true`, `first("")` is `Some(0)` for a non-empty text and
`None` for an empty text, and `positions("")` is always empty. These are
fixed choices documented once here rather than left to each call site.

# Features
- Generic over the transition-table backend (dense array vs. sparse map)
- Comprehensive test suites including property-based invariants
- Detailed documentation with complexity analysis and examples
*/

pub mod algorithms;
pub mod error;

pub use error::{Result, SamError};
