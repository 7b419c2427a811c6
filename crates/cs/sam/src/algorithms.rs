/*!
This module provides the suffix automaton data structure and its
associated queries.

## Suffix Automaton
A minimal deterministic finite automaton recognizing every substring of a
text, constructed online.
- Time: O(n) construction for a fixed alphabet; O(m) per query of pattern length m
- Space: O(n) states, each holding a transition table sized by the chosen backend
- Suitable for: repeated substring-occurrence queries (existence, first position, all positions) against one fixed text
- Features: suffix links for O(n) terminal marking and a lazily-built suffix-link tree for `positions`

# Examples
```rust
use sam::algorithms::suffix_automaton::SuffixAutomaton;

let text = "mississippi";
let sam = SuffixAutomaton::new(text);
let positions = sam.positions("issi");
assert_eq!(positions, vec![1, 4]);
```
*/

pub mod suffix_automaton;

/// Re-export of [`suffix_automaton::SuffixAutomaton`].
///
/// Provides online suffix automaton construction and substring queries
/// over a text, using the dense (256-wide array) transition backend by
/// default.
pub use self::suffix_automaton::SuffixAutomaton;
