use std::fmt::Display;
use thiserror::Error;

/// Errors surfaced at the edges of the suffix automaton crate.
///
/// Construction and querying the automaton itself cannot fail on
/// well-formed input (see the crate-level docs): `contains`/`first`/
/// `positions` report absence with `false`/`None`/an empty `Vec`, not an
/// `Err`. This type exists for the external collaborators — the CLI and
/// the batch test harness — that parse files and user input before an
/// automaton is ever built.
#[derive(Debug, Error)]
pub enum SamError {
    /// A batch input file did not match the `positions.in` grammar.
    #[error("malformed batch input at line {line}: {reason}")]
    BatchFormat {
        /// 1-based line number where parsing failed.
        line: usize,
        /// Human-readable description of the problem.
        reason: String,
    },

    /// Failed to allocate memory for automaton construction.
    ///
    /// Not constructible from safe code in this crate today (a real
    /// allocator failure aborts the process), but kept for API parity
    /// with the sibling string-algorithm crates and so external
    /// collaborators have a uniform variant to map resource failures onto.
    #[error("failed to allocate memory: {reason}")]
    AllocationFailed {
        /// The reason for the allocation failure.
        reason: String,
    },

    /// Invalid input parameters provided by a caller of the CLI or batch
    /// harness (e.g. an unreadable file, an unknown `--backend` value).
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Description of why the input is invalid.
        reason: String,
    },

    /// Propagated I/O failure from reading/writing CLI or batch files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for suffix automaton operations.
pub type Result<T> = std::result::Result<T, SamError>;

impl SamError {
    /// Creates a new `BatchFormat` error.
    pub fn batch_format(line: usize, reason: impl Display) -> Self {
        Self::BatchFormat {
            line,
            reason: reason.to_string(),
        }
    }

    /// Creates a new `AllocationFailed` error.
    #[allow(dead_code)]
    pub(crate) fn allocation_failed(reason: impl Display) -> Self {
        Self::AllocationFailed {
            reason: reason.to_string(),
        }
    }

    /// Creates a new `InvalidInput` error.
    pub fn invalid_input(reason: impl Display) -> Self {
        Self::InvalidInput {
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SamError::batch_format(12, "expected an integer count");
        assert_eq!(
            err.to_string(),
            "malformed batch input at line 12: expected an integer count"
        );

        let err = SamError::allocation_failed("failed to allocate buffer");
        assert_eq!(
            err.to_string(),
            "failed to allocate memory: failed to allocate buffer"
        );

        let err = SamError::invalid_input("unknown backend \"trie\"");
        assert_eq!(err.to_string(), "invalid input: unknown backend \"trie\"");
    }
}
