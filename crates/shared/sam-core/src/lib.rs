//! Shared, dependency-free types used across the `sam` workspace.
//!
//! Crates in this workspace that need a small piece of shared vocabulary
//! (rather than a full algorithm implementation) live here.

use std::sync::atomic::{AtomicU64, Ordering};

/// Per-instance counters for transition-table lookup volume.
///
/// The original benchmark tooling this crate is modeled on tracked lookup
/// cost with process-wide mutable globals (`numlookups`, `lookupsizetotal`).
/// Global mutable state does not compose with multiple automata, tests
/// running in parallel, or library reuse, so it is replaced here with a
/// struct the automaton owns and threads through queries. Counters use
/// atomics rather than a `Cell` so that read-only queries (`contains`,
/// `first`, `positions`) can keep taking `&self` and remain safe to call
/// from any number of concurrent readers, matching the automaton's
/// documented concurrency model.
#[derive(Debug, Default)]
pub struct QueryStats {
    lookups: AtomicU64,
    lookup_size_total: AtomicU64,
}

impl QueryStats {
    /// A fresh, zeroed counter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one transition-table probe against a state with `degree`
    /// outgoing edges.
    pub fn record_lookup(&self, degree: usize) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.lookup_size_total
            .fetch_add(degree as u64, Ordering::Relaxed);
    }

    /// Total number of transition-table `get` calls performed.
    pub fn lookups(&self) -> u64 {
        self.lookups.load(Ordering::Relaxed)
    }

    /// Sum of the out-degree of every state probed during those lookups.
    ///
    /// For the dense backend this is always `lookups() * 256`; for the
    /// sparse backend it reflects actual out-degree, which is what makes
    /// the two backends' amortized cost comparable in benchmarks.
    pub fn lookup_size_total(&self) -> u64 {
        self.lookup_size_total.load(Ordering::Relaxed)
    }

    /// Average out-degree observed per lookup so far, or `0.0` if no
    /// lookups have been recorded.
    pub fn average_lookup_size(&self) -> f64 {
        let lookups = self.lookups();
        if lookups == 0 {
            0.0
        } else {
            self.lookup_size_total() as f64 / lookups as f64
        }
    }
}
