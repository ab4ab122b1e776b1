//! Exact completion-probability engine (`C4`): for every bet, every target
//! hand size, and every hand, the count of ways to complete that hand into a
//! satisfying superset, derived via a subset-sum-over-subsets (zeta)
//! transform over the 24-bit card universe.

pub mod persistence;
pub mod table;

pub use table::ProbabilityTable;

use std::sync::OnceLock;

static TABLE: OnceLock<ProbabilityTable> = OnceLock::new();

/// Process-wide singleton. Builds the table on first access if no artifact
/// is loaded via [`ProbabilityTable::load`] beforehand.
pub fn table() -> &'static ProbabilityTable {
    TABLE.get_or_init(ProbabilityTable::build)
}

/// Installs an already-built or loaded table as the process singleton.
/// Intended for the CLI entry point, which loads/builds explicitly and then
/// wants subsequent `table()` calls (e.g. from the cluster builder) to reuse
/// it rather than rebuilding. Panics if the singleton was already set.
pub fn set_table(built: ProbabilityTable) {
    TABLE
        .set(built)
        .unwrap_or_else(|_| panic!("probability table singleton already initialized"));
}
