//! Clarke-Wright construction for one depot sub-problem.
//!
//! - [`SavingsList`] — Pair savings in decreasing order, stable tie-break
//! - [`RouteSet`] — Merge engine over singleton routes, endpoint and capacity checks
//! - [`reduce_fleet`] — Drops the most expensive routes down to the fleet size
//! - [`clarke_wright_savings`] — Validated end-to-end solve, O(n² log n)

mod clarke_wright;
mod merge;
mod reduction;
mod savings;

pub use clarke_wright::clarke_wright_savings;
pub use merge::{MergeOutcome, MergeStats, RouteSet};
pub use reduction::reduce_fleet;
pub use savings::{Saving, SavingsList};
