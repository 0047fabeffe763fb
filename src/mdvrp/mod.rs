//! Multi-depot orchestration around the per-depot solver.
//!
//! - [`Instance`] — Seeded instance generation from an [`InstanceConfig`]
//! - [`pair_depot_nodes`] — Node list per depot from an [`Assignment`]
//! - [`solve_depots`] — Parallel per-depot solving with rayon
//! - [`SolutionMetrics`] — Cost and coverage statistics across depots
//!
//! Assigning customers to depots (clustering) happens upstream and is not
//! part of this crate.

mod container;
mod instance;
mod metrics;
mod pairing;

pub use container::solve_depots;
pub use instance::{Instance, InstanceConfig};
pub use metrics::SolutionMetrics;
pub use pairing::{pair_depot_nodes, Assignment};
