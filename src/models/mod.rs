//! Domain model types for depot routing sub-problems.
//!
//! Provides node identities that keep depot labels apart from customer ids,
//! a demand table, fleet parameters, closed routes, and the per-depot
//! result record.

mod demand;
mod fleet;
mod node;
mod route;
mod solution;

pub use demand::DemandTable;
pub use fleet::Fleet;
pub use node::{Node, NodeId};
pub use route::Route;
pub use solution::DepotSolution;
