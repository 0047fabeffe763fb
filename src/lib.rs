//! # u-savings
//!
//! Per-depot capacitated vehicle routing using the Clarke-Wright savings
//! heuristic with a fleet-size limit, plus the multi-depot plumbing that
//! feeds depot sub-problems into it and aggregates their results.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (NodeId, Node, DemandTable, Fleet, Route, DepotSolution)
//! - [`distance`] — Labelled Euclidean distance matrix
//! - [`evaluation`] — Route cost evaluation and input validation
//! - [`constructive`] — Savings list, route merging, fleet-size reduction
//! - [`mdvrp`] — Instance generation, depot/node pairing, parallel solving, metrics
//!
//! ## Example
//!
//! ```
//! use u_savings::constructive::clarke_wright_savings;
//! use u_savings::models::{DemandTable, Fleet, Node};
//!
//! let nodes = vec![
//!     Node::depot("D", 0.0, 0.0),
//!     Node::customer(1, 0.0, 10.0),
//!     Node::customer(2, 10.0, 0.0),
//!     Node::customer(3, 10.0, 10.0),
//! ];
//! let demands = DemandTable::from_pairs([(1, 5), (2, 5), (3, 5)]);
//! let fleet = Fleet::new(20, 1);
//!
//! let solution = clarke_wright_savings(&nodes, &demands, &fleet).unwrap();
//! assert_eq!(solution.num_routes(), 1);
//! assert_eq!(solution.num_served(), 3);
//! ```

pub mod constructive;
pub mod distance;
mod error;
pub mod evaluation;
pub mod mdvrp;
pub mod models;

pub use error::{Error, Result};
