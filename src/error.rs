//! Crate error type.

use crate::models::NodeId;

/// Failures reported by the public entry points.
///
/// All of them describe malformed input and are raised before any routing
/// work starts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("a depot sub-problem needs at least 2 nodes, found {found}")]
    InsufficientNodes { found: usize },

    #[error("no customers to route")]
    NoCustomers,

    #[error("the first node must be the depot, found {found}")]
    MissingDepot { found: NodeId },

    #[error("more than one depot in a sub-problem: {label}")]
    MultipleDepots { label: String },

    #[error("customer {0} appears more than once")]
    DuplicateCustomer(usize),

    #[error("customer {0} has no demand entry")]
    MissingDemand(usize),

    #[error("customer {customer} has negative demand {demand}")]
    NegativeDemand { customer: usize, demand: i32 },

    #[error("node {node} has an invalid coordinate ({x}, {y})")]
    InvalidCoordinate { node: NodeId, x: f64, y: f64 },

    #[error("vehicle capacity must be positive, got {0}")]
    InvalidCapacity(i32),

    #[error("vehicle count must be positive")]
    InvalidVehicleCount,

    #[error("depot {0} is not in the node list")]
    UnknownDepot(String),

    #[error("matrix data has {found} entries, expected {expected}")]
    MatrixShape { expected: usize, found: usize },

    #[error("invalid instance configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
