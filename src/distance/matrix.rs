//! Labelled distance matrix for one depot sub-problem.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Node, NodeId};
use crate::{Error, Result};

/// Rounds half-to-even at the given number of decimals.
///
/// ```
/// use u_savings::distance::round_to;
///
/// assert_eq!(round_to(14.142, 1), 14.1);
/// assert_eq!(round_to(0.25, 1), 0.2);
/// assert_eq!(round_to(28.284, 2), 28.28);
/// ```
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}

/// A dense, symmetric n×n distance matrix in row-major order.
///
/// Index 0 is always the depot, indices `1..n` are the customers in input
/// order. Every entry is the Euclidean distance rounded to one decimal.
/// The matrix is immutable once built.
///
/// # Examples
///
/// ```
/// use u_savings::models::{Node, NodeId};
/// use u_savings::distance::DistanceMatrix;
///
/// let nodes = vec![
///     Node::depot("01", 0.0, 0.0),
///     Node::customer(1, 3.0, 4.0),
///     Node::customer(2, 10.0, 10.0),
/// ];
/// let dm = DistanceMatrix::from_nodes(&nodes).unwrap();
/// assert_eq!(dm.get(0, 1), 5.0);
/// assert_eq!(dm.get(0, 2), 14.1);
/// assert_eq!(dm.label(0), &NodeId::Depot("01".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix", into = "RawMatrix")]
pub struct DistanceMatrix {
    labels: Vec<NodeId>,
    data: Vec<f64>,
    size: usize,
    customer_index: HashMap<usize, usize>,
}

/// Serialized form: labels and the row-major grid. Deserializing goes back
/// through [`DistanceMatrix::from_data`].
#[derive(Serialize, Deserialize)]
struct RawMatrix {
    labels: Vec<NodeId>,
    data: Vec<f64>,
}

impl TryFrom<RawMatrix> for DistanceMatrix {
    type Error = Error;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        Self::from_data(raw.labels, raw.data)
    }
}

impl From<DistanceMatrix> for RawMatrix {
    fn from(matrix: DistanceMatrix) -> Self {
        Self {
            labels: matrix.labels,
            data: matrix.data,
        }
    }
}

impl DistanceMatrix {
    /// Computes the rounded Euclidean matrix for a depot and its customers.
    ///
    /// `nodes[0]` must be the depot and every other node a customer.
    pub fn from_nodes(nodes: &[Node]) -> Result<Self> {
        if nodes.len() < 2 {
            return Err(Error::InsufficientNodes { found: nodes.len() });
        }
        let labels: Vec<NodeId> = nodes.iter().map(|n| n.id().clone()).collect();
        let n = nodes.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = round_to(nodes[i].distance_to(&nodes[j]), 1);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self::with_labels(labels, data)
    }

    /// Creates a matrix from labels and an explicit row-major grid.
    ///
    /// Values are taken as given. Useful for hand-built test instances.
    pub fn from_data(labels: Vec<NodeId>, data: Vec<f64>) -> Result<Self> {
        let expected = labels.len() * labels.len();
        if data.len() != expected {
            return Err(Error::MatrixShape {
                expected,
                found: data.len(),
            });
        }
        Self::with_labels(labels, data)
    }

    fn with_labels(labels: Vec<NodeId>, data: Vec<f64>) -> Result<Self> {
        match labels.first() {
            Some(NodeId::Depot(_)) => {}
            Some(other) => {
                return Err(Error::MissingDepot {
                    found: other.clone(),
                })
            }
            None => return Err(Error::InsufficientNodes { found: 0 }),
        }

        let mut customer_index = HashMap::with_capacity(labels.len().saturating_sub(1));
        for (idx, label) in labels.iter().enumerate().skip(1) {
            match label {
                NodeId::Customer(id) => {
                    if customer_index.insert(*id, idx).is_some() {
                        return Err(Error::DuplicateCustomer(*id));
                    }
                }
                NodeId::Depot(l) => return Err(Error::MultipleDepots { label: l.clone() }),
            }
        }

        Ok(Self {
            size: labels.len(),
            labels,
            data,
            customer_index,
        })
    }

    /// Distance between matrix indices `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Distance between two node ids, if both belong to this matrix.
    pub fn distance(&self, from: &NodeId, to: &NodeId) -> Option<f64> {
        Some(self.get(self.index_of(from)?, self.index_of(to)?))
    }

    /// Matrix index of a node id.
    pub fn index_of(&self, id: &NodeId) -> Option<usize> {
        match id {
            NodeId::Depot(label) => match &self.labels[0] {
                NodeId::Depot(own) if own == label => Some(0),
                _ => None,
            },
            NodeId::Customer(c) => self.customer_index.get(c).copied(),
        }
    }

    /// Matrix index of a customer id.
    pub fn customer_index(&self, customer_id: usize) -> Option<usize> {
        self.customer_index.get(&customer_id).copied()
    }

    /// Row/column label at a matrix index.
    pub fn label(&self, index: usize) -> &NodeId {
        &self.labels[index]
    }

    /// All labels in index order.
    pub fn labels(&self) -> &[NodeId] {
        &self.labels
    }

    /// Original depot label.
    pub fn depot_label(&self) -> &str {
        match &self.labels[0] {
            NodeId::Depot(label) => label,
            NodeId::Customer(_) => unreachable!("index 0 is validated to be the depot"),
        }
    }

    /// Customer id at a matrix index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 0 (the depot) or out of bounds.
    pub fn customer_at(&self, index: usize) -> usize {
        match &self.labels[index] {
            NodeId::Customer(id) => *id,
            NodeId::Depot(_) => panic!("index {index} is the depot"),
        }
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of customers (size minus the depot).
    pub fn num_customers(&self) -> usize {
        self.size - 1
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
