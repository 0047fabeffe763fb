//! Depot-to-customer assignment and per-depot node lists.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{Node, NodeId};
use crate::{Error, Result};

/// Customers assigned to each depot, in depot order.
///
/// Produced upstream by whatever selection method is in use.
///
/// # Examples
///
/// ```
/// use u_savings::mdvrp::Assignment;
///
/// let mut assignment = Assignment::new();
/// assignment.assign("01", vec![1, 3]);
/// assignment.assign("02", vec![2]);
/// assert_eq!(assignment.customers_of("01"), Some(&[1, 3][..]));
/// assert_eq!(assignment.num_customers(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    entries: Vec<(String, Vec<usize>)>,
}

impl Assignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns customers to a depot, replacing any earlier assignment for
    /// that depot while keeping its position.
    pub fn assign(&mut self, depot: impl Into<String>, customers: Vec<usize>) {
        let depot = depot.into();
        match self.entries.iter_mut().find(|(d, _)| *d == depot) {
            Some(entry) => entry.1 = customers,
            None => self.entries.push((depot, customers)),
        }
    }

    /// Customers assigned to a depot.
    pub fn customers_of(&self, depot: &str) -> Option<&[usize]> {
        self.entries
            .iter()
            .find(|(d, _)| d == depot)
            .map(|(_, c)| c.as_slice())
    }

    /// `(depot, customers)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.entries.iter().map(|(d, c)| (d.as_str(), c.as_slice()))
    }

    /// Number of depots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no depot is assigned.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of assigned customers across all depots.
    pub fn num_customers(&self) -> usize {
        self.entries.iter().map(|(_, c)| c.len()).sum()
    }
}

/// Builds the node list of every depot sub-problem.
///
/// For each depot, in assignment order, the result holds the depot node
/// followed by its assigned customers in the order they appear in
/// `all_nodes`. Assigned ids missing from `all_nodes` are skipped.
///
/// # Examples
///
/// ```
/// use u_savings::models::Node;
/// use u_savings::mdvrp::{pair_depot_nodes, Assignment};
///
/// let all = vec![
///     Node::depot("01", 0.0, 0.0),
///     Node::depot("02", 9.0, 9.0),
///     Node::customer(1, 1.0, 1.0),
///     Node::customer(2, 8.0, 8.0),
/// ];
/// let mut assignment = Assignment::new();
/// assignment.assign("01", vec![1]);
/// assignment.assign("02", vec![2]);
///
/// let pairs = pair_depot_nodes(&assignment, &all).unwrap();
/// assert_eq!(pairs.len(), 2);
/// assert_eq!(pairs[1], vec![all[1].clone(), all[3].clone()]);
/// ```
pub fn pair_depot_nodes(assignment: &Assignment, all_nodes: &[Node]) -> Result<Vec<Vec<Node>>> {
    assignment
        .iter()
        .map(|(depot, customers)| {
            let depot_id = NodeId::Depot(depot.to_string());
            let depot_node = all_nodes
                .iter()
                .find(|n| *n.id() == depot_id)
                .ok_or_else(|| Error::UnknownDepot(depot.to_string()))?;

            let wanted: HashSet<usize> = customers.iter().copied().collect();
            let mut nodes = Vec::with_capacity(customers.len() + 1);
            nodes.push(depot_node.clone());
            nodes.extend(
                all_nodes
                    .iter()
                    .filter(|n| n.id().customer_id().is_some_and(|c| wanted.contains(&c)))
                    .cloned(),
            );
            Ok(nodes)
        })
        .collect()
}
