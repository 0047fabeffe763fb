//! Closed depot routes.

use serde::{Deserialize, Serialize};

use super::NodeId;

/// A closed route `depot → c1 → … → ck → depot` served by one vehicle.
///
/// The depot is stored once and implied at both ends, so a route always
/// starts and ends with it and never contains it in the interior.
///
/// # Examples
///
/// ```
/// use u_savings::models::{NodeId, Route};
///
/// let route = Route::new("01", vec![3, 1]);
/// assert_eq!(route.len(), 2);
/// assert_eq!(
///     route.nodes(),
///     vec![
///         NodeId::Depot("01".into()),
///         NodeId::Customer(3),
///         NodeId::Customer(1),
///         NodeId::Depot("01".into()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    depot: String,
    customers: Vec<usize>,
}

impl Route {
    /// Creates a route from a depot label and customer visit order.
    pub fn new(depot: impl Into<String>, customers: Vec<usize>) -> Self {
        Self {
            depot: depot.into(),
            customers,
        }
    }

    /// Label of the depot this route starts and ends at.
    pub fn depot(&self) -> &str {
        &self.depot
    }

    /// Customer ids in visit order (depot excluded).
    pub fn customer_ids(&self) -> &[usize] {
        &self.customers
    }

    /// Number of customers on the route.
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Returns `true` if the route visits no customer.
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Full node sequence, depot at both ends.
    pub fn nodes(&self) -> Vec<NodeId> {
        let depot = NodeId::Depot(self.depot.clone());
        let mut nodes = Vec::with_capacity(self.customers.len() + 2);
        nodes.push(depot.clone());
        nodes.extend(self.customers.iter().map(|&c| NodeId::Customer(c)));
        nodes.push(depot);
        nodes
    }

    /// Returns `true` if the customer is the first or last stop.
    pub fn is_endpoint(&self, customer_id: usize) -> bool {
        self.customers.first() == Some(&customer_id) || self.customers.last() == Some(&customer_id)
    }
}
