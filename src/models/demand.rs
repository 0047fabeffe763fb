//! Customer demand table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Demand per customer id.
///
/// Depots have no entry. The table may hold customers of several depots;
/// each depot sub-problem reads only the ids it routes.
///
/// # Examples
///
/// ```
/// use u_savings::models::DemandTable;
///
/// let demands = DemandTable::from_pairs([(1, 4), (2, 7)]);
/// assert_eq!(demands.get(2), Some(7));
/// assert_eq!(demands.get(3), None);
/// assert_eq!(demands.total_for(&[1, 2]), 11);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DemandTable {
    demands: HashMap<usize, i32>,
}

impl DemandTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(customer_id, demand)` pairs. Later pairs
    /// overwrite earlier ones for the same id.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (usize, i32)>) -> Self {
        Self {
            demands: pairs.into_iter().collect(),
        }
    }

    /// Sets the demand of a customer.
    pub fn insert(&mut self, customer_id: usize, demand: i32) {
        self.demands.insert(customer_id, demand);
    }

    /// Demand of a customer, if present.
    pub fn get(&self, customer_id: usize) -> Option<i32> {
        self.demands.get(&customer_id).copied()
    }

    /// Sum of demands of the given customers; missing ids count as zero.
    pub fn total_for(&self, customer_ids: &[usize]) -> i64 {
        customer_ids
            .iter()
            .filter_map(|&id| self.get(id))
            .map(i64::from)
            .sum()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.demands.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.demands.is_empty()
    }
}
