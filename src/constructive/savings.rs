//! Savings list construction.
//!
//! For customers `i` and `j` the saving of serving them on one route instead
//! of two depot round-trips is
//!
//! ```text
//! s(i, j) = d(0, i) + d(0, j) - d(i, j)
//! ```
//!
//! One entry is kept per unordered pair, keyed with the larger customer id
//! first. Pairs are enumerated by matrix position (`i < j`) and then sorted
//! by decreasing saving with a stable sort, so equal savings keep their
//! enumeration order.

use crate::distance::DistanceMatrix;
use crate::{Error, Result};

/// The saving of one unordered customer pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Saving {
    /// Larger customer id of the pair.
    pub first: usize,
    /// Smaller customer id of the pair.
    pub second: usize,
    /// Distance saved by serving both on one route.
    pub value: f64,
    pub(crate) first_index: usize,
    pub(crate) second_index: usize,
}

/// Savings of every customer pair, in decreasing order.
///
/// # Examples
///
/// ```
/// use u_savings::models::Node;
/// use u_savings::distance::DistanceMatrix;
/// use u_savings::constructive::SavingsList;
///
/// let nodes = vec![
///     Node::depot("D", 0.0, 0.0),
///     Node::customer(1, 3.0, 0.0),
///     Node::customer(2, 4.0, 0.0),
///     Node::customer(3, 0.0, 5.0),
/// ];
/// let dm = DistanceMatrix::from_nodes(&nodes).unwrap();
/// let savings = SavingsList::build(&dm).unwrap();
///
/// assert_eq!(savings.len(), 3);
/// let best = savings.as_slice()[0];
/// // s(2, 1) = 3 + 4 - 1
/// assert_eq!((best.first, best.second), (2, 1));
/// assert!((best.value - 6.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SavingsList {
    entries: Vec<Saving>,
}

impl SavingsList {
    /// Computes and orders the savings of all customer pairs.
    ///
    /// Returns [`Error::NoCustomers`] if the matrix holds only the depot.
    pub fn build(distances: &DistanceMatrix) -> Result<Self> {
        let n = distances.size();
        if distances.num_customers() == 0 {
            return Err(Error::NoCustomers);
        }

        let num_customers = n - 1;
        let mut entries = Vec::with_capacity(num_customers * (num_customers - 1) / 2);
        for i in 1..n {
            for j in (i + 1)..n {
                let value = distances.get(0, i) + distances.get(0, j) - distances.get(i, j);
                let (id_i, id_j) = (distances.customer_at(i), distances.customer_at(j));
                let (first_index, second_index) = if id_i > id_j { (i, j) } else { (j, i) };
                entries.push(Saving {
                    first: id_i.max(id_j),
                    second: id_i.min(id_j),
                    value,
                    first_index,
                    second_index,
                });
            }
        }

        // Stable: ties keep enumeration order.
        entries.sort_by(|a, b| b.value.total_cmp(&a.value));

        Ok(Self { entries })
    }

    /// Entries in decreasing order of saving.
    pub fn as_slice(&self) -> &[Saving] {
        &self.entries
    }

    /// Iterates entries in decreasing order of saving.
    pub fn iter(&self) -> std::slice::Iter<'_, Saving> {
        self.entries.iter()
    }

    /// Number of customer pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` for a single-customer sub-problem.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a SavingsList {
    type Item = &'a Saving;
    type IntoIter = std::slice::Iter<'a, Saving>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
