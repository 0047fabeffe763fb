//! Route merge engine.
//!
//! Routes live in an arena with one slot per customer. A merge splices the
//! second route into the first and empties the second slot, so surviving
//! routes keep their original relative order. `route_of` maps every
//! customer to the slot holding it and is updated on each merge.

use std::collections::VecDeque;

use log::trace;

use super::savings::{Saving, SavingsList};

/// Result of attempting the merge proposed by one saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The two routes were joined.
    Merged,
    /// Both customers already share a route.
    SameRoute,
    /// At least one customer is interior to its route.
    NotEndpoint,
    /// The joined route would exceed vehicle capacity.
    OverCapacity,
}

/// Counts of merge outcomes over a full savings pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Pairs whose routes were joined.
    pub merged: usize,
    /// Pairs already sharing a route.
    pub same_route: usize,
    /// Pairs with an interior customer.
    pub not_endpoint: usize,
    /// Pairs whose joined load would exceed capacity.
    pub over_capacity: usize,
}

impl MergeStats {
    fn record(&mut self, outcome: MergeOutcome) {
        match outcome {
            MergeOutcome::Merged => self.merged += 1,
            MergeOutcome::SameRoute => self.same_route += 1,
            MergeOutcome::NotEndpoint => self.not_endpoint += 1,
            MergeOutcome::OverCapacity => self.over_capacity += 1,
        }
    }
}

/// The working set of routes for one depot, addressed by matrix index
/// (depot = 0, customers = `1..n`).
///
/// # Examples
///
/// ```
/// use u_savings::models::Node;
/// use u_savings::distance::DistanceMatrix;
/// use u_savings::constructive::{RouteSet, SavingsList};
///
/// let nodes = vec![
///     Node::depot("D", 0.0, 0.0),
///     Node::customer(1, 1.0, 0.0),
///     Node::customer(2, 2.0, 0.0),
///     Node::customer(3, 3.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_nodes(&nodes).unwrap();
/// let savings = SavingsList::build(&dm).unwrap();
///
/// let mut routes = RouteSet::new(vec![0, 10, 10, 10]);
/// let stats = routes.merge_all(&savings, 30);
/// assert_eq!(stats.merged, 2);
/// assert_eq!(routes.num_routes(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct RouteSet {
    routes: Vec<VecDeque<usize>>,
    loads: Vec<i64>,
    route_of: Vec<usize>,
    num_routes: usize,
}

impl RouteSet {
    /// Creates one singleton route per customer.
    ///
    /// `demands[k]` is the demand of matrix index `k`; entry 0 (the depot)
    /// is ignored.
    pub fn new(demands: Vec<i64>) -> Self {
        let num_customers = demands.len().saturating_sub(1);
        let mut routes = Vec::with_capacity(num_customers);
        let mut loads = Vec::with_capacity(num_customers);
        let mut route_of = vec![usize::MAX; demands.len()];

        for (idx, &demand) in demands.iter().enumerate().skip(1) {
            route_of[idx] = routes.len();
            routes.push(VecDeque::from([idx]));
            loads.push(demand);
        }

        Self {
            routes,
            loads,
            route_of,
            num_routes: num_customers,
        }
    }

    /// Number of non-empty routes.
    pub fn num_routes(&self) -> usize {
        self.num_routes
    }

    /// Route currently holding the given customer index, or `None` for the
    /// depot or an index outside the set.
    pub fn route_containing(&self, customer_index: usize) -> Option<&VecDeque<usize>> {
        self.slot_of(customer_index).map(|slot| &self.routes[slot])
    }

    /// Total demand of the route holding the given customer index, or `None`
    /// for the depot or an index outside the set.
    pub fn load_of(&self, customer_index: usize) -> Option<i64> {
        self.slot_of(customer_index).map(|slot| self.loads[slot])
    }

    fn slot_of(&self, customer_index: usize) -> Option<usize> {
        self.route_of
            .get(customer_index)
            .copied()
            .filter(|&slot| slot < self.routes.len())
    }

    /// Non-empty routes in arena order.
    pub fn routes(&self) -> impl Iterator<Item = &VecDeque<usize>> {
        self.routes.iter().filter(|r| !r.is_empty())
    }

    /// Attempts the merge proposed by `saving`.
    ///
    /// Both customers must sit in different routes, each at the first or
    /// last customer position, and the combined load must fit `capacity`.
    /// The route of `saving.first` absorbs the route of `saving.second`.
    ///
    /// # Panics
    ///
    /// Panics if the saving refers to a matrix index this set was not built
    /// for, i.e. the saving comes from a larger matrix than `demands`.
    pub fn try_merge(&mut self, saving: &Saving, capacity: i64) -> MergeOutcome {
        let (i, j) = (saving.first_index, saving.second_index);
        let (a, b) = (self.route_of[i], self.route_of[j]);
        if a == b {
            return MergeOutcome::SameRoute;
        }

        let i_first = self.routes[a].front() == Some(&i);
        let i_last = self.routes[a].back() == Some(&i);
        let j_first = self.routes[b].front() == Some(&j);
        let j_last = self.routes[b].back() == Some(&j);
        if !(i_first || i_last) || !(j_first || j_last) {
            return MergeOutcome::NotEndpoint;
        }

        let combined = self.loads[a] + self.loads[b];
        if combined > capacity {
            return MergeOutcome::OverCapacity;
        }

        let from = std::mem::take(&mut self.routes[b]);
        let into = &mut self.routes[a];
        if i_first && j_last {
            // b ... j | i ... a
            for &c in from.iter().rev() {
                into.push_front(c);
            }
        } else if i_first {
            // reversed b, j adjacent to i
            for &c in from.iter() {
                into.push_front(c);
            }
        } else if j_first {
            // a ... i | j ... b
            into.extend(from.iter().copied());
        } else {
            // a ... i | reversed b
            into.extend(from.iter().rev().copied());
        }

        for &c in &from {
            self.route_of[c] = a;
        }
        self.loads[a] = combined;
        self.loads[b] = 0;
        self.num_routes -= 1;

        MergeOutcome::Merged
    }

    /// Walks the savings list once in order, attempting every merge.
    ///
    /// A rejected pair is never revisited.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`RouteSet::try_merge`]: the
    /// savings list and the demands vector must come from the same matrix.
    pub fn merge_all(&mut self, savings: &SavingsList, capacity: i64) -> MergeStats {
        let mut stats = MergeStats::default();
        for saving in savings {
            let outcome = self.try_merge(saving, capacity);
            trace!(
                "saving ({}, {}) = {:.1}: {:?}",
                saving.first,
                saving.second,
                saving.value,
                outcome
            );
            stats.record(outcome);
        }
        stats
    }

    /// Consumes the set, returning non-empty routes in arena order.
    pub fn into_routes(self) -> Vec<Vec<usize>> {
        self.routes
            .into_iter()
            .filter(|r| !r.is_empty())
            .map(Vec::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::models::{Node, NodeId};

    fn saving(first_index: usize, second_index: usize) -> Saving {
        Saving {
            first: first_index,
            second: second_index,
            value: 0.0,
            first_index,
            second_index,
        }
    }

    /// Routes [1,2] and [3,4] built from singletons.
    fn two_pairs() -> RouteSet {
        let mut rs = RouteSet::new(vec![0, 1, 1, 1, 1]);
        assert_eq!(rs.try_merge(&saving(2, 1), 100), MergeOutcome::Merged);
        assert_eq!(rs.try_merge(&saving(4, 3), 100), MergeOutcome::Merged);
        rs
    }

    fn routes(rs: &RouteSet) -> Vec<Vec<usize>> {
        rs.routes().map(|r| r.iter().copied().collect()).collect()
    }

    #[test]
    fn test_initial_singletons() {
        let rs = RouteSet::new(vec![0, 3, 4, 5]);
        assert_eq!(rs.num_routes(), 3);
        assert_eq!(routes(&rs), vec![vec![1], vec![2], vec![3]]);
        assert_eq!(rs.load_of(2), Some(4));
    }

    #[test]
    fn test_singletons_splice_second_in_front() {
        let mut rs = RouteSet::new(vec![0, 1, 1]);
        assert_eq!(rs.try_merge(&saving(2, 1), 10), MergeOutcome::Merged);
        // route of 2 absorbs route of 1 in front
        assert_eq!(routes(&rs), vec![vec![1, 2]]);
        assert_eq!(rs.load_of(1), Some(2));
    }

    #[test]
    fn test_first_with_last() {
        // [1,2], [3,4] after setup; 3 is first of its route, 2 last of its
        let mut rs = two_pairs();
        assert_eq!(rs.route_containing(3), Some(&VecDeque::from([3, 4])));
        assert_eq!(rs.try_merge(&saving(3, 2), 100), MergeOutcome::Merged);
        assert_eq!(routes(&rs), vec![vec![1, 2, 3, 4]]);
    }

    #[test]
    fn test_first_with_first() {
        let mut rs = two_pairs();
        assert_eq!(rs.try_merge(&saving(3, 1), 100), MergeOutcome::Merged);
        assert_eq!(routes(&rs), vec![vec![2, 1, 3, 4]]);
    }

    #[test]
    fn test_last_with_first() {
        let mut rs = two_pairs();
        assert_eq!(rs.try_merge(&saving(4, 1), 100), MergeOutcome::Merged);
        assert_eq!(routes(&rs), vec![vec![3, 4, 1, 2]]);
    }

    #[test]
    fn test_last_with_last() {
        let mut rs = two_pairs();
        assert_eq!(rs.try_merge(&saving(4, 2), 100), MergeOutcome::Merged);
        assert_eq!(routes(&rs), vec![vec![3, 4, 2, 1]]);
    }

    #[test]
    fn test_same_route_skipped() {
        let mut rs = two_pairs();
        assert_eq!(rs.try_merge(&saving(2, 1), 100), MergeOutcome::SameRoute);
        assert_eq!(rs.num_routes(), 2);
    }

    #[test]
    fn test_interior_customer_rejected() {
        let mut rs = RouteSet::new(vec![0, 1, 1, 1, 1]);
        rs.try_merge(&saving(2, 1), 100);
        rs.try_merge(&saving(3, 2), 100);
        // [1,2,3]: 2 is interior
        assert_eq!(routes(&rs)[0], vec![1, 2, 3]);
        assert_eq!(rs.try_merge(&saving(4, 2), 100), MergeOutcome::NotEndpoint);
        assert_eq!(rs.num_routes(), 2);
    }

    #[test]
    fn test_capacity_rejected() {
        let mut rs = RouteSet::new(vec![0, 3, 3]);
        assert_eq!(rs.try_merge(&saving(2, 1), 4), MergeOutcome::OverCapacity);
        assert_eq!(rs.num_routes(), 2);
        // exactly at capacity is allowed
        assert_eq!(rs.try_merge(&saving(2, 1), 6), MergeOutcome::Merged);
    }

    #[test]
    fn test_route_of_follows_merges() {
        let mut rs = two_pairs();
        rs.try_merge(&saving(3, 2), 100);
        for c in 1..=4 {
            assert_eq!(rs.route_containing(c).map(VecDeque::len), Some(4));
            assert_eq!(rs.load_of(c), Some(4));
        }
    }

    #[test]
    fn test_lookup_outside_customers() {
        let rs = two_pairs();
        assert_eq!(rs.route_containing(0), None);
        assert_eq!(rs.load_of(0), None);
        assert_eq!(rs.route_containing(5), None);
        assert_eq!(rs.load_of(99), None);
    }

    #[test]
    #[should_panic]
    fn test_savings_from_larger_matrix_panic() {
        let dm = DistanceMatrix::from_nodes(&[
            Node::depot("D", 0.0, 0.0),
            Node::customer(1, 1.0, 0.0),
            Node::customer(2, 2.0, 0.0),
            Node::customer(3, 3.0, 0.0),
        ])
        .expect("valid");
        let savings = SavingsList::build(&dm).expect("has customers");
        let mut rs = RouteSet::new(vec![0, 1, 1]);
        rs.merge_all(&savings, 10);
    }

    #[test]
    fn test_merge_all_line() {
        let dm = DistanceMatrix::from_nodes(&[
            Node::depot("D", 0.0, 0.0),
            Node::customer(1, 1.0, 0.0),
            Node::customer(2, 2.0, 0.0),
            Node::customer(3, 3.0, 0.0),
        ])
        .expect("valid");
        let savings = SavingsList::build(&dm).expect("has customers");
        let mut rs = RouteSet::new(vec![0, 10, 10, 10]);
        let stats = rs.merge_all(&savings, 30);
        assert_eq!(stats.merged, 2);
        assert_eq!(stats.same_route, 1);
        let out = rs.into_routes();
        assert_eq!(out.len(), 1);
        let mut sorted = out[0].clone();
        sorted.sort();
        assert_eq!(sorted, vec![1, 2, 3]);
    }

    #[test]
    fn test_merge_all_rejected_pairs_not_retried() {
        let labels = vec![
            NodeId::Depot("D".into()),
            NodeId::Customer(1),
            NodeId::Customer(2),
            NodeId::Customer(3),
        ];
        #[rustfmt::skip]
        let data = vec![
            0.0, 5.0, 5.0, 5.0,
            5.0, 0.0, 1.0, 2.0,
            5.0, 1.0, 0.0, 3.0,
            5.0, 2.0, 3.0, 0.0,
        ];
        let dm = DistanceMatrix::from_data(labels, data).expect("valid");
        let savings = SavingsList::build(&dm).expect("has customers");
        // savings: (2,1)=9, (3,1)=8, (3,2)=7; 1 and 2 together overflow
        let mut rs = RouteSet::new(vec![0, 6, 6, 1]);
        let stats = rs.merge_all(&savings, 10);
        assert_eq!(stats.over_capacity, 2);
        assert_eq!(stats.merged, 1);
        assert_eq!(rs.into_routes(), vec![vec![2], vec![1, 3]]);
    }
}
