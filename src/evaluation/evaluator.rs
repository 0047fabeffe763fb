//! Route cost evaluation.

use crate::distance::{round_to, DistanceMatrix};
use crate::models::Route;

/// Computes route costs by summing consecutive leg distances along
/// `depot → c1 → … → ck → depot`.
///
/// Route costs and totals are rounded to 2 decimals. Evaluation never
/// changes the routes it reads.
///
/// # Examples
///
/// ```
/// use u_savings::models::{Node, Route};
/// use u_savings::distance::DistanceMatrix;
/// use u_savings::evaluation::CostEvaluator;
///
/// let nodes = vec![
///     Node::depot("D", 0.0, 0.0),
///     Node::customer(1, 3.0, 4.0),
///     Node::customer(2, 6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_nodes(&nodes).unwrap();
/// let evaluator = CostEvaluator::new(&dm);
///
/// let route = Route::new("D", vec![1, 2]);
/// assert_eq!(evaluator.route_cost(&route), Some(20.0));
/// ```
pub struct CostEvaluator<'a> {
    distances: &'a DistanceMatrix,
}

impl<'a> CostEvaluator<'a> {
    /// Creates an evaluator reading from the given matrix.
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self { distances }
    }

    /// Cost of a closed tour through the given customer matrix indices,
    /// rounded to 2 decimals.
    pub fn path_cost<I>(&self, customer_indices: I) -> f64
    where
        I: IntoIterator<Item = usize>,
    {
        let mut cost = 0.0;
        let mut prev = 0;
        for idx in customer_indices {
            cost += self.distances.get(prev, idx);
            prev = idx;
        }
        cost += self.distances.get(prev, 0);
        round_to(cost, 2)
    }

    /// Cost of a route, or `None` if it visits a customer unknown to the
    /// matrix.
    pub fn route_cost(&self, route: &Route) -> Option<f64> {
        let indices = route
            .customer_ids()
            .iter()
            .map(|&c| self.distances.customer_index(c))
            .collect::<Option<Vec<_>>>()?;
        Some(self.path_cost(indices))
    }

    /// Costs of all routes, index-aligned.
    pub fn route_costs(&self, routes: &[Route]) -> Option<Vec<f64>> {
        routes.iter().map(|r| self.route_cost(r)).collect()
    }

    /// Sum of route costs, rounded to 2 decimals.
    pub fn total_cost(route_costs: &[f64]) -> f64 {
        round_to(route_costs.iter().sum(), 2)
    }
}
