//! Aggregate metrics over all depot solutions.

use serde::{Deserialize, Serialize};

use super::Assignment;
use crate::distance::round_to;
use crate::models::{DemandTable, DepotSolution};

/// Cost and coverage statistics of a multi-depot solution.
///
/// Costs and percentages are rounded to 2 decimals. Averages and medians
/// over an empty set are 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionMetrics {
    pub total_cost: f64,
    pub avg_route_cost: f64,
    pub median_route_cost: f64,
    pub avg_depot_cost: f64,
    pub median_depot_cost: f64,
    pub demand_satisfied: i64,
    pub total_demand: i64,
    pub pct_demand_satisfied: f64,
    pub pct_customers_visited: f64,
}

impl SolutionMetrics {
    /// Computes metrics from solved depots against what was assigned.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_savings::models::{DemandTable, Fleet, Node};
    /// use u_savings::constructive::clarke_wright_savings;
    /// use u_savings::mdvrp::{Assignment, SolutionMetrics};
    ///
    /// let nodes = vec![
    ///     Node::depot("01", 0.0, 0.0),
    ///     Node::customer(1, 5.0, 0.0),
    ///     Node::customer(2, 0.0, 5.0),
    /// ];
    /// let demands = DemandTable::from_pairs([(1, 3), (2, 3)]);
    /// let mut assignment = Assignment::new();
    /// assignment.assign("01", vec![1, 2]);
    ///
    /// // capacity 4: no merge, one vehicle keeps one customer
    /// let sol = clarke_wright_savings(&nodes, &demands, &Fleet::new(4, 1)).unwrap();
    /// let metrics = SolutionMetrics::compute(&[sol], &demands, &assignment);
    /// assert_eq!(metrics.pct_customers_visited, 50.0);
    /// assert_eq!(metrics.total_cost, 10.0);
    /// ```
    pub fn compute(
        solutions: &[DepotSolution],
        demands: &DemandTable,
        assignment: &Assignment,
    ) -> Self {
        let route_costs: Vec<f64> = solutions
            .iter()
            .flat_map(|s| s.route_costs().iter().copied())
            .collect();
        let depot_costs: Vec<f64> = solutions.iter().map(DepotSolution::total_cost).collect();

        let served: Vec<usize> = solutions
            .iter()
            .flat_map(DepotSolution::served_customers)
            .collect();
        let demand_satisfied = demands.total_for(&served);

        let assigned: Vec<usize> = assignment
            .iter()
            .flat_map(|(_, customers)| customers.iter().copied())
            .collect();
        let total_demand = demands.total_for(&assigned);

        Self {
            total_cost: round_to(depot_costs.iter().sum(), 2),
            avg_route_cost: round_to(mean(&route_costs), 2),
            median_route_cost: round_to(median(&route_costs), 2),
            avg_depot_cost: round_to(mean(&depot_costs), 2),
            median_depot_cost: round_to(median(&depot_costs), 2),
            demand_satisfied,
            total_demand,
            pct_demand_satisfied: percentage(demand_satisfied as f64, total_demand as f64),
            pct_customers_visited: percentage(served.len() as f64, assigned.len() as f64),
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

fn percentage(part: f64, whole: f64) -> f64 {
    if whole <= 0.0 {
        return 0.0;
    }
    round_to(part / whole * 100.0, 2)
}
