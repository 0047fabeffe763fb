//! Clarke-Wright savings algorithm with a fleet-size limit.
//!
//! # Algorithm
//!
//! The savings algorithm (Clarke & Wright, 1964) starts with each customer
//! on its own route (depot → customer → depot) and walks the customer pairs
//! in decreasing order of
//!
//! ```text
//! s(i, j) = d(0, i) + d(0, j) - d(i, j)
//! ```
//!
//! merging the two routes when both customers are route endpoints and the
//! joined load fits one vehicle. If more routes survive than there are
//! vehicles, the most expensive routes are dropped and their customers stay
//! unserved. This keeps total cost low at the expense of coverage.
//!
//! # Complexity
//!
//! O(n² log n) where n = number of customers (dominated by sorting savings).
//!
//! # Reference
//!
//! Clarke, G. & Wright, J.W. (1964). "Scheduling of Vehicles from a Central
//! Depot to a Number of Delivery Points", *Operations Research* 12(4), 568-581.

use log::{debug, info};

use super::merge::RouteSet;
use super::reduction::reduce_fleet;
use super::savings::SavingsList;
use crate::distance::DistanceMatrix;
use crate::evaluation::{validate_input, CostEvaluator};
use crate::models::{DemandTable, DepotSolution, Fleet, Node, Route};
use crate::Result;

/// Solves one depot sub-problem with the Clarke-Wright savings heuristic.
///
/// # Arguments
///
/// * `nodes` — The depot first, then its assigned customers
/// * `demands` — Demand of every customer in `nodes` (extra entries ignored)
/// * `fleet` — Vehicle capacity and number of vehicles at this depot
///
/// The function is pure: independent depots can be solved concurrently.
///
/// # Examples
///
/// ```
/// use u_savings::models::{DemandTable, Fleet, Node};
/// use u_savings::constructive::clarke_wright_savings;
///
/// let nodes = vec![
///     Node::depot("01", 0.0, 0.0),
///     Node::customer(1, 1.0, 0.0),
///     Node::customer(2, 2.0, 0.0),
///     Node::customer(3, 3.0, 0.0),
/// ];
/// let demands = DemandTable::from_pairs([(1, 10), (2, 10), (3, 10)]);
///
/// let solution = clarke_wright_savings(&nodes, &demands, &Fleet::new(30, 2)).unwrap();
/// assert_eq!(solution.num_routes(), 1);
/// assert_eq!(solution.total_cost(), 6.0);
/// ```
pub fn clarke_wright_savings(
    nodes: &[Node],
    demands: &DemandTable,
    fleet: &Fleet,
) -> Result<DepotSolution> {
    validate_input(nodes, demands, fleet)?;

    let distances = DistanceMatrix::from_nodes(nodes)?;
    let savings = SavingsList::build(&distances)?;
    let depot = distances.depot_label().to_string();

    let loads = distances
        .labels()
        .iter()
        .map(|id| {
            id.customer_id()
                .and_then(|c| demands.get(c))
                .map_or(0, i64::from)
        })
        .collect();
    let mut route_set = RouteSet::new(loads);
    let stats = route_set.merge_all(&savings, i64::from(fleet.capacity()));
    debug!(
        "depot {}: {} customers, {} savings, {} merges, {} routes",
        depot,
        distances.num_customers(),
        savings.len(),
        stats.merged,
        route_set.num_routes()
    );

    let evaluator = CostEvaluator::new(&distances);
    let drafts = route_set.into_routes();
    let mut costs: Vec<f64> = drafts
        .iter()
        .map(|r| evaluator.path_cost(r.iter().copied()))
        .collect();
    let mut routes: Vec<Route> = drafts
        .iter()
        .map(|r| {
            let customers = r.iter().map(|&idx| distances.customer_at(idx)).collect();
            Route::new(depot.clone(), customers)
        })
        .collect();

    let removed = reduce_fleet(&mut routes, &mut costs, fleet.vehicles());
    let unserved: Vec<usize> = removed
        .iter()
        .flat_map(|r| r.customer_ids().iter().copied())
        .collect();
    if !removed.is_empty() {
        info!(
            "depot {}: dropped {} routes for a fleet of {}, {} customers unserved",
            depot,
            removed.len(),
            fleet.vehicles(),
            unserved.len()
        );
    }

    let total_cost = CostEvaluator::total_cost(&costs);
    Ok(DepotSolution::new(
        depot, routes, costs, total_cost, unserved, distances,
    ))
}
