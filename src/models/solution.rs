//! Result record of one depot sub-problem.

use serde::{Deserialize, Serialize};

use super::Route;
use crate::distance::DistanceMatrix;

/// Routes, costs, and distance matrix produced for one depot.
///
/// `route_costs()` is index-aligned with `routes()`. Customers whose routes
/// were dropped by fleet-size reduction are listed in `unserved()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepotSolution {
    depot: String,
    routes: Vec<Route>,
    route_costs: Vec<f64>,
    total_cost: f64,
    unserved: Vec<usize>,
    distances: DistanceMatrix,
}

impl DepotSolution {
    pub(crate) fn new(
        depot: String,
        routes: Vec<Route>,
        route_costs: Vec<f64>,
        total_cost: f64,
        unserved: Vec<usize>,
        distances: DistanceMatrix,
    ) -> Self {
        Self {
            depot,
            routes,
            route_costs,
            total_cost,
            unserved,
            distances,
        }
    }

    /// Original depot label.
    pub fn depot(&self) -> &str {
        &self.depot
    }

    /// Final routes, in construction order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Cost of each route, rounded to 2 decimals.
    pub fn route_costs(&self) -> &[f64] {
        &self.route_costs
    }

    /// Sum of route costs, rounded to 2 decimals.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Customers left without a route after fleet-size reduction.
    pub fn unserved(&self) -> &[usize] {
        &self.unserved
    }

    /// Distance matrix of this sub-problem, labelled with the depot's
    /// original label.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Number of routes (vehicles used).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Number of customers visited across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    /// Customer ids visited, route by route.
    pub fn served_customers(&self) -> impl Iterator<Item = usize> + '_ {
        self.routes
            .iter()
            .flat_map(|r| r.customer_ids().iter().copied())
    }
}
