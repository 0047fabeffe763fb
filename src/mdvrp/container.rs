//! Parallel solving of independent depot sub-problems.

use log::{debug, warn};
use rayon::prelude::*;

use crate::constructive::clarke_wright_savings;
use crate::models::{DemandTable, DepotSolution, Fleet, Node};
use crate::{Error, Result};

/// Solves every depot sub-problem, one rayon task per depot.
///
/// Sub-problems share nothing, so results come back in input order and a
/// failing depot does not affect the others. A depot without customers
/// yields [`Error::NoCustomers`].
///
/// # Examples
///
/// ```
/// use u_savings::models::{DemandTable, Fleet, Node};
/// use u_savings::mdvrp::solve_depots;
///
/// let subproblems = vec![
///     vec![Node::depot("01", 0.0, 0.0), Node::customer(1, 3.0, 4.0)],
///     vec![Node::depot("02", 50.0, 50.0)],
/// ];
/// let demands = DemandTable::from_pairs([(1, 2)]);
///
/// let results = solve_depots(&subproblems, &demands, &Fleet::new(10, 1));
/// assert_eq!(results[0].as_ref().unwrap().total_cost(), 10.0);
/// assert!(results[1].is_err());
/// ```
pub fn solve_depots(
    subproblems: &[Vec<Node>],
    demands: &DemandTable,
    fleet: &Fleet,
) -> Vec<Result<DepotSolution>> {
    debug!("solving {} depot sub-problems", subproblems.len());
    subproblems
        .par_iter()
        .map(|nodes| solve_depot(nodes, demands, fleet))
        .collect()
}

fn solve_depot(nodes: &[Node], demands: &DemandTable, fleet: &Fleet) -> Result<DepotSolution> {
    let result = match nodes {
        [depot] if depot.is_depot() => Err(Error::NoCustomers),
        _ => clarke_wright_savings(nodes, demands, fleet),
    };
    if let Err(err) = &result {
        let depot = nodes.first().map(|n| n.id().to_string()).unwrap_or_default();
        warn!("depot {depot}: {err}");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdvrp::{pair_depot_nodes, Assignment, Instance, InstanceConfig};

    #[test]
    fn test_results_in_depot_order() {
        let subproblems = vec![
            vec![Node::depot("01", 0.0, 0.0), Node::customer(1, 0.0, 5.0)],
            vec![Node::depot("02", 0.0, 0.0), Node::customer(2, 0.0, 7.0)],
            vec![Node::depot("03", 0.0, 0.0), Node::customer(3, 0.0, 9.0)],
        ];
        let demands = DemandTable::from_pairs([(1, 1), (2, 1), (3, 1)]);
        let results = solve_depots(&subproblems, &demands, &Fleet::new(5, 1));
        let depots: Vec<_> = results
            .iter()
            .map(|r| r.as_ref().expect("solvable").depot().to_string())
            .collect();
        assert_eq!(depots, vec!["01", "02", "03"]);
        let costs: Vec<_> = results
            .iter()
            .map(|r| r.as_ref().expect("solvable").total_cost())
            .collect();
        assert_eq!(costs, vec![10.0, 14.0, 18.0]);
    }

    #[test]
    fn test_failures_are_isolated() {
        let subproblems = vec![
            vec![Node::depot("01", 0.0, 0.0)],
            vec![Node::depot("02", 0.0, 0.0), Node::customer(2, 1.0, 0.0)],
            vec![],
        ];
        let demands = DemandTable::from_pairs([(2, 1)]);
        let results = solve_depots(&subproblems, &demands, &Fleet::new(5, 1));
        assert_eq!(results[0], Err(Error::NoCustomers));
        assert!(results[1].is_ok());
        assert_eq!(results[2], Err(Error::InsufficientNodes { found: 0 }));
    }

    #[test]
    fn test_generated_instance_end_to_end() {
        let inst = Instance::generate(&InstanceConfig::new().with_customers(20)).expect("valid");
        // split customers by id parity
        let mut assignment = Assignment::new();
        assignment.assign("01", (1..=20).filter(|c| c % 2 == 1).collect());
        assignment.assign("02", (1..=20).filter(|c| c % 2 == 0).collect());

        let subproblems = pair_depot_nodes(&assignment, inst.nodes()).expect("known depots");
        let results = solve_depots(&subproblems, inst.demands(), inst.fleet());
        assert_eq!(results.len(), 2);
        for (result, (depot, customers)) in results.iter().zip(assignment.iter()) {
            let sol = result.as_ref().expect("solvable");
            assert_eq!(sol.depot(), depot);
            assert!(sol.num_routes() <= inst.fleet().vehicles());
            assert_eq!(sol.num_served() + sol.unserved().len(), customers.len());
        }
    }
}
