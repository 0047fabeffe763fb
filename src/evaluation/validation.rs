//! Entry-point input validation.

use std::collections::HashSet;

use crate::models::{DemandTable, Fleet, Node, NodeId};
use crate::{Error, Result};

/// Checks a depot sub-problem before any routing work.
///
/// Requirements: at least two nodes, the depot first and only there,
/// finite non-negative coordinates, unique customer ids, a non-negative
/// demand entry for every customer, positive capacity and vehicle count.
/// Demand entries for customers outside `nodes` are ignored.
///
/// # Examples
///
/// ```
/// use u_savings::models::{DemandTable, Fleet, Node};
/// use u_savings::evaluation::validate_input;
/// use u_savings::Error;
///
/// let nodes = vec![Node::depot("D", 0.0, 0.0), Node::customer(1, 1.0, 1.0)];
/// let fleet = Fleet::new(10, 1);
///
/// assert!(validate_input(&nodes, &DemandTable::from_pairs([(1, 3)]), &fleet).is_ok());
/// assert_eq!(
///     validate_input(&nodes, &DemandTable::new(), &fleet),
///     Err(Error::MissingDemand(1))
/// );
/// ```
pub fn validate_input(nodes: &[Node], demands: &DemandTable, fleet: &Fleet) -> Result<()> {
    if nodes.len() < 2 {
        return Err(Error::InsufficientNodes { found: nodes.len() });
    }
    if !nodes[0].is_depot() {
        return Err(Error::MissingDepot {
            found: nodes[0].id().clone(),
        });
    }

    for node in nodes {
        if !is_valid_coordinate(node.x()) || !is_valid_coordinate(node.y()) {
            return Err(Error::InvalidCoordinate {
                node: node.id().clone(),
                x: node.x(),
                y: node.y(),
            });
        }
    }

    let mut seen = HashSet::with_capacity(nodes.len() - 1);
    for node in &nodes[1..] {
        let id = match node.id() {
            NodeId::Customer(id) => *id,
            NodeId::Depot(label) => {
                return Err(Error::MultipleDepots {
                    label: label.clone(),
                })
            }
        };
        if !seen.insert(id) {
            return Err(Error::DuplicateCustomer(id));
        }
        match demands.get(id) {
            None => return Err(Error::MissingDemand(id)),
            Some(demand) if demand < 0 => {
                return Err(Error::NegativeDemand {
                    customer: id,
                    demand,
                })
            }
            Some(_) => {}
        }
    }

    if fleet.capacity() <= 0 {
        return Err(Error::InvalidCapacity(fleet.capacity()));
    }
    if fleet.vehicles() == 0 {
        return Err(Error::InvalidVehicleCount);
    }
    Ok(())
}

fn is_valid_coordinate(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes() -> Vec<Node> {
        vec![
            Node::depot("01", 5.0, 5.0),
            Node::customer(1, 1.0, 2.0),
            Node::customer(2, 3.0, 4.0),
        ]
    }

    fn demands() -> DemandTable {
        DemandTable::from_pairs([(1, 3), (2, 0)])
    }

    #[test]
    fn test_valid() {
        assert_eq!(validate_input(&nodes(), &demands(), &Fleet::new(5, 2)), Ok(()));
    }

    #[test]
    fn test_extra_demand_entries_ignored() {
        let mut d = demands();
        d.insert(99, 50);
        assert!(validate_input(&nodes(), &d, &Fleet::new(5, 2)).is_ok());
    }

    #[test]
    fn test_insufficient_nodes() {
        let only_depot = vec![Node::depot("01", 0.0, 0.0)];
        assert_eq!(
            validate_input(&only_depot, &demands(), &Fleet::new(5, 1)),
            Err(Error::InsufficientNodes { found: 1 })
        );
    }

    #[test]
    fn test_depot_not_first() {
        let mut n = nodes();
        n.swap(0, 1);
        assert_eq!(
            validate_input(&n, &demands(), &Fleet::new(5, 1)),
            Err(Error::MissingDepot {
                found: NodeId::Customer(1)
            })
        );
    }

    #[test]
    fn test_multiple_depots() {
        let mut n = nodes();
        n.push(Node::depot("02", 0.0, 0.0));
        assert_eq!(
            validate_input(&n, &demands(), &Fleet::new(5, 1)),
            Err(Error::MultipleDepots {
                label: "02".into()
            })
        );
    }

    #[test]
    fn test_duplicate_customer() {
        let mut n = nodes();
        n.push(Node::customer(2, 9.0, 9.0));
        assert_eq!(
            validate_input(&n, &demands(), &Fleet::new(5, 1)),
            Err(Error::DuplicateCustomer(2))
        );
    }

    #[test]
    fn test_negative_demand() {
        let d = DemandTable::from_pairs([(1, 3), (2, -1)]);
        assert_eq!(
            validate_input(&nodes(), &d, &Fleet::new(5, 1)),
            Err(Error::NegativeDemand {
                customer: 2,
                demand: -1
            })
        );
    }

    #[test]
    fn test_invalid_coordinates() {
        let mut n = nodes();
        n.push(Node::customer(3, -1.0, 0.0));
        assert!(matches!(
            validate_input(&n, &demands(), &Fleet::new(5, 1)),
            Err(Error::InvalidCoordinate { .. })
        ));

        let mut n = nodes();
        n[0] = Node::depot("01", f64::NAN, 0.0);
        assert!(matches!(
            validate_input(&n, &demands(), &Fleet::new(5, 1)),
            Err(Error::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_invalid_fleet() {
        assert_eq!(
            validate_input(&nodes(), &demands(), &Fleet::new(0, 1)),
            Err(Error::InvalidCapacity(0))
        );
        assert_eq!(
            validate_input(&nodes(), &demands(), &Fleet::new(5, 0)),
            Err(Error::InvalidVehicleCount)
        );
    }
}
