//! Seeded multi-depot instance generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::{DemandTable, Fleet, Node};
use crate::{Error, Result};

/// Parameters of a generated multi-depot instance.
///
/// # Examples
///
/// ```
/// use u_savings::mdvrp::InstanceConfig;
///
/// let config = InstanceConfig::new()
///     .with_customers(30)
///     .with_depots(3)
///     .with_seed(7);
/// assert_eq!(config.customers, 30);
/// assert_eq!(config.grid, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceConfig {
    /// Number of customers.
    pub customers: usize,
    /// Random seed.
    pub seed: u64,
    /// Vehicles available at each depot.
    pub vehicles: usize,
    /// Number of depots.
    pub depots: usize,
    /// Coordinates are drawn from `1..=grid` on both axes.
    pub grid: u32,
    /// Capacity of every vehicle.
    pub capacity: i32,
    /// Demands are drawn from `1..=max_demand`.
    pub max_demand: i32,
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self {
            customers: 50,
            seed: 9,
            vehicles: 2,
            depots: 2,
            grid: 100,
            capacity: 20,
            max_demand: 5,
        }
    }
}

impl InstanceConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of customers.
    pub fn with_customers(mut self, customers: usize) -> Self {
        self.customers = customers;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the vehicles available at each depot.
    pub fn with_vehicles(mut self, vehicles: usize) -> Self {
        self.vehicles = vehicles;
        self
    }

    /// Sets the number of depots.
    pub fn with_depots(mut self, depots: usize) -> Self {
        self.depots = depots;
        self
    }

    /// Sets the coordinate range upper bound.
    pub fn with_grid(mut self, grid: u32) -> Self {
        self.grid = grid;
        self
    }

    /// Sets the vehicle capacity.
    pub fn with_capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the largest customer demand.
    pub fn with_max_demand(mut self, max_demand: i32) -> Self {
        self.max_demand = max_demand;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.grid == 0 {
            return Err(Error::InvalidConfig("grid must be at least 1".into()));
        }
        if self.max_demand < 1 {
            return Err(Error::InvalidConfig("max_demand must be at least 1".into()));
        }
        if self.depots == 0 {
            return Err(Error::InvalidConfig("at least one depot is required".into()));
        }
        if self.capacity <= 0 {
            return Err(Error::InvalidCapacity(self.capacity));
        }
        if self.vehicles == 0 {
            return Err(Error::InvalidVehicleCount);
        }
        Ok(())
    }
}

/// A reproducible multi-depot instance.
///
/// Depots are labelled `"01"`, `"02"`, … and customers numbered from 1.
/// The node list holds all depots first, then all customers.
///
/// # Examples
///
/// ```
/// use u_savings::mdvrp::{Instance, InstanceConfig};
///
/// let config = InstanceConfig::new().with_customers(10).with_depots(2);
/// let a = Instance::generate(&config).unwrap();
/// let b = Instance::generate(&config).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.nodes().len(), 12);
/// assert_eq!(a.depots().count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    nodes: Vec<Node>,
    demands: DemandTable,
    fleet: Fleet,
}

impl Instance {
    /// Draws depots, customers, and demands from a seeded generator.
    pub fn generate(config: &InstanceConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let coord = |rng: &mut StdRng| f64::from(rng.random_range(1..=config.grid));

        let mut nodes = Vec::with_capacity(config.depots + config.customers);
        for d in 1..=config.depots {
            let (x, y) = (coord(&mut rng), coord(&mut rng));
            nodes.push(Node::depot(format!("0{d}"), x, y));
        }
        for c in 1..=config.customers {
            let (x, y) = (coord(&mut rng), coord(&mut rng));
            nodes.push(Node::customer(c, x, y));
        }

        let demands = DemandTable::from_pairs(
            (1..=config.customers).map(|c| (c, rng.random_range(1..=config.max_demand))),
        );

        Ok(Self {
            nodes,
            demands,
            fleet: Fleet::new(config.capacity, config.vehicles),
        })
    }

    /// All nodes, depots first.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Depot nodes.
    pub fn depots(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_depot())
    }

    /// Customer nodes.
    pub fn customers(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| !n.is_depot())
    }

    /// Demand of every customer.
    pub fn demands(&self) -> &DemandTable {
        &self.demands
    }

    /// Fleet available at each depot.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NodeId;

    #[test]
    fn test_default_config() {
        let c = InstanceConfig::default();
        assert_eq!(c.customers, 50);
        assert_eq!(c.seed, 9);
        assert_eq!(c.vehicles, 2);
        assert_eq!(c.depots, 2);
        assert_eq!(c.grid, 100);
        assert_eq!(c.capacity, 20);
        assert_eq!(c.max_demand, 5);
    }

    #[test]
    fn test_generate_layout() {
        let inst = Instance::generate(&InstanceConfig::default()).expect("valid");
        assert_eq!(inst.nodes().len(), 52);
        let labels: Vec<_> = inst.depots().map(|n| n.id().clone()).collect();
        assert_eq!(
            labels,
            vec![NodeId::Depot("01".into()), NodeId::Depot("02".into())]
        );
        assert!(inst.nodes()[..2].iter().all(Node::is_depot));
        let ids: Vec<_> = inst.customers().filter_map(|n| n.id().customer_id()).collect();
        assert_eq!(ids, (1..=50).collect::<Vec<_>>());
        assert_eq!(inst.fleet(), &Fleet::new(20, 2));
    }

    #[test]
    fn test_generate_ranges() {
        let config = InstanceConfig::new().with_grid(10).with_max_demand(3);
        let inst = Instance::generate(&config).expect("valid");
        for n in inst.nodes() {
            assert!((1.0..=10.0).contains(&n.x()));
            assert!((1.0..=10.0).contains(&n.y()));
            assert_eq!(n.x().fract(), 0.0);
        }
        for c in 1..=50 {
            let d = inst.demands().get(c).expect("every customer has demand");
            assert!((1..=3).contains(&d));
        }
    }

    #[test]
    fn test_seed_changes_instance() {
        let a = Instance::generate(&InstanceConfig::new().with_seed(1)).expect("valid");
        let b = Instance::generate(&InstanceConfig::new().with_seed(2)).expect("valid");
        assert_ne!(a.nodes(), b.nodes());
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            Instance::generate(&InstanceConfig::new().with_grid(0)),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            Instance::generate(&InstanceConfig::new().with_max_demand(0)),
            Err(Error::InvalidConfig(_))
        ));
        assert_eq!(
            Instance::generate(&InstanceConfig::new().with_capacity(0)),
            Err(Error::InvalidCapacity(0))
        );
    }
}
