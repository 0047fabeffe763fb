//! Fleet parameters shared by every depot sub-problem.

use serde::{Deserialize, Serialize};

/// A homogeneous fleet available at one depot.
///
/// # Examples
///
/// ```
/// use u_savings::models::Fleet;
///
/// let fleet = Fleet::new(20, 2);
/// assert_eq!(fleet.capacity(), 20);
/// assert_eq!(fleet.vehicles(), 2);
///
/// let bigger = fleet.with_capacity(40).with_vehicles(3);
/// assert_eq!(bigger.capacity(), 40);
/// assert_eq!(bigger.vehicles(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fleet {
    capacity: i32,
    vehicles: usize,
}

impl Fleet {
    /// Creates a fleet of `vehicles` vehicles, each holding `capacity` units.
    pub fn new(capacity: i32, vehicles: usize) -> Self {
        Self { capacity, vehicles }
    }

    /// Sets the per-vehicle capacity.
    pub fn with_capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the number of vehicles.
    pub fn with_vehicles(mut self, vehicles: usize) -> Self {
        self.vehicles = vehicles;
        self
    }

    /// Maximum load per vehicle.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Maximum number of routes a depot may keep.
    pub fn vehicles(&self) -> usize {
        self.vehicles
    }
}
