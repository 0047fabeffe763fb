//! Node identity and location types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a node in a depot sub-problem.
///
/// Depots carry free-form labels (e.g. `"01"`), customers carry integer ids.
/// Keeping the two apart means a depot label never has to be squeezed into
/// the customer id space.
///
/// # Examples
///
/// ```
/// use u_savings::models::NodeId;
///
/// let d = NodeId::Depot("01".into());
/// let c = NodeId::Customer(7);
/// assert!(d.is_depot());
/// assert_eq!(c.customer_id(), Some(7));
/// assert_eq!(d.to_string(), "01");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeId {
    /// A depot, identified by its original label.
    Depot(String),
    /// A customer, identified by its integer id.
    Customer(usize),
}

impl NodeId {
    /// Returns `true` for depot ids.
    pub fn is_depot(&self) -> bool {
        matches!(self, NodeId::Depot(_))
    }

    /// Customer id, or `None` for a depot.
    pub fn customer_id(&self) -> Option<usize> {
        match self {
            NodeId::Customer(id) => Some(*id),
            NodeId::Depot(_) => None,
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Depot(label) => f.write_str(label),
            NodeId::Customer(id) => write!(f, "{id}"),
        }
    }
}

/// A located node: depot or customer with planar coordinates.
///
/// # Examples
///
/// ```
/// use u_savings::models::Node;
///
/// let depot = Node::depot("01", 0.0, 0.0);
/// let c = Node::customer(1, 3.0, 4.0);
/// assert!((depot.distance_to(&c) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    x: f64,
    y: f64,
}

impl Node {
    /// Creates a node with an explicit id.
    pub fn new(id: NodeId, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Creates a depot node.
    pub fn depot(label: impl Into<String>, x: f64, y: f64) -> Self {
        Self::new(NodeId::Depot(label.into()), x, y)
    }

    /// Creates a customer node.
    pub fn customer(id: usize, x: f64, y: f64) -> Self {
        Self::new(NodeId::Customer(id), x, y)
    }

    /// Node identity.
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns `true` if this node is a depot.
    pub fn is_depot(&self) -> bool {
        self.id.is_depot()
    }

    /// Unrounded Euclidean distance to another node.
    pub fn distance_to(&self, other: &Node) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
