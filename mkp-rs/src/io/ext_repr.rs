use serde::{Deserialize, Serialize};

/// Sentinel used in the external representation for items which are not placed in any knapsack
pub const EXT_UNASSIGNED: i64 = -1;

/// Multiple Knapsack Problem instance
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtMKInstance {
    /// The name of the instance
    pub name: String,
    /// Set of items which can be placed
    pub items: Vec<ExtItem>,
    /// Set of knapsacks in which the items can be placed
    pub knapsacks: Vec<ExtKnapsack>,
}

/// External representation of an [`Item`](crate::entities::Item).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtItem {
    /// Unique identifier of the item
    pub id: u64,
    /// Value gained by placing the item
    pub value: f64,
    /// Weight of the item
    pub weight: f64,
}

/// External representation of a [`Knapsack`](crate::entities::Knapsack).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtKnapsack {
    /// Unique identifier of the knapsack
    pub id: u64,
    /// Capacity of the empty knapsack
    pub capacity: f64,
}

/// Multiple Knapsack Problem solution
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtMKSolution {
    /// Sum of the values of all placed items
    pub total_value: f64,
    /// Knapsack of each item (indexed by item id), [`EXT_UNASSIGNED`] if the item is not placed
    pub assignment: Vec<i64>,
    /// Remaining free capacity of each knapsack (indexed by knapsack id)
    pub residual_capacities: Vec<f64>,
    /// Number of items placed in any knapsack
    pub n_placed_items: usize,
    /// The time it took to generate the solution in milliseconds
    pub run_time_ms: u64,
}
