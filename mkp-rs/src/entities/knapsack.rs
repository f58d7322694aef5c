use anyhow::{Result, ensure};

/// Knapsack in which items can be placed, as long as their combined weight does not exceed its capacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Knapsack {
    /// Unique identifier, equal to the position of the knapsack in the [`MKInstance`](crate::entities::MKInstance)
    pub id: usize,
    /// Capacity of the empty knapsack
    pub capacity: f64,
}

impl Knapsack {
    /// Creates a new knapsack. The `capacity` has to be strictly positive and finite.
    pub fn new(id: usize, capacity: f64) -> Result<Knapsack> {
        ensure!(
            capacity.is_finite() && capacity > 0.0,
            "knapsack {id} has an invalid capacity: {capacity}, should be strictly positive"
        );
        Ok(Knapsack { id, capacity })
    }
}
