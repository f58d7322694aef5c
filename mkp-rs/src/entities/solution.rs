use std::time::Instant;

/// Snapshot of [`MKProblem`](crate::entities::MKProblem) at a specific moment.
/// Can be used to restore to a previous state.
#[derive(Debug, Clone)]
pub struct MKSolution {
    /// Knapsack in which each item is placed, `None` if unassigned
    pub assignment: Vec<Option<usize>>,
    /// Remaining free capacity of each knapsack
    pub residual_capacities: Vec<f64>,
    /// Sum of the values of all placed items
    pub total_value: f64,
    /// Instant the solution was created
    pub time_stamp: Instant,
}

impl MKSolution {
    pub fn knapsack_of(&self, item_id: usize) -> Option<usize> {
        self.assignment[item_id]
    }

    pub fn n_placed_items(&self) -> usize {
        self.assignment.iter().flatten().count()
    }

    /// Ids of the items placed in the knapsack, in ascending order
    pub fn items_in(&self, knap_id: usize) -> impl Iterator<Item = usize> + '_ {
        self.assignment
            .iter()
            .enumerate()
            .filter(move |(_, k)| **k == Some(knap_id))
            .map(|(item_id, _)| item_id)
    }
}
