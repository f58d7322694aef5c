use crate::entities::{Item, Knapsack};
use crate::util::assertions::instance_item_knapsack_ids_correct;

#[derive(Debug, Clone)]
/// Instance of the Multiple Knapsack Problem: a catalog of items to be distributed over a set of knapsacks.
pub struct MKInstance {
    /// The item catalog, indexed by item id
    pub items: Vec<Item>,
    /// The knapsacks, indexed by knapsack id
    pub knapsacks: Vec<Knapsack>,
}

impl MKInstance {
    pub fn new(items: Vec<Item>, knapsacks: Vec<Knapsack>) -> Self {
        assert!(instance_item_knapsack_ids_correct(&items, &knapsacks));

        Self { items, knapsacks }
    }

    pub fn item(&self, id: usize) -> &Item {
        &self.items[id]
    }

    pub fn knapsack(&self, id: usize) -> &Knapsack {
        &self.knapsacks[id]
    }

    pub fn n_items(&self) -> usize {
        self.items.len()
    }

    pub fn n_knapsacks(&self) -> usize {
        self.knapsacks.len()
    }

    /// The original capacities of all knapsacks, in order of their id
    pub fn capacities(&self) -> impl Iterator<Item = f64> {
        self.knapsacks.iter().map(|k| k.capacity)
    }

    /// Sum of the values of all items, an upper bound for the value of any solution
    pub fn total_item_value(&self) -> f64 {
        self.items.iter().map(|item| item.value).sum()
    }

    pub fn total_capacity(&self) -> f64 {
        self.capacities().sum()
    }
}
