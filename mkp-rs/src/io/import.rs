use anyhow::{Result, ensure};
use itertools::Itertools;

use crate::entities::{Item, Knapsack, MKInstance};
use crate::io::ext_repr::ExtMKInstance;

/// Imports an instance into the library
pub fn import(ext_instance: &ExtMKInstance) -> Result<MKInstance> {
    let items = {
        let mut items = ext_instance
            .items
            .iter()
            .map(|ext_item| Item::new(ext_item.id as usize, ext_item.value, ext_item.weight))
            .collect::<Result<Vec<Item>>>()?;

        items.sort_by_key(|item| item.id);
        ensure!(
            items.iter().enumerate().all(|(i, item)| item.id == i),
            "All items should have consecutive IDs starting from 0. IDs: {:?}",
            items.iter().map(|item| item.id).collect_vec()
        );
        items
    };

    let knapsacks = {
        let mut knapsacks = ext_instance
            .knapsacks
            .iter()
            .map(|ext_knapsack| Knapsack::new(ext_knapsack.id as usize, ext_knapsack.capacity))
            .collect::<Result<Vec<Knapsack>>>()?;

        knapsacks.sort_by_key(|knapsack| knapsack.id);
        ensure!(
            knapsacks.iter().enumerate().all(|(i, k)| k.id == i),
            "All knapsacks should have consecutive IDs starting from 0. IDs: {:?}",
            knapsacks.iter().map(|k| k.id).collect_vec()
        );
        knapsacks
    };

    Ok(MKInstance::new(items, knapsacks))
}
