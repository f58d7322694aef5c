use std::cmp::Reverse;

use itertools::Itertools;
use log::debug;
use mkp_rs::entities::{MKInstance, MKProblem};
use mkp_rs::util::assertions::problem_is_consistent;
use ordered_float::NotNan;

/// Summary of a greedy construction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreedyReport {
    /// Number of items placed in a knapsack
    pub n_placed: usize,
    /// Number of items which did not fit in any knapsack
    pub n_unplaced: usize,
}

/// Order in which the items are offered to the knapsacks: descending density, ties broken by ascending id.
///
/// # Panics
/// If an item has a NaN density, which is only possible for an [`Item`](mkp_rs::entities::Item) built
/// without [`Item::new`](mkp_rs::entities::Item::new).
pub fn item_placement_order(instance: &MKInstance) -> Vec<usize> {
    instance
        .items
        .iter()
        .sorted_unstable_by_key(|item| {
            let density = NotNan::new(item.density).expect("item density is NaN");
            (Reverse(density), item.id)
        })
        .map(|item| item.id)
        .collect_vec()
}

/// Fills an empty problem by offering the items in [`item_placement_order`] to the knapsacks.
/// Each item is placed in the first knapsack (in ascending order of id) in which it fits.
/// Items which fit nowhere are left unassigned.
pub fn construct(problem: &mut MKProblem) -> GreedyReport {
    debug_assert!(
        problem.n_placed_items() == 0,
        "greedy construction requires an empty problem"
    );
    let instance = problem.instance.clone();
    let mut report = GreedyReport::default();

    for item_id in item_placement_order(&instance) {
        match (0..problem.n_knapsacks()).find(|&k| problem.can_assign(item_id, k)) {
            Some(knap_id) => {
                problem.assign(item_id, knap_id);
                report.n_placed += 1;
                debug!(
                    "[GREEDY] placed item {item_id} (density: {:.3}) in knapsack {knap_id}, residual capacity: {}",
                    instance.item(item_id).density,
                    problem.residual_capacity(knap_id)
                );
            }
            None => {
                report.n_unplaced += 1;
                debug!("[GREEDY] item {item_id} does not fit in any knapsack");
            }
        }
    }

    debug_assert!(problem_is_consistent(problem));

    report
}
