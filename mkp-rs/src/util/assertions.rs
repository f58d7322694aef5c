//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

use float_cmp::approx_eq;
use log::error;

use crate::entities::{Item, Knapsack, MKProblem, MKSolution};

/// Relative tolerance used when comparing capacities, scaled by the capacity of the knapsack
const CAPACITY_TOLERANCE: f64 = 1e-9;

pub fn instance_item_knapsack_ids_correct(items: &[Item], knapsacks: &[Knapsack]) -> bool {
    items.iter().enumerate().all(|(i, item)| item.id == i)
        && knapsacks.iter().enumerate().all(|(i, k)| k.id == i)
}

/// Whether the residual capacity of a knapsack is non-negative, up to rounding errors.
pub fn residual_is_feasible(residual: f64, capacity: f64) -> bool {
    residual >= -CAPACITY_TOLERANCE * capacity.max(1.0)
}

/// Checks whether the residual capacities of the problem are consistent with its assignment:
/// every placed item refers to an existing knapsack, and for every knapsack the residual capacity
/// equals its original capacity minus the weight of the items placed in it, and is non-negative.
pub fn problem_is_consistent(prob: &MKProblem) -> bool {
    let instance = &prob.instance;
    let n_knapsacks = instance.n_knapsacks();

    if prob.n_items() != instance.n_items() || prob.n_knapsacks() != n_knapsacks {
        error!(
            "problem dimensions ({} items, {} knapsacks) do not match the instance ({} items, {} knapsacks)",
            prob.n_items(),
            prob.n_knapsacks(),
            instance.n_items(),
            n_knapsacks
        );
        return false;
    }

    let mut loads = vec![0.0; n_knapsacks];
    for (item_id, knap_id) in prob.placed_items() {
        if knap_id >= n_knapsacks {
            error!("item {item_id} is assigned to non-existing knapsack {knap_id}");
            return false;
        }
        loads[knap_id] += instance.item(item_id).weight;
    }

    for (knapsack, load) in instance.knapsacks.iter().zip(loads) {
        let residual = prob.residual_capacity(knapsack.id);
        let expected = knapsack.capacity - load;
        let margin = CAPACITY_TOLERANCE * knapsack.capacity.max(1.0);
        if !approx_eq!(f64, residual, expected, epsilon = margin) {
            error!(
                "residual capacity of knapsack {} is {residual}, expected {expected}",
                knapsack.id
            );
            return false;
        }
        if !residual_is_feasible(residual, knapsack.capacity) {
            error!(
                "knapsack {} is over-committed (residual capacity: {residual})",
                knapsack.id
            );
            return false;
        }
    }

    true
}

pub fn problem_matches_solution(prob: &MKProblem, sol: &MKSolution) -> bool {
    let MKSolution {
        assignment,
        residual_capacities,
        total_value,
        time_stamp: _,
    } = sol;

    assert_eq!(assignment.as_slice(), prob.assignment());
    assert_eq!(residual_capacities.as_slice(), prob.residual_capacities());
    assert_eq!(*total_value, prob.total_value());

    true
}
