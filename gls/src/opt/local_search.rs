use log::{debug, info, warn};
use mkp_rs::entities::MKProblem;
use mkp_rs::util::assertions::problem_is_consistent;
use thousands::Separable;

/// A placed item replaced by a previously unassigned one in the same knapsack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swap {
    /// The item removed from the knapsack
    pub item_out: usize,
    /// The item placed in its stead
    pub item_in: usize,
    pub knapsack: usize,
    /// Increase in total value, always strictly positive
    pub gain: f64,
}

/// Summary of a local search run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefineReport {
    /// Number of passes over the neighborhood, including the final one which found no improvement
    pub n_passes: usize,
    pub n_swaps: usize,
    pub initial_value: f64,
    pub final_value: f64,
    /// Whether the search stopped because no improving swap was left
    pub local_optimum: bool,
}

/// Performs a single pass over the 1-swap neighborhood of the problem and commits the first improving swap.
///
/// Pairs `(item_out, item_in)` are visited in lexicographic order. A pair is a candidate if `item_out` is
/// placed in some knapsack `k`, `item_in` is unassigned, `item_in` is strictly more valuable than `item_out`,
/// and `item_in` fits in `k` once `item_out` has been removed from it.
///
/// If `verify_swaps` is set, the total value is recomputed after the swap and the swap is reverted
/// if the value did not strictly increase. The comparison is exact: a gain lost to rounding in the sum
/// counts as no increase.
///
/// Returns the committed swap, or `None` if the problem is a local optimum.
pub fn improve(problem: &mut MKProblem, verify_swaps: bool) -> Option<Swap> {
    let instance = problem.instance.clone();
    let n_items = instance.n_items();
    let current_value = problem.total_value();

    for item_out in 0..n_items {
        let Some(knapsack) = problem.knapsack_of(item_out) else {
            continue;
        };
        for item_in in 0..n_items {
            if item_in == item_out || problem.knapsack_of(item_in).is_some() {
                continue;
            }
            let gain = instance.item(item_in).value - instance.item(item_out).value;
            if gain <= 0.0 {
                continue;
            }

            problem.unassign(item_out);
            if !problem.can_assign(item_in, knapsack) {
                problem.assign(item_out, knapsack);
                continue;
            }
            problem.assign(item_in, knapsack);

            if verify_swaps {
                let new_value = problem.total_value();
                if new_value <= current_value {
                    warn!(
                        "[LS] swap {item_out} -> {item_in} in knapsack {knapsack} did not improve the total value ({current_value} -> {new_value}), reverting"
                    );
                    problem.unassign(item_in);
                    problem.assign(item_out, knapsack);
                    continue;
                }
            }

            debug_assert!(problem_is_consistent(problem));

            return Some(Swap {
                item_out,
                item_in,
                knapsack,
                gain,
            });
        }
    }

    None
}

/// Repeatedly applies [`improve`] until the problem is a local optimum with respect to the 1-swap neighborhood.
pub fn refine(problem: &mut MKProblem, verify_swaps: bool) -> RefineReport {
    refine_bounded(problem, verify_swaps, None)
}

/// Same as [`refine`], but stops after at most `max_passes` passes (if defined).
pub fn refine_bounded(
    problem: &mut MKProblem,
    verify_swaps: bool,
    max_passes: Option<usize>,
) -> RefineReport {
    let initial_value = problem.total_value();
    let mut n_passes = 0;
    let mut n_swaps = 0;

    let local_optimum = loop {
        if max_passes.is_some_and(|max| n_passes >= max) {
            break false;
        }
        n_passes += 1;
        match improve(problem, verify_swaps) {
            Some(swap) => {
                n_swaps += 1;
                debug!(
                    "[LS] swapped item {} for item {} in knapsack {} (gain: {}, total value: {})",
                    swap.item_out,
                    swap.item_in,
                    swap.knapsack,
                    swap.gain,
                    problem.total_value()
                );
            }
            None => break true,
        }
    };

    let final_value = problem.total_value();

    info!(
        "[LS] {} swaps in {} passes, value {} -> {}",
        n_swaps.separate_with_commas(),
        n_passes.separate_with_commas(),
        initial_value,
        final_value
    );

    RefineReport {
        n_passes,
        n_swaps,
        initial_value,
        final_value,
        local_optimum,
    }
}
