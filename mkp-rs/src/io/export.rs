use std::time::Instant;

use itertools::Itertools;

use crate::entities::{MKInstance, MKSolution};
use crate::io::ext_repr::{EXT_UNASSIGNED, ExtMKSolution};

/// Exports a solution out of the library
pub fn export(instance: &MKInstance, solution: &MKSolution, epoch: Instant) -> ExtMKSolution {
    debug_assert_eq!(solution.assignment.len(), instance.n_items());
    debug_assert_eq!(solution.residual_capacities.len(), instance.n_knapsacks());

    ExtMKSolution {
        total_value: solution.total_value,
        assignment: export_assignment(&solution.assignment),
        residual_capacities: solution.residual_capacities.clone(),
        n_placed_items: solution.n_placed_items(),
        run_time_ms: solution
            .time_stamp
            .saturating_duration_since(epoch)
            .as_millis() as u64,
    }
}

/// Converts an assignment to its external form, unassigned items are represented by [`EXT_UNASSIGNED`]
pub fn export_assignment(assignment: &[Option<usize>]) -> Vec<i64> {
    assignment
        .iter()
        .map(|k| k.map_or(EXT_UNASSIGNED, |k| k as i64))
        .collect_vec()
}
