use std::sync::Arc;
use std::time::Instant;

use itertools::Itertools;

use crate::entities::{MKInstance, MKSolution};
use crate::util::assertions::{problem_is_consistent, problem_matches_solution, residual_is_feasible};

/// Dynamic counterpart of [`MKInstance`]: a (partial) assignment of items to knapsacks.
///
/// Every item is either placed in exactly one knapsack or unassigned (`None`).
/// The residual capacity of each knapsack is updated incrementally by [`MKProblem::assign`] and [`MKProblem::unassign`],
/// so that at all times `residual[k] = capacity[k] - Σ weight(i)` over all items `i` placed in knapsack `k`.
///
/// Cloning a problem shares the underlying [`MKInstance`] and deep-copies the assignment and residual capacities.
#[derive(Clone, Debug)]
pub struct MKProblem {
    pub instance: Arc<MKInstance>,
    /// Knapsack in which each item is placed, indexed by item id
    assignment: Vec<Option<usize>>,
    /// Remaining free capacity of each knapsack, indexed by knapsack id
    residual_capacities: Vec<f64>,
}

impl MKProblem {
    /// Creates a problem in which no item is placed and every knapsack has its full capacity available.
    pub fn new(instance: Arc<MKInstance>) -> Self {
        let assignment = vec![None; instance.n_items()];
        let residual_capacities = instance.capacities().collect_vec();

        Self {
            instance,
            assignment,
            residual_capacities,
        }
    }

    /// Sum of the values of all placed items, recomputed from the assignment on every call.
    pub fn total_value(&self) -> f64 {
        self.placed_items()
            .map(|(item_id, _)| self.instance.item(item_id).value)
            .sum()
    }

    /// The knapsack the item is currently placed in, `None` if it is unassigned.
    pub fn knapsack_of(&self, item_id: usize) -> Option<usize> {
        self.assignment[item_id]
    }

    /// Whether the item fits in the remaining capacity of the knapsack.
    /// Does not take into account whether the item is currently placed elsewhere.
    pub fn can_assign(&self, item_id: usize, knap_id: usize) -> bool {
        self.instance.item(item_id).weight <= self.residual_capacities[knap_id]
    }

    /// Places the item in the knapsack. If it was placed in another knapsack, it is removed from there first.
    ///
    /// No feasibility check is performed, the caller should make sure the item fits (see [`MKProblem::can_assign`]).
    pub fn assign(&mut self, item_id: usize, knap_id: usize) {
        assert!(
            knap_id < self.n_knapsacks(),
            "knapsack {knap_id} out of range (n_knapsacks: {})",
            self.n_knapsacks()
        );
        let weight = self.instance.item(item_id).weight;
        if let Some(prev_knap_id) = self.assignment[item_id] {
            self.residual_capacities[prev_knap_id] += weight;
        }
        self.assignment[item_id] = Some(knap_id);
        self.residual_capacities[knap_id] -= weight;

        debug_assert!(
            residual_is_feasible(
                self.residual_capacities[knap_id],
                self.instance.knapsack(knap_id).capacity
            ),
            "knapsack {knap_id} over-committed by placing item {item_id} (residual capacity: {})",
            self.residual_capacities[knap_id]
        );
    }

    /// Removes the item from the knapsack it is placed in. Does nothing if the item is unassigned.
    pub fn unassign(&mut self, item_id: usize) {
        if let Some(knap_id) = self.assignment[item_id].take() {
            self.residual_capacities[knap_id] += self.instance.item(item_id).weight;
        }
    }

    /// Creates a snapshot of the current state of the problem as a [`MKSolution`].
    pub fn save(&self) -> MKSolution {
        let solution = MKSolution {
            assignment: self.assignment.clone(),
            residual_capacities: self.residual_capacities.clone(),
            total_value: self.total_value(),
            time_stamp: Instant::now(),
        };

        debug_assert!(problem_matches_solution(self, &solution));

        solution
    }

    /// Restores the state of the problem to the given [`MKSolution`].
    pub fn restore(&mut self, solution: &MKSolution) {
        assert_eq!(solution.assignment.len(), self.n_items());
        assert_eq!(solution.residual_capacities.len(), self.n_knapsacks());

        self.assignment.clone_from(&solution.assignment);
        self.residual_capacities
            .clone_from(&solution.residual_capacities);

        debug_assert!(problem_is_consistent(self));
        debug_assert!(problem_matches_solution(self, solution));
    }

    pub fn n_items(&self) -> usize {
        self.assignment.len()
    }

    pub fn n_knapsacks(&self) -> usize {
        self.residual_capacities.len()
    }

    pub fn assignment(&self) -> &[Option<usize>] {
        &self.assignment
    }

    pub fn residual_capacity(&self, knap_id: usize) -> f64 {
        self.residual_capacities[knap_id]
    }

    pub fn residual_capacities(&self) -> &[f64] {
        &self.residual_capacities
    }

    /// Weight currently placed in the knapsack
    pub fn knapsack_load(&self, knap_id: usize) -> f64 {
        self.instance.knapsack(knap_id).capacity - self.residual_capacities[knap_id]
    }

    /// All placed items as `(item_id, knap_id)` pairs, in ascending order of item id
    pub fn placed_items(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.assignment
            .iter()
            .enumerate()
            .filter_map(|(item_id, knap_id)| knap_id.map(|k| (item_id, k)))
    }

    pub fn n_placed_items(&self) -> usize {
        self.assignment.iter().flatten().count()
    }
}

impl From<MKInstance> for MKProblem {
    fn from(instance: MKInstance) -> Self {
        MKProblem::new(Arc::new(instance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Item, Knapsack};

    fn reference_instance() -> MKInstance {
        let items = [
            (35.0, 10.0),
            (50.0, 12.0),
            (45.0, 15.0),
            (60.0, 10.0),
            (55.0, 11.0),
            (30.0, 6.0),
        ]
        .into_iter()
        .enumerate()
        .map(|(id, (value, weight))| Item::new(id, value, weight).unwrap())
        .collect_vec();
        let knapsacks = vec![
            Knapsack::new(0, 20.0).unwrap(),
            Knapsack::new(1, 20.0).unwrap(),
        ];
        MKInstance::new(items, knapsacks)
    }

    #[test]
    fn new_problem_is_empty() {
        let prob = MKProblem::from(reference_instance());
        assert!(prob.assignment().iter().all(Option::is_none));
        assert_eq!(prob.residual_capacities(), &[20.0, 20.0]);
        assert_eq!(prob.total_value(), 0.0);
        assert_eq!(prob.n_placed_items(), 0);
        assert!(problem_is_consistent(&prob));
    }

    #[test]
    fn assign_updates_residual_and_value() {
        let mut prob = MKProblem::from(reference_instance());
        prob.assign(3, 0);
        prob.assign(4, 1);
        prob.assign(5, 0);

        assert_eq!(prob.knapsack_of(3), Some(0));
        assert_eq!(prob.knapsack_of(4), Some(1));
        assert_eq!(prob.knapsack_of(0), None);
        assert_eq!(prob.residual_capacities(), &[4.0, 9.0]);
        assert_eq!(prob.knapsack_load(0), 16.0);
        assert_eq!(prob.total_value(), 145.0);
        assert_eq!(prob.placed_items().collect_vec(), vec![(3, 0), (4, 1), (5, 0)]);
        assert!(problem_is_consistent(&prob));
    }

    #[test]
    fn assign_moves_between_knapsacks() {
        let mut prob = MKProblem::from(reference_instance());
        prob.assign(0, 0);
        prob.assign(0, 1);

        assert_eq!(prob.knapsack_of(0), Some(1));
        assert_eq!(prob.residual_capacities(), &[20.0, 10.0]);
        assert_eq!(prob.n_placed_items(), 1);
        assert!(problem_is_consistent(&prob));
    }

    #[test]
    fn can_assign_ignores_current_placement() {
        let mut prob = MKProblem::from(reference_instance());
        prob.assign(2, 0);
        // residual of knapsack 0 is 5, item 2 itself weighs 15
        assert!(!prob.can_assign(2, 0));
        assert!(prob.can_assign(2, 1));
        assert!(prob.can_assign(5, 1));
        assert!(!prob.can_assign(5, 0));
    }

    #[test]
    fn can_assign_accepts_exact_fit() {
        let mut prob = MKProblem::from(reference_instance());
        prob.assign(0, 0);
        assert!(prob.can_assign(3, 0));
        prob.assign(3, 0);
        assert_eq!(prob.residual_capacity(0), 0.0);
        assert!(problem_is_consistent(&prob));
    }

    #[test]
    fn unassign_is_idempotent() {
        let mut prob = MKProblem::from(reference_instance());
        prob.assign(1, 1);
        prob.unassign(1);
        prob.unassign(1);
        prob.unassign(2);

        assert_eq!(prob.knapsack_of(1), None);
        assert_eq!(prob.residual_capacities(), &[20.0, 20.0]);
        assert!(problem_is_consistent(&prob));
    }

    #[test]
    fn assign_then_unassign_restores_state() {
        let mut prob = MKProblem::from(reference_instance());
        prob.assign(3, 0);
        prob.assign(4, 1);
        let before = prob.clone();

        for item_id in [0, 1, 2, 5] {
            for knap_id in 0..prob.n_knapsacks() {
                if !prob.can_assign(item_id, knap_id) {
                    continue;
                }
                prob.assign(item_id, knap_id);
                prob.unassign(item_id);
                assert_eq!(prob.assignment(), before.assignment());
                assert_eq!(
                    prob.residual_capacities()
                        .iter()
                        .map(|r| r.to_bits())
                        .collect_vec(),
                    before
                        .residual_capacities()
                        .iter()
                        .map(|r| r.to_bits())
                        .collect_vec()
                );
            }
        }
    }

    #[test]
    fn clone_shares_instance_and_copies_state() {
        let mut prob = MKProblem::from(reference_instance());
        prob.assign(3, 0);
        let mut copy = prob.clone();
        copy.assign(5, 0);

        assert!(Arc::ptr_eq(&prob.instance, &copy.instance));
        assert_eq!(prob.knapsack_of(5), None);
        assert_eq!(prob.residual_capacity(0), 10.0);
        assert_eq!(copy.knapsack_of(5), Some(0));
        assert_eq!(copy.residual_capacity(0), 4.0);
    }

    #[test]
    #[should_panic(expected = "knapsack 2 out of range")]
    fn assign_to_unknown_knapsack_panics() {
        let mut prob = MKProblem::from(reference_instance());
        prob.assign(0, 2);
    }

    #[test]
    #[should_panic]
    fn knapsack_of_unknown_item_panics() {
        let prob = MKProblem::from(reference_instance());
        prob.knapsack_of(6);
    }

    #[test]
    #[should_panic]
    fn unassign_unknown_item_panics() {
        let mut prob = MKProblem::from(reference_instance());
        prob.unassign(6);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "over-committed")]
    fn over_commit_panics() {
        let mut prob = MKProblem::from(reference_instance());
        prob.assign(2, 0);
        // residual of knapsack 0 is 5, item 0 weighs 10
        prob.assign(0, 0);
    }
}
