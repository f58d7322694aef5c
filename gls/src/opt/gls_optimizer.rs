use std::sync::Arc;
use std::time::Instant;

use log::{info, warn};
use mkp_rs::entities::{MKInstance, MKProblem, MKSolution};

use crate::config::GLSConfig;
use crate::opt::{greedy, local_search};

/// Greedy + Local Search (GLS) optimizer for the Multiple Knapsack Problem.
/// Constructs an initial solution with the density-ordered greedy and refines it with the 1-swap local search.
pub struct GLSOptimizer {
    pub instance: Arc<MKInstance>,
    pub problem: MKProblem,
    pub config: GLSConfig,
    /// Snapshot of the problem right after the greedy construction of the last [`GLSOptimizer::solve`]
    pub greedy_solution: Option<MKSolution>,
}

impl GLSOptimizer {
    pub fn new(instance: MKInstance, config: GLSConfig) -> Self {
        let instance = Arc::new(instance);
        let problem = MKProblem::new(instance.clone());
        Self {
            instance,
            problem,
            config,
            greedy_solution: None,
        }
    }

    pub fn solve(&mut self) -> MKSolution {
        let start = Instant::now();

        // every run starts from an empty problem
        self.problem = MKProblem::new(self.instance.clone());

        let greedy_report = greedy::construct(&mut self.problem);
        let greedy_solution = self.problem.save();

        info!(
            "[GLS] greedy placed {}/{} items, initial solution value: {}",
            greedy_report.n_placed,
            self.instance.n_items(),
            greedy_solution.total_value
        );

        if self.config.local_search {
            let report = local_search::refine_bounded(
                &mut self.problem,
                self.config.verify_swaps,
                self.config.max_passes,
            );
            if !report.local_optimum {
                warn!(
                    "[GLS] local search stopped after {} passes, before reaching a local optimum",
                    report.n_passes
                );
            }
            info!("[GLS] improved solution value: {}", report.final_value);
        }

        let solution = self.problem.save();
        self.greedy_solution = Some(greedy_solution);

        info!(
            "[GLS] optimization finished in {:.3}ms",
            start.elapsed().as_secs_f64() * 1000.0
        );

        info!(
            "[GLS] solution contains {}/{} items with a total value of {} ({:.3}% of the total item value)",
            solution.n_placed_items(),
            self.instance.n_items(),
            solution.total_value,
            value_percentage(&self.instance, solution.total_value)
        );

        solution
    }
}

/// Share of the total item value of the instance, in percent. Zero for an instance without items.
fn value_percentage(instance: &MKInstance, value: f64) -> f64 {
    let total_item_value = instance.total_item_value();
    match total_item_value > 0.0 {
        true => value / total_item_value * 100.0,
        false => 0.0,
    }
}
