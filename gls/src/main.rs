use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use gls::config::GLSConfig;
use gls::io::cli::Cli;
use gls::io::output::GLSOutput;
use gls::opt::GLSOptimizer;
use gls::{EPOCH, io};
use itertools::Itertools;
use log::{info, warn};
use mkp_rs::io::ext_repr::EXT_UNASSIGNED;
use mkp_rs::io::{export, export_assignment, import};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            GLSConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };

    info!("[MAIN] Successfully parsed GLSConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    let ext_instance = io::read_instance(args.input_file.as_path())?;
    let instance = import(&ext_instance)?;

    info!(
        "[MAIN] Instance {:?}: {} items, {} knapsacks",
        ext_instance.name,
        instance.n_items(),
        instance.n_knapsacks()
    );
    for knapsack in &instance.knapsacks {
        info!(
            "[MAIN]   knapsack {}: capacity {}",
            knapsack.id, knapsack.capacity
        );
    }
    for item in &instance.items {
        info!(
            "[MAIN]   item {}: value {}, weight {}",
            item.id, item.value, item.weight
        );
    }

    let mut optimizer = GLSOptimizer::new(instance, config);
    let solution = optimizer.solve();
    let greedy_solution = optimizer
        .greedy_solution
        .as_ref()
        .context("optimizer did not record a greedy solution")?;

    info!(
        "[MAIN] greedy solution value: {}, improved solution value: {}",
        greedy_solution.total_value, solution.total_value
    );
    info!(
        "[MAIN] final assignment (item -> knapsack, {EXT_UNASSIGNED} if unassigned): [{}]",
        export_assignment(&solution.assignment).iter().join(", ")
    );
    for knapsack in &optimizer.instance.knapsacks {
        info!(
            "[MAIN]   knapsack {}: items [{}], residual capacity {}",
            knapsack.id,
            solution.items_in(knapsack.id).join(", "),
            solution.residual_capacities[knapsack.id]
        );
    }

    let output = GLSOutput {
        instance: ext_instance,
        greedy_solution: export(&optimizer.instance, greedy_solution, *EPOCH),
        solution: export(&optimizer.instance, &solution, *EPOCH),
        config,
    };

    let solution_path = args
        .solution_folder
        .join(format!("sol_{input_file_stem}.json"));

    io::write_json(&output, Path::new(&solution_path))?;

    Ok(())
}
