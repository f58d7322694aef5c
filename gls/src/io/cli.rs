use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Greedy + local search heuristic for the Multiple Knapsack Problem
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// JSON file with the instance: items (id, value, weight) and knapsacks (id, capacity)
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder the solution is written to, as `sol_<instance file stem>.json`. Created if missing
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    /// JSON file with the optimizer config (`local_search`, `verify_swaps`, `max_passes`).
    /// Defaults are used if absent
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
