//! `mkp-rs` models the Multiple Knapsack Problem (MKP): a set of items, each with a value and a weight,
//! has to be distributed over a set of knapsacks with limited capacity, maximizing the total value of the placed items.
//!
//! The central type is [`MKProblem`](entities::MKProblem), a mutable assignment of items to knapsacks
//! which keeps the residual capacity of every knapsack up to date on each modification.

/// Entities to model the Multiple Knapsack Problem
pub mod entities;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
