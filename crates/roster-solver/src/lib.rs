//! Roster Solver Engine
//!
//! This crate builds the declarative MIP model for a cyclic shift-roster
//! instance and runs it through the backend:
//! - Model construction (assignment and phase-selector variables,
//!   coverage rows, windowed pattern rows)
//! - The single-attempt solve pass and roster extraction

pub mod model;
pub mod solver;

#[cfg(test)]
mod model_tests;

pub use model::{RosterModel, RosterVars};
pub use solver::{solve_roster, RosterSolver, SolveOutcome};
