//! Roster - A cyclic shift-roster solver
//!
//! Assigns people to morning/afternoon/evening shifts over a calendar so
//! that every shift-slot is covered by exactly one person while everyone
//! follows the same fixed rotation pattern, phase-shifted per person. The
//! staggering is not computed by hand: the whole instance is handed to a
//! MIP backend as a pure feasibility problem.
//!
//! # Example
//!
//! ```no_run
//! use roster::prelude::*;
//!
//! let config = RosterConfig::default()
//!     .with_num_people(5)
//!     .with_base_days(30);
//!
//! match solve_roster(&config)? {
//!     SolveOutcome::Solved(roster) => {
//!         for entry in &roster {
//!             println!("{} {} {}", entry.person, entry.day, entry.shift);
//!         }
//!     }
//!     SolveOutcome::NoSolutionFound => println!("no solution found"),
//! }
//! # Ok::<(), roster::RosterError>(())
//! ```

// Domain types
pub use roster_core::{PatternSlot, Roster, RosterEntry, RotationPattern, ShiftKind};

// Errors
pub use roster_core::{Result, RosterError};

// Configuration
pub use roster_config::{ConfigError, RosterConfig};

// Solving
pub use roster_solver::{solve_roster, RosterModel, RosterSolver, RosterVars, SolveOutcome};

pub mod prelude {
    pub use super::{
        solve_roster, PatternSlot, Roster, RosterConfig, RosterEntry, RosterSolver,
        RotationPattern, ShiftKind, SolveOutcome,
    };
}
