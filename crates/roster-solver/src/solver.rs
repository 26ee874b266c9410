//! Solve pass: run the MIP backend and extract the ordered roster.

use good_lp::{default_solver, Expression, ResolutionError, Solution, SolverModel};

use roster_config::RosterConfig;
use roster_core::{Result, Roster, RosterEntry, RosterError, ShiftKind};

use crate::model::{RosterModel, RosterVars};

/// Outcome of a solve attempt.
///
/// Infeasibility is a named outcome rather than an error so callers can
/// branch on it (for example, retry with a different staffing).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveOutcome {
    /// A satisfying assignment was found.
    Solved(Roster),
    /// The constraint system is infeasible, or the backend gave up within
    /// its own limits.
    NoSolutionFound,
}

impl SolveOutcome {
    /// The roster, if one was found.
    pub fn roster(&self) -> Option<&Roster> {
        match self {
            SolveOutcome::Solved(roster) => Some(roster),
            SolveOutcome::NoSolutionFound => None,
        }
    }
}

/// Builds the constraint model for one roster instance, solves it, and
/// converts a satisfying assignment into a calendar-ordered [`Roster`].
///
/// Each call builds a fresh, disposable model; nothing is cached or reused
/// between solves.
///
/// # Examples
///
/// ```no_run
/// use roster_config::RosterConfig;
/// use roster_solver::{RosterSolver, SolveOutcome};
///
/// let config = RosterConfig::default().with_num_people(5).with_base_days(10);
/// match RosterSolver::new(config).solve()? {
///     SolveOutcome::Solved(roster) => println!("{} rows", roster.len()),
///     SolveOutcome::NoSolutionFound => println!("no solution found"),
/// }
/// # Ok::<(), roster_core::RosterError>(())
/// ```
pub struct RosterSolver {
    config: RosterConfig,
}

impl RosterSolver {
    /// Creates a solver for the given configuration.
    pub fn new(config: RosterConfig) -> Self {
        RosterSolver { config }
    }

    /// The configuration this solver was built with.
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Builds the model, makes a single solve attempt, and extracts the
    /// roster.
    ///
    /// # Errors
    ///
    /// [`RosterError::Config`] if the configuration is invalid (the backend
    /// is never invoked on invalid input), [`RosterError::Solver`] if the
    /// backend itself fails. Infeasibility is not an error; it is reported
    /// as [`SolveOutcome::NoSolutionFound`].
    pub fn solve(&self) -> Result<SolveOutcome> {
        self.config
            .validate()
            .map_err(|e| RosterError::Config(e.to_string()))?;

        let model = RosterModel::build(&self.config);
        tracing::info!(
            people = self.config.num_people,
            days = self.config.num_days(),
            variables = model.vars().len(),
            "built roster model"
        );

        let coverage = model.coverage_constraints();
        let phases = model.phase_constraints();
        let pattern = model.pattern_constraints(&self.config.rotation_pattern);
        tracing::debug!(
            coverage = coverage.len(),
            phase = phases.len(),
            pattern = pattern.len(),
            "emitted constraints"
        );

        let (variables, vars) = model.into_parts();

        // Pure feasibility problem: constant objective, any satisfying
        // assignment is acceptable.
        let mut problem = variables.minimise(Expression::from(0.0)).using(default_solver);
        for c in coverage.into_iter().chain(phases).chain(pattern) {
            problem = problem.with(c);
        }

        let solution = match problem.solve() {
            Ok(solution) => solution,
            Err(ResolutionError::Infeasible) => {
                tracing::info!("no solution found");
                return Ok(SolveOutcome::NoSolutionFound);
            }
            Err(e) => return Err(RosterError::Solver(e.to_string())),
        };

        let roster = extract_roster(&solution, &vars, self.config.discard_boundary());
        tracing::info!(rows = roster.len(), "solved roster");
        Ok(SolveOutcome::Solved(roster))
    }
}

/// Materializes the true assignment variables at or after the discard
/// boundary into 1-based roster rows, sorted once at the end.
fn extract_roster(
    solution: &impl Solution,
    vars: &RosterVars,
    discard_boundary: usize,
) -> Roster {
    let mut entries = Vec::new();
    for person in 0..vars.num_people() {
        for day in discard_boundary..vars.num_days() {
            for shift in ShiftKind::ALL {
                let value = solution.value(vars.assignment(person, day, shift));
                if value > 0.5 {
                    entries.push(RosterEntry {
                        person: (person + 1) as u32,
                        day: (day - discard_boundary + 1) as u32,
                        shift,
                    });
                }
            }
        }
    }
    Roster::from_entries(entries)
}

/// Convenience wrapper: solve one configuration.
pub fn solve_roster(config: &RosterConfig) -> Result<SolveOutcome> {
    RosterSolver::new(config.clone()).solve()
}
