//! MIP model construction for one roster instance.
//!
//! The model is deliberately declarative: one boolean per
//! (person, day, shift) triple, one boolean per (person, pattern phase),
//! and equality rows tying the two families together. No phase is computed
//! by hand; the backend discovers a stagger that satisfies coverage.

use good_lp::{constraint, variable, variables, Constraint, Expression, ProblemVariables, Variable};

use roster_config::RosterConfig;
use roster_core::{RotationPattern, ShiftKind};

/// Handles to the decision variables of one instance.
///
/// `Variable` is a cheap copyable handle, so these stay usable after the
/// containing [`ProblemVariables`] has been consumed by the backend.
pub struct RosterVars {
    /// Flattened (person, day, shift) assignment booleans.
    assignment: Vec<Variable>,
    /// Flattened (person, phase) selector booleans.
    phase: Vec<Variable>,
    num_people: usize,
    num_days: usize,
    cycle_len: usize,
}

impl RosterVars {
    /// The assignment variable: does `person` work `shift` on `day`.
    #[inline]
    pub fn assignment(&self, person: usize, day: usize, shift: ShiftKind) -> Variable {
        self.assignment[(person * self.num_days + day) * ShiftKind::COUNT + shift.index()]
    }

    /// The selector variable: does `person` follow the pattern at `phase`.
    #[inline]
    pub fn phase_selector(&self, person: usize, phase: usize) -> Variable {
        self.phase[person * self.cycle_len + phase]
    }

    /// Total number of decision variables.
    pub fn len(&self) -> usize {
        self.assignment.len() + self.phase.len()
    }

    /// Whether the instance has no variables.
    pub fn is_empty(&self) -> bool {
        self.assignment.is_empty() && self.phase.is_empty()
    }

    #[inline]
    pub fn num_people(&self) -> usize {
        self.num_people
    }

    #[inline]
    pub fn num_days(&self) -> usize {
        self.num_days
    }

    #[inline]
    pub fn cycle_len(&self) -> usize {
        self.cycle_len
    }
}

/// The fully built, not yet solved model for one instance.
///
/// Built once, solved once, discarded; re-solving needs a fresh build.
pub struct RosterModel {
    variables: ProblemVariables,
    vars: RosterVars,
}

impl RosterModel {
    /// Creates every decision variable for the given configuration.
    ///
    /// The configuration must already be validated.
    pub fn build(config: &RosterConfig) -> Self {
        let num_people = config.num_people;
        let num_days = config.num_days();
        let cycle_len = config.rotation_pattern.len();

        let mut variables = variables!();

        let mut assignment = Vec::with_capacity(num_people * num_days * ShiftKind::COUNT);
        for _person in 0..num_people {
            for _day in 0..num_days {
                for _shift in 0..ShiftKind::COUNT {
                    assignment.push(variables.add(variable().binary()));
                }
            }
        }

        let mut phase = Vec::with_capacity(num_people * cycle_len);
        for _person in 0..num_people {
            for _phase in 0..cycle_len {
                phase.push(variables.add(variable().binary()));
            }
        }

        RosterModel {
            variables,
            vars: RosterVars {
                assignment,
                phase,
                num_people,
                num_days,
                cycle_len,
            },
        }
    }

    /// Full single coverage: every (day, shift) slot is worked by exactly
    /// one person.
    pub fn coverage_constraints(&self) -> Vec<Constraint> {
        let vars = &self.vars;
        let mut constraints = Vec::with_capacity(vars.num_days * ShiftKind::COUNT);
        for day in 0..vars.num_days {
            for shift in ShiftKind::ALL {
                let covered = (0..vars.num_people).fold(Expression::from(0.0), |acc, person| {
                    acc + vars.assignment(person, day, shift)
                });
                constraints.push(constraint!(covered == 1.0));
            }
        }
        constraints
    }

    /// Every person follows the pattern at exactly one phase.
    pub fn phase_constraints(&self) -> Vec<Constraint> {
        let vars = &self.vars;
        let mut constraints = Vec::with_capacity(vars.num_people);
        for person in 0..vars.num_people {
            let chosen = (0..vars.cycle_len).fold(Expression::from(0.0), |acc, phase| {
                acc + vars.phase_selector(person, phase)
            });
            constraints.push(constraint!(chosen == 1.0));
        }
        constraints
    }

    /// Pattern conformance, emitted windowed: for every person, every window
    /// start `j` in `[0, num_days - L]` and every offset `t` in `[0, L)`,
    /// the assignment on day `j + t` must equal what the person's selected
    /// phase of the pattern dictates there. On-duty slots force the slot's
    /// shift; off slots force all three assignments to zero (implied by the
    /// per-shift equalities plus the exactly-one phase row).
    ///
    /// Overlapping windows restate the same day many times over; the
    /// redundancy is kept rather than collapsed to per-day rows.
    pub fn pattern_constraints(&self, pattern: &RotationPattern) -> Vec<Constraint> {
        let vars = &self.vars;
        let cycle_len = vars.cycle_len;
        let mut constraints = Vec::new();
        if vars.num_days < cycle_len {
            // Horizon shorter than one cycle: no complete window exists.
            return constraints;
        }
        for person in 0..vars.num_people {
            for window_start in 0..=(vars.num_days - cycle_len) {
                for offset in 0..cycle_len {
                    let day = window_start + offset;
                    for shift in ShiftKind::ALL {
                        // Phases whose pattern slot puts this shift on this day.
                        let dictated = (0..cycle_len)
                            .filter(|phase| {
                                pattern.slot_at(day + phase).shift() == Some(shift)
                            })
                            .fold(Expression::from(0.0), |acc, phase| {
                                acc + vars.phase_selector(person, phase)
                            });
                        let assigned = vars.assignment(person, day, shift);
                        constraints.push(constraint!(assigned == dictated));
                    }
                }
            }
        }
        constraints
    }

    /// Splits the model into the backend-side variable container and the
    /// handles needed to read the solution back.
    pub fn into_parts(self) -> (ProblemVariables, RosterVars) {
        (self.variables, self.vars)
    }

    /// The variable handles.
    pub fn vars(&self) -> &RosterVars {
        &self.vars
    }
}
