//! Rotation Demo
//!
//! Solves a small cyclic shift-roster instance and prints the resulting
//! three-column table, then shows how an over-staffed instance comes back
//! as "no solution found" instead of an error.

use roster::prelude::*;
use roster::RosterError;

fn print_roster(roster: &Roster) {
    println!("{:<8} {:<6} {:<10}", "Person", "Day", "Shift");
    println!("{}", "-".repeat(26));
    for entry in roster {
        println!("{:<8} {:<6} {:<10}", entry.person, entry.day, entry.shift);
    }
}

fn main() -> Result<(), RosterError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("roster_solver=info")),
        )
        .init();

    println!("Cyclic Shift-Roster Demo");
    println!("========================\n");

    // Five people tile the standard 6-on/4-off rotation: one month of
    // calendar, stagger of eight days between rotation starts.
    let config = RosterConfig::default()
        .with_num_people(5)
        .with_base_days(30);

    println!(
        "Problem: {} people, {} days, {}-day rotation, stagger {}.",
        config.num_people,
        config.base_days,
        config.rotation_pattern.len(),
        config.phase_offset
    );
    println!("The solver picks each person's rotation phase.\n");

    match RosterSolver::new(config).solve()? {
        SolveOutcome::Solved(roster) => {
            print_roster(&roster);
            println!("\n{} rows.", roster.len());
        }
        SolveOutcome::NoSolutionFound => println!("No solution found."),
    }

    println!("\n--- An over-staffed instance ---\n");

    // Six people on the same rotation supply more on-duty days than there
    // are slots to cover, so the constraint system has no solution.
    let config = RosterConfig::default()
        .with_num_people(6)
        .with_base_days(10);

    match solve_roster(&config)? {
        SolveOutcome::Solved(roster) => print_roster(&roster),
        SolveOutcome::NoSolutionFound => {
            println!("No solution found for {} people.", config.num_people)
        }
    }

    Ok(())
}
