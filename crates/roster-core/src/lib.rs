//! Roster Core - Domain types for the cyclic shift-roster solver
//!
//! This crate provides the fundamental types shared by the roster crates:
//! - Shift kinds and rotation-pattern slots
//! - The shared rotation pattern
//! - Roster output rows and the ordered roster
//! - The common error type

pub mod domain;
pub mod error;

#[cfg(test)]
mod domain_tests;

pub use domain::{PatternSlot, Roster, RosterEntry, RotationPattern, ShiftKind};
pub use error::{Result, RosterError};
