//! Domain types for the cyclic shift-roster problem.
//!
//! A roster assigns people to one of three daily shifts so that every
//! shift-slot is covered by exactly one person while each person follows a
//! single shared rotation pattern, phase-shifted per person.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the three daily shifts.
///
/// The set of shifts is fixed; instances only vary in how people rotate
/// through them.
///
/// # Examples
///
/// ```
/// use roster_core::ShiftKind;
///
/// assert_eq!(ShiftKind::Morning.name(), "Morning");
/// assert_eq!(ShiftKind::Evening.index(), 2);
/// assert_eq!(ShiftKind::ALL.len(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ShiftKind {
    Morning,
    Afternoon,
    Evening,
}

impl ShiftKind {
    /// All shift kinds, in index order.
    pub const ALL: [ShiftKind; 3] = [ShiftKind::Morning, ShiftKind::Afternoon, ShiftKind::Evening];

    /// Number of shift kinds.
    pub const COUNT: usize = 3;

    /// Stable index of this shift kind.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            ShiftKind::Morning => 0,
            ShiftKind::Afternoon => 1,
            ShiftKind::Evening => 2,
        }
    }

    /// Display name of this shift kind.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            ShiftKind::Morning => "Morning",
            ShiftKind::Afternoon => "Afternoon",
            ShiftKind::Evening => "Evening",
        }
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One slot of the rotation pattern: a shift to work, or a day off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PatternSlot {
    Morning,
    Afternoon,
    Evening,
    Off,
}

impl PatternSlot {
    /// The shift worked in this slot, or `None` for an off day.
    #[inline]
    pub const fn shift(self) -> Option<ShiftKind> {
        match self {
            PatternSlot::Morning => Some(ShiftKind::Morning),
            PatternSlot::Afternoon => Some(ShiftKind::Afternoon),
            PatternSlot::Evening => Some(ShiftKind::Evening),
            PatternSlot::Off => None,
        }
    }

    /// Whether this slot is an on-duty slot.
    #[inline]
    pub const fn is_on_duty(self) -> bool {
        !matches!(self, PatternSlot::Off)
    }
}

impl From<ShiftKind> for PatternSlot {
    fn from(kind: ShiftKind) -> Self {
        match kind {
            ShiftKind::Morning => PatternSlot::Morning,
            ShiftKind::Afternoon => PatternSlot::Afternoon,
            ShiftKind::Evening => PatternSlot::Evening,
        }
    }
}

/// The fixed cyclic rotation pattern shared by every person.
///
/// Each person follows this same sequence, phase-shifted; the solver picks
/// the phases.
///
/// # Examples
///
/// ```
/// use roster_core::RotationPattern;
///
/// let pattern = RotationPattern::standard();
/// assert_eq!(pattern.len(), 10);
/// assert_eq!(pattern.on_duty_slots(), 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RotationPattern {
    slots: Vec<PatternSlot>,
}

impl RotationPattern {
    /// Creates a pattern from a slot sequence.
    pub fn new(slots: Vec<PatternSlot>) -> Self {
        RotationPattern { slots }
    }

    /// The 10-day rotation the system was designed around:
    /// two mornings, two afternoons, two evenings, four days off.
    pub fn standard() -> Self {
        use PatternSlot::*;
        RotationPattern::new(vec![
            Morning, Morning, Afternoon, Afternoon, Evening, Evening, Off, Off, Off, Off,
        ])
    }

    /// Cycle length of the pattern.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the pattern has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot at the given position, wrapping cyclically.
    ///
    /// # Panics
    ///
    /// Panics if the pattern is empty.
    #[inline]
    pub fn slot_at(&self, position: usize) -> PatternSlot {
        self.slots[position % self.slots.len()]
    }

    /// The underlying slot sequence.
    #[inline]
    pub fn slots(&self) -> &[PatternSlot] {
        &self.slots
    }

    /// Number of on-duty slots per cycle.
    pub fn on_duty_slots(&self) -> usize {
        self.slots.iter().filter(|s| s.is_on_duty()).count()
    }
}

/// One materialized roster row: person `person` works `shift` on `day`.
///
/// Both `person` and `day` are 1-based in the output space; day 1 is the
/// first day after the stagger scaffolding has been discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RosterEntry {
    pub person: u32,
    pub day: u32,
    pub shift: ShiftKind,
}

impl fmt::Display for RosterEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "person {} day {} {}", self.person, self.day, self.shift)
    }
}

/// An immutable, calendar-ordered roster.
///
/// Rows are sorted once at construction: ascending by day, then by the
/// shift's display name. Note that name order is lexical, so within a day
/// rows read Afternoon, Evening, Morning.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    /// Builds a roster from unordered entries, sorting them into the final
    /// calendar order.
    pub fn from_entries(mut entries: Vec<RosterEntry>) -> Self {
        entries.sort_by(|a, b| a.day.cmp(&b.day).then_with(|| a.shift.name().cmp(b.shift.name())));
        Roster { entries }
    }

    /// The ordered rows.
    #[inline]
    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the roster has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the ordered rows.
    pub fn iter(&self) -> std::slice::Iter<'_, RosterEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a RosterEntry;
    type IntoIter = std::slice::Iter<'a, RosterEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Roster {
    type Item = RosterEntry;
    type IntoIter = std::vec::IntoIter<RosterEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
