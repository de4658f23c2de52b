//! Notification phases.

use bitflags::bitflags;
use std::fmt;

/// One of the two independent notification timings.
///
/// Each phase owns a completely separate set of event lists: registering,
/// emitting or clearing in one phase never observes the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    /// Notifications delivered ahead of the action they describe.
    Before,
    /// Notifications delivered once the action has happened.
    After,
}

impl Phase {
    /// Both phases, in declaration order.
    pub const ALL: [Phase; 2] = [Phase::Before, Phase::After];

    /// Stable position of the phase, usable as an array index.
    pub const fn index(self) -> usize {
        match self {
            Phase::Before => 0,
            Phase::After => 1,
        }
    }

    /// Lowercase name of the phase.
    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Before => "before",
            Phase::After => "after",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// A set of phases, for operations that span more than one phase.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Phases: u8 {
        /// The "before" phase.
        const BEFORE = 0b01;
        /// The "after" phase.
        const AFTER = 0b10;
    }
}

impl Phases {
    /// Iterates the phases contained in this set, "before" first.
    pub fn phases(self) -> impl Iterator<Item = Phase> {
        Phase::ALL
            .into_iter()
            .filter(move |phase| self.contains(Phases::from(*phase)))
    }
}

impl From<Phase> for Phases {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Before => Phases::BEFORE,
            Phase::After => Phases::AFTER,
        }
    }
}
