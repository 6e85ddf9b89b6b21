//! Configuration constants for the toolbox core
//!
//! This module contains the limits and timing parameters used by the
//! individual tools. Screens reference these bounds when validating
//! input before invoking the algorithms.

/// Participant roster configuration constants
pub mod roster {
    /// Maximum length of a participant name in characters
    pub const MAX_NAME_LENGTH: usize = 30;
}

/// Lottery draw configuration constants
pub mod draw {
    /// Smallest selectable value in a draw range
    pub const MIN_VALUE: u32 = 1;
    /// Largest supported upper bound for a draw range
    ///
    /// The draw shuffles the full range, so this keeps the allocation
    /// at UI scale.
    pub const MAX_RANGE: u32 = 10_000;
}

/// Secret-santa derangement configuration constants
pub mod derangement {
    /// Minimum number of participants for a derangement to exist
    pub const MIN_PARTICIPANTS: usize = 2;
    /// Upper bound on rejection-sampling attempts before falling back
    /// to a constructive derangement
    pub const MAX_SHUFFLE_ATTEMPTS: usize = 300;
}

/// Group partitioning configuration constants
pub mod groups {
    /// Minimum number of groups for a partition to be meaningful
    pub const MIN_GROUPS: usize = 2;
}

/// Fortune wheel configuration constants
pub mod wheel {
    /// Minimum number of items required to spin
    pub const MIN_ITEMS: usize = 2;
    /// Minimum number of full turns a spin performs
    pub const MIN_FULL_TURNS: usize = 5;
    /// Number of possible extra full turns, so turns fall in [5, 8)
    pub const TURN_SPREAD: usize = 3;
    /// Number of animation steps in a single spin
    pub const SPIN_STEPS: u32 = 60;
    /// Interval between animation steps in milliseconds
    pub const STEP_MILLIS: u64 = 50;
}

/// Timer configuration constants
pub mod timer {
    /// Interval between timer ticks in milliseconds
    pub const TICK_MILLIS: u64 = 10;
    /// Maximum configurable countdown minutes
    pub const MAX_MINUTES: u64 = 99;
    /// Maximum configurable countdown seconds
    pub const MAX_SECONDS: u64 = 59;
}
