//! Fortune wheel spin state machine and outcome resolver
//!
//! The wheel accumulates rotation across spins: each spin adds five to
//! eight full turns plus a random offset to the current angle, and the
//! visible angle advances toward that target along an ease-out cubic
//! curve, sampled at fixed cooperative steps. The intermediate steps
//! are cosmetic; only the final angle, which lands exactly on the
//! target, decides the winner.
//!
//! Segments are laid out clockwise in equal sweeps starting at angle 0,
//! with the pointer fixed at the top of the unrotated frame. Because
//! the wheel rotates under the stationary pointer, the item under the
//! pointer moves opposite to the rotation, hence the `360 - angle`
//! in the resolution formula.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_time::Duration;

use crate::constants::wheel::{MIN_FULL_TURNS, MIN_ITEMS, SPIN_STEPS, STEP_MILLIS, TURN_SPREAD};
use crate::random::Source;

/// Interval between cooperative animation steps
const STEP_INTERVAL: Duration = Duration::from_millis(STEP_MILLIS);

/// Represents the current phase of the wheel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinState {
    /// Stopped with no winner shown
    #[default]
    Idle,
    /// Advancing toward a target angle
    Spinning,
    /// Stopped on a resolved winner
    Resolved,
}

/// Errors that can occur when spinning the wheel
#[derive(Error, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Fewer than two items are on the wheel
    #[error("at least two items are required to spin")]
    NeedMoreItems,
}

/// Alarm messages driving the spin animation
///
/// Each spin chains one alarm per animation step; the epoch ties a
/// step to the spin that scheduled it so steps from a superseded spin
/// are discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AlarmMessage {
    /// Advance the animation to the given step
    Step {
        /// Spin generation that scheduled this step
        epoch: u64,
        /// 1-based step number within the spin
        step: u32,
    },
}

/// Observable wheel state for the presentation layer
#[derive(Debug, Serialize, Clone)]
pub struct Snapshot {
    /// Visible rotation in `[0, 360)` degrees
    pub angle: f64,
    /// Whether a spin is in progress
    pub spinning: bool,
    /// Index of the winning segment once a spin has resolved
    pub winner: Option<usize>,
    /// Label of the winning segment once a spin has resolved
    pub winner_label: Option<String>,
}

/// The fortune wheel
///
/// Holds the item list, the cumulative rotation angle, and the spin
/// progress. One wheel instance belongs to one screen session; the
/// cooperative step alarms it schedules never outlive it because a
/// stale epoch makes them no-ops.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wheel {
    /// Segment labels, laid out clockwise from angle 0
    items: Vec<String>,
    /// Cumulative rotation in degrees, unbounded; read modulo 360
    angle: f64,
    /// Angle at which the current spin started
    start_angle: f64,
    /// Angle the current spin will land on
    target_angle: f64,
    /// Index of the winning segment once resolved
    winner: Option<usize>,
    /// Current phase
    state: SpinState,
    /// Spin generation, bumped on every accepted spin
    epoch: u64,
}

/// Ease-out cubic interpolation: fast start, decelerating finish
fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

/// Maps a final rotation angle to the winning segment index
///
/// Segments sweep `360 / item_count` degrees each, clockwise from
/// angle 0; the pointer sits at the top of the unrotated frame. An
/// angle of exactly 0 resolves to index 0.
///
/// # Panics
///
/// Panics if `item_count` is zero.
pub fn winning_index(final_angle: f64, item_count: usize) -> usize {
    let normalized = final_angle.rem_euclid(360.0);
    let sweep = 360.0 / item_count as f64;
    (((360.0 - normalized) / sweep).floor() as usize) % item_count
}

impl Wheel {
    /// Creates a wheel with the given segment labels
    pub fn new(items: Vec<String>) -> Self {
        Self {
            items,
            angle: 0.0,
            start_angle: 0.0,
            target_angle: 0.0,
            winner: None,
            state: SpinState::default(),
            epoch: 0,
        }
    }

    /// Attempts to transition from one phase to another
    ///
    /// Returns `true` if the current phase matched `before` and the
    /// transition happened.
    fn change_state(&mut self, before: SpinState, after: SpinState) -> bool {
        if self.state == before {
            self.state = after;
            true
        } else {
            false
        }
    }

    /// Starts a spin toward a freshly chosen target angle
    ///
    /// The target adds `[5, 8)` full turns plus a uniform offset in
    /// `[0, 360)` degrees to the current angle, so the wheel always
    /// rotates forward. Schedules the first animation step; subsequent
    /// steps are chained from [`Wheel::receive_alarm`]. While a spin
    /// is already in progress this is a no-op, which guarantees at
    /// most one step chain exists per wheel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NeedMoreItems`] if the wheel holds fewer than
    /// two items.
    pub fn spin<R: Source, S: FnMut(crate::AlarmMessage, Duration)>(
        &mut self,
        source: &mut R,
        mut schedule_message: S,
    ) -> Result<(), Error> {
        if self.items.len() < MIN_ITEMS {
            return Err(Error::NeedMoreItems);
        }
        if self.state == SpinState::Spinning {
            return Ok(());
        }

        let turns = (MIN_FULL_TURNS + source.next_below(TURN_SPREAD)) as f64;
        let offset = source.next_f64() * 360.0;

        self.start_angle = self.angle;
        self.target_angle = self.angle + turns * 360.0 + offset;
        self.winner = None;
        self.state = SpinState::Spinning;
        self.epoch += 1;

        schedule_message(
            AlarmMessage::Step {
                epoch: self.epoch,
                step: 1,
            }
            .into(),
            STEP_INTERVAL,
        );
        Ok(())
    }

    /// Handles a scheduled animation step
    ///
    /// Steps from a superseded spin, or arriving while not spinning,
    /// are discarded. The final step sets the angle to exactly the
    /// target and resolves the winner in the same update.
    pub fn receive_alarm<S: FnMut(crate::AlarmMessage, Duration)>(
        &mut self,
        message: &AlarmMessage,
        mut schedule_message: S,
    ) {
        let AlarmMessage::Step { epoch, step } = *message;

        if epoch != self.epoch || self.state != SpinState::Spinning {
            return;
        }

        if step >= SPIN_STEPS {
            self.angle = self.target_angle;
            self.winner = Some(winning_index(self.angle, self.items.len()));
            self.state = SpinState::Resolved;
        } else {
            let progress = f64::from(step) / f64::from(SPIN_STEPS);
            self.angle = self.start_angle
                + (self.target_angle - self.start_angle) * ease_out_cubic(progress);

            schedule_message(
                AlarmMessage::Step {
                    epoch,
                    step: step + 1,
                }
                .into(),
                STEP_INTERVAL,
            );
        }
    }

    /// Clears the resolved winner, returning to idle
    ///
    /// The accumulated angle is kept so the next spin continues
    /// rotating forward instead of snapping back.
    pub fn clear_winner(&mut self) {
        if self.change_state(SpinState::Resolved, SpinState::Idle) {
            self.winner = None;
        }
    }

    /// Replaces the wheel's items
    ///
    /// Ignored while a spin is in progress. Clears any resolved winner
    /// since the segment layout changed; the accumulated angle is kept.
    pub fn set_items(&mut self, items: Vec<String>) {
        if self.state == SpinState::Spinning {
            return;
        }
        self.items = items;
        self.winner = None;
        self.state = SpinState::Idle;
    }

    /// Returns the segment labels
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Returns the visible rotation in `[0, 360)` degrees
    pub fn display_angle(&self) -> f64 {
        self.angle.rem_euclid(360.0)
    }

    /// Returns whether a spin is in progress
    pub fn is_spinning(&self) -> bool {
        self.state == SpinState::Spinning
    }

    /// Returns the winning segment index once a spin has resolved
    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Returns an observable snapshot for the presentation layer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            angle: self.display_angle(),
            spinning: self.is_spinning(),
            winner: self.winner,
            winner_label: self.winner.and_then(|index| self.items.get(index).cloned()),
        }
    }
}
