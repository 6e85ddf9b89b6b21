//! Dual-mode timer state machine
//!
//! One timer instance backs both the stopwatch and countdown screens.
//! The mode is orthogonal to the phase: a stopwatch counts up without
//! bound, a countdown counts down from a configured total and finishes
//! at zero. Time advances through cooperative tick alarms scheduled at
//! a fixed interval; the timer itself owns no background task, so
//! pausing or resetting cancels pending work by bumping an epoch
//! counter that stale ticks fail to match.
//!
//! The countdown's zero-crossing is a single transition: the tick that
//! exhausts the remaining time also sets the finished flag and stops
//! rescheduling, so no observer can ever see a negative remaining
//! value or a finished timer that is still running.

use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::constants::timer::{MAX_MINUTES, MAX_SECONDS, TICK_MILLIS};

/// Interval between cooperative ticks
const TICK_INTERVAL: Duration = Duration::from_millis(TICK_MILLIS);

/// Direction the timer counts in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Counts up from zero, unbounded
    #[default]
    Stopwatch,
    /// Counts down from a configured total to zero
    Countdown,
}

/// Represents the current phase of the timer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Not started, or reset
    #[default]
    Idle,
    /// Ticking
    Running,
    /// Halted with accumulated time kept
    Paused,
    /// Countdown reached zero; only a reset leaves this phase
    Finished,
}

/// Alarm messages driving the tick loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AlarmMessage {
    /// Advance the timer by one tick interval
    Tick {
        /// Run generation that scheduled this tick
        epoch: u64,
    },
}

/// Observable timer state for the presentation layer
#[serde_with::serde_as]
#[derive(Debug, Serialize, Clone)]
pub struct Snapshot {
    /// Direction the timer counts in
    pub mode: Mode,
    /// Whether the timer is ticking
    pub running: bool,
    /// Whether a countdown has completed
    pub finished: bool,
    /// Accumulated stopwatch time in milliseconds
    #[serde_as(as = "serde_with::DurationMilliSeconds<u64>")]
    pub elapsed: Duration,
    /// Remaining countdown time in milliseconds
    #[serde_as(as = "serde_with::DurationMilliSeconds<u64>")]
    pub remaining: Duration,
    /// Configured countdown total in milliseconds
    #[serde_as(as = "serde_with::DurationMilliSeconds<u64>")]
    pub total: Duration,
}

/// The dual-mode timer
///
/// All state is in memory and owned by one screen session. Only the
/// operations below mutate it; the presentation layer observes it
/// through [`Timer::snapshot`] and the individual getters.
#[serde_with::serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timer {
    /// Direction the timer counts in
    mode: Mode,
    /// Current phase
    phase: Phase,
    /// Accumulated stopwatch time
    #[serde_as(as = "serde_with::DurationMilliSeconds<u64>")]
    elapsed: Duration,
    /// Remaining countdown time; never exceeds `total`
    #[serde_as(as = "serde_with::DurationMilliSeconds<u64>")]
    remaining: Duration,
    /// Configured countdown total
    #[serde_as(as = "serde_with::DurationMilliSeconds<u64>")]
    total: Duration,
    /// Run generation, bumped whenever pending ticks must be cancelled
    epoch: u64,
}

impl Timer {
    /// Creates an idle stopwatch with no countdown configured
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches the counting direction
    ///
    /// No-op while running. Otherwise the timer returns to idle with
    /// elapsed time cleared and remaining time restored to the
    /// configured countdown total.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.phase == Phase::Running {
            return;
        }
        self.mode = mode;
        self.phase = Phase::Idle;
        self.elapsed = Duration::ZERO;
        self.remaining = self.total;
        self.epoch += 1;
    }

    /// Configures the countdown duration
    ///
    /// No-op while running. Minutes are clamped to `[0, 99]` and
    /// seconds to `[0, 59]`; both the total and the remaining time are
    /// recomputed, and the timer returns to idle.
    pub fn set_countdown(&mut self, minutes: u64, seconds: u64) {
        if self.phase == Phase::Running {
            return;
        }
        let minutes = minutes.min(MAX_MINUTES);
        let seconds = seconds.min(MAX_SECONDS);
        self.total = Duration::from_secs(minutes * 60 + seconds);
        self.remaining = self.total;
        self.phase = Phase::Idle;
        self.epoch += 1;
    }

    /// Toggles between running and halted
    ///
    /// A finished countdown ignores this until reset. Pausing
    /// invalidates the pending tick; starting schedules a fresh one,
    /// so at most one tick chain exists per timer.
    pub fn start_pause<S: FnMut(crate::AlarmMessage, Duration)>(&mut self, mut schedule_message: S) {
        match self.phase {
            Phase::Finished => {}
            Phase::Running => {
                self.phase = Phase::Paused;
                self.epoch += 1;
            }
            Phase::Idle | Phase::Paused => {
                self.phase = Phase::Running;
                self.epoch += 1;
                schedule_message(
                    AlarmMessage::Tick { epoch: self.epoch }.into(),
                    TICK_INTERVAL,
                );
            }
        }
    }

    /// Handles a scheduled tick
    ///
    /// Ticks from a superseded run, or arriving while not running, are
    /// discarded. A countdown whose remaining time reaches zero flips
    /// to finished in this same update and schedules nothing further.
    pub fn receive_alarm<S: FnMut(crate::AlarmMessage, Duration)>(
        &mut self,
        message: &AlarmMessage,
        mut schedule_message: S,
    ) {
        let AlarmMessage::Tick { epoch } = *message;

        if epoch != self.epoch || self.phase != Phase::Running {
            return;
        }

        match self.mode {
            Mode::Stopwatch => {
                self.elapsed += TICK_INTERVAL;
            }
            Mode::Countdown => {
                self.remaining = self.remaining.saturating_sub(TICK_INTERVAL);
                if self.remaining.is_zero() {
                    self.phase = Phase::Finished;
                    return;
                }
            }
        }

        schedule_message(AlarmMessage::Tick { epoch }.into(), TICK_INTERVAL);
    }

    /// Stops ticking and returns to idle
    ///
    /// Elapsed time resets to zero; remaining time resets to the
    /// configured countdown total, not to zero, so a countdown can be
    /// restarted without re-entering its duration.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.elapsed = Duration::ZERO;
        self.remaining = self.total;
        self.epoch += 1;
    }

    /// Returns the counting direction
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns whether the timer is ticking
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Returns whether a countdown has completed
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Returns the accumulated stopwatch time
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns the remaining countdown time
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Returns the configured countdown total
    pub fn total(&self) -> Duration {
        self.total
    }

    /// Returns an observable snapshot for the presentation layer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            mode: self.mode,
            running: self.is_running(),
            finished: self.is_finished(),
            elapsed: self.elapsed,
            remaining: self.remaining,
            total: self.total,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    /// Delivers up to `limit` pending ticks, stopping early if the
    /// timer stops rescheduling.
    fn drive(timer: &mut Timer, pending: &mut Vec<crate::AlarmMessage>, limit: usize) {
        for _ in 0..limit {
            let Some(message) = pending.pop() else {
                return;
            };
            if let crate::AlarmMessage::Timer(alarm) = message {
                timer.receive_alarm(&alarm, |next, _| pending.push(next));
            }
        }
    }

    fn start(timer: &mut Timer, pending: &mut Vec<crate::AlarmMessage>) {
        timer.start_pause(|message, _| pending.push(message));
    }

    #[test]
    fn test_initial_state() {
        let timer = Timer::new();
        assert_eq!(timer.mode(), Mode::Stopwatch);
        assert!(!timer.is_running());
        assert!(!timer.is_finished());
        assert_eq!(timer.elapsed(), Duration::ZERO);
        assert_eq!(timer.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_stopwatch_accumulates_ticks() {
        let mut timer = Timer::new();
        let mut pending = Vec::new();

        start(&mut timer, &mut pending);
        assert!(timer.is_running());

        drive(&mut timer, &mut pending, 250);
        assert_eq!(timer.elapsed(), Duration::from_millis(250 * TICK_MILLIS));
        assert!(timer.is_running());
    }

    #[test]
    fn test_pause_halts_and_keeps_time() {
        let mut timer = Timer::new();
        let mut pending = Vec::new();

        start(&mut timer, &mut pending);
        drive(&mut timer, &mut pending, 100);
        let elapsed = timer.elapsed();

        start(&mut timer, &mut pending); // pause
        assert!(!timer.is_running());

        // The tick scheduled before pausing is stale now.
        drive(&mut timer, &mut pending, 10);
        assert_eq!(timer.elapsed(), elapsed);
    }

    #[test]
    fn test_resume_continues_from_paused_time() {
        let mut timer = Timer::new();
        let mut pending = Vec::new();

        start(&mut timer, &mut pending);
        drive(&mut timer, &mut pending, 50);
        start(&mut timer, &mut pending); // pause
        pending.clear();

        start(&mut timer, &mut pending); // resume
        drive(&mut timer, &mut pending, 50);
        assert_eq!(timer.elapsed(), Duration::from_millis(100 * TICK_MILLIS));
    }

    #[test]
    fn test_countdown_configuration_clamps() {
        let mut timer = Timer::new();
        timer.set_mode(Mode::Countdown);

        timer.set_countdown(150, 90);
        assert_eq!(timer.total(), Duration::from_secs(99 * 60 + 59));
        assert_eq!(timer.remaining(), timer.total());
    }

    #[test]
    fn test_countdown_completes_exactly_at_zero() {
        let mut timer = Timer::new();
        timer.set_mode(Mode::Countdown);
        timer.set_countdown(0, 1);

        let mut pending = Vec::new();
        start(&mut timer, &mut pending);

        // 1 second at 10ms per tick is 100 ticks; drive generously and
        // rely on the finish to stop the chain.
        drive(&mut timer, &mut pending, 1_000);

        assert_eq!(timer.remaining(), Duration::ZERO);
        assert!(timer.is_finished());
        assert!(!timer.is_running());
        assert!(pending.is_empty());
    }

    #[test]
    fn test_countdown_never_goes_negative() {
        let mut timer = Timer::new();
        timer.set_mode(Mode::Countdown);
        timer.set_countdown(0, 1);

        let mut pending = Vec::new();
        start(&mut timer, &mut pending);

        let mut ticks = 0;
        while let Some(message) = pending.pop() {
            if let crate::AlarmMessage::Timer(alarm) = message {
                timer.receive_alarm(&alarm, |next, _| pending.push(next));
            }
            assert!(timer.remaining() <= timer.total());
            ticks += 1;
            assert!(ticks <= 100, "finish must stop the tick chain");
        }

        assert_eq!(ticks, 100);
        assert!(timer.is_finished());
    }

    #[test]
    fn test_finished_ignores_start_pause() {
        let mut timer = Timer::new();
        timer.set_mode(Mode::Countdown);
        timer.set_countdown(0, 1);

        let mut pending = Vec::new();
        start(&mut timer, &mut pending);
        drive(&mut timer, &mut pending, 1_000);
        assert!(timer.is_finished());

        timer.start_pause(|_, _| panic!("finished timer must not schedule"));
        assert!(timer.is_finished());
        assert!(!timer.is_running());
    }

    #[test]
    fn test_reset_restores_configured_total() {
        let mut timer = Timer::new();
        timer.set_mode(Mode::Countdown);
        timer.set_countdown(1, 30);

        let mut pending = Vec::new();
        start(&mut timer, &mut pending);
        drive(&mut timer, &mut pending, 500);

        timer.reset();
        assert!(!timer.is_running());
        assert!(!timer.is_finished());
        assert_eq!(timer.elapsed(), Duration::ZERO);
        assert_eq!(timer.remaining(), Duration::from_secs(90));

        // Ticks scheduled before the reset are stale.
        drive(&mut timer, &mut pending, 10);
        assert_eq!(timer.remaining(), Duration::from_secs(90));
    }

    #[test]
    fn test_reset_after_finish() {
        let mut timer = Timer::new();
        timer.set_mode(Mode::Countdown);
        timer.set_countdown(0, 1);

        let mut pending = Vec::new();
        start(&mut timer, &mut pending);
        drive(&mut timer, &mut pending, 1_000);
        assert!(timer.is_finished());

        timer.reset();
        assert!(!timer.is_finished());
        assert_eq!(timer.remaining(), Duration::from_secs(1));

        // The countdown restarts without re-entering the duration.
        start(&mut timer, &mut pending);
        drive(&mut timer, &mut pending, 1_000);
        assert!(timer.is_finished());
    }

    #[test]
    fn test_set_mode_while_running_is_ignored() {
        let mut timer = Timer::new();
        let mut pending = Vec::new();

        start(&mut timer, &mut pending);
        timer.set_mode(Mode::Countdown);
        assert_eq!(timer.mode(), Mode::Stopwatch);
        assert!(timer.is_running());
    }

    #[test]
    fn test_set_mode_resets_accumulated_time() {
        let mut timer = Timer::new();
        timer.set_countdown(0, 30);

        let mut pending = Vec::new();
        start(&mut timer, &mut pending);
        drive(&mut timer, &mut pending, 100);
        start(&mut timer, &mut pending); // pause

        timer.set_mode(Mode::Countdown);
        assert_eq!(timer.elapsed(), Duration::ZERO);
        assert_eq!(timer.remaining(), Duration::from_secs(30));
        assert!(!timer.is_running());
    }

    #[test]
    fn test_set_countdown_while_running_is_ignored() {
        let mut timer = Timer::new();
        timer.set_mode(Mode::Countdown);
        timer.set_countdown(0, 30);

        let mut pending = Vec::new();
        start(&mut timer, &mut pending);
        timer.set_countdown(5, 0);
        assert_eq!(timer.total(), Duration::from_secs(30));
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut timer = Timer::new();
        timer.set_mode(Mode::Countdown);
        timer.set_countdown(0, 10);

        let snapshot = timer.snapshot();
        assert_eq!(snapshot.mode, Mode::Countdown);
        assert!(!snapshot.running);
        assert!(!snapshot.finished);
        assert_eq!(snapshot.remaining, Duration::from_secs(10));
        assert_eq!(snapshot.total, Duration::from_secs(10));
    }

    #[test]
    fn test_snapshot_serializes_milliseconds() {
        let mut timer = Timer::new();
        timer.set_mode(Mode::Countdown);
        timer.set_countdown(0, 2);

        let json = serde_json::to_string(&timer.snapshot()).unwrap();
        assert!(json.contains("\"remaining\":2000"));
        assert!(json.contains("\"total\":2000"));
    }
}
