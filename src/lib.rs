//! # Toolbox Core Library
//!
//! This library provides the algorithmic core shared by the toolbox
//! app's micro-utility screens: unbiased sampling without replacement
//! (lottery), constrained permutation generation (secret santa),
//! balanced group partitioning, uniform single picks (coin, dice,
//! decisions), the fortune wheel's spin state machine, and the
//! dual-mode stopwatch/countdown timer.
//!
//! Everything here is presentation-free and in-memory: screens call
//! the operations, poll serializable state snapshots, and drive the
//! cooperative timing state machines by delivering the alarm messages
//! they schedule. Randomness is an injected dependency so every
//! algorithm is reproducible under test.

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::ignored_unit_patterns)]
#![allow(clippy::doc_markdown)]
use serde::{Deserialize, Serialize};

pub mod constants;

pub mod picks;
pub mod random;
pub mod roster;
pub mod timer;
pub mod wheel;

/// Alarm messages for the cooperative timing state machines
///
/// The wheel and the timer do not own background tasks; instead they
/// hand these messages to a scheduler closure together with a delay,
/// and the host delivers each message back to its owner when the delay
/// expires. Messages carry enough identity (an epoch) for their owner
/// to discard the stale ones after a pause, reset, or new spin.
#[derive(Debug, Clone, derive_more::From, Serialize, Deserialize)]
pub enum AlarmMessage {
    /// Fortune wheel animation steps
    Wheel(wheel::AlarmMessage),
    /// Timer ticks
    Timer(timer::AlarmMessage),
}

/// Observable state snapshots for the presentation layer
///
/// Screens poll these to render; only the component operations mutate
/// the underlying state.
#[derive(Debug, Serialize, Clone, derive_more::From)]
pub enum SyncMessage {
    /// Fortune wheel state
    Wheel(wheel::Snapshot),
    /// Timer state
    Timer(timer::Snapshot),
}

impl SyncMessage {
    /// Converts the snapshot to a JSON string for the presentation layer
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never
    /// happen with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_alarm_message_round_trips() {
        let alarm: AlarmMessage = timer::AlarmMessage::Tick { epoch: 3 }.into();
        let json = serde_json::to_string(&alarm).unwrap();
        let restored: AlarmMessage = serde_json::from_str(&json).unwrap();

        assert!(matches!(
            restored,
            AlarmMessage::Timer(timer::AlarmMessage::Tick { epoch: 3 })
        ));
    }

    #[test]
    fn test_sync_message_to_message() {
        let sync: SyncMessage = timer::Timer::new().snapshot().into();
        let json = sync.to_message();

        assert!(json.contains("Timer"));
        assert!(json.contains("Stopwatch"));
    }

    #[test]
    fn test_wheel_sync_message_to_message() {
        let wheel = wheel::Wheel::new(vec!["A".to_owned(), "B".to_owned()]);
        let sync: SyncMessage = wheel.snapshot().into();
        let json = sync.to_message();

        assert!(json.contains("Wheel"));
        assert!(json.contains("\"spinning\":false"));
    }
}
