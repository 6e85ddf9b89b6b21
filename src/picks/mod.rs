//! The family of randomized-selection algorithms
//!
//! Each tool screen binds to exactly one of these: lottery numbers to
//! [`draw`], secret santa to [`derangement`], group splitting to
//! [`groups`], and the simple "pick one" tools (coin, dice face,
//! decision maker) to [`single`]. All of them are pure given an
//! injected [`crate::random::Source`] and never mutate their input.

pub mod derangement;
pub mod draw;
pub mod groups;
pub mod single;
