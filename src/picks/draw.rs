//! Uniform draw without replacement
//!
//! This module implements the lottery tool: pick `count` distinct
//! values from `[1, max_value]`, each combination equally likely. The
//! implementation shuffles the full range and takes a prefix, which is
//! O(`max_value`) but exact, and acceptable for the UI-scale ranges
//! bounded by [`crate::constants::draw::MAX_RANGE`].

use garde::Validate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::random::Source;

/// Errors that can occur when requesting a draw
#[derive(Error, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An input was non-numeric, zero, or outside the supported range
    #[error("inputs must be numbers of at least 1")]
    InvalidInput,
    /// More values were requested than the range contains
    #[error("cannot draw more values than the range contains")]
    CountExceedsRange,
}

/// A validated draw request as entered on the lottery screen
///
/// Screens build this from raw text input via [`Request::parse`];
/// shape problems are mapped to [`Error::InvalidInput`] before the
/// draw itself runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Request {
    /// Upper bound of the draw range, inclusive
    #[garde(range(min = crate::constants::draw::MIN_VALUE, max = crate::constants::draw::MAX_RANGE))]
    pub max_value: u32,
    /// Number of distinct values to draw
    #[garde(range(min = 1))]
    pub count: u32,
}

impl Request {
    /// Parses a draw request from raw text fields
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if either field is not a number
    /// or falls outside the supported bounds.
    pub fn parse(max_value: &str, count: &str) -> Result<Self, Error> {
        let request = Self {
            max_value: max_value.trim().parse().map_err(|_| Error::InvalidInput)?,
            count: count.trim().parse().map_err(|_| Error::InvalidInput)?,
        };
        request.validate().map_err(|_| Error::InvalidInput)?;
        Ok(request)
    }

    /// Performs the draw described by this request
    ///
    /// # Errors
    ///
    /// See [`draw`].
    pub fn draw(self, source: &mut impl Source) -> Result<Vec<u32>, Error> {
        draw(self.max_value, self.count, source)
    }
}

/// Draws `count` distinct values from `[1, max_value]`, sorted ascending
///
/// Every combination of `count` values is equally likely. On error no
/// partial result is produced.
///
/// # Errors
///
/// * [`Error::InvalidInput`] - `max_value` or `count` is below 1
/// * [`Error::CountExceedsRange`] - `count` exceeds `max_value`
pub fn draw(max_value: u32, count: u32, source: &mut impl Source) -> Result<Vec<u32>, Error> {
    if max_value < 1 || count < 1 {
        return Err(Error::InvalidInput);
    }
    if count > max_value {
        return Err(Error::CountExceedsRange);
    }

    let mut pool = (1..=max_value).collect_vec();
    source.shuffle(&mut pool);
    pool.truncate(count as usize);
    pool.sort_unstable();
    Ok(pool)
}
