//! Secret-santa derangement generation
//!
//! A derangement is a permutation with no fixed point: nobody is
//! assigned to themselves. Generation uses rejection sampling over
//! uniform shuffles, which accepts with probability approaching 1/e,
//! so the expected number of attempts stays below three regardless of
//! list size. Attempts are still capped, with a constructive fallback,
//! so the loop is bounded even for adversarial sources.

use itertools::Itertools;
use serde::Serialize;
use thiserror::Error;

use crate::constants::derangement::{MAX_SHUFFLE_ATTEMPTS, MIN_PARTICIPANTS};
use crate::random::Source;

/// Errors that can occur when generating a derangement
#[derive(Error, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Fewer than two participants were provided
    #[error("at least two participants are required")]
    InsufficientParticipants,
}

/// Produces a uniformly random derangement of `items`
///
/// The result is a permutation of the input where no element remains
/// at its original index. For two items this is deterministic (the
/// single swap). The input is never mutated.
///
/// # Errors
///
/// Returns [`Error::InsufficientParticipants`] if `items` has fewer
/// than two elements.
pub fn derange<T: Clone>(items: &[T], source: &mut impl Source) -> Result<Vec<T>, Error> {
    if items.len() < MIN_PARTICIPANTS {
        return Err(Error::InsufficientParticipants);
    }

    let mut order = (0..items.len()).collect_vec();
    for _ in 0..MAX_SHUFFLE_ATTEMPTS {
        source.shuffle(&mut order);
        if order.iter().enumerate().all(|(index, &position)| index != position) {
            return Ok(order.into_iter().map(|position| items[position].clone()).collect());
        }
    }

    // Cap exhausted: shift every element one position to the left,
    // which is a valid (if predictable) derangement.
    Ok(items
        .iter()
        .cloned()
        .cycle()
        .skip(1)
        .take(items.len())
        .collect())
}

/// Produces giver-to-receiver assignments for a gift exchange
///
/// Pairs `items[i]` with the `i`-th element of a fresh derangement,
/// so every participant gives exactly once, receives exactly once,
/// and never draws themselves.
///
/// # Errors
///
/// Returns [`Error::InsufficientParticipants`] if `items` has fewer
/// than two elements.
pub fn assign<T: Clone>(items: &[T], source: &mut impl Source) -> Result<Vec<(T, T)>, Error> {
    let receivers = derange(items, source)?;
    Ok(items.iter().cloned().zip(receivers).collect())
}
