//! Balanced group partitioning
//!
//! Splits a participant list into a requested number of groups of
//! near-equal size: shuffle a copy uniformly, then deal participants
//! round-robin into the groups. Sizes differ by at most one and every
//! participant lands in exactly one group.

use serde::Serialize;
use thiserror::Error;

use crate::constants::groups::MIN_GROUPS;
use crate::random::Source;

/// Errors that can occur when partitioning into groups
#[derive(Error, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// There are not strictly more participants than groups
    #[error("more participants than groups are required")]
    NeedMoreForGroups,
}

/// Splits `participants` into `num_groups` groups of near-equal size
///
/// Each group receives either `⌊n / num_groups⌋` or `⌈n / num_groups⌉`
/// members. The assignment of participants to groups is uniformly
/// random; the input is never mutated.
///
/// # Errors
///
/// Returns [`Error::NeedMoreForGroups`] unless the participant count
/// strictly exceeds `num_groups` and `num_groups` is at least two.
/// Equal counts are rejected: a partition into singletons is not a
/// meaningful grouping.
pub fn split<T: Clone>(
    participants: &[T],
    num_groups: usize,
    source: &mut impl Source,
) -> Result<Vec<Vec<T>>, Error> {
    if num_groups < MIN_GROUPS || participants.len() <= num_groups {
        return Err(Error::NeedMoreForGroups);
    }

    let mut pool = participants.to_vec();
    source.shuffle(&mut pool);

    let mut buckets: Vec<Vec<T>> = vec![Vec::new(); num_groups];
    for (index, participant) in pool.into_iter().enumerate() {
        buckets[index % num_groups].push(participant);
    }
    Ok(buckets)
}
