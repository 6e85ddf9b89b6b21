//! Uniform single pick
//!
//! The simplest selection tool: one element chosen with probability
//! `1/n`. Backs the coin flip, dice face, and decision-maker screens.

use serde::Serialize;
use thiserror::Error;

use crate::random::Source;

/// Errors that can occur when picking a single item
#[derive(Error, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Fewer than two items were provided
    #[error("at least two items are required")]
    NeedMoreItems,
}

/// Picks one element of `items` uniformly at random
///
/// # Errors
///
/// Returns [`Error::NeedMoreItems`] if `items` has fewer than two
/// elements; a single-item list is degenerate by design, not a bug.
pub fn pick<'a, T>(items: &'a [T], source: &mut impl Source) -> Result<&'a T, Error> {
    if items.len() < 2 {
        return Err(Error::NeedMoreItems);
    }
    Ok(&items[source.next_below(items.len())])
}
