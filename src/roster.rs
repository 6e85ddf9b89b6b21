//! Participant list management and validation
//!
//! This module is the input layer in front of the sampling algorithms.
//! It maintains an ordered list of display names and enforces the rules
//! the algorithms rely on: names are trimmed, non-empty, bounded in
//! length, and unique ignoring case. The algorithms themselves never
//! revalidate these properties.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::roster::MAX_NAME_LENGTH;

/// Errors that can occur when adding a participant name
#[derive(Error, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The name is empty or contains only whitespace
    #[error("name cannot be empty")]
    Empty,
    /// The name exceeds the maximum allowed length
    #[error("name is too long")]
    TooLong,
    /// The name is already on the list, ignoring case
    #[error("name is already on the list")]
    Duplicate,
}

/// Serialization helper for [`Roster`]
#[derive(Deserialize)]
struct RosterSerde {
    entries: Vec<String>,
}

/// An ordered list of distinct participant names
///
/// Entries keep their insertion order; uniqueness is checked ignoring
/// case so "Alice" and "alice" cannot both join. A roster is created
/// fresh per screen visit and discarded with it.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(from = "RosterSerde")]
pub struct Roster {
    /// Names in insertion order
    entries: Vec<String>,

    /// Lowercased names for uniqueness checks (not serialized)
    #[serde(skip_serializing)]
    existing: HashSet<String>,
}

impl From<RosterSerde> for Roster {
    /// Rebuilds the uniqueness set from the serialized entries
    fn from(serde: RosterSerde) -> Self {
        let RosterSerde { entries } = serde;
        let existing = entries.iter().map(|name| name.to_lowercase()).collect();
        Self { entries, existing }
    }
}

impl Roster {
    /// Adds a name to the list after validation
    ///
    /// The name is trimmed of surrounding whitespace before any checks.
    ///
    /// # Errors
    ///
    /// * [`Error::Empty`] - the name is empty after trimming
    /// * [`Error::TooLong`] - the name exceeds [`MAX_NAME_LENGTH`]
    /// * [`Error::Duplicate`] - the name is already listed, ignoring case
    pub fn add(&mut self, name: &str) -> Result<(), Error> {
        let name = name.trim();

        if name.is_empty() {
            return Err(Error::Empty);
        }
        if name.len() > MAX_NAME_LENGTH {
            return Err(Error::TooLong);
        }
        if !self.existing.insert(name.to_lowercase()) {
            return Err(Error::Duplicate);
        }

        self.entries.push(name.to_owned());
        Ok(())
    }

    /// Removes the name at `index`, returning it if it existed
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index >= self.entries.len() {
            return None;
        }
        let name = self.entries.remove(index);
        self.existing.remove(&name.to_lowercase());
        Some(name)
    }

    /// Removes all names
    pub fn clear(&mut self) {
        self.entries.clear();
        self.existing.clear();
    }

    /// Returns the names in insertion order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Returns the number of names on the list
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
