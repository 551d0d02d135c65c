//! In-memory grove storage with store-generated keys.
//!
//! Provides the create/update/delete/list surface the proximity core expects
//! from its grove-store collaborator, including:
//! - Key generation for new groves
//! - Full-replace update semantics
//! - Delete-on-empty-boundary edit handling

use std::collections::HashMap;

use crate::error::{OptionExt, Result};
use crate::{Grove, GroveTrackError};

/// Outcome of saving an edited grove.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The grove was replaced in place.
    Updated,
    /// The edited boundary was empty, so the grove was deleted.
    Deleted,
}

/// In-memory keyed grove storage.
///
/// Mutations go through the store; readers take owned snapshots so the
/// evaluator never observes a list mutated under it.
#[derive(Debug, Default)]
pub struct GroveStore {
    groves: HashMap<String, Grove>,
    key_counter: u64,
}

impl GroveStore {
    /// Create a new empty grove store.
    pub fn new() -> Self {
        Self {
            groves: HashMap::new(),
            key_counter: 0,
        }
    }

    /// Persist a grove, assigning a fresh key unless it already carries one
    /// (reloads keep their original keys).
    ///
    /// Returns the key under which the grove is stored.
    pub fn create(&mut self, mut grove: Grove) -> String {
        let key = match grove.key.take() {
            Some(key) => key,
            None => self.fresh_key(),
        };
        grove.key = Some(key.clone());
        self.groves.insert(key.clone(), grove);
        key
    }

    /// Replace the grove stored under `key`.
    pub fn update(&mut self, key: &str, mut grove: Grove) -> Result<()> {
        if !self.groves.contains_key(key) {
            return Err(GroveTrackError::GroveNotFound {
                key: key.to_string(),
            });
        }
        grove.key = Some(key.to_string());
        self.groves.insert(key.to_string(), grove);
        Ok(())
    }

    /// Remove the grove stored under `key`, returning it.
    pub fn delete(&mut self, key: &str) -> Result<Grove> {
        self.groves.remove(key).ok_or_grove_not_found(key)
    }

    /// Save an edit: full replace, or delete when the edited boundary is empty.
    pub fn save_edit(&mut self, key: &str, grove: Grove) -> Result<EditOutcome> {
        if grove.coordinates.is_empty() {
            self.delete(key)?;
            Ok(EditOutcome::Deleted)
        } else {
            self.update(key, grove)?;
            Ok(EditOutcome::Updated)
        }
    }

    /// Get a grove by key.
    pub fn get(&self, key: &str) -> Option<&Grove> {
        self.groves.get(key)
    }

    /// Check if a grove exists.
    pub fn contains(&self, key: &str) -> bool {
        self.groves.contains_key(key)
    }

    /// Get all grove keys.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.groves.keys()
    }

    /// Get all groves.
    pub fn values(&self) -> impl Iterator<Item = &Grove> {
        self.groves.values()
    }

    /// Owned copy of the grove list for the evaluator.
    pub fn snapshot(&self) -> Vec<Grove> {
        self.groves.values().cloned().collect()
    }

    /// Get the number of stored groves.
    pub fn len(&self) -> usize {
        self.groves.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.groves.is_empty()
    }

    /// Clear all groves.
    pub fn clear(&mut self) {
        self.groves.clear();
    }

    fn fresh_key(&mut self) -> String {
        loop {
            self.key_counter += 1;
            let key = format!("grove-{}", self.key_counter);
            if !self.groves.contains_key(&key) {
                return key;
            }
        }
    }
}
