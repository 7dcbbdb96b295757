//! The persisted per-page checkbox state.

use crate::ids::Identity;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Mapping from checkbox [`Identity`] to its last known checked state.
///
/// Serialized as a flat JSON object (`{"cb-1x9k-0": true}`), which is the
/// whole stored value for one [`ScopeKey`](crate::ScopeKey).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateRecord(BTreeMap<String, bool>);

impl StateRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, identity: &Identity) -> Option<bool> {
        self.0.get(identity.as_str()).copied()
    }

    pub fn contains(&self, identity: &Identity) -> bool {
        self.0.contains_key(identity.as_str())
    }

    /// Sets the state for `identity`, returning the previous value if any.
    pub fn insert(&mut self, identity: &Identity, checked: bool) -> Option<bool> {
        self.0.insert(identity.as_str().to_string(), checked)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Identities stored here that are not in `present`.
    pub fn orphans(&self, present: &HashSet<Identity>) -> Vec<String> {
        self.0
            .keys()
            .filter(|k| !present.contains(&Identity::from(k.as_str())))
            .cloned()
            .collect()
    }

    /// A copy holding only the entries whose identity is in `present`.
    pub fn retained(&self, present: &HashSet<Identity>) -> StateRecord {
        StateRecord(
            self.0
                .iter()
                .filter(|(k, _)| present.contains(&Identity::from(k.as_str())))
                .map(|(k, v)| (k.clone(), *v))
                .collect(),
        )
    }
}

impl FromIterator<(Identity, bool)> for StateRecord {
    fn from_iter<I: IntoIterator<Item = (Identity, bool)>>(iter: I) -> Self {
        StateRecord(
            iter.into_iter()
                .map(|(id, checked)| (id.as_str().to_string(), checked))
                .collect(),
        )
    }
}
