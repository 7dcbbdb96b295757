//! Identity assignment for checkbox items.

use crate::hash::hash_code_units;
use ticklist_traits::{CheckboxNode, EntryNode};
use ticklist_types::Identity;

/// Number of leading UTF-16 code units of an entry's text that feed the hash.
pub const HASHED_TEXT_UNITS: usize = 50;

/// Derives the identity of the checkbox at `ordinal`.
///
/// Uses the containing list entry's text (controls excluded, trimmed, first
/// [`HASHED_TEXT_UNITS`] code units). A checkbox outside any list entry gets
/// the positional form instead.
pub fn assign_identity<C: CheckboxNode>(checkbox: &C, ordinal: usize) -> Identity {
    match checkbox.list_entry() {
        Some(entry) => {
            let text = entry.text();
            let digest = hash_code_units(text.trim().encode_utf16().take(HASHED_TEXT_UNITS));
            Identity::hashed(&digest, ordinal)
        }
        None => Identity::positional(ordinal),
    }
}
