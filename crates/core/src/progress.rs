use ticklist_traits::{CheckboxNode, RenderedDocument};
use ticklist_types::Progress;

/// Counts the document's checkboxes as they are right now.
pub fn progress<D: RenderedDocument>(doc: &D) -> Progress {
    let checkboxes = doc.checkboxes();
    let checked = checkboxes.iter().filter(|cb| cb.is_checked()).count();
    Progress::from_counts(checkboxes.len(), checked)
}
