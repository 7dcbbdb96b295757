//! Visual treatment of checkboxes and their list entries.

use crate::config::Config;
use ticklist_traits::{CheckboxNode, EntryNode};

/// Class marking a completed entry.
pub const CHECKED_CLASS: &str = "checked";

const TEXT_DECORATION: &str = "text-decoration";
const OPACITY: &str = "opacity";

/// Makes a host-disabled checkbox interactive.
pub fn activate<C: CheckboxNode>(checkbox: &C) {
    checkbox.set_disabled(false);
    checkbox.set_cursor("pointer");
}

/// Applies the completed/open look to `target`. Idempotent.
pub fn apply<E: EntryNode>(target: &E, checked: bool, config: &Config) {
    target.set_class(CHECKED_CLASS, checked);
    if checked {
        if config.strikethrough_completed {
            target.set_style(TEXT_DECORATION, Some("line-through"));
        }
        if config.fade_completed {
            target.set_style(OPACITY, Some(&config.opacity_css()));
        }
    } else {
        target.set_style(TEXT_DECORATION, None);
        if config.fade_completed {
            target.set_style(OPACITY, None);
        }
    }
}

/// Applies [`apply`] to the checkbox's styling target, if it has one.
pub fn present<C: CheckboxNode>(checkbox: &C, checked: bool, config: &Config) {
    if let Some(target) = checkbox.styling_target() {
        apply(&target, checked, config);
    }
}
