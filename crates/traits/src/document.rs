//! Traits describing the host's rendered document.
//!
//! The engine never owns document nodes. It reads and mutates them through
//! these traits, so the same reconciliation logic drives a browser DOM and the
//! in-memory document used in tests.

use ticklist_types::Identity;

/// A containing element of a checkbox (normally its `<li>`).
pub trait EntryNode {
    /// Visible text of the entry with checkbox controls left out.
    fn text(&self) -> String;

    fn has_class(&self, class: &str) -> bool;

    /// Adds `class` when `enabled`, removes it otherwise.
    fn set_class(&self, class: &str, enabled: bool);

    /// Returns the inline value of a style property, if set.
    fn style(&self, property: &str) -> Option<String>;

    /// Sets an inline style property, or clears the override for `None`.
    fn set_style(&self, property: &str, value: Option<&str>);
}

/// One checkbox control in the current render.
pub trait CheckboxNode {
    type Entry: EntryNode;

    fn is_checked(&self) -> bool;

    fn set_checked(&self, checked: bool);

    fn is_disabled(&self) -> bool;

    fn set_disabled(&self, disabled: bool);

    fn cursor(&self) -> Option<String>;

    fn set_cursor(&self, cursor: &str);

    /// The closest enclosing list entry, if any.
    fn list_entry(&self) -> Option<Self::Entry>;

    /// The element presentation is applied to: the list entry, else the parent.
    fn styling_target(&self) -> Option<Self::Entry>;

    /// Exposes the assigned identity on the node, for stylesheets and
    /// scripts that want to address a checkbox. No-op by default.
    fn set_identity(&self, _identity: &Identity) {}
}

/// The rendered document as seen right after a render completes.
pub trait RenderedDocument {
    type Checkbox: CheckboxNode;

    /// Current navigation path (may be empty).
    fn route_path(&self) -> String;

    /// All checkbox controls, in document order.
    fn checkboxes(&self) -> Vec<Self::Checkbox>;

    /// Attaches the host's change listener to `checkbox`, routing toggles to
    /// `ordinal`. Returns `false` when this instance already has a listener.
    fn listen(&self, checkbox: &Self::Checkbox, ordinal: usize) -> bool;
}
