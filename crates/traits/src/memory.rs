//! An in-memory rendered document.
//!
//! Holds the source markup (item texts and their `[x]`/`[ ]` state) and the
//! node instances of the latest render. [`InMemoryDocument::rerender`] throws
//! the nodes away and builds fresh ones from the same source, the way a host
//! re-renders a page on navigation.

use crate::document::{CheckboxNode, EntryNode, RenderedDocument};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;
use ticklist_types::Identity;

#[derive(Debug, Clone)]
struct SourceItem {
    text: String,
    checked: bool,
    in_list: bool,
}

#[derive(Debug, Default)]
struct EntryState {
    text: String,
    classes: BTreeSet<String>,
    styles: BTreeMap<String, String>,
}

/// A list entry (or bare parent element) in an [`InMemoryDocument`].
#[derive(Debug, Clone)]
pub struct InMemoryEntry {
    state: Rc<RefCell<EntryState>>,
}

impl InMemoryEntry {
    fn new(text: &str) -> Self {
        Self {
            state: Rc::new(RefCell::new(EntryState {
                text: text.to_string(),
                ..Default::default()
            })),
        }
    }

    /// All classes currently set, in sorted order.
    pub fn classes(&self) -> Vec<String> {
        self.state.borrow().classes.iter().cloned().collect()
    }

    /// All inline style overrides currently set.
    pub fn styles(&self) -> BTreeMap<String, String> {
        self.state.borrow().styles.clone()
    }
}

impl EntryNode for InMemoryEntry {
    fn text(&self) -> String {
        self.state.borrow().text.clone()
    }

    fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.contains(class)
    }

    fn set_class(&self, class: &str, enabled: bool) {
        let mut state = self.state.borrow_mut();
        if enabled {
            state.classes.insert(class.to_string());
        } else {
            state.classes.remove(class);
        }
    }

    fn style(&self, property: &str) -> Option<String> {
        self.state.borrow().styles.get(property).cloned()
    }

    fn set_style(&self, property: &str, value: Option<&str>) {
        let mut state = self.state.borrow_mut();
        match value {
            Some(v) if !v.is_empty() => {
                state.styles.insert(property.to_string(), v.to_string());
            }
            _ => {
                state.styles.remove(property);
            }
        }
    }
}

#[derive(Debug)]
struct ControlState {
    checked: bool,
    disabled: bool,
    cursor: Option<String>,
    identity: Option<Identity>,
    listeners: Vec<usize>,
}

/// A checkbox control in an [`InMemoryDocument`].
#[derive(Debug, Clone)]
pub struct InMemoryCheckbox {
    control: Rc<RefCell<ControlState>>,
    entry: Option<InMemoryEntry>,
    parent: InMemoryEntry,
}

impl InMemoryCheckbox {
    /// Number of change listeners attached to this instance.
    pub fn listener_count(&self) -> usize {
        self.control.borrow().listeners.len()
    }

    /// Ordinal the listener routes to, if one is attached.
    pub fn listening_ordinal(&self) -> Option<usize> {
        self.control.borrow().listeners.first().copied()
    }

    /// Identity tagged onto this instance by the last reconciliation.
    pub fn identity(&self) -> Option<Identity> {
        self.control.borrow().identity.clone()
    }

    /// The element presentation lands on when there is no list entry.
    pub fn parent(&self) -> &InMemoryEntry {
        &self.parent
    }

    /// Returns `true` if both handles point at the same node instance.
    pub fn same_node(&self, other: &InMemoryCheckbox) -> bool {
        Rc::ptr_eq(&self.control, &other.control)
    }
}

impl CheckboxNode for InMemoryCheckbox {
    type Entry = InMemoryEntry;

    fn is_checked(&self) -> bool {
        self.control.borrow().checked
    }

    fn set_checked(&self, checked: bool) {
        self.control.borrow_mut().checked = checked;
    }

    fn is_disabled(&self) -> bool {
        self.control.borrow().disabled
    }

    fn set_disabled(&self, disabled: bool) {
        self.control.borrow_mut().disabled = disabled;
    }

    fn cursor(&self) -> Option<String> {
        self.control.borrow().cursor.clone()
    }

    fn set_cursor(&self, cursor: &str) {
        self.control.borrow_mut().cursor = Some(cursor.to_string());
    }

    fn list_entry(&self) -> Option<InMemoryEntry> {
        self.entry.clone()
    }

    fn styling_target(&self) -> Option<InMemoryEntry> {
        Some(self.entry.clone().unwrap_or_else(|| self.parent.clone()))
    }

    fn set_identity(&self, identity: &Identity) {
        self.control.borrow_mut().identity = Some(identity.clone());
    }
}

/// A rendered document kept entirely in memory.
///
/// # Example
///
/// ```ignore
/// let doc = InMemoryDocument::new("/guide")
///     .with_item("Install", true)
///     .with_item("Configure", false);
/// let reloaded = doc.rerender();
/// ```
#[derive(Debug, Default)]
pub struct InMemoryDocument {
    path: String,
    source: Vec<SourceItem>,
    nodes: Vec<InMemoryCheckbox>,
}

impl InMemoryDocument {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Appends a task-list entry rendered from `- [x] text` or `- [ ] text`.
    pub fn with_item(mut self, text: impl Into<String>, checked: bool) -> Self {
        self.push(SourceItem {
            text: text.into(),
            checked,
            in_list: true,
        });
        self
    }

    /// Appends a checkbox that sits outside any list entry.
    pub fn with_loose_checkbox(mut self, checked: bool) -> Self {
        self.push(SourceItem {
            text: String::new(),
            checked,
            in_list: false,
        });
        self
    }

    /// Builds fresh node instances from the same source markup.
    pub fn rerender(&self) -> Self {
        let mut doc = InMemoryDocument::new(self.path.clone());
        for item in &self.source {
            doc.push(item.clone());
        }
        doc
    }

    /// Renders the same source under another navigation path.
    pub fn at_path(&self, path: impl Into<String>) -> Self {
        let mut doc = self.rerender();
        doc.path = path.into();
        doc
    }

    pub fn checkbox(&self, ordinal: usize) -> Option<&InMemoryCheckbox> {
        self.nodes.get(ordinal)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, item: SourceItem) {
        let entry = item.in_list.then(|| InMemoryEntry::new(&item.text));
        let parent = entry
            .clone()
            .unwrap_or_else(|| InMemoryEntry::new(&item.text));
        self.nodes.push(InMemoryCheckbox {
            control: Rc::new(RefCell::new(ControlState {
                checked: item.checked,
                disabled: true,
                cursor: None,
                identity: None,
                listeners: Vec::new(),
            })),
            entry,
            parent,
        });
        self.source.push(item);
    }
}

impl RenderedDocument for InMemoryDocument {
    type Checkbox = InMemoryCheckbox;

    fn route_path(&self) -> String {
        self.path.clone()
    }

    fn checkboxes(&self) -> Vec<InMemoryCheckbox> {
        self.nodes.clone()
    }

    fn listen(&self, checkbox: &InMemoryCheckbox, ordinal: usize) -> bool {
        let mut control = checkbox.control.borrow_mut();
        if !control.listeners.is_empty() {
            return false;
        }
        control.listeners.push(ordinal);
        true
    }
}
