//! DOM adapter: the live browser document behind the engine's document traits.

use crate::tracker::DomPlugin;
use std::rc::Weak;
use ticklist_traits::{CheckboxNode, EntryNode, RenderedDocument};
use ticklist_types::Identity;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, HtmlInputElement};

/// Task-list checkboxes rendered by docsify, plus any checkbox inside a list item.
pub const CHECKBOX_SELECTOR: &str =
    r#".task-list-item input[type="checkbox"], li input[type="checkbox"]"#;

/// Marks a checkbox element that already carries our change listener.
pub const BOUND_ATTRIBUTE: &str = "data-checkbox-bound";

const IDENTITY_ATTRIBUTE: &str = "data-checkbox-id";

/// A list entry (or bare parent) element.
#[derive(Debug, Clone)]
pub struct DomEntry {
    element: Element,
}

impl DomEntry {
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    fn style_declaration(&self) -> Option<web_sys::CssStyleDeclaration> {
        self.element.dyn_ref::<HtmlElement>().map(HtmlElement::style)
    }
}

impl EntryNode for DomEntry {
    fn text(&self) -> String {
        // Work on a detached copy so the rendered entry is left untouched.
        let Ok(copy) = self.element.clone_node_with_deep(true) else {
            return self.element.text_content().unwrap_or_default();
        };
        let Some(copy) = copy.dyn_ref::<Element>() else {
            return copy.text_content().unwrap_or_default();
        };
        if let Ok(inputs) = copy.query_selector_all(r#"input[type="checkbox"]"#) {
            for index in 0..inputs.length() {
                if let Some(input) = inputs.item(index).and_then(|n| n.dyn_into::<Element>().ok()) {
                    input.remove();
                }
            }
        }
        copy.text_content().unwrap_or_default()
    }

    fn has_class(&self, class: &str) -> bool {
        self.element.class_list().contains(class)
    }

    fn set_class(&self, class: &str, enabled: bool) {
        if let Err(err) = self.element.class_list().toggle_with_force(class, enabled) {
            log::warn!("Failed to toggle class '{}': {:?}", class, err);
        }
    }

    fn style(&self, property: &str) -> Option<String> {
        self.style_declaration()
            .and_then(|style| style.get_property_value(property).ok())
            .filter(|value| !value.is_empty())
    }

    fn set_style(&self, property: &str, value: Option<&str>) {
        let Some(style) = self.style_declaration() else {
            return;
        };
        let result = match value {
            Some(value) if !value.is_empty() => style.set_property(property, value),
            _ => style.remove_property(property).map(|_| ()),
        };
        if let Err(err) = result {
            log::warn!("Failed to set style '{}': {:?}", property, err);
        }
    }
}

/// One `<input type="checkbox">` of the current render.
#[derive(Debug, Clone)]
pub struct DomCheckbox {
    input: HtmlInputElement,
}

impl DomCheckbox {
    pub fn new(input: HtmlInputElement) -> Self {
        Self { input }
    }

    pub fn input(&self) -> &HtmlInputElement {
        &self.input
    }

    fn is_bound(&self) -> bool {
        self.input.has_attribute(BOUND_ATTRIBUTE)
    }
}

impl CheckboxNode for DomCheckbox {
    type Entry = DomEntry;

    fn is_checked(&self) -> bool {
        self.input.checked()
    }

    fn set_checked(&self, checked: bool) {
        self.input.set_checked(checked);
    }

    fn is_disabled(&self) -> bool {
        self.input.disabled()
    }

    fn set_disabled(&self, disabled: bool) {
        self.input.set_disabled(disabled);
    }

    fn cursor(&self) -> Option<String> {
        self.input
            .style()
            .get_property_value("cursor")
            .ok()
            .filter(|value| !value.is_empty())
    }

    fn set_cursor(&self, cursor: &str) {
        if let Err(err) = self.input.style().set_property("cursor", cursor) {
            log::warn!("Failed to set cursor: {:?}", err);
        }
    }

    fn list_entry(&self) -> Option<DomEntry> {
        self.input.closest("li").ok().flatten().map(DomEntry::new)
    }

    fn styling_target(&self) -> Option<DomEntry> {
        self.list_entry()
            .or_else(|| self.input.parent_element().map(DomEntry::new))
    }

    fn set_identity(&self, identity: &Identity) {
        self.input.set_id(identity.as_str());
        if let Err(err) = self.input.set_attribute(IDENTITY_ATTRIBUTE, identity.as_str()) {
            log::warn!("Failed to tag checkbox {}: {:?}", identity, err);
        }
    }
}

/// The live `document` at one navigation path.
///
/// Listeners created by [`listen`](RenderedDocument::listen) hold a weak
/// reference to the plugin, so dropping the plugin silences them.
#[derive(Debug, Clone)]
pub struct DomDocument {
    document: web_sys::Document,
    path: String,
    plugin: Weak<DomPlugin>,
}

impl DomDocument {
    pub fn new(document: web_sys::Document, path: impl Into<String>, plugin: Weak<DomPlugin>) -> Self {
        Self {
            document,
            path: path.into(),
            plugin,
        }
    }
}

impl RenderedDocument for DomDocument {
    type Checkbox = DomCheckbox;

    fn route_path(&self) -> String {
        self.path.clone()
    }

    fn checkboxes(&self) -> Vec<DomCheckbox> {
        let Ok(nodes) = self.document.query_selector_all(CHECKBOX_SELECTOR) else {
            log::warn!("Checkbox query failed");
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
            .map(DomCheckbox::new)
            .collect()
    }

    fn listen(&self, checkbox: &DomCheckbox, ordinal: usize) -> bool {
        if checkbox.is_bound() {
            return false;
        }

        let document = self.document.clone();
        let path = self.path.clone();
        let plugin = self.plugin.clone();
        let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            let Some(active) = plugin.upgrade() else {
                return;
            };
            let doc = DomDocument::new(document.clone(), path.clone(), plugin.clone());
            active.handle_change(&doc, ordinal);
        });

        let input = checkbox.input();
        if let Err(err) =
            input.add_event_listener_with_callback("change", handler.as_ref().unchecked_ref())
        {
            log::warn!("Failed to attach change listener: {:?}", err);
            return false;
        }
        // The element owns the listener from here on.
        handler.forget();
        input.set_attribute(BOUND_ATTRIBUTE, "").ok();
        true
    }
}
