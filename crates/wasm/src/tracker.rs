//! The docsify plugin, the `CheckboxTracker` JS class and the page globals.

use crate::config::{config_from_js, host_config};
use crate::dom::{DomCheckbox, DomDocument};
use crate::error::TicklistError;
use crate::interop::{from_js, to_js};
use crate::notifier::DomNotifier;
use crate::storage::LocalStorage;
use js_sys::{Array, Function, Reflect};
use std::rc::Rc;
use ticklist_core::{CheckboxPlugin, Config, ReconcileSummary, StateExport};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// The engine wired to the browser.
pub type DomPlugin = CheckboxPlugin<LocalStorage, DomNotifier, DomCheckbox>;

/// Name the plugin function is exposed under when docsify is not configured.
pub const STANDALONE_GLOBAL: &str = "DocsifyInteractiveCheckboxes";

/// Checkbox persistence for the current page.
///
/// ```javascript
/// const tracker = new CheckboxTracker({ storagePrefix: "notes-" });
/// tracker.reconcile(location.hash.slice(1));
/// console.log(tracker.progress());
/// ```
#[wasm_bindgen]
pub struct CheckboxTracker {
    plugin: Rc<DomPlugin>,
}

#[wasm_bindgen]
impl CheckboxTracker {
    /// Creates a tracker from an options object (`undefined` for defaults).
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<CheckboxTracker, JsValue> {
        let config = config_from_js(options)?;
        Ok(Self::with_config(config))
    }

    /// Reconciles the current document as the page at `path`.
    pub fn reconcile(&self, path: &str) -> Result<JsValue, JsValue> {
        let summary = render(&self.plugin, path)?;
        Ok(to_js(&summary)?)
    }

    /// Checked/total counts of the checkboxes in the document.
    pub fn progress(&self) -> Result<JsValue, JsValue> {
        let doc = self.document("")?;
        Ok(to_js(&self.plugin.progress(&doc))?)
    }

    /// Removes stored state under `prefix` (default: the configured prefix)
    /// and reloads the page. Returns the number of removed records.
    #[wasm_bindgen(js_name = clearAll)]
    pub fn clear_all(&self, prefix: Option<String>) -> usize {
        self.plugin.clear_all(prefix.as_deref())
    }

    /// All stored records under the configured prefix, keyed by storage key.
    #[wasm_bindgen(js_name = exportAll)]
    pub fn export_all(&self) -> Result<JsValue, JsValue> {
        Ok(to_js(&self.plugin.export_all())?)
    }

    /// Writes an export back; reloads the page on success.
    #[wasm_bindgen(js_name = importAll)]
    pub fn import_all(&self, data: JsValue) -> bool {
        match from_js::<StateExport>(data) {
            Ok(export) => self.plugin.import_all(&export),
            Err(err) => {
                log::warn!("Refusing to import checkbox states: {}", err);
                false
            }
        }
    }
}

impl CheckboxTracker {
    pub fn with_config(config: Config) -> Self {
        Self {
            plugin: Rc::new(DomPlugin::new(config, LocalStorage::new(), DomNotifier)),
        }
    }

    /// A tracker configured from `window.$docsify.interactiveCheckboxes`.
    pub fn from_host() -> Self {
        Self::with_config(host_config())
    }

    pub fn plugin(&self) -> &Rc<DomPlugin> {
        &self.plugin
    }

    pub fn document(&self, path: &str) -> Result<DomDocument, TicklistError> {
        document_at(&self.plugin, path)
    }
}

fn document_at(plugin: &Rc<DomPlugin>, path: &str) -> Result<DomDocument, TicklistError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| TicklistError::dom("no document available"))?;
    Ok(DomDocument::new(document, path, Rc::downgrade(plugin)))
}

fn render(plugin: &Rc<DomPlugin>, path: &str) -> Result<ReconcileSummary, TicklistError> {
    let doc = document_at(plugin, path)?;
    Ok(plugin.on_render_complete(&doc))
}

/// `vm.route.path`, or empty when docsify has no route yet.
fn route_path(vm: &JsValue) -> String {
    Reflect::get(vm, &"route".into())
        .ok()
        .filter(|route| route.is_object())
        .and_then(|route| Reflect::get(&route, &"path".into()).ok())
        .and_then(|path| path.as_string())
        .unwrap_or_default()
}

/// Called by docsify with its hook registry and view model.
fn attach(hook: JsValue, vm: JsValue) -> Result<(), TicklistError> {
    let tracker = CheckboxTracker::from_host();
    let plugin = Rc::clone(tracker.plugin());

    let done_each = Closure::<dyn FnMut()>::new(move || {
        let path = route_path(&vm);
        match render(&plugin, &path) {
            Ok(summary) => log::debug!("Reconciled '{}': {:?}", path, summary),
            Err(err) => log::warn!("Checkbox reconciliation failed: {}", err),
        }
    })
    .into_js_value();

    let register: Function = Reflect::get(&hook, &"doneEach".into())?.dyn_into()?;
    register.call1(&hook, &done_each)?;
    Ok(())
}

fn docsify_plugin() -> JsValue {
    Closure::<dyn FnMut(JsValue, JsValue)>::new(|hook, vm| {
        if let Err(err) = attach(hook, vm) {
            log::warn!("Failed to attach checkbox plugin: {}", err);
        }
    })
    .into_js_value()
}

fn set_global(window: &web_sys::Window, name: &str, value: &JsValue) -> Result<(), TicklistError> {
    Reflect::set(window, &name.into(), value)?;
    Ok(())
}

fn install_globals(window: &web_sys::Window) -> Result<(), TicklistError> {
    let progress = Closure::<dyn Fn() -> JsValue>::new(|| {
        CheckboxTracker::from_host()
            .progress()
            .unwrap_or(JsValue::UNDEFINED)
    });
    set_global(window, "getDocsifyCheckboxProgress", &progress.into_js_value())?;

    let clear = Closure::<dyn Fn(Option<String>)>::new(|prefix: Option<String>| {
        CheckboxTracker::from_host().clear_all(prefix);
    });
    set_global(window, "clearAllDocsifyCheckboxes", &clear.into_js_value())?;

    let export = Closure::<dyn Fn() -> JsValue>::new(|| {
        CheckboxTracker::from_host()
            .export_all()
            .unwrap_or(JsValue::UNDEFINED)
    });
    set_global(window, "exportDocsifyCheckboxStates", &export.into_js_value())?;

    let import = Closure::<dyn Fn(JsValue) -> bool>::new(|data: JsValue| {
        CheckboxTracker::from_host().import_all(data)
    });
    set_global(window, "importDocsifyCheckboxStates", &import.into_js_value())?;

    Ok(())
}

/// Installs the page globals and registers the docsify plugin.
///
/// The plugin is pushed onto `window.$docsify.plugins` (created if missing).
/// Without `window.$docsify` it is exposed as
/// `window.DocsifyInteractiveCheckboxes` for manual use.
#[wasm_bindgen]
pub fn register() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| TicklistError::dom("no window available"))?;
    install_globals(&window)?;

    let plugin = docsify_plugin();
    let docsify = Reflect::get(&window, &"$docsify".into())?;
    if docsify.is_object() {
        let plugins = Reflect::get(&docsify, &"plugins".into())?;
        let plugins: Array = if Array::is_array(&plugins) {
            plugins.unchecked_into()
        } else {
            let fresh = Array::new();
            Reflect::set(&docsify, &"plugins".into(), &fresh)?;
            fresh
        };
        plugins.push(&plugin);
    } else {
        set_global(&window, STANDALONE_GLOBAL, &plugin)?;
    }
    Ok(())
}
