//! WebAssembly bindings for ticklist.
//!
//! Turns the static task-list checkboxes of a docsify page into interactive,
//! persistent ones. The platform-agnostic engine in `ticklist-core` does the
//! work; this crate supplies the browser side of its seams:
//!
//! - [`storage`] - `window.localStorage` as [`StateStorage`](ticklist_traits::StateStorage)
//! - [`dom`] - the live document behind the document traits
//! - [`notifier`] - `docsify-checkbox-change` events and page reloads
//! - [`config`] - options from `window.$docsify.interactiveCheckboxes`
//! - [`tracker`] - the `CheckboxTracker` class, the docsify plugin and page globals
//! - [`error`] - error types with JavaScript interop
//!
//! # Example
//!
//! ```javascript
//! window.$docsify = {
//!   interactiveCheckboxes: { storagePrefix: "my-notes-", fadeOpacity: 0.5 },
//! };
//! // Loading the module registers the plugin.
//! await import("./ticklist_wasm.js").then((m) => m.default());
//!
//! document.addEventListener("docsify-checkbox-change", (e) => {
//!   console.log(e.detail.identity, e.detail.progress.percentage);
//! });
//! ```
//!
//! After registration the page also exposes `getDocsifyCheckboxProgress`,
//! `clearAllDocsifyCheckboxes`, `exportDocsifyCheckboxStates` and
//! `importDocsifyCheckboxStates` on `window`.

pub mod config;
pub mod dom;
mod error;
mod interop;
pub mod notifier;
pub mod storage;
pub mod tracker;

pub use dom::{DomCheckbox, DomDocument, DomEntry};
pub use error::{ErrorCode, TicklistError};
pub use notifier::DomNotifier;
pub use storage::LocalStorage;
pub use tracker::{CheckboxTracker, DomPlugin, register};

use wasm_bindgen::prelude::*;

/// Initialize the WASM module.
///
/// Sets up panic messages and logging, then registers the plugin. It is
/// called automatically when using wasm-pack's generated JavaScript.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    #[cfg(feature = "console-logging")]
    {
        console_log::init_with_level(log::Level::Debug).ok();
    }

    if let Err(err) = register() {
        log::warn!("Checkbox plugin registration failed: {:?}", err);
    }
}

/// Get the version of the ticklist-wasm library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
