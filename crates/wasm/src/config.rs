//! Reading plugin options from the host page.

use crate::error::TicklistError;
use crate::interop::from_js;
use ticklist_core::Config;
use wasm_bindgen::JsValue;

/// Options from `window.$docsify.interactiveCheckboxes`.
///
/// Missing options give the defaults. Options that are not an object are
/// logged and ignored.
pub fn host_config() -> Config {
    let options = web_sys::window()
        .and_then(|window| js_sys::Reflect::get(&window, &"$docsify".into()).ok())
        .filter(|docsify| docsify.is_object())
        .and_then(|docsify| js_sys::Reflect::get(&docsify, &"interactiveCheckboxes".into()).ok())
        .unwrap_or(JsValue::UNDEFINED);

    config_from_js(options).unwrap_or_else(|err| {
        log::warn!("Ignoring invalid checkbox options: {}", err);
        Config::default()
    })
}

/// Merges a JS options object over the defaults; `undefined` and `null`
/// mean defaults. A mistyped key keeps its default, see
/// [`Config::from_options`].
pub fn config_from_js(options: JsValue) -> Result<Config, TicklistError> {
    if options.is_undefined() || options.is_null() {
        return Ok(Config::default());
    }
    let options: serde_json::Value = from_js(options)?;
    Ok(Config::from_options(&options)?)
}
