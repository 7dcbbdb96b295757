//! Outbound notifications as DOM events.

use crate::interop::to_js;
use serde::Serialize;
use ticklist_traits::Notifier;
use ticklist_types::ChangeEvent;
use web_sys::{CustomEvent, CustomEventInit};

/// Name of the event dispatched on `document` after every toggle.
pub const CHANGE_EVENT_NAME: &str = "docsify-checkbox-change";

/// `detail` of the change event.
///
/// `checkboxId` and `page` mirror `identity` and `pagePath` for listeners
/// written against the older payload.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangeDetail<'a> {
    #[serde(flatten)]
    event: &'a ChangeEvent,
    checkbox_id: &'a str,
    page: &'a str,
}

/// Dispatches `docsify-checkbox-change` and reloads the page on request.
#[derive(Debug, Default, Clone, Copy)]
pub struct DomNotifier;

impl Notifier for DomNotifier {
    fn checkbox_changed(&self, event: &ChangeEvent) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let detail = ChangeDetail {
            event,
            checkbox_id: event.identity.as_str(),
            page: &event.page_path,
        };
        let detail = match to_js(&detail) {
            Ok(detail) => detail,
            Err(err) => {
                log::warn!("Failed to build change event detail: {}", err);
                return;
            }
        };

        let init = CustomEventInit::new();
        init.set_detail(&detail);
        match CustomEvent::new_with_event_init_dict(CHANGE_EVENT_NAME, &init) {
            Ok(custom) => {
                if let Err(err) = document.dispatch_event(&custom) {
                    log::warn!("Failed to dispatch {}: {:?}", CHANGE_EVENT_NAME, err);
                }
            }
            Err(err) => log::warn!("Failed to create {}: {:?}", CHANGE_EVENT_NAME, err),
        }
    }

    fn reload_requested(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().reload() {
            log::warn!("Page reload failed: {:?}", err);
        }
    }
}
