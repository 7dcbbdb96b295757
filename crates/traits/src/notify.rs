//! Outbound notifications to the host and external integrations.

use std::cell::{Cell, RefCell};
use ticklist_types::ChangeEvent;

/// Receives the engine's outbound signals.
///
/// Delivery is fire-and-forget: the engine does not wait for or inspect any
/// acknowledgment.
pub trait Notifier {
    /// Called once per user toggle, after the new state has been saved.
    fn checkbox_changed(&self, event: &ChangeEvent);

    /// Stored state and the displayed document no longer agree; the host
    /// should reload the view.
    fn reload_requested(&self);
}

/// Writes notifications to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn checkbox_changed(&self, event: &ChangeEvent) {
        log::info!(
            "Checkbox {} on '{}' set to {} ({}/{} done)",
            event.identity,
            event.page_path,
            event.checked,
            event.progress.checked,
            event.progress.total
        );
    }

    fn reload_requested(&self) {
        log::info!("Checkbox state changed outside the view; reload required");
    }
}

/// Keeps every notification for later inspection.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    events: RefCell<Vec<ChangeEvent>>,
    reloads: Cell<usize>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ChangeEvent> {
        self.events.borrow().clone()
    }

    pub fn last_event(&self) -> Option<ChangeEvent> {
        self.events.borrow().last().cloned()
    }

    pub fn reloads(&self) -> usize {
        self.reloads.get()
    }
}

impl Notifier for RecordingNotifier {
    fn checkbox_changed(&self, event: &ChangeEvent) {
        self.events.borrow_mut().push(event.clone());
    }

    fn reload_requested(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn checkbox_changed(&self, event: &ChangeEvent) {
        (**self).checkbox_changed(event)
    }

    fn reload_requested(&self) {
        (**self).reload_requested()
    }
}
