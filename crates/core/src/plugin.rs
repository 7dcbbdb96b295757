//! The plugin handle tying configuration, storage and notifications together.

use crate::bulk::StateExport;
use crate::config::Config;
use crate::presentation;
use crate::progress::progress;
use crate::reconcile::{ReconcileSummary, Reconciler, RenderTable};
use crate::store::StateStore;
use ticklist_traits::{CheckboxNode, Notifier, RenderedDocument, StateStorage};
use ticklist_types::{ChangeEvent, Progress};

/// An initialized checkbox plugin.
///
/// The host delivers its render-complete events through
/// [`on_render_complete`](Self::on_render_complete) and routes each user
/// toggle to [`handle_change`](Self::handle_change) with the ordinal given to
/// [`RenderedDocument::listen`].
///
/// # Example
///
/// ```ignore
/// let plugin = CheckboxPlugin::new(Config::default(), InMemoryStorage::new(), LogNotifier);
/// plugin.on_render_complete(&doc);
/// // user ticks the first box
/// plugin.handle_change(&doc, 0);
/// ```
#[derive(Debug)]
pub struct CheckboxPlugin<S, N, C> {
    config: Config,
    store: StateStore<S>,
    notifier: N,
    reconciler: Reconciler<C>,
}

impl<S, N, C> CheckboxPlugin<S, N, C>
where
    S: StateStorage,
    N: Notifier,
    C: CheckboxNode + Clone,
{
    pub fn new(config: Config, storage: S, notifier: N) -> Self {
        let config = config.validated();
        let store = StateStore::new(storage, config.storage_prefix.clone());
        Self {
            config,
            store,
            notifier,
            reconciler: Reconciler::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &StateStore<S> {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Reconciles a freshly rendered document.
    pub fn on_render_complete<D>(&self, doc: &D) -> ReconcileSummary
    where
        D: RenderedDocument<Checkbox = C>,
    {
        self.reconciler.reconcile(doc, &self.store, &self.config)
    }

    /// Handles a user toggle of the checkbox at `ordinal`.
    ///
    /// Restyles the entry, persists the new state into a freshly loaded
    /// record and emits a [`ChangeEvent`]. Returns `None` when `ordinal` is not
    /// part of the current render.
    pub fn handle_change<D>(&self, doc: &D, ordinal: usize) -> Option<ChangeEvent>
    where
        D: RenderedDocument<Checkbox = C>,
    {
        let changed = self.reconciler.with_item(ordinal, |item, scope| {
            let checked = item.checkbox.is_checked();
            presentation::present(&item.checkbox, checked, &self.config);

            let mut record = self.store.load(scope);
            record.insert(&item.identity, checked);
            self.store.save(scope, &record);

            (item.identity.clone(), checked, scope.path().to_string())
        });

        let Some((identity, checked, page_path)) = changed else {
            log::warn!("Change reported for unknown checkbox #{}", ordinal);
            return None;
        };

        let event = ChangeEvent {
            identity,
            checked,
            page_path,
            progress: progress(doc),
        };
        self.notifier.checkbox_changed(&event);
        Some(event)
    }

    /// Sets the checkbox at `ordinal` programmatically and handles it as a
    /// user toggle.
    pub fn set_checked<D>(&self, doc: &D, ordinal: usize, checked: bool) -> Option<ChangeEvent>
    where
        D: RenderedDocument<Checkbox = C>,
    {
        self.reconciler
            .with_item(ordinal, |item, _| item.checkbox.set_checked(checked))?;
        self.handle_change(doc, ordinal)
    }

    /// Progress of the live document.
    pub fn progress<D: RenderedDocument>(&self, doc: &D) -> Progress {
        progress(doc)
    }

    /// Runs `f` on the item table of the latest render.
    pub fn with_table<R>(&self, f: impl FnOnce(&RenderTable<C>) -> R) -> R {
        self.reconciler.with_table(f)
    }

    /// Deletes all stored state under `prefix` (default: the configured one)
    /// and asks the host to reload.
    pub fn clear_all(&self, prefix: Option<&str>) -> usize {
        let removed = self.store.clear_all(prefix);
        self.notifier.reload_requested();
        removed
    }

    pub fn export_all(&self) -> StateExport {
        self.store.export_all()
    }

    /// Imports `data`; on success asks the host to reload.
    pub fn import_all(&self, data: &StateExport) -> bool {
        let imported = self.store.import_all(data);
        if imported {
            self.notifier.reload_requested();
        }
        imported
    }
}
