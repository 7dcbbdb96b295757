//! Reconciliation of a freshly rendered document with stored state.
//!
//! Runs once per render-complete event. Every checkbox gets an identity, is
//! made interactive, takes its stored state (or keeps the markup's), is
//! styled and gets a change listener. Identities stored for the page but
//! absent from the render are then dropped from the record.
//!
//! The [`Reconciler`] owns the item table of the latest render. The table is
//! rebuilt from scratch each run and is how toggles find their item again.

use crate::config::Config;
use crate::identity::assign_identity;
use crate::presentation;
use crate::store::StateStore;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashSet;
use ticklist_traits::{CheckboxNode, RenderedDocument, StateStorage};
use ticklist_types::{Identity, ScopeKey, StateRecord};

/// One checkbox of the current render.
#[derive(Debug, Clone)]
pub struct TrackedItem<C> {
    pub ordinal: usize,
    pub identity: Identity,
    pub checkbox: C,
}

/// Items of the current render, indexed by ordinal.
#[derive(Debug)]
pub struct RenderTable<C> {
    scope: Option<ScopeKey>,
    items: Vec<TrackedItem<C>>,
}

impl<C> Default for RenderTable<C> {
    fn default() -> Self {
        Self {
            scope: None,
            items: Vec::new(),
        }
    }
}

impl<C> RenderTable<C> {
    pub fn scope(&self) -> Option<&ScopeKey> {
        self.scope.as_ref()
    }

    pub fn get(&self, ordinal: usize) -> Option<&TrackedItem<C>> {
        self.items.get(ordinal)
    }

    pub fn items(&self) -> &[TrackedItem<C>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// What one reconciliation did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileSummary {
    pub items: usize,
    /// Items whose checked state came from the stored record.
    pub restored: usize,
    pub listeners_attached: usize,
    pub orphans_removed: usize,
}

#[derive(Debug)]
pub struct Reconciler<C> {
    table: RefCell<RenderTable<C>>,
}

impl<C> Default for Reconciler<C> {
    fn default() -> Self {
        Self {
            table: RefCell::new(RenderTable::default()),
        }
    }
}

impl<C: CheckboxNode + Clone> Reconciler<C> {
    pub fn new() -> Self {
        Default::default()
    }

    /// Aligns `doc` with the stored record for its page.
    pub fn reconcile<D, S>(&self, doc: &D, store: &StateStore<S>, config: &Config) -> ReconcileSummary
    where
        D: RenderedDocument<Checkbox = C>,
        S: StateStorage,
    {
        let mut table = self.table.borrow_mut();
        *table = RenderTable::default();

        let checkboxes = doc.checkboxes();
        if checkboxes.is_empty() {
            return ReconcileSummary::default();
        }

        let scope = store.scope_key(&doc.route_path());
        let record = store.load(&scope);
        let mut present = HashSet::with_capacity(checkboxes.len());
        let mut summary = ReconcileSummary {
            items: checkboxes.len(),
            ..Default::default()
        };

        for (ordinal, checkbox) in checkboxes.into_iter().enumerate() {
            let identity = assign_identity(&checkbox, ordinal);
            checkbox.set_identity(&identity);
            present.insert(identity.clone());

            presentation::activate(&checkbox);

            let checked = match record.get(&identity) {
                Some(stored) => {
                    checkbox.set_checked(stored);
                    summary.restored += 1;
                    stored
                }
                None => checkbox.is_checked(),
            };
            presentation::present(&checkbox, checked, config);

            if doc.listen(&checkbox, ordinal) {
                summary.listeners_attached += 1;
            }

            table.items.push(TrackedItem {
                ordinal,
                identity,
                checkbox,
            });
        }
        table.scope = Some(scope.clone());
        drop(table);

        if config.clean_orphaned_states {
            summary.orphans_removed = remove_orphans(store, &scope, &record, present);
        }

        log::debug!(
            "Reconciled {} checkbox(es) on '{}': {} restored, {} orphan(s) removed",
            summary.items,
            scope,
            summary.restored,
            summary.orphans_removed
        );
        summary
    }

    /// Runs `f` on the item at `ordinal` of the current render.
    pub fn with_item<R>(
        &self,
        ordinal: usize,
        f: impl FnOnce(&TrackedItem<C>, &ScopeKey) -> R,
    ) -> Option<R> {
        let table = self.table.borrow();
        let scope = table.scope.as_ref()?;
        table.items.get(ordinal).map(|item| f(item, scope))
    }

    /// Runs `f` on the whole table of the current render.
    pub fn with_table<R>(&self, f: impl FnOnce(&RenderTable<C>) -> R) -> R {
        f(&self.table.borrow())
    }
}

/// Rewrites the record without identities missing from `present` and
/// returns how many were dropped. Writes nothing when there is nothing to
/// drop. A failed rewrite leaves the record as it was and counts as zero.
fn remove_orphans<S: StateStorage>(
    store: &StateStore<S>,
    scope: &ScopeKey,
    record: &StateRecord,
    present: HashSet<Identity>,
) -> usize {
    let orphans = record.orphans(&present);
    if orphans.is_empty() {
        return 0;
    }
    log::debug!("Dropping orphaned checkbox states on '{}': {:?}", scope, orphans);
    match store.try_save(scope.as_str(), &record.retained(&present)) {
        Ok(()) => orphans.len(),
        Err(e) => {
            log::warn!("Failed to drop orphaned checkbox states on '{}': {}", scope, e);
            0
        }
    }
}
