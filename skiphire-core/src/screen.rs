//! State container for the skip selection step.
//!
//! The screen owns the loaded catalog and the current [`Selection`]. It never
//! routes by itself: `proceed` and `back` are forwarded to a
//! [`NavigationPort`] supplied by the host.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::model::{CatalogQuery, SkipId, SkipOffering};
use crate::ports::{CatalogPort, NavigationPort, PortError};
use crate::selection::Selection;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Progress of the catalog load.
pub enum LoadState {
    /// Fetch outstanding; selection input is not accepted.
    Loading,
    /// Catalog available (possibly empty).
    Ready,
    /// Fetch failed with the given message; a retry restarts the load.
    Failed(String),
}

/// Catalog, selection, and navigation for one visit of the skip selection step.
pub struct SkipSelectionScreen {
    navigator: Arc<dyn NavigationPort>,
    load_state: LoadState,
    offerings: Vec<SkipOffering>,
    selection: Selection,
}

impl SkipSelectionScreen {
    /// Create a screen in the loading state, bound to a navigation host.
    #[must_use]
    pub fn new(navigator: Arc<dyn NavigationPort>) -> Self {
        Self {
            navigator,
            load_state: LoadState::Loading,
            offerings: Vec::new(),
            selection: Selection::NoneSelected,
        }
    }

    /// Current load progress.
    #[must_use]
    pub const fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// Whether the catalog fetch is still outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.load_state, LoadState::Loading)
    }

    /// Selectable offerings, in source order. Empty until loaded.
    #[must_use]
    pub fn offerings(&self) -> &[SkipOffering] {
        &self.offerings
    }

    /// Current selection state.
    #[must_use]
    pub const fn selection(&self) -> Selection {
        self.selection
    }

    /// The chosen offering, if any.
    #[must_use]
    pub fn selected_offering(&self) -> Option<&SkipOffering> {
        let id = self.selection.selected()?;
        self.offerings.iter().find(|offering| offering.id == id)
    }

    /// Fetch the catalog from `port` and apply the result.
    pub async fn load(&mut self, port: &dyn CatalogPort, query: &CatalogQuery) {
        self.restart_loading();
        info!(source = port.name(), %query, "loading skip catalog");
        let result = port.offerings(query).await;
        self.complete_load(result);
    }

    /// Discard catalog and selection and go back to the loading state.
    pub fn restart_loading(&mut self) {
        self.load_state = LoadState::Loading;
        self.offerings.clear();
        self.selection.clear();
    }

    /// Apply the outcome of a catalog fetch.
    ///
    /// Forbidden offerings and offerings with a negative price or VAT rate
    /// are dropped, and duplicate identifiers keep their first occurrence.
    /// Returns `false` when no load was outstanding, in which case the
    /// result is ignored.
    pub fn complete_load(&mut self, result: Result<Vec<SkipOffering>, PortError>) -> bool {
        if !self.is_loading() {
            debug!("ignoring catalog result, no load outstanding");
            return false;
        }

        match result {
            Ok(offerings) => {
                let received = offerings.len();
                let mut seen = HashSet::new();
                self.offerings = offerings
                    .into_iter()
                    .filter(|offering| {
                        if offering.forbidden {
                            debug!(id = %offering.id, "skipping forbidden offering");
                            return false;
                        }
                        if !offering.has_valid_pricing() {
                            warn!(id = %offering.id, "skipping offering with negative price or VAT");
                            return false;
                        }
                        if !seen.insert(offering.id) {
                            warn!(id = %offering.id, "skipping duplicate offering");
                            return false;
                        }
                        true
                    })
                    .collect();
                info!(received, selectable = self.offerings.len(), "skip catalog loaded");
                self.load_state = LoadState::Ready;
            }
            Err(err) => {
                warn!(error = %err, "skip catalog load failed");
                self.load_state = LoadState::Failed(err.to_string());
            }
        }
        true
    }

    /// Toggle the offering `id`. Returns `false` while loading or when `id`
    /// is not in the catalog.
    pub fn toggle(&mut self, id: SkipId) -> bool {
        if self.load_state != LoadState::Ready {
            return false;
        }
        if !self.offerings.iter().any(|offering| offering.id == id) {
            debug!(%id, "toggle for unknown offering ignored");
            return false;
        }
        self.selection.toggle(id);
        debug!(selection = ?self.selection, "selection changed");
        true
    }

    /// Advance to the next step with the chosen offering.
    ///
    /// Sends exactly one signal when an offering is chosen and none
    /// otherwise. Returns whether a signal was sent.
    pub fn proceed(&self) -> bool {
        let Some(id) = self.selection.selected() else {
            return false;
        };
        info!(%id, "continuing with selected skip");
        self.navigator.advance(id);
        true
    }

    /// Return to the previous step, whatever the selection.
    pub fn back(&self) {
        info!("returning to previous step");
        self.navigator.back();
    }
}
