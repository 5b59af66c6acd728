//! Asset controller: form and list on one side, the REST collection on the other.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every operation is one request followed by one re-render. There is no
//! cache, no optimistic update, and no retry. Overlapping operations are not
//! serialized; whichever list response lands last is what the user sees.
//! A search renders the filtered result once; the reload that follows any
//! create or delete always goes back to the full collection.
//!
//! ERROR HANDLING
//! ==============
//! Failures on every path are logged and returned, never surfaced in the UI.
//! A rejected mutation stops the flow (no form reset, no reload). A mutation
//! that completes with a non-success status is logged and treated as done.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::api::{Ack, AssetApi, HttpAssetApi};
use crate::net::error::{ApiError, status_message};
use crate::net::types::{Asset, AssetId, CreatedAsset};
use crate::state::assets::{AssetsState, FetchTracker};
use crate::state::form::AssetFormState;
use crate::state::search::SearchQuery;

/// What the controller needs from the rendering layer.
pub trait AssetView {
    fn read_form(&self) -> AssetFormState;
    fn reset_form(&self);
    /// Replace the rendered list with `assets`.
    fn render(&self, assets: Vec<Asset>);
    /// A list fetch started.
    fn begin_fetch(&self);
    /// A list fetch settled, successfully or not.
    fn end_fetch(&self);
}

/// Leptos-signal implementation of [`AssetView`].
#[derive(Clone, Copy, Debug)]
pub struct SignalView {
    pub assets: RwSignal<AssetsState>,
    pub fetches: RwSignal<FetchTracker>,
    pub form: RwSignal<AssetFormState>,
}

impl SignalView {
    pub fn new() -> Self {
        Self {
            assets: RwSignal::new(AssetsState::default()),
            fetches: RwSignal::new(FetchTracker::default()),
            form: RwSignal::new(AssetFormState::default()),
        }
    }
}

impl Default for SignalView {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetView for SignalView {
    fn read_form(&self) -> AssetFormState {
        self.form.get_untracked()
    }

    fn reset_form(&self) {
        self.form.update(AssetFormState::reset);
    }

    fn render(&self, assets: Vec<Asset>) {
        self.assets.update(|s| s.replace(assets));
    }

    fn begin_fetch(&self) {
        self.fetches.update(FetchTracker::begin);
    }

    fn end_fetch(&self) {
        self.fetches.update(FetchTracker::end);
    }
}

/// Controller wired to the browser: HTTP API plus signal-backed view.
pub type BrowserAssetClient = AssetClient<HttpAssetApi, SignalView>;

/// Owns the API handle and the view handle for the lifetime of the page.
#[derive(Clone, Debug)]
pub struct AssetClient<A, V> {
    api: A,
    view: V,
}

impl BrowserAssetClient {
    /// Build the browser controller from config, with fresh view signals.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(HttpAssetApi::new(config.base_url.clone()), SignalView::new())
    }
}

impl<A: AssetApi, V: AssetView> AssetClient<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self { api, view }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// First load after mount.
    ///
    /// # Errors
    ///
    /// Returns the logged [`ApiError`] if the list could not be fetched; the
    /// view keeps whatever it showed before.
    pub async fn initialize(&self) -> Result<(), ApiError> {
        log::info!("loading assets");
        self.reload().await
    }

    /// Fetch the full collection and render it.
    ///
    /// # Errors
    ///
    /// Returns the logged [`ApiError`] if the fetch fails.
    pub async fn reload(&self) -> Result<(), ApiError> {
        self.view.begin_fetch();
        let result = self.api.list().await;
        self.view.end_fetch();
        self.render_result("list", result)
    }

    /// Create from the values currently in the form.
    ///
    /// # Errors
    ///
    /// See [`AssetClient::create`].
    pub async fn submit(&self) -> Result<(), ApiError> {
        let form = self.view.read_form();
        self.create(form).await
    }

    /// Post `form` verbatim, then reset the form and reload.
    ///
    /// # Errors
    ///
    /// Returns the logged [`ApiError`] if the request was rejected (form left
    /// as typed, no reload) or if the follow-up reload failed.
    pub async fn create(&self, form: AssetFormState) -> Result<(), ApiError> {
        let body = form.to_new_asset();
        let ack = self.api.create(&body).await.inspect_err(|e| {
            log::error!("asset create failed: {e}");
        })?;

        log_ack("create", &ack);
        if ack.is_success() {
            if let Ok(created) = serde_json::from_str::<CreatedAsset>(&ack.body) {
                if let Some(id) = &created.asset.asset_id {
                    log::debug!("created asset {id}");
                }
            }
        }

        self.view.reset_form();
        self.reload().await
    }

    /// Delete `id`, then reload.
    ///
    /// # Errors
    ///
    /// Returns the logged [`ApiError`] if the request was rejected (no
    /// reload) or if the follow-up reload failed.
    pub async fn delete(&self, id: AssetId) -> Result<(), ApiError> {
        let ack = self.api.delete(&id).await.inspect_err(|e| {
            log::error!("asset delete {id} failed: {e}");
        })?;
        log_ack("delete", &ack);
        self.reload().await
    }

    /// Render the server's filtered result for `query` once. An empty query
    /// is a plain [`AssetClient::reload`]. Nothing about the query is kept:
    /// the next create or delete reloads the full collection.
    ///
    /// # Errors
    ///
    /// Returns the logged [`ApiError`] if the fetch fails; the view keeps
    /// what it showed before.
    pub async fn search(&self, query: SearchQuery) -> Result<(), ApiError> {
        if query.is_empty() {
            return self.reload().await;
        }
        self.view.begin_fetch();
        let result = self.api.search(&query).await;
        self.view.end_fetch();
        self.render_result("search", result)
    }

    fn render_result(&self, source: &str, result: Result<Vec<Asset>, ApiError>) -> Result<(), ApiError> {
        match result {
            Ok(assets) => {
                log::debug!("rendering {} assets from {source}", assets.len());
                self.view.render(assets);
                Ok(())
            }
            Err(e) if e.is_rejection() => {
                log::error!("asset {source} request rejected: {e}");
                Err(e)
            }
            Err(e) => {
                log::error!("asset {source} response unusable: {e}");
                Err(e)
            }
        }
    }
}

fn log_ack(action: &str, ack: &Ack) {
    if ack.is_success() {
        log::debug!("asset {action} completed with {}", ack.status);
    } else {
        log::warn!(
            "asset {action} returned {}: {}; reloading anyway",
            ack.status,
            status_message(ack.status, &ack.body)
        );
    }
}

/// Run a controller operation in the background; its error is already logged.
pub fn spawn_detached<F>(operation: F)
where
    F: std::future::Future<Output = Result<(), ApiError>> + 'static,
{
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let _ = operation.await;
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = operation;
    }
}
