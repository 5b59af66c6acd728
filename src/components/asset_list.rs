//! List view rebuilt from the last fetched assets.

use leptos::prelude::*;

use crate::components::asset_row::AssetRow;
use crate::controller::{BrowserAssetClient, spawn_detached};
use crate::net::types::AssetId;
use crate::state::assets::{AssetsState, FetchTracker};

/// `<div id="assetList">` with one [`AssetRow`] per asset, in server order.
#[component]
pub fn AssetList() -> impl IntoView {
    let client = expect_context::<BrowserAssetClient>();
    let assets = client.view().assets;
    let fetches = client.view().fetches;

    let on_delete = Callback::new(move |id: AssetId| {
        let client = client.clone();
        spawn_detached(async move { client.delete(id).await });
    });

    view! {
        <p class="asset-list__status">
            {move || if fetches.with(FetchTracker::is_loading) { "Loading..." } else { "" }}
        </p>
        <div id="assetList" class="asset-list">
            {move || {
                assets
                    .with(AssetsState::rows)
                    .into_iter()
                    .map(|row| view! { <AssetRow row=row on_delete=on_delete/> })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
