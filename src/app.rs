//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{asset_form::AssetForm, asset_list::AssetList, search_bar::SearchBar};
use crate::config::ClientConfig;
use crate::controller::{BrowserAssetClient, spawn_detached};

/// Root application component.
///
/// Builds the one `BrowserAssetClient` for the page, provides it to every
/// component through context, and kicks off the initial list load.
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    provide_meta_context();

    let client = BrowserAssetClient::from_config(&config);
    provide_context(client.clone());

    spawn_detached(async move { client.initialize().await });

    view! {
        <Title text="Asset Management"/>
        <main class="assets-page">
            <header class="assets-page__header">
                <h1>"Assets"</h1>
            </header>
            <section class="assets-page__create">
                <AssetForm/>
            </section>
            <section class="assets-page__list">
                <SearchBar/>
                <AssetList/>
            </section>
        </main>
    }
}
