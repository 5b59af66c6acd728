//! Filter inputs for the search endpoint.

use leptos::prelude::*;

use crate::controller::{BrowserAssetClient, spawn_detached};
use crate::state::search::SearchQuery;

/// Name / status / year filters. `Search` renders the filtered result once;
/// the next create or delete shows the full collection again. `Clear` empties
/// the inputs and reloads the full collection.
#[component]
pub fn SearchBar() -> impl IntoView {
    let client = expect_context::<BrowserAssetClient>();
    let draft = RwSignal::new(SearchQuery::default());

    let run_search = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            let query = draft.get_untracked();
            spawn_detached(async move { client.search(query).await });
        }
    };
    let clear = move |_| {
        draft.set(SearchQuery::default());
        let client = client.clone();
        spawn_detached(async move { client.search(SearchQuery::default()).await });
    };

    view! {
        <div class="search-bar">
            <input
                class="search-bar__input"
                type="text"
                placeholder="Name"
                prop:value=move || draft.with(|q| q.name.clone())
                on:input=move |ev| draft.update(|q| q.name = event_target_value(&ev))
            />
            <input
                class="search-bar__input"
                type="text"
                placeholder="Status"
                prop:value=move || draft.with(|q| q.status.clone())
                on:input=move |ev| draft.update(|q| q.status = event_target_value(&ev))
            />
            <input
                class="search-bar__input"
                type="number"
                placeholder="Year"
                prop:value=move || draft.with(|q| q.year.clone())
                on:input=move |ev| draft.update(|q| q.year = event_target_value(&ev))
            />
            <button class="btn" type="button" on:click=run_search>
                "Search"
            </button>
            <button class="btn" type="button" on:click=clear>
                "Clear"
            </button>
        </div>
    }
}
