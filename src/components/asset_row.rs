//! One rendered asset block.

use leptos::prelude::*;

use crate::net::types::AssetId;
use crate::state::assets::AssetRowView;

/// Name, condition, install date and location, plus a delete button.
///
/// The button's listener carries the typed id; nothing is interpolated into
/// markup. Rows the server sent without an id get a disabled button.
#[component]
pub fn AssetRow(row: AssetRowView, on_delete: Callback<AssetId>) -> impl IntoView {
    let AssetRowView { name, condition, installed, location, delete_target } = row;
    let data_id = delete_target.as_ref().map(ToString::to_string);
    let disabled = delete_target.is_none();

    view! {
        <div class="asset-row" data-asset-id=data_id>
            <strong class="asset-row__name">{name}</strong>
            " "
            <span class="asset-row__condition">{condition}</span>
            <br/>
            <span class="asset-row__installed">{installed}</span>
            <br/>
            <span class="asset-row__location">{location}</span>
            <button
                class="btn btn--danger asset-row__delete"
                type="button"
                disabled=disabled
                on:click=move |_| {
                    if let Some(id) = delete_target.clone() {
                        on_delete.run(id);
                    }
                }
            >
                "Delete"
            </button>
            <hr/>
        </div>
    }
}
