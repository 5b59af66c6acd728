//! Creation form bound to `AssetFormState`.

use leptos::prelude::*;

use crate::controller::{BrowserAssetClient, spawn_detached};
use crate::state::form::{AssetFormState, FormField};

/// `<form id="assetForm">` with one input per asset field.
///
/// Submit is intercepted so the page never navigates; the controller posts
/// the current values and resets them once the request completes.
#[component]
pub fn AssetForm() -> impl IntoView {
    let client = expect_context::<BrowserAssetClient>();
    let form = client.view().form;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let client = client.clone();
        spawn_detached(async move { client.submit().await });
    };

    view! {
        <form id="assetForm" class="asset-form" on:submit=on_submit>
            {FormField::ALL
                .into_iter()
                .map(|field| view! { <FormInput field=field form=form/> })
                .collect::<Vec<_>>()}
            <button class="btn btn--primary asset-form__submit" type="submit">
                "Add Asset"
            </button>
        </form>
    }
}

#[component]
fn FormInput(field: FormField, form: RwSignal<AssetFormState>) -> impl IntoView {
    view! {
        <label class="asset-form__label" for=field.dom_id()>
            {field.label()}
        </label>
        <input
            class="asset-form__input"
            id=field.dom_id()
            name=field.dom_id()
            type=field.input_type()
            required=field.required()
            prop:value=move || form.with(|f| f.get(field).to_owned())
            on:input=move |ev| {
                let value = event_target_value(&ev);
                form.update(|f| f.set(field, value));
            }
        />
    }
}
