//! Labelled input bound to one draft field.

use leptos::prelude::*;

use crate::state::employees::DraftField;

#[component]
pub fn FieldInput(field: DraftField, #[prop(into)] value: Signal<String>, on_input: Callback<String>) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{field.label()}</span>
            <input
                class="form-field__input"
                type=field.input_type()
                step="any"
                required=true
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}
