//! Self-service profile form for the employee dashboard.

use leptos::prelude::*;

use crate::components::field_input::FieldInput;
use crate::state::employees::DraftField;
use crate::state::profile::ProfileState;

#[component]
pub fn ProfileFormPanel(state: RwSignal<ProfileState>, on_submit: Callback<()>) -> impl IntoView {
    let fields = DraftField::PROFILE
        .into_iter()
        .map(|field| {
            view! {
                <FieldInput
                    field=field
                    value=Signal::derive(move || state.with(|s| s.draft.field(field).to_owned()))
                    on_input=Callback::new(move |value: String| state.update(|s| s.draft.set_field(field, value)))
                />
            }
        })
        .collect::<Vec<_>>();

    view! {
        <form
            class="profile-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <h2 class="profile-form__title">"My Profile"</h2>
            <div class="profile-form__grid">{fields}</div>
            <button class="btn btn--primary" type="submit" disabled=move || state.with(|s| s.saving)>
                {move || if state.with(|s| s.saving) { "Saving..." } else { "Update Profile" }}
            </button>
        </form>
    }
}
