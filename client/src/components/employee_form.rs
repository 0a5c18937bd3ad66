//! Add/edit employee form.
//!
//! DESIGN
//! ======
//! The same panel serves both modes; `EmployeeForm::mode` picks the title,
//! the button label, and which request the page sends on submit.

use leptos::prelude::*;

use crate::components::field_input::FieldInput;
use crate::state::employees::{DraftField, EmployeeForm, FormMode};

#[component]
pub fn EmployeeFormPanel(form: RwSignal<EmployeeForm>, on_submit: Callback<()>) -> impl IntoView {
    let fields = DraftField::EMPLOYEE
        .into_iter()
        .map(|field| {
            view! {
                <FieldInput
                    field=field
                    value=Signal::derive(move || form.with(|f| f.draft.field(field).to_owned()))
                    on_input=Callback::new(move |value: String| form.update(|f| f.draft.set_field(field, value)))
                />
            }
        })
        .collect::<Vec<_>>();

    let editing = move || matches!(form.with(|f| f.mode), FormMode::Edit(_));

    view! {
        <form
            class="employee-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <h2 class="employee-form__title">{move || form.with(EmployeeForm::title)}</h2>
            <div class="employee-form__grid">{fields}</div>
            <Show when=move || form.with(|f| f.error.is_some())>
                <p class="employee-form__error">{move || form.with(|f| f.error.clone().unwrap_or_default())}</p>
            </Show>
            <div class="employee-form__actions">
                <button class="btn btn--primary" type="submit" disabled=move || form.with(|f| f.submitting)>
                    {move || form.with(EmployeeForm::submit_label)}
                </button>
                <Show when=editing>
                    <button class="btn" type="button" on:click=move |_| form.update(EmployeeForm::reset)>
                        "Cancel"
                    </button>
                </Show>
            </div>
        </form>
    }
}
