//! Admin dashboard: employee CRUD plus department analytics.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount (and on Refresh) the employee list and both analytics reads are
//! fetched concurrently. Every successful create, update, or delete re-fetches
//! the analytics. Out-of-order responses are reconciled by `ResourceState`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::analytics_card::AnalyticsStrip;
use crate::components::employee_form::EmployeeFormPanel;
use crate::components::employee_table::EmployeeTable;
use crate::config::ApiConfig;
use crate::net::types::Employee;
use crate::pages::logout;
use crate::state::employees::{AnalyticsState, EmployeeForm, FormMode};
use crate::state::resource::ResourceState;
use crate::state::session::SessionStore;
use crate::util::auth::install_expiry_redirect;

/// Everything the dashboard's async actions touch.
#[derive(Clone)]
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
struct AdminDashboard {
    config: ApiConfig,
    session: SessionStore,
    employees: RwSignal<ResourceState<Employee>>,
    analytics: RwSignal<AnalyticsState>,
    form: RwSignal<EmployeeForm>,
    expired: RwSignal<bool>,
}

impl AdminDashboard {
    fn refresh(&self) {
        let Some(ticket) = self.employees.try_update(ResourceState::begin_refresh) else {
            return;
        };
        let Some(seq) = self.analytics.try_update(AnalyticsState::begin_fetch) else {
            return;
        };

        #[cfg(not(feature = "hydrate"))]
        let _ = (ticket, seq);

        #[cfg(feature = "hydrate")]
        {
            let this = self.clone();
            leptos::task::spawn_local(async move {
                use crate::net::api;

                let (list, counts, total) = futures::join!(
                    api::list_employees(&this.config, &this.session),
                    api::department_counts(&this.config, &this.session),
                    api::total_employees(&this.config, &this.session),
                );
                match list {
                    Ok(records) => {
                        this.employees.try_update(|s| s.apply_refresh(ticket, records));
                    }
                    Err(err) => {
                        let error = this.report("Failed to load employees", &err);
                        this.employees.try_update(|s| s.fail_refresh(ticket, error));
                    }
                }
                this.apply_analytics(seq, counts.and_then(|c| total.map(|t| (c, t))));
            });
        }
    }

    fn refresh_analytics(&self) {
        let Some(seq) = self.analytics.try_update(AnalyticsState::begin_fetch) else {
            return;
        };

        #[cfg(not(feature = "hydrate"))]
        let _ = seq;

        #[cfg(feature = "hydrate")]
        {
            let this = self.clone();
            leptos::task::spawn_local(async move {
                use crate::net::api;

                let (counts, total) = futures::join!(
                    api::department_counts(&this.config, &this.session),
                    api::total_employees(&this.config, &this.session),
                );
                this.apply_analytics(seq, counts.and_then(|c| total.map(|t| (c, t))));
            });
        }
    }

    #[cfg(feature = "hydrate")]
    fn apply_analytics(
        &self,
        seq: u64,
        outcome: Result<(Vec<crate::net::types::DepartmentCount>, u64), crate::net::api::ApiError>,
    ) {
        match outcome {
            Ok((departments, total)) => {
                self.analytics.try_update(|a| a.apply(seq, departments, total));
            }
            Err(err) => {
                let error = self.report("Failed to load analytics", &err);
                self.analytics.try_update(|a| a.fail(seq, error));
            }
        }
    }

    fn submit(&self) {
        let Some(submission) = self.form.try_update(EmployeeForm::begin_submit).flatten() else {
            return;
        };

        #[cfg(not(feature = "hydrate"))]
        let _ = submission;

        #[cfg(feature = "hydrate")]
        {
            let this = self.clone();
            leptos::task::spawn_local(async move {
                use crate::net::api;

                let crate::state::employees::Submission { seq, mode, input } = submission;
                let (action, outcome) = match mode {
                    FormMode::Create => (
                        "Failed to add employee",
                        api::create_employee(&this.config, &this.session, &input)
                            .await
                            .map(|record| this.employees.try_update(|s| s.apply_created(record))),
                    ),
                    FormMode::Edit(id) => (
                        "Failed to update employee",
                        api::update_employee(&this.config, &this.session, id, &input)
                            .await
                            .map(|record| this.employees.try_update(|s| s.apply_updated(record))),
                    ),
                };
                match outcome {
                    Ok(_) => {
                        this.form.try_update(|f| f.finish_submit(seq, Ok(())));
                        this.refresh_analytics();
                    }
                    Err(err) => {
                        let error = this.report(action, &err);
                        this.form.try_update(|f| f.finish_submit(seq, Err(error.message)));
                    }
                }
            });
        }
    }

    fn delete(&self, id: i64) {
        if !self.employees.try_update(|s| s.begin_delete(id)).unwrap_or(false) {
            return;
        }
        self.form.update(|f| {
            if f.mode == FormMode::Edit(id) {
                f.reset();
            }
        });

        #[cfg(feature = "hydrate")]
        {
            let this = self.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_employee(&this.config, &this.session, id).await {
                    Ok(()) => {
                        this.employees.try_update(|s| s.confirm_delete(id));
                        this.refresh_analytics();
                    }
                    Err(err) => {
                        let error = this.report("Failed to delete employee", &err);
                        this.employees.try_update(|s| s.rollback_delete(id, error));
                    }
                }
            });
        }
    }

    #[cfg(feature = "hydrate")]
    fn report(&self, action: &str, err: &crate::net::api::ApiError) -> crate::state::error::ViewError {
        log::warn!("{action}: {err}");
        let error = crate::state::error::ViewError::from_api(action, err);
        crate::util::auth::flag_if_expired(self.expired, &error);
        error
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let dashboard = AdminDashboard {
        config: expect_context::<ApiConfig>(),
        session: session.clone(),
        employees: RwSignal::new(ResourceState::default()),
        analytics: RwSignal::new(AnalyticsState::default()),
        form: RwSignal::new(EmployeeForm::default()),
        expired: RwSignal::new(false),
    };
    install_expiry_redirect(session.clone(), dashboard.expired, navigate.clone());

    let mount = dashboard.clone();
    Effect::new(move || mount.refresh());

    let employees = dashboard.employees;
    let analytics = dashboard.analytics;
    let form = dashboard.form;

    let submitter = dashboard.clone();
    let on_submit = Callback::new(move |()| submitter.submit());
    let deleter = dashboard.clone();
    let on_delete = Callback::new(move |id: i64| deleter.delete(id));
    let on_edit = Callback::new(move |employee: Employee| form.update(|f| f.start_edit(&employee)));
    let refresher = dashboard;
    let on_refresh = move |_| refresher.refresh();
    let on_logout = move |_| logout(&session, &navigate);

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header toolbar">
                <span class="toolbar__title">"Admin Dashboard"</span>
                <span class="toolbar__spacer"></span>
                <button class="btn" on:click=on_refresh disabled=move || employees.with(|s| s.loading)>
                    "Refresh"
                </button>
                <button class="btn" on:click=on_logout>"Logout"</button>
            </header>
            <AnalyticsStrip analytics/>
            <Show when=move || employees.with(|s| s.error.is_some())>
                <p class="dashboard-page__error">
                    {move || employees.with(|s| s.error.as_ref().map(|e| e.message.clone()).unwrap_or_default())}
                </p>
            </Show>
            <EmployeeFormPanel form on_submit/>
            <Show when=move || employees.with(|s| s.loading)>
                <p class="dashboard-page__status">"Loading employees..."</p>
            </Show>
            <EmployeeTable employees on_edit on_delete/>
        </div>
    }
}
