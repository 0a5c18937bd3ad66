//! Employee dashboard: view and edit one's own profile.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::profile_form::ProfileFormPanel;
use crate::config::ApiConfig;
use crate::pages::logout;
use crate::state::profile::ProfileState;
use crate::state::session::SessionStore;
use crate::util::auth::install_expiry_redirect;

#[derive(Clone)]
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
struct EmployeeDashboard {
    config: ApiConfig,
    session: SessionStore,
    profile: RwSignal<ProfileState>,
    expired: RwSignal<bool>,
}

impl EmployeeDashboard {
    fn load(&self) {
        self.profile.update(|p| p.loading = true);

        #[cfg(feature = "hydrate")]
        {
            let this = self.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_profile(&this.config, &this.session).await {
                    Ok(profile) => {
                        this.profile.try_update(|p| p.apply_profile(profile));
                    }
                    Err(err) => {
                        let error = this.report("Failed to load profile", &err);
                        this.profile.try_update(|p| p.fail(error));
                    }
                }
            });
        }
    }

    fn save(&self) {
        let Some(input) = self.profile.try_update(ProfileState::begin_save).flatten() else {
            return;
        };

        #[cfg(not(feature = "hydrate"))]
        let _ = input;

        #[cfg(feature = "hydrate")]
        {
            let this = self.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_profile(&this.config, &this.session, &input).await {
                    Ok(profile) => {
                        this.profile.try_update(|p| {
                            p.apply_profile(profile);
                            p.notice = Some("Profile updated".to_owned());
                        });
                    }
                    Err(err) => {
                        let error = this.report("Failed to update profile", &err);
                        this.profile.try_update(|p| p.fail(error));
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
pub fn EmployeeDashboardPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let dashboard = EmployeeDashboard {
        config: expect_context::<ApiConfig>(),
        session: session.clone(),
        profile: RwSignal::new(ProfileState::default()),
        expired: RwSignal::new(false),
    };
    install_expiry_redirect(session.clone(), dashboard.expired, navigate.clone());

    let profile = dashboard.profile;
    let mount = dashboard.clone();
    Effect::new(move || mount.load());

    let on_submit = Callback::new(move |()| dashboard.save());
    let on_logout = move |_| logout(&session, &navigate);

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header toolbar">
                <span class="toolbar__title">"Employee Dashboard"</span>
                <span class="toolbar__spacer"></span>
                <button class="btn" on:click=on_logout>"Logout"</button>
            </header>
            <Show when=move || profile.with(|p| p.loading)>
                <p class="dashboard-page__status">"Loading profile..."</p>
            </Show>
            <Show when=move || profile.with(|p| p.error.is_some())>
                <p class="dashboard-page__error">
                    {move || profile.with(|p| p.error.as_ref().map(|e| e.message.clone()).unwrap_or_default())}
                </p>
            </Show>
            <Show when=move || profile.with(|p| p.notice.is_some())>
                <p class="dashboard-page__notice">{move || profile.with(|p| p.notice.clone().unwrap_or_default())}</p>
            </Show>
            <Show when=move || profile.with(|p| p.profile.is_some())>
                <section class="profile-summary">
                    {move || {
                        profile
                            .with(|p| p.profile.clone())
                            .map(|current| {
                                view! {
                                    <p>
                                        <strong>{current.name}</strong>
                                        " · "
                                        {current.department}
                                        " · "
                                        {current.role}
                                    </p>
                                    <p>{current.email} " · joined " {current.joining_date.to_string()}</p>
                                }
                            })
                    }}
                </section>
            </Show>
            <ProfileFormPanel state=profile on_submit/>
        </div>
    }
}
