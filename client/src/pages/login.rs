//! Login page: email + password against the HR backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful login stores the bearer token and role in the session store,
//! then routes admins to `/admin` and everyone else to `/employee`.

use leptos::prelude::*;

use crate::state::auth::{AuthState, validate_login_input};

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let auth = RwSignal::new(AuthState::default());

    #[cfg(feature = "hydrate")]
    let (config, session, navigate) = (
        expect_context::<crate::config::ApiConfig>(),
        expect_context::<crate::state::session::SessionStore>(),
        leptos_router::hooks::use_navigate(),
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().busy {
            return;
        }
        let credentials = validate_login_input(&email.get_untracked(), &password.get_untracked());
        let (email_value, password_value) = match credentials {
            Ok(credentials) => credentials,
            Err(message) => {
                auth.update(|a| {
                    a.error = Some(message.to_owned());
                    a.info = None;
                });
                return;
            }
        };
        auth.set(AuthState { busy: true, error: None, info: Some("Signing in...".to_owned()) });

        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, password_value);

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                use crate::state::auth::{complete_login, landing_route, login_failed_message};

                let credentials = crate::net::types::LoginRequest { email: email_value, password: password_value };
                let outcome = match crate::net::api::login(&config, &session, &credentials).await {
                    Ok(response) => complete_login(&session, &response).map_err(|e| e.to_string()),
                    Err(e) => Err(e.to_string()),
                };
                match outcome {
                    Ok(role) => {
                        log::info!("login successful as {role}");
                        auth.try_set(AuthState { busy: false, error: None, info: Some("Login successful".to_owned()) });
                        navigate(landing_route(&role), leptos_router::NavigateOptions::default());
                    }
                    Err(detail) => {
                        log::warn!("login failed: {detail}");
                        auth.try_set(AuthState { busy: false, error: Some(login_failed_message(&detail)), info: None });
                    }
                }
            });
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"HR Portal"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || auth.with(|a| a.busy)>
                        {move || if auth.with(|a| a.busy) { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <Show when=move || auth.with(|a| a.error.is_some())>
                    <p class="login-message login-message--error">
                        {move || auth.with(|a| a.error.clone().unwrap_or_default())}
                    </p>
                </Show>
                <Show when=move || auth.with(|a| a.info.is_some())>
                    <p class="login-message">{move || auth.with(|a| a.info.clone().unwrap_or_default())}</p>
                </Show>
            </div>
        </div>
    }
}
