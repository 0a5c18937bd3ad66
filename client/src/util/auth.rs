//! Route guard and session-expiry redirects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes check the session once, at route entry, in the browser.
//! Until then a neutral placeholder renders so SSR output and hydration match.
//! Later 401/403 responses are handled by `install_expiry_redirect`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::LOGIN_ROUTE;
use crate::state::error::ViewError;
use crate::state::session::{Role, Session, SessionStore};

/// Outcome of a route-entry check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Allow,
    Redirect(&'static str),
}

/// Allow only when a token is present and the stored role equals `required`.
#[must_use]
pub fn check_access(session: &Session, required: &Role) -> RouteAccess {
    if session.is_authenticated() && session.has_role(required) {
        RouteAccess::Allow
    } else {
        RouteAccess::Redirect(LOGIN_ROUTE)
    }
}

/// Render `children` only for sessions holding `role`; redirect everything
/// else to the login route.
#[component]
pub fn RequireRole(role: Role, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let access = RwSignal::new(None::<RouteAccess>);

    // Reads no signals, so it runs exactly once after mount.
    Effect::new(move || {
        let decision = check_access(&session.get(), &role);
        access.set(Some(decision));
        if let RouteAccess::Redirect(to) = decision {
            navigate(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show
            when=move || access.get() == Some(RouteAccess::Allow)
            fallback=move || {
                view! {
                    <p class="guard-message">
                        {move || match access.get() {
                            None => "Checking session...",
                            Some(_) => "Redirecting to login...",
                        }}
                    </p>
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Clear the session and return to login once `expired` flips to `true`.
pub fn install_expiry_redirect<F>(session: SessionStore, expired: RwSignal<bool>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if expired.get() {
            if !session.clear() {
                #[cfg(feature = "hydrate")]
                log::warn!("expired session could not be cleared from storage");
            }
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });
}

/// Raise the expiry flag when `error` means the session is no longer valid.
pub fn flag_if_expired(expired: RwSignal<bool>, error: &ViewError) {
    if error.is_session_expired() {
        expired.try_set(true);
    }
}
