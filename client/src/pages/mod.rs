//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod admin;
pub mod employee;
pub mod login;

use leptos_router::NavigateOptions;

use crate::state::auth::LOGIN_ROUTE;
use crate::state::session::SessionStore;

/// Forget the session and return to the login route.
pub(crate) fn logout<F>(session: &SessionStore, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    let cleared = session.clear();
    #[cfg(feature = "hydrate")]
    if cleared {
        log::info!("logged out");
    } else {
        log::warn!("logout could not clear the stored session");
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = cleared;
    navigate(LOGIN_ROUTE, NavigateOptions::default());
}
