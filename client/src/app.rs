//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ApiConfig;
use crate::pages::{admin::AdminDashboardPage, employee::EmployeeDashboardPage, login::LoginPage};
use crate::state::session::{Role, SessionStore};
use crate::util::auth::RequireRole;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store and API configuration to every page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(SessionStore::for_environment());
    provide_context(ApiConfig::from_build_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/hr-portal.css"/>
        <Title text="HR Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route
                    path=StaticSegment("admin")
                    view=|| view! { <RequireRole role=Role::Admin><AdminDashboardPage/></RequireRole> }
                />
                <Route
                    path=StaticSegment("employee")
                    view=|| view! { <RequireRole role=Role::Employee><EmployeeDashboardPage/></RequireRole> }
                />
            </Routes>
        </Router>
    }
}
