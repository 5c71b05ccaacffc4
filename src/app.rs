//! Root application component with routing and context providers.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use session::{LOGIN_PATH, Role, SessionManager};

use crate::components::require_role::RequireRole;
use crate::config::AppConfig;
use crate::pages::dashboard::{AdminDashboard, DoctorDashboard, PatientDashboard};
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::state::session::{SessionContext, use_session};
use crate::util::clock::BrowserClock;
use crate::util::storage::BrowserStorage;

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
/// Starting the session manager reconciles stored records, so a browser that
/// somehow holds tokens for two roles begins signed out.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::load();
    log::debug!("api base url: {}", config.api_base_url);
    let manager = SessionManager::start(BrowserStorage::shared(), Rc::new(BrowserClock));
    provide_context(config);
    provide_context(SessionContext::new(manager));

    view! {
        <Title text="HAMS"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=Home/>
                <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("register")) view=RegisterPage/>
                <Route
                    path=(StaticSegment("patient"), StaticSegment("dashboard"))
                    view=|| view! { <RequireRole role=Role::Patient><PatientDashboard/></RequireRole> }
                />
                <Route
                    path=(StaticSegment("doctor"), StaticSegment("dashboard"))
                    view=|| view! { <RequireRole role=Role::Doctor><DoctorDashboard/></RequireRole> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("dashboard"))
                    view=|| view! { <RequireRole role=Role::Admin><AdminDashboard/></RequireRole> }
                />
            </Routes>
        </Router>
    }
}

/// `/` forwards to the active dashboard, or to login.
#[component]
fn Home() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    Effect::new(move || {
        let path = session.current_role().map_or(LOGIN_PATH, |role| role.dashboard_path());
        navigate(
            path,
            NavigateOptions {
                replace: true,
                ..NavigateOptions::default()
            },
        );
    });
}
