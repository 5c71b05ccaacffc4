//! Role dashboards.
//!
//! Each dashboard is mounted behind a role guard, so it can assume its own
//! role is signed in. Logging out re-runs the guard, which sends the browser
//! back to the login page.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use session::Role;

use crate::net::types::display_name;
use crate::pages::admin_doctors::DoctorManagement;
use crate::pages::login::role_label;
use crate::state::session::use_session;

#[component]
pub fn PatientDashboard() -> impl IntoView {
    view! { <RoleDashboard role=Role::Patient/> }
}

#[component]
pub fn DoctorDashboard() -> impl IntoView {
    view! { <RoleDashboard role=Role::Doctor/> }
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    view! {
        <RoleDashboard role=Role::Admin>
            <DoctorManagement/>
        </RoleDashboard>
    }
}

#[component]
fn RoleDashboard(role: Role, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    let session = use_session();
    let greeting = move || greeting(role, session.profile(role).as_ref());

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>{format!("{} Dashboard", role_label(role))}</h1>
                <button class="dashboard-logout" on:click=move |_| session.logout(role)>
                    "Log out"
                </button>
            </header>
            <p class="dashboard-greeting">{greeting}</p>
            {children.map(|children| children())}
        </div>
    }
}

fn greeting(role: Role, profile: Option<&serde_json::Value>) -> String {
    match profile.and_then(|profile| display_name(role, profile)) {
        Some(name) => format!("Welcome, {name}"),
        None => "Welcome".to_owned(),
    }
}
