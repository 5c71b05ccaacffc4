//! Login page with a role selector.
//!
//! SYSTEM CONTEXT
//! ==============
//! One form serves all three roles. Submitting clears every stored session
//! before the chosen role logs in, and a token whose role disagrees with the
//! selection is rejected. Visitors who already hold a session are sent to
//! their dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate, use_query_map};
use session::{Credentials, ErrorContext, Role};

use crate::config::AppConfig;
use crate::net::api::HttpBackend;
use crate::state::session::use_session;
use crate::util::auth::{already_signed_in_redirect, post_login_target};

const ROLE_CHOICES: [Role; 3] = [Role::Patient, Role::Doctor, Role::Admin];

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let config = expect_context::<AppConfig>();
    let navigate = use_navigate();
    let location = use_location();
    let query = use_query_map();

    let role = RwSignal::new(Role::Patient);
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Runs once after mount; nothing here is tracked.
    let navigate_home = navigate.clone();
    Effect::new(move || {
        let manager = session.manager();
        log::debug!("session state on login page: {:?}", manager.debug_state());
        let pathname = location.pathname.get_untracked();
        if let Some(path) = already_signed_in_redirect(manager.current_role(), &pathname) {
            navigate_home(
                path,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = Credentials {
            username: username.get_untracked().trim().to_owned(),
            password: password.get_untracked(),
        };
        if credentials.username.is_empty() || credentials.password.is_empty() {
            info.set("Enter both username and password.".to_owned());
            return;
        }
        busy.set(true);
        info.set(String::new());

        let selected = role.get_untracked();
        let return_url = query.with_untracked(|params| params.get("returnUrl"));
        let manager = session.manager();
        let backend = HttpBackend::new(config.clone());
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match manager.login(selected, &backend, &credentials).await {
                Ok(_) => {
                    let target = post_login_target(selected, return_url.as_deref());
                    navigate(
                        &target,
                        NavigateOptions {
                            replace: true,
                            ..NavigateOptions::default()
                        },
                    );
                }
                Err(err) => {
                    log::warn!("{selected} login failed: {err}");
                    info.set(err.user_message(ErrorContext::Login));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"HAMS"</h1>
                <p class="login-card__subtitle">"Hospital Appointment Management"</p>
                <div class="login-roles">
                    {ROLE_CHOICES
                        .into_iter()
                        .map(|choice| {
                            view! {
                                <button
                                    type="button"
                                    class="login-role"
                                    class=("login-role--active", move || role.get() == choice)
                                    on:click=move |_| role.set(choice)
                                >
                                    {role_label(choice)}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || format!("Sign in as {}", role_label(role.get()))}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <Show when=move || role.get() == Role::Patient>
                    <a href="/auth/register" class="login-link">"New patient? Register"</a>
                </Show>
            </div>
        </div>
    }
}

pub(crate) fn role_label(role: Role) -> &'static str {
    match role {
        Role::Patient => "Patient",
        Role::Doctor => "Doctor",
        Role::Admin => "Admin",
    }
}
