//! Patient self-registration.
//!
//! Registering stores the returned profile but does not sign the patient in;
//! they log in afterwards from the login page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::{ErrorContext, LOGIN_PATH, Role};

use crate::components::form_field::Field;
use crate::config::AppConfig;
use crate::net::api::HttpBackend;
use crate::net::types::PatientRegistration;
use crate::state::session::use_session;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let config = expect_context::<AppConfig>();
    let navigate = use_navigate();

    let form = RwSignal::new(PatientRegistration::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = form.get_untracked();
        if let Some(missing) = first_missing_field(&request) {
            info.set(format!("{missing} is required."));
            return;
        }
        busy.set(true);
        info.set("Registering...".to_owned());

        let manager = session.manager();
        let backend = HttpBackend::new(config.clone());
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match manager.store(Role::Patient).register(&backend, &request).await {
                Ok(_) => {
                    info.set("Registration successful. Please log in.".to_owned());
                    navigate(LOGIN_PATH, NavigateOptions::default());
                }
                Err(err) => {
                    log::warn!("patient registration failed: {err}");
                    info.set(err.user_message(ErrorContext::Registration));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Patient Registration"</h1>
                <form class="login-form" on:submit=on_submit>
                    <Field form label="Username" kind="text" get=|f| f.username.clone() set=|f, v| f.username = v/>
                    <Field form label="Password" kind="password" get=|f| f.password.clone() set=|f, v| f.password = v/>
                    <Field form label="Full name" kind="text" get=|f| f.name.clone() set=|f, v| f.name = v/>
                    <Field form label="Email" kind="email" get=|f| f.email.clone() set=|f, v| f.email = v/>
                    <Field form label="Contact number" kind="tel" get=|f| f.contact_number.clone() set=|f, v| f.contact_number = v/>
                    <Field form label="Date of birth" kind="date" get=|f| f.date_of_birth.clone() set=|f, v| f.date_of_birth = v/>
                    <Field form label="Gender" kind="text" get=|f| f.gender.clone() set=|f, v| f.gender = v/>
                    <Field form label="Address" kind="text" get=|f| f.address.clone() set=|f, v| f.address = v/>
                    <Field form label="Blood group" kind="text" get=|f| f.blood_group.clone() set=|f, v| f.blood_group = v/>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <a href=LOGIN_PATH class="login-link">"Back to login"</a>
            </div>
        </div>
    }
}

/// Label of the first required field left blank.
fn first_missing_field(form: &PatientRegistration) -> Option<&'static str> {
    [
        ("Username", &form.username),
        ("Password", &form.password),
        ("Full name", &form.name),
        ("Email", &form.email),
    ]
    .into_iter()
    .find(|(_, value)| value.trim().is_empty())
    .map(|(label, _)| label)
}
