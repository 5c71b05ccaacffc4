//! Doctor management panel on the admin dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lists doctors and lets the admin create, edit, and delete them. All calls
//! carry the admin's bearer token; none of them touch the session stores.

#[cfg(test)]
#[path = "admin_doctors_test.rs"]
mod admin_doctors_test;

use leptos::prelude::*;
use session::{ApiError, ErrorContext};

use crate::components::form_field::Field;
use crate::config::AppConfig;
use crate::net::admin::AdminClient;
use crate::net::types::{Doctor, DoctorRegistration, DoctorUpdate};
use crate::state::session::use_session;

#[component]
pub fn DoctorManagement() -> impl IntoView {
    let session = use_session();
    let config = expect_context::<AppConfig>();
    let client = StoredValue::new_local(AdminClient::new(config, session.manager()));

    let doctors = RwSignal::new(Vec::<Doctor>::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let refresh = RwSignal::new(0_u64);
    let form = RwSignal::new(DoctorRegistration::default());
    let editing = RwSignal::new(None::<u64>);
    let edit_form = RwSignal::new(DoctorUpdate::default());

    Effect::new(move || {
        refresh.track();
        let client = client.get_value();
        leptos::task::spawn_local(async move {
            match client.list_doctors().await {
                Ok(list) => doctors.set(list),
                Err(err) => {
                    log::warn!("loading doctors failed: {err}");
                    info.set(err.user_message(ErrorContext::Request));
                }
            }
        });
    });

    let on_create = move |ev: leptos::ev::SubmitEvent| {
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
        let client = client.get_value();
        leptos::task::spawn_local(async move {
            let outcome = client.create_doctor(&request).await;
            info.set(create_message(outcome.as_ref().err()));
            if outcome.is_ok() {
                form.set(DoctorRegistration::default());
                refresh.update(|n| *n += 1);
            }
            busy.set(false);
        });
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(doctor_id) = editing.get_untracked() else {
            return;
        };
        let update = edit_form.get_untracked();
        let client = client.get_value();
        leptos::task::spawn_local(async move {
            match client.update_doctor(doctor_id, &update).await {
                Ok(()) => {
                    editing.set(None);
                    info.set("Doctor updated.".to_owned());
                    refresh.update(|n| *n += 1);
                }
                Err(err) => info.set(err.user_message(ErrorContext::Request)),
            }
        });
    };

    let delete = move |doctor_id: u64| {
        let client = client.get_value();
        leptos::task::spawn_local(async move {
            match client.delete_doctor(doctor_id).await {
                Ok(()) => {
                    info.set("Doctor deleted.".to_owned());
                    refresh.update(|n| *n += 1);
                }
                Err(err) => info.set(err.user_message(ErrorContext::Request)),
            }
        });
    };

    view! {
        <section class="doctor-management">
            <h2>"Doctors"</h2>
            <Show when=move || !info.get().is_empty()>
                <p class="dashboard-message">{move || info.get()}</p>
            </Show>
            <ul class="doctor-list">
                <For
                    each=move || doctors.get()
                    key=|doctor| doctor.doctor_id
                    children=move |doctor| {
                        let doctor_id = doctor.doctor_id;
                        let update = DoctorUpdate::from_doctor(&doctor);
                        view! {
                            <li class="doctor-row">
                                <span>{doctor.doctor_name.clone()}</span>
                                <span>{doctor.specialization.clone()}</span>
                                <button on:click=move |_| {
                                    edit_form.set(update.clone());
                                    editing.set(Some(doctor_id));
                                }>
                                    "Edit"
                                </button>
                                <button on:click=move |_| delete(doctor_id)>"Delete"</button>
                            </li>
                        }
                    }
                />
            </ul>
            <Show when=move || editing.get().is_some()>
                <form class="doctor-form" on:submit=on_save>
                    <Field form=edit_form label="Contact number" kind="tel" get=|f| f.contact_number.clone() set=|f, v| f.contact_number = v/>
                    <Field form=edit_form label="Years of experience" kind="number" get=|f| f.year_of_experience.to_string() set=|f, v| f.year_of_experience = parse_years(&v)/>
                    <Field form=edit_form label="Clinic address" kind="text" get=|f| f.clinic_address.clone() set=|f, v| f.clinic_address = v/>
                    <button type="submit">"Save"</button>
                    <button type="button" on:click=move |_| editing.set(None)>"Cancel"</button>
                </form>
            </Show>
            <h3>"Add doctor"</h3>
            <form class="doctor-form" on:submit=on_create>
                <Field form label="Username" kind="text" get=|f| f.username.clone() set=|f, v| f.username = v/>
                <Field form label="Password" kind="password" get=|f| f.password.clone() set=|f, v| f.password = v/>
                <Field form label="Doctor name" kind="text" get=|f| f.doctor_name.clone() set=|f, v| f.doctor_name = v/>
                <Field form label="Email" kind="email" get=|f| f.email.clone() set=|f, v| f.email = v/>
                <Field form label="Contact number" kind="tel" get=|f| f.contact_number.clone() set=|f, v| f.contact_number = v/>
                <Field form label="Qualification" kind="text" get=|f| f.qualification.clone() set=|f, v| f.qualification = v/>
                <Field form label="Specialization" kind="text" get=|f| f.specialization.clone() set=|f, v| f.specialization = v/>
                <Field form label="Years of experience" kind="number" get=|f| f.year_of_experience.to_string() set=|f, v| f.year_of_experience = parse_years(&v)/>
                <Field form label="Clinic address" kind="text" get=|f| f.clinic_address.clone() set=|f, v| f.clinic_address = v/>
                <button type="submit" disabled=move || busy.get()>"Create doctor"</button>
            </form>
        </section>
    }
}

/// Blank or non-numeric input reads as zero.
fn parse_years(value: &str) -> u32 {
    value.trim().parse().unwrap_or_default()
}

/// Label of the first required field left blank.
fn first_missing_field(form: &DoctorRegistration) -> Option<&'static str> {
    [
        ("Username", &form.username),
        ("Password", &form.password),
        ("Doctor name", &form.doctor_name),
        ("Email", &form.email),
    ]
    .into_iter()
    .find(|(_, value)| value.trim().is_empty())
    .map(|(label, _)| label)
}

fn create_message(error: Option<&ApiError>) -> String {
    match error {
        None => "Doctor registered successfully.".to_owned(),
        Some(err) => err.user_message(ErrorContext::Registration),
    }
}
