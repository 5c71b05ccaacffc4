use super::*;
use crate::net::test_transport::{ScriptedTransport, sign_in_admin, test_config, test_manager};
use futures::executor::block_on;
use serde_json::{Value, json};
use session::{KeyValueStore, MemoryStore, Role};
use std::rc::Rc;

fn client(transport: &ScriptedTransport) -> (Rc<MemoryStore>, AdminClient<ScriptedTransport>) {
    let (storage, manager) = test_manager();
    sign_in_admin(&manager);
    let api = ApiClient::with_transport(test_config(), manager, transport.clone());
    (storage, AdminClient::from_api(api))
}

fn new_doctor() -> DoctorRegistration {
    DoctorRegistration {
        username: "house".to_owned(),
        password: "vicodin".to_owned(),
        doctor_name: "Gregory House".to_owned(),
        year_of_experience: 20,
        ..DoctorRegistration::default()
    }
}

#[test]
fn creating_doctor_keeps_admin_signed_in() {
    let transport = ScriptedTransport::default();
    transport.reply(Ok("Doctor created successfully"));
    let (storage, admin) = client(&transport);

    block_on(admin.create_doctor(&new_doctor())).expect("created");

    let manager = admin.api.manager();
    assert_eq!(manager.current_role(), Some(Role::Admin));
    assert_eq!(storage.get("userRole").as_deref(), Some("ADMIN"));
    assert_eq!(manager.store(Role::Doctor).token(), None);
    assert_eq!(manager.store(Role::Doctor).profile(), None);
}

#[test]
fn create_doctor_posts_camel_case_with_admin_token() {
    let transport = ScriptedTransport::default();
    let (_, admin) = client(&transport);

    block_on(admin.create_doctor(&new_doctor())).expect("created");

    let sent = transport.last();
    assert_eq!(sent.method, HttpMethod::Post);
    assert_eq!(sent.url, "http://backend/api/admin/create-user");
    assert_eq!(sent.headers[0].1, "Bearer admin.token.sig");
    let body: Value = serde_json::from_str(sent.body.as_deref().unwrap_or_default()).expect("body");
    assert_eq!(body["doctorName"], json!("Gregory House"));
    assert_eq!(body["yearOfExperience"], json!(20));
}

#[test]
fn failed_creation_keeps_admin_signed_in() {
    let transport = ScriptedTransport::default();
    transport.reply(Err(ApiError::from_status(409, "Username already exists")));
    let (_, admin) = client(&transport);

    let err = block_on(admin.create_doctor(&new_doctor())).expect_err("conflict");

    assert_eq!(err.status(), Some(409));
    assert_eq!(admin.api.manager().current_role(), Some(Role::Admin));
}

#[test]
fn list_doctors_decodes_and_treats_empty_as_none() {
    let transport = ScriptedTransport::default();
    transport.reply(Ok(r#"[{
        "doctorId": 4, "doctorName": "Gregory House", "email": "house@ppth.org",
        "contactNumber": "555-0101", "qualification": "MD", "specialization": "Diagnostics",
        "yearOfExperience": 20, "clinicAddress": "Princeton", "status": "ACTIVE"
    }]"#));
    let (_, admin) = client(&transport);

    let doctors = block_on(admin.list_doctors()).expect("list");
    assert_eq!(doctors.len(), 1);
    assert_eq!(doctors[0].doctor_name, "Gregory House");
    assert_eq!(transport.last().url, "http://backend/api/admin/doctors");

    assert!(block_on(admin.list_doctors()).expect("empty").is_empty());
}

#[test]
fn update_and_delete_target_the_doctor() {
    let transport = ScriptedTransport::default();
    let (_, admin) = client(&transport);
    let update = DoctorUpdate {
        contact_number: "555-0199".to_owned(),
        year_of_experience: 21,
        clinic_address: "Princeton".to_owned(),
    };

    block_on(admin.update_doctor(4, &update)).expect("updated");
    block_on(admin.delete_doctor(4)).expect("deleted");

    let sent = transport.sent();
    assert_eq!(sent[0].method, HttpMethod::Put);
    assert_eq!(sent[0].url, "http://backend/api/admin/doctors/4");
    assert_eq!(sent[1].method, HttpMethod::Delete);
    assert_eq!(sent[1].body, None);
}

#[test]
fn zero_doctor_id_is_rejected_locally() {
    let transport = ScriptedTransport::default();
    let (_, admin) = client(&transport);

    let err = block_on(admin.delete_doctor(0)).expect_err("invalid id");

    assert!(matches!(err, ApiError::BadRequest(_)));
    assert!(transport.sent().is_empty());
}
