use super::*;
use serde_json::json;

fn doctor_login_body() -> serde_json::Value {
    json!({
        "token": "h.p.s",
        "type": "Bearer",
        "doctor": {
            "doctorId": 4,
            "doctorName": "Gregory House",
            "email": "house@ppth.org",
            "contactNumber": "555-0101",
            "qualification": "MD",
            "specialization": "Diagnostics",
            "yearOfExperience": 20,
            "clinicAddress": "Princeton-Plainsboro"
        }
    })
}

#[test]
fn doctor_session_reads_camel_case_profile() {
    let session: DoctorSession = serde_json::from_value(doctor_login_body()).expect("doctor");
    assert_eq!(session.doctor.doctor_id, 4);
    assert_eq!(session.doctor.year_of_experience, 20);
}

#[test]
fn patient_registration_serializes_camel_case() {
    let form = PatientRegistration {
        username: "jane".to_owned(),
        date_of_birth: "1990-04-01".to_owned(),
        blood_group: "O+".to_owned(),
        ..PatientRegistration::default()
    };
    let value = serde_json::to_value(&form).expect("serialize");
    assert_eq!(value["dateOfBirth"], json!("1990-04-01"));
    assert_eq!(value["bloodGroup"], json!("O+"));
    assert!(value.get("date_of_birth").is_none());
}

#[test]
fn display_name_uses_role_specific_field() {
    assert_eq!(
        display_name(Role::Doctor, &doctor_login_body()).as_deref(),
        Some("Gregory House")
    );
    let admin = json!({"admin": {"adminId": 1, "username": "root", "role": "ADMIN"}});
    assert_eq!(display_name(Role::Admin, &admin).as_deref(), Some("root"));
}

#[test]
fn display_name_is_none_for_mismatched_profile() {
    assert_eq!(display_name(Role::Patient, &doctor_login_body()), None);
    assert_eq!(display_name(Role::Admin, &json!("registered")), None);
}

#[test]
fn doctor_update_copies_editable_fields() {
    let session: DoctorSession = serde_json::from_value(doctor_login_body()).expect("doctor");
    let update = DoctorUpdate::from_doctor(&session.doctor);
    assert_eq!(update.contact_number, "555-0101");
    assert_eq!(update.year_of_experience, 20);
    let value = serde_json::to_value(&update).expect("serialize");
    assert_eq!(value["clinicAddress"], json!("Princeton-Plainsboro"));
}
