use super::*;

#[test]
fn years_parse_leniently() {
    assert_eq!(parse_years(" 12 "), 12);
    assert_eq!(parse_years(""), 0);
    assert_eq!(parse_years("ten"), 0);
}

#[test]
fn new_doctor_needs_credentials_name_and_email() {
    let mut form = DoctorRegistration::default();
    assert_eq!(first_missing_field(&form), Some("Username"));
    form.username = "house".to_owned();
    form.password = "secret".to_owned();
    assert_eq!(first_missing_field(&form), Some("Doctor name"));
    form.doctor_name = "Gregory House".to_owned();
    form.email = "house@ppth.org".to_owned();
    assert_eq!(first_missing_field(&form), None);
}

#[test]
fn create_messages_follow_registration_wording() {
    assert_eq!(create_message(None), "Doctor registered successfully.");
    let conflict = ApiError::from_status(409, "");
    assert_eq!(
        create_message(Some(&conflict)),
        conflict.user_message(ErrorContext::Registration)
    );
}
