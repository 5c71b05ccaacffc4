pub mod admin_doctors;
pub mod dashboard;
pub mod login;
pub mod register;
