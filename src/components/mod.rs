pub mod form_field;
pub mod require_role;
