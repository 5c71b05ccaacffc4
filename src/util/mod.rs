//! Browser bindings and shared UI helpers.

pub mod auth;
pub mod clock;
pub mod storage;
