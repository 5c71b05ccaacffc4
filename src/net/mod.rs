pub mod admin;
pub mod api;
pub mod types;

#[cfg(test)]
pub(crate) mod test_transport;
