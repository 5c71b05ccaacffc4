use super::*;

#[test]
fn set_then_get_returns_value() {
    let store = MemoryStore::new();
    store.set("authPatientToken", "abc");
    assert_eq!(store.get("authPatientToken").as_deref(), Some("abc"));
    assert_eq!(store.len(), 1);
}

#[test]
fn set_overwrites_existing_value() {
    let store = MemoryStore::new();
    store.set("userRole", "PATIENT");
    store.set("userRole", "DOCTOR");
    assert_eq!(store.get("userRole").as_deref(), Some("DOCTOR"));
}

#[test]
fn remove_missing_key_is_noop() {
    let store = MemoryStore::new();
    store.remove("nothing");
    assert!(store.is_empty());
}

#[test]
fn remove_deletes_only_that_key() {
    let store = MemoryStore::new();
    store.set("a", "1");
    store.set("b", "2");
    store.remove("a");
    assert!(!store.contains("a"));
    assert!(store.contains("b"));
}
