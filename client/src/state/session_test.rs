use super::*;
use crate::util::storage::MemoryStore;

fn sample_voter() -> VoterSession {
    VoterSession {
        username: "eve".to_owned(),
        enrollment: "EN-7".to_owned(),
        voter_id: "31".to_owned(),
        voter_name: "Eve Adams".to_owned(),
    }
}

// =============================================================
// AdminSession
// =============================================================

#[test]
fn admin_flag_absent_means_logged_out() {
    let store = MemoryStore::default();
    assert!(!AdminSession::is_logged_in(&store));
}

#[test]
fn admin_flag_set_only_on_success() {
    let store = MemoryStore::default();
    let refused: Result<(), &str> = Err("Invalid credentials");
    assert!(AdminSession::persist_on_success(&store, refused).is_err());
    assert!(!AdminSession::is_logged_in(&store));

    assert!(AdminSession::persist_on_success::<&str>(&store, Ok(())).is_ok());
    assert!(AdminSession::is_logged_in(&store));
}

#[test]
fn admin_logout_clears_flag() {
    let store = MemoryStore::default();
    store.set(ADMIN_LOGGED_IN, "true");
    AdminSession::clear(&store);
    assert!(!AdminSession::is_logged_in(&store));
}

// =============================================================
// VoterSession
// =============================================================

#[test]
fn failed_authentication_writes_no_identity_keys() {
    let store = MemoryStore::default();
    let outcome: Result<VoterSession, &str> = Err("Face mismatch");
    assert!(VoterSession::persist_on_success(&store, outcome).is_err());
    assert!(store.keys().is_empty());
}

#[test]
fn successful_authentication_writes_all_identity_keys() {
    let store = MemoryStore::default();
    let saved = VoterSession::persist_on_success::<&str>(&store, Ok(sample_voter())).unwrap();
    assert_eq!(store.keys().len(), VOTER_KEYS.len());
    assert_eq!(store.get(VOTER_ID).as_deref(), Some("31"));
    assert_eq!(VoterSession::load(&store), Some(saved));
}

#[test]
fn load_requires_voter_id() {
    let store = MemoryStore::default();
    store.set(USERNAME, "eve");
    assert_eq!(VoterSession::load(&store), None);
}

#[test]
fn clear_removes_voter_keys_but_not_admin_flag() {
    let store = MemoryStore::default();
    store.set(ADMIN_LOGGED_IN, "true");
    sample_voter().save(&store);
    VoterSession::clear(&store);
    assert_eq!(store.keys(), vec![ADMIN_LOGGED_IN.to_owned()]);
}

#[test]
fn voter_id_parses_and_display_name_falls_back() {
    let mut voter = sample_voter();
    assert_eq!(voter.voter_id_number(), Some(31));
    assert_eq!(voter.display_name(), "Eve Adams");
    voter.voter_name.clear();
    assert_eq!(voter.display_name(), "eve");
}
