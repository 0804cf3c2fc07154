use super::*;
use crate::state::session::{ADMIN_LOGGED_IN, VOTER_ID};
use crate::util::storage::MemoryStore;

#[test]
fn admin_without_flag_is_redirected() {
    let store = MemoryStore::default();
    assert!(should_redirect_admin(&store));
}

#[test]
fn admin_with_flag_stays() {
    let store = MemoryStore::default();
    store.set(ADMIN_LOGGED_IN, "true");
    assert!(!should_redirect_admin(&store));
}

#[test]
fn voter_without_id_is_redirected() {
    let store = MemoryStore::default();
    store.set(VOTER_ID, "");
    assert!(should_redirect_voter(&store));
    store.set(VOTER_ID, "7");
    assert!(!should_redirect_voter(&store));
}

#[test]
fn cleared_admin_flag_gates_page_loads_again() {
    let store = MemoryStore::default();
    store.set(ADMIN_LOGGED_IN, "true");
    AdminSession::clear(&store);
    assert!(should_redirect_admin(&store));
}

#[test]
fn voter_cleared_after_vote_cannot_reload_ballot() {
    let store = MemoryStore::default();
    store.set(VOTER_ID, "7");
    VoterSession::clear(&store);
    assert!(should_redirect_voter(&store));
}
