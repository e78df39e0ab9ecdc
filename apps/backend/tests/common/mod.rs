#![allow(dead_code)]

// tests/common/mod.rs
use croupier::config::db::DbProfile;
use croupier::infra::state::build_state;
use croupier::AppState;
use sea_orm::DatabaseConnection;

pub mod proptest_prelude;

// Logging is auto-installed for every test binary that includes this module
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Fresh, migrated in-memory database behind an `AppState`.
pub async fn memory_state() -> AppState {
    build_state()
        .with_db(DbProfile::InMemory)
        .build()
        .await
        .expect("in-memory state should build")
}

pub fn db(state: &AppState) -> &DatabaseConnection {
    state.db().expect("state should carry a database")
}

/// Codes of a card list, in order.
pub fn codes(cards: &[croupier::repos::decks::Card]) -> Vec<String> {
    cards.iter().map(|c| c.code()).collect()
}
