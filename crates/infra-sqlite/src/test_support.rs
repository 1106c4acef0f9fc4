// Shared fixtures for adapter tests

use crate::{create_pool, run_migrations, SqliteStore};
use tally_core::domain::{NewUser, User};
use tally_core::port::UserRepository;

pub(crate) async fn setup_store() -> SqliteStore {
    let pool = create_pool("sqlite::memory:").await.unwrap();
    run_migrations(&pool).await.unwrap();
    SqliteStore::new(pool)
}

pub(crate) async fn seed_user(store: &SqliteStore, handle: &str) -> User {
    let user = NewUser::new(
        &format!("{}@shop.rs", handle),
        handle,
        handle,
        "hash".to_string(),
    )
    .unwrap();
    store.insert(&user, 0).await.unwrap()
}
