// SQLite UserRepository & SessionRepository Implementation

use crate::error::map_sqlx_error;
use crate::store::SqliteStore;
use async_trait::async_trait;
use tally_core::domain::{Millis, NewUser, Session, User, UserId};
use tally_core::error::Result;
use tally_core::port::{SessionRepository, UserRepository};

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    user_name: String,
    name: String,
    password_hash: String,
    created_at: i64,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            id: self.id,
            email: self.email,
            user_name: self.user_name,
            name: self.name,
            password_hash: self.password_hash,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct SessionRow {
    token_hash: String,
    user_id: i64,
    created_at: i64,
    expires_at: i64,
}

impl SqliteStore {
    async fn update_user_column(&self, id: UserId, sql: &str, value: &str) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(sql)
            .bind(value)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(UserRow::into_user))
    }
}

#[async_trait]
impl UserRepository for SqliteStore {
    async fn insert(&self, user: &NewUser, created_at: Millis) -> Result<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (email, user_name, name, password_hash, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&user.email)
        .bind(&user.user_name)
        .bind(&user.name)
        .bind(&user.password_hash)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into_user())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(UserRow::into_user))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(UserRow::into_user))
    }

    async fn update_name(&self, id: UserId, name: &str) -> Result<Option<User>> {
        self.update_user_column(id, "UPDATE users SET name = ? WHERE id = ? RETURNING *", name)
            .await
    }

    async fn update_user_name(&self, id: UserId, user_name: &str) -> Result<Option<User>> {
        self.update_user_column(
            id,
            "UPDATE users SET user_name = ? WHERE id = ? RETURNING *",
            user_name,
        )
        .await
    }
}

#[async_trait]
impl SessionRepository for SqliteStore {
    async fn insert_session(&self, session: &Session) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO sessions (token_hash, user_id, created_at, expires_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&session.token_hash)
        .bind(session.user_id)
        .bind(session.created_at)
        .bind(session.expires_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn find_session(&self, token_hash: &str) -> Result<Option<Session>> {
        let row = sqlx::query_as::<_, SessionRow>("SELECT * FROM sessions WHERE token_hash = ?")
            .bind(token_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(|r| Session {
            token_hash: r.token_hash,
            user_id: r.user_id,
            created_at: r.created_at,
            expires_at: r.expires_at,
        }))
    }

    async fn delete_session(&self, token_hash: &str) -> Result<()> {
        sqlx::query("DELETE FROM sessions WHERE token_hash = ?")
            .bind(token_hash)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn delete_expired_sessions(&self, now: Millis) -> Result<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= ?")
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::setup_store;
    use tally_core::error::AppError;

    fn new_user(email: &str, user_name: &str) -> NewUser {
        NewUser::new(email, user_name, "Owner", "hash".to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = setup_store().await;

        let user = store.insert(&new_user("a@shop.rs", "a"), 1000).await.unwrap();
        assert!(user.id > 0);

        let found = store.find_by_email("a@shop.rs").await.unwrap().unwrap();
        assert_eq!(found.id, user.id);
        assert_eq!(found.created_at, 1000);
        assert!(store.find_by_id(user.id + 1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let store = setup_store().await;
        store.insert(&new_user("a@shop.rs", "a"), 0).await.unwrap();

        let err = store.insert(&new_user("a@shop.rs", "b"), 0).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(ref msg) if msg.contains("email")));
    }

    #[tokio::test]
    async fn test_update_user_name() {
        let store = setup_store().await;
        let a = store.insert(&new_user("a@shop.rs", "a"), 0).await.unwrap();
        store.insert(&new_user("b@shop.rs", "b"), 0).await.unwrap();

        let updated = store.update_user_name(a.id, "alpha").await.unwrap().unwrap();
        assert_eq!(updated.user_name, "alpha");

        let err = store.update_user_name(a.id, "b").await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        assert!(store.update_name(999, "Nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_session_lifecycle() {
        let store = setup_store().await;
        let user = store.insert(&new_user("a@shop.rs", "a"), 0).await.unwrap();

        for (hash, expires_at) in [("old", 500), ("fresh", 5000)] {
            store
                .insert_session(&Session {
                    token_hash: hash.to_string(),
                    user_id: user.id,
                    created_at: 0,
                    expires_at,
                })
                .await
                .unwrap();
        }

        assert_eq!(store.delete_expired_sessions(1000).await.unwrap(), 1);
        assert!(store.find_session("old").await.unwrap().is_none());

        let fresh = store.find_session("fresh").await.unwrap().unwrap();
        assert_eq!(fresh.user_id, user.id);

        store.delete_session("fresh").await.unwrap();
        store.delete_session("fresh").await.unwrap();
        assert!(store.find_session("fresh").await.unwrap().is_none());
    }
}
