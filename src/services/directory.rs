//! User directory: resolves a verified email to a user id.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::db::{user_find_by_email, DbPool};
use crate::error::AppResult;

/// Exact-match lookup of a user id by email. `Ok(None)` means no such user.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_user_id(&self, email: &str) -> AppResult<Option<String>>;
}

/// Directory backed by the PostgreSQL `users` table.
#[derive(Clone)]
pub struct PgUserDirectory {
    pool: DbPool,
}

impl PgUserDirectory {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for PgUserDirectory {
    async fn find_user_id(&self, email: &str) -> AppResult<Option<String>> {
        let row = user_find_by_email(&self.pool, email).await?;
        Ok(row.map(|user| user.id.to_string()))
    }
}

/// Fixed email -> id map, for local runs and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    users: HashMap<String, String>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, email: impl Into<String>, id: impl Into<String>) -> Self {
        self.users.insert(email.into(), id.into());
        self
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_user_id(&self, email: &str) -> AppResult<Option<String>> {
        Ok(self.users.get(email).cloned())
    }
}
