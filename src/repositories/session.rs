//! SessionRepository - Sessioni di login, usate dal middleware di autenticazione

use super::SessionStore;
use crate::entities::Session;
use async_trait::async_trait;
use sqlx::{Error, MySqlPool};
use tracing::instrument;

pub struct SessionRepository {
    connection_pool: MySqlPool,
}

impl SessionRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }
}

#[async_trait]
impl SessionStore for SessionRepository {
    #[instrument(skip(self, token))]
    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, Error> {
        sqlx::query_as::<_, Session>("SELECT id, user_id, token FROM sessions WHERE token = ?")
            .bind(token)
            .fetch_optional(&self.connection_pool)
            .await
    }
}
