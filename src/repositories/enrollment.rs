//! EnrollmentRepository - Repository per le iscrizioni

use super::EnrollmentStore;
use crate::entities::Enrollment;
use async_trait::async_trait;
use sqlx::{Error, MySqlPool};
use tracing::instrument;

pub struct EnrollmentRepository {
    connection_pool: MySqlPool,
}

impl EnrollmentRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }
}

#[async_trait]
impl EnrollmentStore for EnrollmentRepository {
    #[instrument(skip(self), fields(user_id = %user_id))]
    async fn find_by_user_id(&self, user_id: &i32) -> Result<Option<Enrollment>, Error> {
        sqlx::query_as::<_, Enrollment>(
            "SELECT id, user_id, created_at, updated_at FROM enrollments WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.connection_pool)
        .await
    }
}
