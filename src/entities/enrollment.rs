//! Enrollment entity - Iscrizione di un utente all'evento

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Enrollment {
    pub id: i32,
    /// Ogni utente ha al massimo una iscrizione
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
