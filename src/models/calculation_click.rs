use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Registro de auditoría de un clic en "calcular"; no tiene ciclo de vida
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CalculationClick {
    pub id: Uuid,
    pub route_id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

impl CalculationClick {
    pub fn new(route_id: String, user_id: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            route_id,
            user_id,
            created_at: Utc::now(),
        }
    }
}
