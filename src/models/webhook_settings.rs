use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Configuración del webhook de cotizaciones; como máximo una fila viva
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WebhookSettings {
    pub id: Uuid,
    pub webhook_url: String,
    pub updated_at: DateTime<Utc>,
}
