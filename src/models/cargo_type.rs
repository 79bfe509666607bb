use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// CargoType - mapea a la tabla cargo_types (solo lectura)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CargoType {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub special_requirements: Vec<String>,
}
