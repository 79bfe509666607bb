//! Modelo de ContainerType

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::utils::validation::validate_not_blank;

/// ContainerType - mapea a la tabla container_types
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContainerType {
    pub id: Uuid,
    pub name: String,
    /// 20ft, 40ft, 40ft HC
    pub size: String,
    pub capacity_m3: f64,
    pub max_weight_kg: i32,
    pub description: String,
    pub price_modifier: f64,
}

fn default_price_modifier() -> f64 {
    1.0
}

/// Request para crear o reemplazar un tipo de contenedor
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContainerTypeRequest {
    pub id: Option<Uuid>,

    #[validate(custom = "validate_not_blank")]
    pub name: String,

    #[validate(custom = "validate_not_blank")]
    pub size: String,

    #[validate(range(min = 0.0))]
    pub capacity_m3: f64,

    #[validate(range(min = 0))]
    pub max_weight_kg: i32,

    #[serde(default)]
    pub description: String,

    #[serde(default = "default_price_modifier")]
    #[validate(range(min = 0.0))]
    pub price_modifier: f64,
}

impl ContainerTypeRequest {
    pub fn into_container_type(self, id: Uuid) -> ContainerType {
        ContainerType {
            id,
            name: self.name,
            size: self.size,
            capacity_m3: self.capacity_m3,
            max_weight_kg: self.max_weight_kg,
            description: self.description,
            price_modifier: self.price_modifier,
        }
    }
}
