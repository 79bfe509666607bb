//! Modelo de Port
//!
//! Puertos y estaciones ferroviarias. El `code` es el identificador que usan
//! el buscador y las rutas; `city` alimenta la traducción hacia el webhook.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

use crate::utils::validation::{validate_not_blank, validate_transport_types};

/// Modo de transporte soportado por un puerto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportType {
    Sea,
    Rail,
    Air,
}

impl TransportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportType::Sea => "sea",
            TransportType::Rail => "rail",
            TransportType::Air => "air",
        }
    }
}

impl fmt::Display for TransportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sea" => Ok(TransportType::Sea),
            "rail" => Ok(TransportType::Rail),
            "air" => Ok(TransportType::Air),
            other => Err(format!("unknown transport type '{}'", other)),
        }
    }
}

/// Port - mapea exactamente a la tabla ports
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Port {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub country: String,
    pub city: String,
    pub transport_types: Vec<String>,
}

/// Request para crear o reemplazar un puerto
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PortRequest {
    pub id: Option<Uuid>,

    #[validate(regex = "crate::utils::validation::PORT_CODE_RE")]
    pub code: String,

    #[validate(custom = "validate_not_blank")]
    pub name: String,

    #[validate(custom = "validate_not_blank")]
    pub country: String,

    #[validate(custom = "validate_not_blank")]
    pub city: String,

    #[validate(custom = "validate_transport_types")]
    pub transport_types: Vec<String>,
}

impl PortRequest {
    pub fn into_port(self, id: Uuid) -> Port {
        Port {
            id,
            code: self.code,
            name: self.name,
            country: self.country,
            city: self.city,
            transport_types: self.transport_types,
        }
    }
}
