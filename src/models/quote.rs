//! Modelos de búsqueda y cotización
//!
//! `SearchQuery` es lo que envía el buscador; `QuoteResult` es cada fila que
//! se devuelve, venga del webhook externo o de la tabla de respaldo.
//! Ninguno de los dos se persiste (salvo la copia dentro de una reserva).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::utils::validation::validate_not_blank;

fn default_containers_count() -> i32 {
    1
}

/// Parámetros de búsqueda
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_departure_range", skip_on_field_errors = false))]
pub struct SearchQuery {
    #[validate(custom = "validate_not_blank")]
    pub origin_port: String,

    #[validate(custom = "validate_not_blank")]
    pub destination_port: String,

    pub departure_date_from: NaiveDate,
    pub departure_date_to: NaiveDate,

    #[validate(custom = "validate_not_blank")]
    pub container_type: String,

    #[serde(default)]
    pub is_dangerous_cargo: bool,

    #[serde(default = "default_containers_count")]
    #[validate(range(min = 1))]
    pub containers_count: i32,

    #[validate(range(min = 0))]
    pub cargo_weight_kg: Option<i32>,

    #[validate(range(min = 0))]
    pub cargo_volume_m3: Option<i32>,
}

fn validate_departure_range(query: &SearchQuery) -> Result<(), ValidationError> {
    if query.departure_date_from > query.departure_date_to {
        let mut error = ValidationError::new("departure_date_range");
        error.message = Some("departure_date_from must not be after departure_date_to".into());
        return Err(error);
    }
    Ok(())
}

impl SearchQuery {
    /// Rango de salida tal como se muestra: `dd.mm - dd.mm.YYYY`
    pub fn departure_date_range(&self) -> String {
        format!(
            "{} - {}",
            self.departure_date_from.format("%d.%m"),
            self.departure_date_to.format("%d.%m.%Y")
        )
    }
}

/// Origen de una cotización
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Devuelta por el webhook externo
    Webhook,
    /// Sintetizada localmente porque el webhook no dio datos utilizables
    Fallback,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Webhook => "webhook",
            Provenance::Fallback => "fallback",
        }
    }
}

/// Una fila del resultado de búsqueda
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    pub id: String,
    pub origin_port: String,
    pub destination_port: String,
    pub carrier: String,
    pub departure_date_range: String,
    pub transit_time_days: i64,
    pub container_type: String,
    pub price_from_usd: f64,
    pub is_dangerous_cargo: bool,
    pub available_containers: i64,
    pub booking_deadline: NaiveDate,
    pub provenance: Provenance,
}
