//! Modelo de ShippingRoute
//!
//! Rutas de referencia administradas desde el panel. El precio base se guarda
//! como NUMERIC y se expone como número en JSON.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::port::TransportType;
use crate::utils::validation::validate_not_blank;

/// ShippingRoute - mapea a la tabla shipping_routes
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ShippingRoute {
    pub id: Uuid,
    pub origin_port: String,
    pub destination_port: String,
    pub transport_type: String,
    pub carrier: String,
    pub transit_time_days: i32,
    pub base_price_usd: Decimal,
    pub available_container_types: Vec<String>,
    /// Daily, Weekly...
    pub frequency: String,
    pub created_at: DateTime<Utc>,
}

fn default_transport_type() -> String {
    TransportType::Sea.as_str().to_string()
}

fn validate_transport_type(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<TransportType>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("transport_type"))
}

fn validate_price(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() {
        return Err(ValidationError::new("negative_price"));
    }
    Ok(())
}

/// Request para crear o reemplazar una ruta
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ShippingRouteRequest {
    pub id: Option<Uuid>,

    #[validate(regex = "crate::utils::validation::PORT_CODE_RE")]
    pub origin_port: String,

    #[validate(regex = "crate::utils::validation::PORT_CODE_RE")]
    pub destination_port: String,

    #[serde(default = "default_transport_type")]
    #[validate(custom = "validate_transport_type")]
    pub transport_type: String,

    #[validate(custom = "validate_not_blank")]
    pub carrier: String,

    #[validate(range(min = 0))]
    pub transit_time_days: i32,

    #[validate(custom = "validate_price")]
    pub base_price_usd: Decimal,

    #[serde(default)]
    pub available_container_types: Vec<String>,

    #[validate(custom = "validate_not_blank")]
    pub frequency: String,
}

impl ShippingRouteRequest {
    pub fn into_route(self, id: Uuid, created_at: DateTime<Utc>) -> ShippingRoute {
        ShippingRoute {
            id,
            origin_port: self.origin_port,
            destination_port: self.destination_port,
            transport_type: self.transport_type,
            carrier: self.carrier,
            transit_time_days: self.transit_time_days,
            base_price_usd: self.base_price_usd,
            available_container_types: self.available_container_types,
            frequency: self.frequency,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_route_request_defaults_and_validation() {
        let request: ShippingRouteRequest = serde_json::from_value(json!({
            "origin_port": "LED",
            "destination_port": "VVO",
            "carrier": "Test Shipping Line",
            "transit_time_days": 15,
            "base_price_usd": 950.0,
            "available_container_types": ["20ft", "40ft"],
            "frequency": "Weekly"
        }))
        .unwrap();

        assert_eq!(request.transport_type, "sea");
        assert_eq!(request.base_price_usd, Decimal::new(950, 0));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_route_request_rejects_negative_price() {
        let request: ShippingRouteRequest = serde_json::from_value(json!({
            "origin_port": "LED",
            "destination_port": "VVO",
            "transport_type": "rail",
            "carrier": "RZD",
            "transit_time_days": 7,
            "base_price_usd": -1,
            "frequency": "Daily"
        }))
        .unwrap();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("base_price_usd"));
    }
}
