use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::utils::validation::validate_not_blank;

// Clic en "calcular" desde la tarjeta de una cotización
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    #[validate(custom = "validate_not_blank")]
    pub shipment_id: String,
    #[validate(custom = "validate_not_blank")]
    pub client_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalculationResponse {
    pub message: String,
    pub webhook_sent: bool,
    pub webhook_response: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_camel_case_fields() {
        let request: CalculationRequest =
            serde_json::from_value(json!({"shipmentId": "s-1", "clientId": "c-9"})).unwrap();
        assert_eq!(request.shipment_id, "s-1");
        assert_eq!(request.client_id, "c-9");
        assert!(request.validate().is_ok());
    }
}
