use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{BookingDetails, SearchQuery};
use crate::utils::validation::{validate_incoterm, validate_not_blank, validate_phone};

// Formulario de reserva con la búsqueda que lo originó embebida
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBookingRequest {
    #[validate(custom = "validate_not_blank")]
    pub route_id: String,
    #[validate(custom = "validate_not_blank")]
    pub company_name: String,
    #[validate(custom = "validate_not_blank")]
    pub contact_person: String,
    #[validate(email)]
    pub email: String,
    #[validate(custom = "validate_phone")]
    pub phone: String,
    #[validate(custom = "validate_not_blank")]
    pub cargo_description: String,
    #[validate(custom = "validate_incoterm")]
    pub delivery_term: String,
    pub inn: Option<String>,
    pub pickup_address: Option<String>,
    pub delivery_address: Option<String>,
    pub comment: Option<String>,
    #[validate]
    pub search_query: SearchQuery,
}

impl CreateBookingRequest {
    pub fn into_parts(self) -> (BookingDetails, SearchQuery) {
        let details = BookingDetails {
            route_id: self.route_id,
            company_name: self.company_name,
            contact_person: self.contact_person,
            email: self.email,
            phone: self.phone,
            cargo_description: self.cargo_description,
            delivery_term: self.delivery_term,
            inn: self.inn,
            pickup_address: self.pickup_address,
            delivery_address: self.delivery_address,
            comment: self.comment,
        };
        (details, self.search_query)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BookingResponse {
    pub booking_id: Uuid,
    pub status: String,
    pub webhook_sent: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request_json() -> serde_json::Value {
        json!({
            "route_id": "route-42",
            "company_name": "ООО Ромашка",
            "contact_person": "Иван Петров",
            "email": "ivan@example.com",
            "phone": "+7 921 555 12 34",
            "cargo_description": "Электроника",
            "delivery_term": "FOB",
            "search_query": {
                "origin_port": "SHA",
                "destination_port": "SVO",
                "departure_date_from": "2025-06-01",
                "departure_date_to": "2025-06-15",
                "container_type": "40ft"
            }
        })
    }

    #[test]
    fn test_valid_request() {
        let request: CreateBookingRequest = serde_json::from_value(request_json()).unwrap();
        assert!(request.validate().is_ok());

        let (details, query) = request.into_parts();
        assert_eq!(details.route_id, "route-42");
        assert!(details.inn.is_none());
        assert_eq!(query.containers_count, 1);
    }

    #[test]
    fn test_unknown_incoterm_rejected() {
        let mut value = request_json();
        value["delivery_term"] = json!("ABC");
        let request: CreateBookingRequest = serde_json::from_value(value).unwrap();
        assert!(request.validate().unwrap_err().field_errors().contains_key("delivery_term"));
    }

    #[test]
    fn test_nested_search_query_validated() {
        let mut value = request_json();
        value["search_query"]["departure_date_from"] = json!("2025-07-01");
        let request: CreateBookingRequest = serde_json::from_value(value).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_missing_required_field_fails_to_parse() {
        let mut value = request_json();
        value.as_object_mut().unwrap().remove("company_name");
        assert!(serde_json::from_value::<CreateBookingRequest>(value).is_err());
    }
}
