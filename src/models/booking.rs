//! Modelo de Booking
//!
//! Una reserva se crea una vez por envío del formulario y guarda una copia
//! literal de la búsqueda que la originó (`search_query` en JSONB).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::quote::SearchQuery;

/// Estado inicial de toda reserva; ninguna lógica del servicio lo avanza
pub const BOOKING_STATUS_PENDING: &str = "pending";

/// Booking - mapea a la tabla bookings
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub route_id: String,
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub cargo_description: String,
    pub delivery_term: String,
    pub inn: Option<String>,
    pub pickup_address: Option<String>,
    pub delivery_address: Option<String>,
    pub comment: Option<String>,
    pub search_query: Json<SearchQuery>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Campos de contacto y logística tal como llegan del formulario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDetails {
    pub route_id: String,
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub cargo_description: String,
    pub delivery_term: String,
    pub inn: Option<String>,
    pub pickup_address: Option<String>,
    pub delivery_address: Option<String>,
    pub comment: Option<String>,
}

impl Booking {
    pub fn new(user_id: Uuid, details: BookingDetails, search_query: SearchQuery) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            route_id: details.route_id,
            company_name: details.company_name,
            contact_person: details.contact_person,
            email: details.email,
            phone: details.phone,
            cargo_description: details.cargo_description,
            delivery_term: details.delivery_term,
            inn: details.inn,
            pickup_address: details.pickup_address,
            delivery_address: details.delivery_address,
            comment: details.comment,
            search_query: Json(search_query),
            status: BOOKING_STATUS_PENDING.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}
