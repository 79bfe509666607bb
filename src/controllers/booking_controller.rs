use std::time::Duration;

use serde_json::json;
use uuid::Uuid;

use crate::clients::AutomationWebhookClient;
use crate::dto::booking_dto::{BookingResponse, CreateBookingRequest};
use crate::models::Booking;
use crate::repositories::booking_repository::BookingRepository;
use crate::services::metrics;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub const BOOKING_EVENT: &str = "booking_created";

pub struct BookingController {
    repository: BookingRepository,
    notifier: AutomationWebhookClient,
    notify_timeout: Duration,
}

impl BookingController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: BookingRepository::new(state.pool.clone()),
            notifier: AutomationWebhookClient::new(
                state.http_client.clone(),
                state.config.automation_webhook_url.clone(),
            ),
            notify_timeout: state.config.booking_notify_timeout,
        }
    }

    /// Primero se guarda la reserva; la notificación nunca la deshace
    pub async fn create(&self, user_id: Uuid, request: CreateBookingRequest) -> Result<BookingResponse, AppError> {
        let (details, search_query) = request.into_parts();
        let booking = Booking::new(user_id, details, search_query);

        let saved = self
            .repository
            .create(&booking)
            .await
            .map_err(|e| AppError::Internal(format!("Error creating booking: {}", e)))?;

        tracing::info!("📦 Reserva {} creada para la ruta {}", saved.id, saved.route_id);

        let delivery = self.notifier.notify(&booking_event(&saved), self.notify_timeout).await;
        if !delivery.sent {
            metrics::record_notification_failure(BOOKING_EVENT);
        }

        Ok(BookingResponse {
            booking_id: saved.id,
            status: saved.status,
            webhook_sent: delivery.sent,
            message: if delivery.sent {
                "Booking created successfully".to_string()
            } else {
                "Booking created; notification could not be delivered".to_string()
            },
        })
    }
}

fn booking_event(booking: &Booking) -> serde_json::Value {
    json!({
        "event": BOOKING_EVENT,
        "booking_id": booking.id,
        "user_id": booking.user_id,
        "route_id": booking.route_id,
        "company_name": booking.company_name,
        "contact_person": booking.contact_person,
        "email": booking.email,
        "phone": booking.phone,
        "cargo_description": booking.cargo_description,
        "delivery_term": booking.delivery_term,
        "inn": booking.inn,
        "pickup_address": booking.pickup_address,
        "delivery_address": booking.delivery_address,
        "comment": booking.comment,
        "search_query": booking.search_query.0,
        "status": booking.status,
        "created_at": booking.created_at,
    })
}
