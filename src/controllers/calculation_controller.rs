use std::time::Duration;

use serde_json::json;

use crate::clients::AutomationWebhookClient;
use crate::dto::calculation_dto::{CalculationRequest, CalculationResponse};
use crate::models::CalculationClick;
use crate::repositories::calculation_click_repository::CalculationClickRepository;
use crate::services::metrics;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub const CALCULATION_EVENT: &str = "calculate_click";

pub struct CalculationController {
    repository: CalculationClickRepository,
    notifier: AutomationWebhookClient,
    notify_timeout: Duration,
}

impl CalculationController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: CalculationClickRepository::new(state.pool.clone()),
            notifier: AutomationWebhookClient::new(
                state.http_client.clone(),
                state.config.automation_webhook_url.clone(),
            ),
            notify_timeout: state.config.calculation_notify_timeout,
        }
    }

    pub async fn record(&self, request: CalculationRequest) -> Result<CalculationResponse, AppError> {
        let click = CalculationClick::new(request.shipment_id.clone(), request.client_id.clone());
        self.repository.create(&click).await?;

        tracing::info!("🧮 Clic de cálculo: ruta {} cliente {}", click.route_id, click.user_id);

        let event = json!({
            "event": CALCULATION_EVENT,
            "click_id": click.id,
            "shipmentId": request.shipment_id,
            "clientId": request.client_id,
            "created_at": click.created_at,
        });
        let delivery = self.notifier.notify(&event, self.notify_timeout).await;
        if !delivery.sent {
            metrics::record_notification_failure(CALCULATION_EVENT);
        }

        Ok(CalculationResponse {
            message: if delivery.sent {
                "Calculation request sent".to_string()
            } else {
                "Calculation recorded; notification could not be delivered".to_string()
            },
            webhook_sent: delivery.sent,
            webhook_response: delivery.response,
        })
    }
}
