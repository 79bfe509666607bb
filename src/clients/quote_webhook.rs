//! Cliente del webhook externo de cotizaciones
//!
//! El webhook se consulta por GET con parámetros de query. Cualquier
//! respuesta se reduce a un `WebhookOutcome`; sólo `Success` lleva datos,
//! el resto de variantes las consume el mismo manejador de respaldo.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::models::{Provenance, QuoteResult, SearchQuery};

pub const DEFAULT_CARRIER: &str = "Railway Express";
pub const DEFAULT_TRANSIT_DAYS: i64 = 15;
pub const DEFAULT_AVAILABLE_CONTAINERS: i64 = 5;

/// Parámetros que entiende el sistema externo
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteWebhookParams {
    pub from: String,
    pub to: String,
    pub container_size: String,
    pub date_from: String,
    pub date_to: String,
}

/// Resultado de una llamada al webhook
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookOutcome {
    Success(Vec<QuoteResult>),
    /// HTTP 200 pero sin elementos en `result`
    EmptyResult,
    HttpStatus(u16),
    /// Conexión rechazada, DNS, timeout...
    Transport(String),
    Decode(String),
}

impl WebhookOutcome {
    /// Motivo legible para los logs del modo degradado
    pub fn failure_reason(&self) -> Option<String> {
        match self {
            WebhookOutcome::Success(_) => None,
            WebhookOutcome::EmptyResult => Some("webhook returned an empty result list".to_string()),
            WebhookOutcome::HttpStatus(code) => Some(format!("webhook returned status {}", code)),
            WebhookOutcome::Transport(e) => Some(format!("transport error: {}", e)),
            WebhookOutcome::Decode(e) => Some(format!("decode error: {}", e)),
        }
    }
}

pub struct QuoteWebhookClient {
    client: Client,
    timeout: Duration,
}

impl QuoteWebhookClient {
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    pub async fn fetch(
        &self,
        url: &str,
        params: &QuoteWebhookParams,
        query: &SearchQuery,
    ) -> WebhookOutcome {
        tracing::info!("🌐 Consultando webhook de cotizaciones: {} {:?}", url, params);

        let response = match self
            .client
            .get(url)
            .query(params)
            .timeout(self.timeout)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return WebhookOutcome::Transport(e.to_string()),
        };

        let status = response.status();
        tracing::info!("📡 Webhook status: {}", status);

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return WebhookOutcome::Transport(e.to_string()),
        };

        interpret_response(status, &body, query)
    }
}

/// Convertir status + cuerpo en un `WebhookOutcome`
pub fn interpret_response(status: StatusCode, body: &str, query: &SearchQuery) -> WebhookOutcome {
    if status != StatusCode::OK {
        return WebhookOutcome::HttpStatus(status.as_u16());
    }

    let payload: Value = match serde_json::from_str(body) {
        Ok(payload) => payload,
        Err(e) => return WebhookOutcome::Decode(e.to_string()),
    };

    let items = match payload.get("result").and_then(Value::as_array) {
        Some(items) if !items.is_empty() => items,
        _ => return WebhookOutcome::EmptyResult,
    };

    match items.iter().map(|item| map_item(item, query)).collect() {
        Ok(quotes) => WebhookOutcome::Success(quotes),
        Err(e) => WebhookOutcome::Decode(e),
    }
}

fn map_item(item: &Value, query: &SearchQuery) -> Result<QuoteResult, String> {
    let id = match item.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => Uuid::new_v4().to_string(),
    };

    let transit_time_days = match item.get("TT").and_then(as_f64_lenient) {
        Some(days) if days > 0.0 => days as i64,
        _ => DEFAULT_TRANSIT_DAYS,
    };

    let price_from_usd = match item.get("price") {
        None => 0.0,
        Some(value) => as_f64_lenient(value)
            .ok_or_else(|| format!("unparseable price: {}", value))?,
    };
    if price_from_usd < 0.0 {
        return Err(format!("negative price: {}", price_from_usd));
    }

    let available_containers = item
        .get("available_containers")
        .and_then(Value::as_i64)
        .unwrap_or(DEFAULT_AVAILABLE_CONTAINERS);

    Ok(QuoteResult {
        id,
        origin_port: string_or(item, "from", &query.origin_port),
        destination_port: string_or(item, "to", &query.destination_port),
        carrier: string_or(item, "carrier", DEFAULT_CARRIER),
        departure_date_range: query.departure_date_range(),
        transit_time_days,
        container_type: query.container_type.clone(),
        price_from_usd,
        is_dangerous_cargo: query.is_dangerous_cargo,
        available_containers,
        booking_deadline: query.departure_date_from,
        provenance: Provenance::Webhook,
    })
}

fn string_or(item: &Value, key: &str, default: &str) -> String {
    item.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(default)
        .to_string()
}

/// Números JSON o strings numéricos ("5100")
fn as_f64_lenient(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
