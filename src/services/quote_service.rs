//! Servicio de resolución de cotizaciones
//!
//! Flujo: URL del webhook (configurada o por defecto) → etiquetas externas
//! de origen/destino (código → ciudad → etiqueta) → tamaño de contenedor →
//! GET al webhook → resultados normalizados, o las tres cotizaciones de
//! respaldo si el webhook no dio datos utilizables.

use std::collections::HashMap;

use lazy_static::lazy_static;
use sqlx::PgPool;
use uuid::Uuid;

use crate::clients::{QuoteWebhookClient, QuoteWebhookParams, WebhookOutcome};
use crate::models::{Provenance, QuoteResult, SearchQuery};
use crate::repositories::port_repository::PortRepository;
use crate::repositories::webhook_repository::WebhookRepository;
use crate::services::metrics;
use crate::state::AppState;
use crate::utils::errors::AppError;

lazy_static! {
    /// Ciudad local → etiqueta que entiende el sistema externo
    static ref CITY_LABELS: HashMap<&'static str, &'static str> = HashMap::from([
        ("Москва", "Moscow"),
        ("Санкт-Петербург", "Saint Petersburg"),
        ("Новосибирск", "Novosibirsk"),
        ("Екатеринбург", "Yekaterinburg"),
        ("Минск", "Minsk"),
        ("Алматы", "Almaty"),
        ("Шанхай", "Shanghai"),
        ("Пекин", "Beijing"),
        ("Иу", "Yiwu"),
        ("Сиань", "Xian"),
        ("Урумчи", "Urumqi"),
    ]);
}

/// Tabla de respaldo: (transportista, precio base USD, días de tránsito)
pub const FALLBACK_ROUTES: [(&str, i64, i64); 3] = [
    ("China Railways Express", 4750, 15),
    ("New Silk Road Express", 4700, 18),
    ("RZD Logistics", 5200, 12),
];

const FALLBACK_BASE_AVAILABLE: i64 = 5;
const DEFAULT_CONTAINER_SIZE: &str = "20";

pub fn external_label(city: &str) -> String {
    CITY_LABELS.get(city).copied().unwrap_or(city).to_string()
}

pub fn container_size(container_type: &str) -> &'static str {
    match container_type {
        "20ft" => "20",
        "40ft" | "40ft HC" => "40",
        _ => DEFAULT_CONTAINER_SIZE,
    }
}

/// Precio de respaldo: +30 % si es peligrosa, después ×0.95×N si N > 1.
/// Cada paso se trunca a entero.
pub fn fallback_price(base: i64, is_dangerous: bool, containers_count: i32) -> i64 {
    let mut price = base;
    if is_dangerous {
        price = price * 13 / 10;
    }
    if containers_count > 1 {
        price = price * 95 * i64::from(containers_count) / 100;
    }
    price
}

pub fn fallback_quotes(query: &SearchQuery) -> Vec<QuoteResult> {
    FALLBACK_ROUTES
        .iter()
        .enumerate()
        .map(|(index, (carrier, base_price, transit_days))| QuoteResult {
            id: Uuid::new_v4().to_string(),
            origin_port: query.origin_port.clone(),
            destination_port: query.destination_port.clone(),
            carrier: carrier.to_string(),
            departure_date_range: query.departure_date_range(),
            transit_time_days: *transit_days,
            container_type: query.container_type.clone(),
            price_from_usd: fallback_price(*base_price, query.is_dangerous_cargo, query.containers_count) as f64,
            is_dangerous_cargo: query.is_dangerous_cargo,
            available_containers: FALLBACK_BASE_AVAILABLE + index as i64,
            booking_deadline: query.departure_date_from,
            provenance: Provenance::Fallback,
        })
        .collect()
}

/// Único punto de decisión entre datos del webhook y respaldo
pub fn resolve(outcome: WebhookOutcome, query: &SearchQuery) -> Vec<QuoteResult> {
    match outcome {
        WebhookOutcome::Success(quotes) => {
            tracing::info!("✅ Webhook devolvió {} cotizaciones", quotes.len());
            metrics::record_search(Provenance::Webhook);
            quotes
        }
        failure => {
            let reason = failure.failure_reason().unwrap_or_default();
            tracing::warn!("⚠️ Webhook sin datos utilizables, usando respaldo: {}", reason);
            metrics::record_search(Provenance::Fallback);
            fallback_quotes(query)
        }
    }
}

pub struct QuoteService {
    ports: PortRepository,
    webhooks: WebhookRepository,
    client: QuoteWebhookClient,
    default_webhook_url: String,
}

impl QuoteService {
    pub fn new(pool: PgPool, client: QuoteWebhookClient, default_webhook_url: String) -> Self {
        Self {
            ports: PortRepository::new(pool.clone()),
            webhooks: WebhookRepository::new(pool),
            client,
            default_webhook_url,
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(
            state.pool.clone(),
            QuoteWebhookClient::new(state.http_client.clone(), state.config.search_webhook_timeout),
            state.config.default_search_webhook_url.clone(),
        )
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<QuoteResult>, AppError> {
        tracing::info!(
            "🔍 Búsqueda {} → {} ({}, {} contenedores)",
            query.origin_port,
            query.destination_port,
            query.container_type,
            query.containers_count
        );

        let url = self.webhook_url().await?;
        let params = self.build_params(query).await?;
        let outcome = self.client.fetch(&url, &params, query).await;

        Ok(resolve(outcome, query))
    }

    async fn webhook_url(&self) -> Result<String, AppError> {
        Ok(self
            .webhooks
            .current()
            .await?
            .map(|settings| settings.webhook_url)
            .unwrap_or_else(|| self.default_webhook_url.clone()))
    }

    async fn build_params(&self, query: &SearchQuery) -> Result<QuoteWebhookParams, AppError> {
        Ok(QuoteWebhookParams {
            from: self.port_label(&query.origin_port).await?,
            to: self.port_label(&query.destination_port).await?,
            container_size: container_size(&query.container_type).to_string(),
            date_from: query.departure_date_from.format("%Y-%m-%d").to_string(),
            date_to: query.departure_date_to.format("%Y-%m-%d").to_string(),
        })
    }

    /// Un código sin puerto registrado se envía tal cual
    async fn port_label(&self, code: &str) -> Result<String, AppError> {
        Ok(match self.ports.find_by_code(code).await? {
            Some(port) => external_label(&port.city),
            None => code.to_string(),
        })
    }
}
