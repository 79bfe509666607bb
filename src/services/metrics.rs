//! Métricas Prometheus del servicio
//!
//! Registro propio (no el global) para que los tests puedan leerlo sin
//! interferencias de otras librerías.

use lazy_static::lazy_static;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

use crate::models::Provenance;
use crate::utils::errors::AppError;

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();

    pub static ref SEARCH_REQUESTS: IntCounterVec = register_counter_vec(
        Opts::new("cargo_search_requests_total", "Búsquedas resueltas, por origen de las cotizaciones"),
        &["provenance"],
    );

    pub static ref NOTIFICATION_FAILURES: IntCounterVec = register_counter_vec(
        Opts::new("cargo_search_notification_failures_total", "Notificaciones al webhook de automatización no entregadas"),
        &["event"],
    );
}

fn register_counter_vec(opts: Opts, labels: &[&str]) -> IntCounterVec {
    let counter = IntCounterVec::new(opts, labels).expect("valid metric definition");
    REGISTRY
        .register(Box::new(counter.clone()))
        .expect("metric registered once");
    counter
}

pub fn record_search(provenance: Provenance) {
    SEARCH_REQUESTS.with_label_values(&[provenance.as_str()]).inc();
}

pub fn record_notification_failure(event: &str) {
    NOTIFICATION_FAILURES.with_label_values(&[event]).inc();
}

/// Exposición en formato texto
pub fn render() -> Result<String, AppError> {
    // Forzar el registro aunque todavía no se haya contado nada
    lazy_static::initialize(&SEARCH_REQUESTS);
    lazy_static::initialize(&NOTIFICATION_FAILURES);

    let mut buffer = Vec::new();
    TextEncoder::new()
        .encode(&REGISTRY.gather(), &mut buffer)
        .map_err(|e| AppError::Internal(format!("Error encoding metrics: {}", e)))?;

    String::from_utf8(buffer).map_err(|e| AppError::Internal(format!("Invalid metrics output: {}", e)))
}
