//! Cargo Search - backend de búsqueda y reserva de transporte de contenedores
//!
//! Rutas HTTP (axum) sobre PostgreSQL (sqlx), con un webhook externo de
//! cotizaciones y un webhook de automatización para reservas y cálculos.

pub mod clients;
pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{http::header, response::IntoResponse, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::middleware::cors_layer;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Router completo: API bajo `/api` y métricas en `/metrics`
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .nest("/api", routes::create_api_router(state.clone()))
        // `nest` sólo registra `/api` para la ruta raíz
        .route("/api/", get(routes::public_routes::banner))
        .route("/metrics", get(metrics_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors),
        )
        .with_state(state)
}

async fn metrics_handler() -> Result<impl IntoResponse, AppError> {
    let body = services::metrics::render()?;
    Ok(([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body))
}
