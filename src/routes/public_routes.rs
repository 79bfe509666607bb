use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::controllers::calculation_controller::CalculationController;
use crate::controllers::reference_controller::ReferenceController;
use crate::dto::calculation_dto::{CalculationRequest, CalculationResponse};
use crate::models::{CargoType, ContainerType, DeliveryTerm, Port, QuoteResult, SearchQuery};
use crate::services::quote_service::QuoteService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::ValidatedJson;

pub fn create_public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(banner))
        .route("/ports", get(list_ports))
        .route("/container-types", get(list_container_types))
        .route("/cargo-types", get(list_cargo_types))
        .route("/delivery-terms", get(list_delivery_terms))
        .route("/search", post(search))
        .route("/calculation", post(calculation))
}

pub async fn banner() -> Json<Value> {
    Json(json!({
        "message": "Cargo Search API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn list_ports(State(state): State<AppState>) -> Result<Json<Vec<Port>>, AppError> {
    let controller = ReferenceController::new(state.pool.clone());
    Ok(Json(controller.ports().await?))
}

async fn list_container_types(State(state): State<AppState>) -> Result<Json<Vec<ContainerType>>, AppError> {
    let controller = ReferenceController::new(state.pool.clone());
    Ok(Json(controller.container_types().await?))
}

async fn list_cargo_types(State(state): State<AppState>) -> Result<Json<Vec<CargoType>>, AppError> {
    let controller = ReferenceController::new(state.pool.clone());
    Ok(Json(controller.cargo_types().await?))
}

async fn list_delivery_terms() -> Json<&'static [DeliveryTerm]> {
    Json(ReferenceController::delivery_terms())
}

async fn search(
    State(state): State<AppState>,
    ValidatedJson(query): ValidatedJson<SearchQuery>,
) -> Result<Json<Vec<QuoteResult>>, AppError> {
    let service = QuoteService::from_state(&state);
    Ok(Json(service.search(&query).await?))
}

async fn calculation(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CalculationRequest>,
) -> Result<Json<CalculationResponse>, AppError> {
    let controller = CalculationController::new(&state);
    Ok(Json(controller.record(request).await?))
}
