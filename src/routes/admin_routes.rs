use axum::{
    extract::{Path, State},
    middleware,
    routing::{get, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::admin_controller::AdminController;
use crate::dto::admin_dto::{MessageResponse, WebhookSettingsResponse, WebhookUpdateRequest};
use crate::middleware::admin_auth_middleware;
use crate::models::{
    Booking, ContainerType, ContainerTypeRequest, Port, PortRequest, ShippingRoute, ShippingRouteRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::ValidatedJson;

/// Panel de administración; todas las rutas exigen token de admin
pub fn create_admin_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/ports", get(list_ports).post(create_port))
        .route("/ports/:id", put(replace_port).delete(delete_port))
        .route("/container-types", get(list_container_types).post(create_container_type))
        .route(
            "/container-types/:id",
            put(replace_container_type).delete(delete_container_type),
        )
        .route("/routes", get(list_routes).post(create_route))
        .route("/routes/:id", put(replace_route).delete(delete_route))
        .route("/webhook", get(get_webhook).post(update_webhook))
        .route("/bookings", get(list_bookings))
        .route_layer(middleware::from_fn_with_state(state, admin_auth_middleware))
}

fn controller(state: &AppState) -> AdminController {
    AdminController::new(state.pool.clone())
}

// Puertos

async fn list_ports(State(state): State<AppState>) -> Result<Json<Vec<Port>>, AppError> {
    Ok(Json(controller(&state).list_ports().await?))
}

async fn create_port(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<PortRequest>,
) -> Result<Json<Port>, AppError> {
    Ok(Json(controller(&state).create_port(request).await?))
}

async fn replace_port(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<PortRequest>,
) -> Result<Json<Port>, AppError> {
    Ok(Json(controller(&state).replace_port(id, request).await?))
}

async fn delete_port(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    controller(&state).delete_port(id).await?;
    Ok(Json(MessageResponse::new("Port deleted")))
}

// Tipos de contenedor

async fn list_container_types(State(state): State<AppState>) -> Result<Json<Vec<ContainerType>>, AppError> {
    Ok(Json(controller(&state).list_container_types().await?))
}

async fn create_container_type(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ContainerTypeRequest>,
) -> Result<Json<ContainerType>, AppError> {
    Ok(Json(controller(&state).create_container_type(request).await?))
}

async fn replace_container_type(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<ContainerTypeRequest>,
) -> Result<Json<ContainerType>, AppError> {
    Ok(Json(controller(&state).replace_container_type(id, request).await?))
}

async fn delete_container_type(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    controller(&state).delete_container_type(id).await?;
    Ok(Json(MessageResponse::new("Container type deleted")))
}

// Rutas

async fn list_routes(State(state): State<AppState>) -> Result<Json<Vec<ShippingRoute>>, AppError> {
    Ok(Json(controller(&state).list_routes().await?))
}

async fn create_route(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ShippingRouteRequest>,
) -> Result<Json<ShippingRoute>, AppError> {
    Ok(Json(controller(&state).create_route(request).await?))
}

async fn replace_route(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<ShippingRouteRequest>,
) -> Result<Json<ShippingRoute>, AppError> {
    Ok(Json(controller(&state).replace_route(id, request).await?))
}

async fn delete_route(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    controller(&state).delete_route(id).await?;
    Ok(Json(MessageResponse::new("Route deleted")))
}

// Webhook

async fn get_webhook(State(state): State<AppState>) -> Result<Json<WebhookSettingsResponse>, AppError> {
    let default_url = state.config.default_search_webhook_url.clone();
    Ok(Json(controller(&state).webhook_settings(&default_url).await?))
}

async fn update_webhook(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<WebhookUpdateRequest>,
) -> Result<Json<WebhookSettingsResponse>, AppError> {
    Ok(Json(controller(&state).update_webhook(&request.webhook_url).await?))
}

// Reservas

async fn list_bookings(State(state): State<AppState>) -> Result<Json<Vec<Booking>>, AppError> {
    Ok(Json(controller(&state).list_bookings().await?))
}
