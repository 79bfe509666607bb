use axum::{
    extract::State,
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::auth_controller::AuthController;
use crate::controllers::booking_controller::BookingController;
use crate::dto::booking_dto::{BookingResponse, CreateBookingRequest};
use crate::middleware::{user_auth_middleware, AuthenticatedUser};
use crate::models::UserResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::ValidatedJson;

/// Rutas que requieren un usuario registrado
pub fn create_user_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/booking", post(create_booking))
        .route("/me", get(current_user))
        .route_layer(middleware::from_fn_with_state(state, user_auth_middleware))
}

async fn create_booking(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<CreateBookingRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    let controller = BookingController::new(&state);
    Ok(Json(controller.create(user.user_id, request).await?))
}

async fn current_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<UserResponse>, AppError> {
    let controller = AuthController::new(&state);
    Ok(Json(controller.current_user(user.user_id).await?))
}
