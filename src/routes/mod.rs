pub mod admin_routes;
pub mod auth_routes;
pub mod public_routes;
pub mod user_routes;

use axum::Router;

use crate::state::AppState;

/// Todas las rutas de la API, para montar bajo `/api`
pub fn create_api_router(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(public_routes::create_public_router())
        .merge(auth_routes::create_auth_router())
        .merge(user_routes::create_user_router(state.clone()))
        .nest("/admin", admin_routes::create_admin_router(state))
}
