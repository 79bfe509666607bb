//! Middleware de autenticación JWT
//!
//! Este módulo maneja la extracción del bearer token y la verificación de
//! los dos tipos de principal: administrador (sin estado) y usuario
//! registrado (el `sub` debe existir en la tabla users).

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::{repositories::user_repository::UserRepository, state::AppState, utils::errors::AppError};

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Token del header Authorization
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::Unauthorized("Authorization bearer token required".to_string()))
}

/// Rutas del panel: firma, expiración y `sub == ADMIN_LOGIN`
pub async fn admin_auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers())?;
    state.jwt.verify_admin(token, &state.config.admin_login)?;

    Ok(next.run(request).await)
}

/// Rutas de usuario: el token debe resolver a una fila existente
pub async fn user_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers())?;
    let user_id = state.jwt.user_id(token)?;

    let user = UserRepository::new(state.pool.clone())
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".to_string()))?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: user.id,
        email: user.email,
    });

    Ok(next.run(request).await)
}
