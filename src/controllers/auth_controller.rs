use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::Utc;
use uuid::Uuid;

use crate::config::environment::EnvironmentConfig;
use crate::dto::auth_dto::{AdminLoginRequest, LoginRequest, RegisterRequest, RegisterResponse, TokenResponse};
use crate::models::{User, UserResponse};
use crate::repositories::user_repository::UserRepository;
use crate::services::jwt_service::JwtService;
use crate::state::AppState;
use crate::utils::errors::{conflict_error, AppError};

pub struct AuthController {
    repository: UserRepository,
    jwt: JwtService,
    config: EnvironmentConfig,
}

impl AuthController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: UserRepository::new(state.pool.clone()),
            jwt: state.jwt.clone(),
            config: state.config.clone(),
        }
    }

    /// Email, password y confirmación ya vienen validados por el DTO
    pub async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, AppError> {
        let email = request.email.trim().to_lowercase();

        if self.repository.find_by_email(&email).await?.is_some() {
            return Err(conflict_error("User", "email", &email));
        }

        let password_hash = hash(&request.password, DEFAULT_COST)?;

        let user = User {
            id: Uuid::new_v4(),
            email,
            password_hash,
            created_at: Utc::now(),
        };
        let saved = self.repository.create(&user).await?;

        tracing::info!("👤 Usuario registrado: {}", saved.email);
        Ok(RegisterResponse {
            message: "User registered successfully".to_string(),
            user: saved.into(),
        })
    }

    pub async fn login(&self, request: LoginRequest) -> Result<TokenResponse, AppError> {
        let email = request.email.trim().to_lowercase();

        let user = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

        if !verify(&request.password, &user.password_hash)? {
            return Err(AppError::Unauthorized("Invalid email or password".to_string()));
        }

        tracing::info!("🔑 Login de usuario: {}", user.email);
        Ok(self.jwt.issue(&user.id.to_string())?.into())
    }

    pub fn admin_login(&self, request: AdminLoginRequest) -> Result<TokenResponse, AppError> {
        if request.login != self.config.admin_login || request.password != self.config.admin_password {
            return Err(AppError::Unauthorized("Invalid admin credentials".to_string()));
        }

        tracing::info!("🔑 Login de administrador");
        Ok(self.jwt.issue(&self.config.admin_login)?.into())
    }

    pub async fn current_user(&self, user_id: Uuid) -> Result<UserResponse, AppError> {
        self.repository
            .find_by_id(user_id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::Unauthorized("User not found".to_string()))
    }
}
