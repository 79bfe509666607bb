//! Servicio JWT
//!
//! Emite y valida los bearer tokens de los dos tipos de principal. El
//! `sub` es el login del admin o el UUID del usuario registrado.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::errors::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

/// Token emitido junto con su vigencia en segundos
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in: i64,
}

#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration: Duration,
}

impl JwtService {
    pub fn new(secret: &str, expiration_minutes: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiration: Duration::minutes(expiration_minutes),
        }
    }

    pub fn issue(&self, subject: &str) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            exp: (now + self.expiration).timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Jwt(format!("Error generating token: {}", e)))?;

        Ok(IssuedToken {
            token,
            expires_in: self.expiration.num_seconds(),
        })
    }

    /// Firma y expiración; el sujeto lo comprueba quien llama
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))
    }

    /// Validación sin estado del token de admin
    pub fn verify_admin(&self, token: &str, admin_login: &str) -> Result<Claims, AppError> {
        let claims = self.decode(token)?;
        if claims.sub != admin_login {
            return Err(AppError::Unauthorized("Admin privileges required".to_string()));
        }
        Ok(claims)
    }

    /// Extraer el id de usuario; la existencia de la fila se comprueba aparte
    pub fn user_id(&self, token: &str) -> Result<Uuid, AppError> {
        let claims = self.decode(token)?;
        Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::Unauthorized("Token subject is not a user".to_string()))
    }
}
