//! Configuración de variables de entorno
//!
//! Este módulo carga la configuración del servicio desde el entorno
//! (`.env` vía dotenvy en `main`). Los secretos (JWT y credenciales de admin)
//! son obligatorios; el resto tiene valores por defecto razonables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use tracing::info;

/// URL por defecto del webhook de cotizaciones cuando no hay configuración guardada
pub const DEFAULT_SEARCH_WEBHOOK_URL: &str = "https://beautechflow.store/webhook/search";

/// URL por defecto del webhook de automatización (reservas y cálculos)
pub const DEFAULT_AUTOMATION_WEBHOOK_URL: &str = "https://beautechflow.store/webhook/booking";

/// Errores al leer la configuración
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub port: u16,
    pub host: String,
    pub jwt_secret: String,
    /// Minutos de validez de los tokens emitidos
    pub jwt_expiration_minutes: i64,
    pub admin_login: String,
    pub admin_password: String,
    pub cors_origins: Vec<String>,
    pub default_search_webhook_url: String,
    pub automation_webhook_url: String,
    pub search_webhook_timeout: Duration,
    pub booking_notify_timeout: Duration,
    pub calculation_notify_timeout: Duration,
}

impl EnvironmentConfig {
    /// Cargar la configuración desde variables de entorno
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_or("PORT", 8001)?,
            host: var_or("HOST", "0.0.0.0"),
            jwt_secret: required("JWT_SECRET")?,
            jwt_expiration_minutes: parse_or("JWT_EXPIRATION_MINUTES", 30)?,
            admin_login: required("ADMIN_LOGIN")?,
            admin_password: required("ADMIN_PASSWORD")?,
            cors_origins: parse_origins(&var_or("CORS_ORIGINS", "*")),
            default_search_webhook_url: var_or("DEFAULT_SEARCH_WEBHOOK_URL", DEFAULT_SEARCH_WEBHOOK_URL),
            automation_webhook_url: var_or("AUTOMATION_WEBHOOK_URL", DEFAULT_AUTOMATION_WEBHOOK_URL),
            search_webhook_timeout: Duration::from_secs(parse_or("SEARCH_WEBHOOK_TIMEOUT_SECS", 30)?),
            booking_notify_timeout: Duration::from_secs(parse_or("BOOKING_NOTIFY_TIMEOUT_SECS", 30)?),
            calculation_notify_timeout: Duration::from_secs(parse_or("CALCULATION_NOTIFY_TIMEOUT_SECS", 10)?),
        })
    }

    /// Obtener la dirección de escucha del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// CORS abierto cuando no se configuran orígenes concretos
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{} not set, using default: {}", key, default);
        default.to_string()
    })
}

fn parse_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        Err(_) => Ok(default),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_trims_and_skips_empty() {
        let origins = parse_origins(" https://a.example , ,https://b.example");
        assert_eq!(origins, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn test_parse_or_uses_default_when_unset() {
        let value: u64 = parse_or("CARGO_SEARCH_TEST_UNSET_TIMEOUT", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_parse_or_rejects_garbage() {
        env::set_var("CARGO_SEARCH_TEST_BAD_PORT", "not-a-port");
        let result: Result<u16, _> = parse_or("CARGO_SEARCH_TEST_BAD_PORT", 8001);
        assert!(matches!(result, Err(ConfigError::Invalid { key: "CARGO_SEARCH_TEST_BAD_PORT", .. })));
    }

    #[test]
    fn test_required_rejects_blank() {
        env::set_var("CARGO_SEARCH_TEST_BLANK_SECRET", "   ");
        assert!(matches!(
            required("CARGO_SEARCH_TEST_BLANK_SECRET"),
            Err(ConfigError::Missing(_))
        ));
    }

    #[test]
    fn test_server_url_parses_as_socket_addr() {
        let config = EnvironmentConfig {
            port: 8001,
            host: "0.0.0.0".to_string(),
            jwt_secret: "secret".to_string(),
            jwt_expiration_minutes: 30,
            admin_login: "admin".to_string(),
            admin_password: "admin".to_string(),
            cors_origins: vec!["*".to_string()],
            default_search_webhook_url: DEFAULT_SEARCH_WEBHOOK_URL.to_string(),
            automation_webhook_url: DEFAULT_AUTOMATION_WEBHOOK_URL.to_string(),
            search_webhook_timeout: Duration::from_secs(30),
            booking_notify_timeout: Duration::from_secs(30),
            calculation_notify_timeout: Duration::from_secs(10),
        };

        assert_eq!(config.server_url(), "0.0.0.0:8001");
        let addr: std::net::SocketAddr = config.server_url().parse().unwrap();
        assert_eq!(addr.port(), 8001);
        assert!(config.allows_any_origin());
    }
}
