use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::WebhookSettings;
use crate::utils::validation::validate_not_blank;

#[derive(Debug, Deserialize, Validate)]
pub struct WebhookUpdateRequest {
    #[validate(custom = "validate_not_blank", url)]
    pub webhook_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WebhookSettingsResponse {
    pub webhook_url: String,
    pub updated_at: Option<DateTime<Utc>>,
    /// true si no hay fila guardada y se usa la URL por defecto
    pub is_default: bool,
}

impl WebhookSettingsResponse {
    pub fn stored(settings: WebhookSettings) -> Self {
        Self {
            webhook_url: settings.webhook_url,
            updated_at: Some(settings.updated_at),
            is_default: false,
        }
    }

    pub fn default_url(url: &str) -> Self {
        Self {
            webhook_url: url.to_string(),
            updated_at: None,
            is_default: true,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_webhook_url_rejected() {
        let request = WebhookUpdateRequest {
            webhook_url: "".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_webhook_url_must_be_absolute() {
        let bad = WebhookUpdateRequest {
            webhook_url: "webhook/search".to_string(),
        };
        assert!(bad.validate().is_err());

        let good = WebhookUpdateRequest {
            webhook_url: "https://hooks.example.com/search".to_string(),
        };
        assert!(good.validate().is_ok());
    }
}
