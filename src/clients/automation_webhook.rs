//! Cliente del webhook de automatización
//!
//! Recibe los eventos de reserva y de "calcular" por POST JSON. La entrega
//! es best-effort: el llamador sólo ve si se envió o no.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

/// Resultado de una notificación
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    pub sent: bool,
    /// Cuerpo de la respuesta: JSON si se puede parsear, texto si no
    pub response: Option<Value>,
}

impl Delivery {
    fn failed() -> Self {
        Self {
            sent: false,
            response: None,
        }
    }
}

pub struct AutomationWebhookClient {
    client: Client,
    url: String,
}

impl AutomationWebhookClient {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Enviar un evento; nunca devuelve error
    pub async fn notify<T: Serialize + ?Sized>(&self, event: &T, timeout: Duration) -> Delivery {
        let response = match self
            .client
            .post(&self.url)
            .json(event)
            .timeout(timeout)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("⚠️ Webhook de automatización inalcanzable ({}): {}", self.url, e);
                return Delivery::failed();
            }
        };

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            tracing::warn!("⚠️ Webhook de automatización respondió {}: {}", status, body);
            return Delivery {
                sent: false,
                response: parse_body(&body),
            };
        }

        tracing::info!("✅ Evento entregado al webhook de automatización ({})", status);
        Delivery {
            sent: true,
            response: parse_body(&body),
        }
    }
}

fn parse_body(body: &str) -> Option<Value> {
    if body.trim().is_empty() {
        return None;
    }
    Some(serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string())))
}
