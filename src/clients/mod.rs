//! Clients - HTTP clients para los webhooks externos

pub mod automation_webhook;
pub mod quote_webhook;

pub use automation_webhook::{AutomationWebhookClient, Delivery};
pub use quote_webhook::{interpret_response, QuoteWebhookClient, QuoteWebhookParams, WebhookOutcome};
