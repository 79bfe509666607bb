use crate::models::WebhookSettings;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

pub struct WebhookRepository {
    pool: PgPool,
}

impl WebhookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn current(&self) -> Result<Option<WebhookSettings>, AppError> {
        let settings = sqlx::query_as::<_, WebhookSettings>(
            "SELECT id, webhook_url, updated_at FROM webhook_settings LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(settings)
    }

    /// Sustituye la configuración vigente. Borrado e inserción van en la
    /// misma transacción y la columna `singleton` impide una segunda fila.
    pub async fn replace(&self, webhook_url: &str) -> Result<WebhookSettings, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM webhook_settings")
            .execute(&mut *tx)
            .await?;

        let settings = sqlx::query_as::<_, WebhookSettings>(
            r#"
            INSERT INTO webhook_settings (id, webhook_url, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (singleton) DO UPDATE
            SET id = EXCLUDED.id, webhook_url = EXCLUDED.webhook_url, updated_at = EXCLUDED.updated_at
            RETURNING id, webhook_url, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(webhook_url)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(settings)
    }
}
