use crate::models::CalculationClick;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct CalculationClickRepository {
    pool: PgPool,
}

impl CalculationClickRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, click: &CalculationClick) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO calculate_clicks (id, route_id, user_id, created_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(click.id)
        .bind(&click.route_id)
        .bind(&click.user_id)
        .bind(click.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
