use crate::models::CargoType;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct CargoTypeRepository {
    pool: PgPool,
}

impl CargoTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<CargoType>, AppError> {
        let cargo_types = sqlx::query_as::<_, CargoType>(
            "SELECT id, name, description, special_requirements FROM cargo_types ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(cargo_types)
    }
}
