use crate::models::ContainerType;
use crate::utils::errors::{conflict_error, is_unique_violation, not_found_error, AppError};
use sqlx::PgPool;
use uuid::Uuid;

pub struct ContainerTypeRepository {
    pool: PgPool,
}

impl ContainerTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<ContainerType>, AppError> {
        let containers = sqlx::query_as::<_, ContainerType>(
            r#"
            SELECT id, name, size, capacity_m3, max_weight_kg, description, price_modifier
            FROM container_types
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(containers)
    }

    pub async fn create(&self, container: &ContainerType) -> Result<ContainerType, AppError> {
        sqlx::query_as::<_, ContainerType>(
            r#"
            INSERT INTO container_types (id, name, size, capacity_m3, max_weight_kg, description, price_modifier)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, size, capacity_m3, max_weight_kg, description, price_modifier
            "#,
        )
        .bind(container.id)
        .bind(&container.name)
        .bind(&container.size)
        .bind(container.capacity_m3)
        .bind(container.max_weight_kg)
        .bind(&container.description)
        .bind(container.price_modifier)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                conflict_error("Container type", "id", &container.id.to_string())
            } else {
                AppError::Database(e)
            }
        })
    }

    pub async fn replace(&self, container: &ContainerType) -> Result<ContainerType, AppError> {
        sqlx::query_as::<_, ContainerType>(
            r#"
            UPDATE container_types
            SET name = $2, size = $3, capacity_m3 = $4, max_weight_kg = $5,
                description = $6, price_modifier = $7
            WHERE id = $1
            RETURNING id, name, size, capacity_m3, max_weight_kg, description, price_modifier
            "#,
        )
        .bind(container.id)
        .bind(&container.name)
        .bind(&container.size)
        .bind(container.capacity_m3)
        .bind(container.max_weight_kg)
        .bind(&container.description)
        .bind(container.price_modifier)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found_error("Container type", &container.id.to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM container_types WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Container type", &id.to_string()));
        }
        Ok(())
    }
}
