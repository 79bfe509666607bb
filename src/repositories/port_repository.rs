use crate::models::Port;
use crate::utils::errors::{conflict_error, is_unique_violation, not_found_error, AppError};
use sqlx::PgPool;
use uuid::Uuid;

pub struct PortRepository {
    pool: PgPool,
}

impl PortRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Port>, AppError> {
        let ports = sqlx::query_as::<_, Port>(
            "SELECT id, code, name, country, city, transport_types FROM ports ORDER BY country, name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(ports)
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<Port>, AppError> {
        let port = sqlx::query_as::<_, Port>(
            "SELECT id, code, name, country, city, transport_types FROM ports WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(port)
    }

    pub async fn create(&self, port: &Port) -> Result<Port, AppError> {
        sqlx::query_as::<_, Port>(
            r#"
            INSERT INTO ports (id, code, name, country, city, transport_types)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, code, name, country, city, transport_types
            "#,
        )
        .bind(port.id)
        .bind(&port.code)
        .bind(&port.name)
        .bind(&port.country)
        .bind(&port.city)
        .bind(&port.transport_types)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, port))
    }

    /// Reemplazo completo por id; el último en escribir gana
    pub async fn replace(&self, port: &Port) -> Result<Port, AppError> {
        sqlx::query_as::<_, Port>(
            r#"
            UPDATE ports
            SET code = $2, name = $3, country = $4, city = $5, transport_types = $6
            WHERE id = $1
            RETURNING id, code, name, country, city, transport_types
            "#,
        )
        .bind(port.id)
        .bind(&port.code)
        .bind(&port.name)
        .bind(&port.country)
        .bind(&port.city)
        .bind(&port.transport_types)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, port))?
        .ok_or_else(|| not_found_error("Port", &port.id.to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM ports WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Port", &id.to_string()));
        }
        Ok(())
    }
}

fn map_write_error(e: sqlx::Error, port: &Port) -> AppError {
    if is_unique_violation(&e) {
        conflict_error("Port", "code", &port.code)
    } else {
        AppError::Database(e)
    }
}
