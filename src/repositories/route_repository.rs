use crate::models::ShippingRoute;
use crate::utils::errors::{conflict_error, is_unique_violation, not_found_error, AppError};
use sqlx::PgPool;
use uuid::Uuid;

const ROUTE_COLUMNS: &str = "id, origin_port, destination_port, transport_type, carrier, \
     transit_time_days, base_price_usd, available_container_types, frequency, created_at";

pub struct RouteRepository {
    pool: PgPool,
}

impl RouteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<ShippingRoute>, AppError> {
        let routes = sqlx::query_as::<_, ShippingRoute>(&format!(
            "SELECT {} FROM shipping_routes ORDER BY created_at DESC",
            ROUTE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(routes)
    }

    pub async fn create(&self, route: &ShippingRoute) -> Result<ShippingRoute, AppError> {
        sqlx::query_as::<_, ShippingRoute>(&format!(
            r#"
            INSERT INTO shipping_routes (id, origin_port, destination_port, transport_type, carrier,
                transit_time_days, base_price_usd, available_container_types, frequency, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {}
            "#,
            ROUTE_COLUMNS
        ))
        .bind(route.id)
        .bind(&route.origin_port)
        .bind(&route.destination_port)
        .bind(&route.transport_type)
        .bind(&route.carrier)
        .bind(route.transit_time_days)
        .bind(route.base_price_usd)
        .bind(&route.available_container_types)
        .bind(&route.frequency)
        .bind(route.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                conflict_error("Route", "id", &route.id.to_string())
            } else {
                AppError::Database(e)
            }
        })
    }

    /// Reemplazo completo; `created_at` se conserva
    pub async fn replace(&self, route: &ShippingRoute) -> Result<ShippingRoute, AppError> {
        sqlx::query_as::<_, ShippingRoute>(&format!(
            r#"
            UPDATE shipping_routes
            SET origin_port = $2, destination_port = $3, transport_type = $4, carrier = $5,
                transit_time_days = $6, base_price_usd = $7, available_container_types = $8,
                frequency = $9
            WHERE id = $1
            RETURNING {}
            "#,
            ROUTE_COLUMNS
        ))
        .bind(route.id)
        .bind(&route.origin_port)
        .bind(&route.destination_port)
        .bind(&route.transport_type)
        .bind(&route.carrier)
        .bind(route.transit_time_days)
        .bind(route.base_price_usd)
        .bind(&route.available_container_types)
        .bind(&route.frequency)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found_error("Route", &route.id.to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM shipping_routes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Route", &id.to_string()));
        }
        Ok(())
    }
}
