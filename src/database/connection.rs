//! Conexión a PostgreSQL
//!
//! Crea el pool compartido y aplica las migraciones embebidas una sola vez
//! al arrancar; ningún handler crea tablas.

use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;

/// Crear el pool y dejar el esquema al día
pub async fn connect_and_migrate(config: &DatabaseConfig) -> Result<PgPool> {
    info!("🗄️ Conectando a {}", mask_database_url(&config.url));

    let pool = config
        .create_pool()
        .await
        .context("Error conectando a la base de datos")?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Ejecutar migraciones de la base de datos
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Error aplicando migraciones")?;
    info!("✅ Migraciones aplicadas");
    Ok(())
}

/// Función helper para enmascarar la URL de la base de datos en logs
pub fn mask_database_url(url: &str) -> String {
    let Some(at_pos) = url.find('@') else {
        return url.to_string();
    };
    if url[..at_pos].rfind(':').is_none() {
        return url.to_string();
    }
    let protocol_end = url.find("://").map(|p| p + 3).unwrap_or(0);
    format!("{}***:***@{}", &url[..protocol_end], &url[at_pos + 1..])
}
