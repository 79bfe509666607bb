use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cargo_search::config::{DatabaseConfig, EnvironmentConfig};
use cargo_search::database::connect_and_migrate;
use cargo_search::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging (RUST_LOG, por defecto info)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🚢 Cargo Search API");
    info!("================================================");

    let config = EnvironmentConfig::from_env()?;
    let db_config = DatabaseConfig::from_env()?;

    // Inicializar base de datos y aplicar migraciones
    let pool = match connect_and_migrate(&db_config).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(e);
        }
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let app = cargo_search::create_app(AppState::new(pool, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints públicos:");
    info!("   GET  /api/ports, /api/container-types, /api/cargo-types, /api/delivery-terms");
    info!("   POST /api/search - Buscar cotizaciones");
    info!("   POST /api/calculation - Registrar cálculo");
    info!("👤 Endpoints de usuario:");
    info!("   POST /api/register, /api/login");
    info!("   POST /api/booking - Crear reserva (token de usuario)");
    info!("   GET  /api/me - Usuario actual");
    info!("🛠️ Endpoints de administración (token de admin):");
    info!("   POST /api/admin/login");
    info!("   GET|POST /api/admin/ports, /api/admin/container-types, /api/admin/routes");
    info!("   PUT|DELETE /api/admin/{{ports,container-types,routes}}/:id");
    info!("   GET|POST /api/admin/webhook, GET /api/admin/bookings");
    info!("📈 GET /metrics");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
