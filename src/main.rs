use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use boleteria::config::{DatabaseConfig, EnvironmentConfig};
use boleteria::{crear_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚌 Boletería - Back-office de venta de pasajes");
    info!("==============================================");

    // Configuración: falla rápido si algo obligatorio falta
    let entorno = EnvironmentConfig::from_env()?;
    let db_config = DatabaseConfig::from_env()?;

    // Pool de conexiones
    let pool = match db_config.create_pool().await {
        Ok(pool) => {
            info!(
                "✅ Base de datos conectada (pool {}-{})",
                db_config.min_connections, db_config.max_connections
            );
            pool
        }
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let addr: SocketAddr = entorno.server_url().parse()?;
    let state = AppState::new(pool, entorno);
    let app = crear_app(state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /api/routes - Listar rutas activas");
    info!("   POST   /api/routes - Crear ruta");
    info!("   PUT    /api/routes/:id - Actualizar ruta");
    info!("   DELETE /api/routes/:id - Dar de baja una ruta");
    info!("   GET    /api/units - Listar unidades activas");
    info!("   POST   /api/units - Crear unidad");
    info!("   PUT    /api/units/:id - Actualizar unidad");
    info!("   DELETE /api/units/:id - Dar de baja una unidad");
    info!("   GET    /api/types - Listar tipos de pasaje");
    info!("   GET    /api/tickets - Listar pasajes (routeId, dateFrom, dateTo)");
    info!("   POST   /api/tickets - Emitir pasaje");
    info!("   PUT    /api/tickets/:id - Actualizar pasaje");
    info!("   DELETE /api/tickets/:id - Eliminar pasaje");
    info!("   GET    /api/export - Descargar reporte CSV");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
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
