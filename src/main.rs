use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

use automobile_usage::build_app;
use automobile_usage::config::environment::EnvironmentConfig;
use automobile_usage::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env();

    // Configurar logging
    let level = if config.is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("🚗 Automobile Usage API");
    info!("=======================");

    let state = AppState::new();
    let app = build_app(state, &config);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("🧑 Endpoints - Driver:");
    info!("   POST /api/driver - Crear conductor");
    info!("   GET  /api/driver - Listar conductores (filtro ?name=)");
    info!("   GET  /api/driver/:id - Obtener conductor");
    info!("   PUT  /api/driver/:id - Actualizar conductor");
    info!("   DELETE /api/driver/:id - Eliminar conductor");
    info!("🚙 Endpoints - Automobile:");
    info!("   POST /api/automobile - Crear automóvil");
    info!("   GET  /api/automobile - Listar automóviles (filtros ?licensePlate=&brand=&color=)");
    info!("   GET  /api/automobile/:id - Obtener automóvil");
    info!("   PUT  /api/automobile/:id - Actualizar automóvil");
    info!("   DELETE /api/automobile/:id - Eliminar automóvil");
    info!("📋 Endpoints - Automobile Usage:");
    info!("   GET  /api/automobile-usage - Listar usos");
    info!("   POST /api/automobile-usage - Registrar uso");
    info!("   PUT  /api/automobile-usage/:id - Cerrar uso (endDate)");

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
