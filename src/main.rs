//! LexHub Server — Legal Case Management Platform
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use lexhub_auth::directory::AccountDirectory;
use lexhub_auth::login::Authenticator;
use lexhub_auth::password::{Argon2Hasher, CredentialVerifier};
use lexhub_core::config::AppConfig;
use lexhub_core::error::AppError;
use lexhub_core::traits::storage::ObjectStorage;

#[tokio::main]
async fn main() {
    let env = std::env::var("LEXHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting LexHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = lexhub_database::DatabasePool::connect(&config.database).await?;
    lexhub_database::migration::run_migrations(db.pool()).await?;
    let db_pool = db.into_pool();

    // ── Step 2: Document storage ─────────────────────────────────
    let storage: Arc<dyn ObjectStorage> =
        Arc::new(lexhub_storage::LocalStorage::new(&config.storage.data_root).await?);
    tracing::info!(root = %config.storage.data_root, "Document storage initialized");

    // ── Step 3: Repositories ─────────────────────────────────────
    let account_repo = Arc::new(
        lexhub_database::repositories::account::AccountRepository::new(db_pool.clone()),
    );
    let role_repo = Arc::new(lexhub_database::repositories::role::RoleRepository::new(
        db_pool.clone(),
    ));
    let caso_repo = Arc::new(lexhub_database::repositories::caso::CasoRepository::new(
        db_pool.clone(),
    ));
    let cliente_repo = Arc::new(
        lexhub_database::repositories::cliente::ClienteRepository::new(db_pool.clone()),
    );
    let empleado_repo = Arc::new(
        lexhub_database::repositories::empleado::EmpleadoRepository::new(db_pool.clone()),
    );
    let documento_repo = Arc::new(
        lexhub_database::repositories::documento::DocumentoRepository::new(db_pool.clone()),
    );

    // ── Step 4: Authentication ───────────────────────────────────
    let hasher: Arc<dyn CredentialVerifier> = Arc::new(Argon2Hasher::new());
    let directory: Arc<dyn AccountDirectory> = account_repo.clone();
    let authenticator = Arc::new(Authenticator::new(
        directory,
        hasher.clone(),
        config.auth.clone(),
    ));
    tracing::info!(
        max_failed_attempts = config.auth.max_failed_attempts,
        lockout_minutes = config.auth.lockout_duration_minutes,
        "Authentication initialized"
    );

    // ── Step 5: Services ─────────────────────────────────────────
    let cliente_service = Arc::new(lexhub_service::cliente::ClienteService::new(
        Arc::clone(&cliente_repo),
        Arc::clone(&account_repo),
        Arc::clone(&role_repo),
        hasher.clone(),
    ));
    let documento_service = Arc::new(lexhub_service::documento::DocumentoService::new(
        Arc::clone(&documento_repo),
        storage.clone(),
    ));

    // ── Step 6: Build and start HTTP server ──────────────────────
    let app_state = lexhub_api::state::AppState {
        config: Arc::new(config.clone()),
        authenticator,
        hasher,
        storage,
        account_repo,
        role_repo,
        caso_repo,
        cliente_repo,
        empleado_repo,
        documento_repo,
        cliente_service,
        documento_service,
    };

    let app = lexhub_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("LexHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("LexHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
