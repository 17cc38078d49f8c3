//! Application state shared across all handlers.

use std::sync::Arc;

use lexhub_auth::login::Authenticator;
use lexhub_auth::password::CredentialVerifier;
use lexhub_core::config::AppConfig;
use lexhub_core::traits::storage::ObjectStorage;

use lexhub_database::repositories::account::AccountRepository;
use lexhub_database::repositories::caso::CasoRepository;
use lexhub_database::repositories::cliente::ClienteRepository;
use lexhub_database::repositories::documento::DocumentoRepository;
use lexhub_database::repositories::empleado::EmpleadoRepository;
use lexhub_database::repositories::role::RoleRepository;

use lexhub_service::cliente::ClienteService;
use lexhub_service::documento::DocumentoService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Auth ─────────────────────────────────────────────────
    /// Login authenticator (lockout state machine)
    pub authenticator: Arc<Authenticator>,
    /// Password hashing capability
    pub hasher: Arc<dyn CredentialVerifier>,

    // ── Infrastructure ───────────────────────────────────────
    /// Document blob storage
    pub storage: Arc<dyn ObjectStorage>,

    // ── Repositories ─────────────────────────────────────────
    /// Account repository
    pub account_repo: Arc<AccountRepository>,
    /// Role repository
    pub role_repo: Arc<RoleRepository>,
    /// Case repository
    pub caso_repo: Arc<CasoRepository>,
    /// Client repository
    pub cliente_repo: Arc<ClienteRepository>,
    /// Employee repository
    pub empleado_repo: Arc<EmpleadoRepository>,
    /// Document repository
    pub documento_repo: Arc<DocumentoRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Client creation cascade
    pub cliente_service: Arc<ClienteService>,
    /// Document upload/removal
    pub documento_service: Arc<DocumentoService>,
}
