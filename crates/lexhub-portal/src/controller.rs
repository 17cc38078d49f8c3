//! The session controller — owns the client-side authentication state.
//!
//! State transitions (restore, login, logout) are applied on the UI's
//! single logical thread, in call order; the last write wins. Every
//! persistence failure degrades to "no session" rather than propagating.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, warn};

use crate::api::AuthApi;
use crate::routes::{LOGIN_PATH, RouteTable};
use crate::session::PortalSession;
use crate::store::SessionStore;

/// Holds the current session, mirrors it into the persisted store, and
/// reconciles navigation against the role-route table.
#[derive(Debug)]
pub struct SessionController {
    /// Network boundary to the login endpoint.
    api: Arc<dyn AuthApi>,
    /// Persisted session mirror.
    store: Arc<dyn SessionStore>,
    /// Role-route table.
    routes: RouteTable,
    /// The current session.
    session: Mutex<Option<PortalSession>>,
    /// Set once the initial restore has finished; reconciliation holds
    /// every redirect until then.
    checked: AtomicBool,
    /// Last login error message, for display.
    error: Mutex<Option<String>>,
}

impl SessionController {
    /// Creates a controller with injected capabilities and the default
    /// route table.
    pub fn new(api: Arc<dyn AuthApi>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            api,
            store,
            routes: RouteTable::with_defaults(),
            session: Mutex::new(None),
            checked: AtomicBool::new(false),
            error: Mutex::new(None),
        }
    }

    /// Restores a persisted session at application start.
    ///
    /// Any read or parse failure clears the store and leaves no session.
    /// Always finishes by marking the session check complete.
    pub fn restore_session(&self) {
        let restored = match self.store.read() {
            Ok(Some(blob)) => match serde_json::from_str::<PortalSession>(&blob) {
                Ok(session) => Some(session),
                Err(e) => {
                    warn!(error = %e, "Discarding unreadable persisted session");
                    let _ = self.store.clear();
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Session store read failed");
                let _ = self.store.clear();
                None
            }
        };

        *self.session.lock().unwrap() = restored;
        self.checked.store(true, Ordering::SeqCst);
    }

    /// Attempts a login. On success the session is adopted and persisted
    /// and `true` is returned; on failure the server's message is kept
    /// for display, the previous session (if any) survives, and `false`
    /// is returned. Never panics.
    pub async fn login(&self, username: &str, password: &str) -> bool {
        *self.error.lock().unwrap() = None;

        match self.api.login(username, password).await {
            Ok(session) => {
                match serde_json::to_string(&session) {
                    Ok(blob) => {
                        if let Err(e) = self.store.write(&blob) {
                            warn!(error = %e, "Failed to persist session");
                        }
                    }
                    Err(e) => warn!(error = %e, "Failed to serialize session"),
                }
                debug!(account_id = session.id, "Session established");
                *self.session.lock().unwrap() = Some(session);
                true
            }
            Err(e) => {
                *self.error.lock().unwrap() = Some(e.message);
                false
            }
        }
    }

    /// Clears the session from memory and from the persisted store,
    /// unconditionally, and returns the public login path to navigate
    /// to. Calling it twice is a no-op the second time.
    pub fn logout(&self) -> &'static str {
        *self.session.lock().unwrap() = None;
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "Failed to clear persisted session");
        }
        LOGIN_PATH
    }

    /// The current session, if any.
    pub fn current_session(&self) -> Option<PortalSession> {
        self.session.lock().unwrap().clone()
    }

    /// Whether the initial session check has completed.
    pub fn session_checked(&self) -> bool {
        self.checked.load(Ordering::SeqCst)
    }

    /// The last login error message, for display.
    pub fn last_error(&self) -> Option<String> {
        self.error.lock().unwrap().clone()
    }

    /// Whether a session exists.
    pub fn is_authenticated(&self) -> bool {
        self.session.lock().unwrap().is_some()
    }

    /// Whether the session's role is "administrador".
    pub fn is_admin(&self) -> bool {
        self.has_role("administrador")
    }

    /// Whether the session's role is "empleado".
    pub fn is_empleado(&self) -> bool {
        self.has_role("empleado")
    }

    /// Whether the session's role is "cliente".
    pub fn is_cliente(&self) -> bool {
        self.has_role("cliente")
    }

    fn has_role(&self, nombre: &str) -> bool {
        self.session
            .lock()
            .unwrap()
            .as_ref()
            .is_some_and(|s| s.rol.nombre == nombre)
    }

    /// Reconciles a requested path against the session's role. Returns
    /// the redirect target, or `None` to render the path. Until
    /// [`restore_session`](Self::restore_session) completes, every path
    /// renders as-is so a persisted session is never flash-redirected to
    /// login.
    pub fn reconcile(&self, path: &str) -> Option<&'static str> {
        if !self.session_checked() {
            return None;
        }

        let session = self.session.lock().unwrap();
        let role = session.as_ref().map(|s| s.rol.nombre.clone());
        drop(session);

        self.routes.reconcile(role.as_deref(), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use lexhub_core::error::AppError;
    use lexhub_core::result::AppResult;

    use crate::routes::PORTAL_ROOT;
    use crate::session::SessionRol;
    use crate::store::MemorySessionStore;

    /// AuthApi with a scripted outcome.
    #[derive(Debug)]
    struct ScriptedApi {
        outcome: Result<PortalSession, String>,
    }

    #[async_trait]
    impl AuthApi for ScriptedApi {
        async fn login(&self, _username: &str, _password: &str) -> AppResult<PortalSession> {
            self.outcome
                .clone()
                .map_err(AppError::unauthorized)
        }
    }

    /// Store whose reads always fail.
    #[derive(Debug)]
    struct BrokenStore;

    impl SessionStore for BrokenStore {
        fn read(&self) -> AppResult<Option<String>> {
            Err(AppError::storage("disk on fire"))
        }
        fn write(&self, _blob: &str) -> AppResult<()> {
            Err(AppError::storage("disk on fire"))
        }
        fn clear(&self) -> AppResult<()> {
            Err(AppError::storage("disk on fire"))
        }
    }

    fn session(rol: &str) -> PortalSession {
        PortalSession {
            id: 7,
            username: "jdoe".into(),
            email: "jdoe@example.com".into(),
            nombre_completo: Some("Jane Doe".into()),
            verificado: true,
            rol: SessionRol {
                id: 2,
                nombre: rol.into(),
                permisos: None,
            },
        }
    }

    fn controller_accepting(rol: &str, store: Arc<dyn SessionStore>) -> SessionController {
        SessionController::new(
            Arc::new(ScriptedApi {
                outcome: Ok(session(rol)),
            }),
            store,
        )
    }

    fn controller_rejecting(message: &str, store: Arc<dyn SessionStore>) -> SessionController {
        SessionController::new(
            Arc::new(ScriptedApi {
                outcome: Err(message.to_string()),
            }),
            store,
        )
    }

    #[tokio::test]
    async fn test_login_then_restore_round_trips_the_session() {
        let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());

        let controller = controller_accepting("empleado", store.clone());
        controller.restore_session();
        assert!(controller.login("jdoe", "secreto").await);
        let original = controller.current_session().unwrap();

        // Simulate a reload: a fresh controller over the same store.
        let reloaded = controller_rejecting("irrelevante", store);
        reloaded.restore_session();
        assert_eq!(reloaded.current_session().unwrap(), original);
        assert!(reloaded.is_empleado());
    }

    #[tokio::test]
    async fn test_failed_login_keeps_previous_session_and_records_error() {
        let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        let controller = controller_accepting("administrador", store.clone());
        controller.restore_session();
        assert!(controller.login("jdoe", "secreto").await);

        let retry = controller_rejecting("Credenciales inválidas", store);
        retry.restore_session();
        assert!(!retry.login("jdoe", "typo").await);
        assert_eq!(retry.last_error().as_deref(), Some("Credenciales inválidas"));
        // The established session survives a failed re-login.
        assert!(retry.is_authenticated());
        assert!(retry.is_admin());
    }

    #[test]
    fn test_corrupted_blob_clears_the_store() {
        let store = Arc::new(MemorySessionStore::new());
        store.write("{not json at all").unwrap();

        let controller = controller_rejecting("x", store.clone());
        controller.restore_session();

        assert!(controller.session_checked());
        assert!(!controller.is_authenticated());
        assert_eq!(store.read().unwrap(), None);
    }

    #[test]
    fn test_broken_store_degrades_to_no_session() {
        let controller = controller_rejecting("x", Arc::new(BrokenStore));
        controller.restore_session();

        assert!(controller.session_checked());
        assert!(!controller.is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        let controller = controller_accepting("cliente", store.clone());
        controller.restore_session();
        assert!(controller.login("c", "pw").await);

        assert_eq!(controller.logout(), LOGIN_PATH);
        assert!(!controller.is_authenticated());
        assert_eq!(store.read().unwrap(), None);

        // Second logout: no error, still empty.
        assert_eq!(controller.logout(), LOGIN_PATH);
        assert!(!controller.is_authenticated());
    }

    #[tokio::test]
    async fn test_no_redirect_before_restore_completes() {
        let controller = controller_rejecting("x", Arc::new(MemorySessionStore::new()));

        // The check has not run: even protected paths render as-is.
        assert_eq!(controller.reconcile("/casos"), None);

        controller.restore_session();
        assert_eq!(controller.reconcile("/casos"), Some(LOGIN_PATH));
    }

    #[tokio::test]
    async fn test_reconcile_follows_the_session_role() {
        let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        let controller = controller_accepting("cliente", store);
        controller.restore_session();
        assert!(controller.login("c", "pw").await);

        assert_eq!(controller.reconcile("/"), Some(PORTAL_ROOT));
        assert_eq!(controller.reconcile("/portal"), None);

        controller.logout();
        assert_eq!(controller.reconcile("/"), Some(LOGIN_PATH));
        assert_eq!(controller.reconcile("/login"), None);
    }
}
