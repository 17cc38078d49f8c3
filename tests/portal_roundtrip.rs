//! Cross-boundary test: the login endpoint's payload must restore into an
//! identical portal session after a simulated reload.

mod helpers;

use std::sync::Arc;

use async_trait::async_trait;
use http::StatusCode;

use lexhub_core::error::AppError;
use lexhub_core::result::AppResult;
use lexhub_portal::api::AuthApi;
use lexhub_portal::controller::SessionController;
use lexhub_portal::session::PortalSession;
use lexhub_portal::store::{MemorySessionStore, SessionStore};

/// AuthApi that replays a payload captured from the real router.
#[derive(Debug)]
struct CapturedApi {
    payload: PortalSession,
}

#[async_trait]
impl AuthApi for CapturedApi {
    async fn login(&self, _username: &str, _password: &str) -> AppResult<PortalSession> {
        Ok(self.payload.clone())
    }
}

/// AuthApi that always fails; a restored session must not depend on it.
#[derive(Debug)]
struct DeadApi;

#[async_trait]
impl AuthApi for DeadApi {
    async fn login(&self, _username: &str, _password: &str) -> AppResult<PortalSession> {
        Err(AppError::internal("Error de conexión. Intente nuevamente."))
    }
}

#[tokio::test]
async fn test_server_payload_round_trips_through_the_portal() {
    let app = helpers::TestApp::new().await;
    app.directory.add_account("mgarcia", "secreto123", None, None, true);

    let response = app.login("mgarcia", "secreto123").await;
    assert_eq!(response.status, StatusCode::OK);

    // The wire payload parses into the portal's session type as-is.
    let payload: PortalSession =
        serde_json::from_value(response.body["data"].clone()).expect("payload shape");

    let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
    let controller = SessionController::new(
        Arc::new(CapturedApi {
            payload: payload.clone(),
        }),
        store.clone(),
    );
    controller.restore_session();
    assert!(controller.login("mgarcia", "secreto123").await);

    // Simulate a reload: a fresh controller over the same store, network
    // unavailable. The persisted session alone must restore identically.
    let reloaded = SessionController::new(Arc::new(DeadApi), store);
    reloaded.restore_session();

    assert_eq!(reloaded.current_session().unwrap(), payload);
    assert!(reloaded.is_admin());
    assert_eq!(reloaded.reconcile("/portal"), Some("/"));
    assert_eq!(reloaded.reconcile("/casos"), None);
}
