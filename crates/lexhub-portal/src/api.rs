//! Network boundary to the authentication endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use lexhub_core::error::AppError;
use lexhub_core::result::AppResult;

use crate::session::PortalSession;

/// Shown when the server cannot be reached or times out.
pub const MSG_ERROR_CONEXION: &str = "Error de conexión. Intente nuevamente.";
/// Shown when the server rejects the login without a usable message.
pub const MSG_ERROR_LOGIN: &str = "Error al iniciar sesión";

/// The login call as seen by the session controller. A rejection carries
/// the server's message; transport failures surface as internal errors
/// with a generic connection message.
#[async_trait]
pub trait AuthApi: Send + Sync + std::fmt::Debug + 'static {
    /// Attempt a login; returns the session payload on success.
    async fn login(&self, username: &str, password: &str) -> AppResult<PortalSession>;
}

#[derive(Debug, Deserialize)]
struct LoginSuccessBody {
    data: PortalSession,
}

#[derive(Debug, Deserialize)]
struct LoginErrorBody {
    error: Option<String>,
}

/// reqwest-backed [`AuthApi`] talking to the LexHub server.
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAuthApi {
    /// Create a client for the given server base URL (no trailing slash),
    /// with a conservative request timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .expect("reqwest client construction cannot fail with static options");

        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, username: &str, password: &str) -> AppResult<PortalSession> {
        let url = format!("{}/api/auth/login", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({
                "username": username,
                "password": password,
            }))
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Login request failed");
                AppError::internal(MSG_ERROR_CONEXION)
            })?;

        let status = response.status();
        if status.is_success() {
            let body: LoginSuccessBody = response.json().await.map_err(|e| {
                warn!(error = %e, "Malformed login response");
                AppError::internal(MSG_ERROR_CONEXION)
            })?;
            return Ok(body.data);
        }

        // The server's message is surfaced verbatim for display.
        let message = response
            .json::<LoginErrorBody>()
            .await
            .ok()
            .and_then(|b| b.error)
            .unwrap_or_else(|| MSG_ERROR_LOGIN.to_string());

        Err(AppError::unauthorized(message))
    }
}
