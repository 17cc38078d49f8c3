//! Integration tests for the login flow, driven through the HTTP router.

mod helpers;

use chrono::{Duration, Utc};
use http::StatusCode;

#[tokio::test]
async fn test_login_success_by_username() {
    let app = helpers::TestApp::new().await;
    app.directory.add_account("mgarcia", "secreto123", None, None, true);

    let response = app.login("mgarcia", "secreto123").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Inicio de sesión exitoso");
    let data = &response.body["data"];
    assert_eq!(data["username"], "mgarcia");
    assert_eq!(data["email"], "mgarcia@test.com");
    assert_eq!(data["rol"]["nombre"], "administrador");
    // The password hash must never appear in a response.
    assert!(data.get("password_hash").is_none());
    assert!(!response.body.to_string().contains("argon2"));
}

#[tokio::test]
async fn test_login_success_by_email() {
    let app = helpers::TestApp::new().await;
    app.directory.add_account("mgarcia", "secreto123", None, None, true);

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "mgarcia@test.com",
                "password": "secreto123",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["username"], "mgarcia");
}

#[tokio::test]
async fn test_login_without_identifier_is_rejected_before_lookup() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "password": "algo" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["error"],
        "Se requiere el nombre de usuario o el correo electrónico"
    );
    assert_eq!(app.directory.lookup_count(), 0, "no store lookup may occur");
}

#[tokio::test]
async fn test_login_without_password_is_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "username": "mgarcia" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "La contraseña es obligatoria");
    assert_eq!(app.directory.lookup_count(), 0);
}

#[tokio::test]
async fn test_wrong_password_and_unknown_user_are_indistinguishable() {
    let app = helpers::TestApp::new().await;
    app.directory.add_account("mgarcia", "secreto123", None, None, true);

    let wrong = app.login("mgarcia", "equivocada").await;
    let unknown = app.login("nadie", "equivocada").await;

    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.body["error"], unknown.body["error"]);
    assert_eq!(wrong.body["error"], "Credenciales inválidas");

    // The failed attempt was recorded for the real account.
    assert_eq!(app.directory.stored("mgarcia").intentos_fallidos, Some(1));
}

#[tokio::test]
async fn test_locked_account_is_forbidden() {
    let app = helpers::TestApp::new().await;
    let until = Utc::now() + Duration::minutes(10);
    app.directory
        .add_account("mgarcia", "secreto123", Some(5), Some(until), true);

    let response = app.login("mgarcia", "secreto123").await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        response.body["error"],
        "Cuenta bloqueada temporalmente. Intente más tarde."
    );
}

#[tokio::test]
async fn test_disabled_account_is_forbidden() {
    let app = helpers::TestApp::new().await;
    app.directory.add_account("mgarcia", "secreto123", None, None, false);

    let response = app.login("mgarcia", "secreto123").await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "Esta cuenta está desactivada");
}

#[tokio::test]
async fn test_fifth_failure_locks_and_blocks_even_correct_password() {
    let app = helpers::TestApp::new().await;
    app.directory
        .add_account("mgarcia", "secreto123", Some(4), None, true);

    // The locking attempt still answers 401.
    let response = app.login("mgarcia", "equivocada").await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let stored = app.directory.stored("mgarcia");
    assert_eq!(stored.intentos_fallidos, Some(5));
    let until = stored.bloqueado_hasta.expect("lockout not set");
    let delta = until - Utc::now();
    assert!(delta > Duration::minutes(14) && delta <= Duration::minutes(15));

    // Now even the correct password is forbidden until the lock expires.
    let response = app.login("mgarcia", "secreto123").await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_expired_lock_allows_login_and_resets_counter() {
    let app = helpers::TestApp::new().await;
    let until = Utc::now() - Duration::seconds(1);
    app.directory
        .add_account("mgarcia", "secreto123", Some(5), Some(until), true);

    let response = app.login("mgarcia", "secreto123").await;

    assert_eq!(response.status, StatusCode::OK);
    let stored = app.directory.stored("mgarcia");
    assert_eq!(stored.intentos_fallidos, Some(0));
    assert!(stored.bloqueado_hasta.is_none());
    assert!(stored.ultimo_acceso.is_some());
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}
