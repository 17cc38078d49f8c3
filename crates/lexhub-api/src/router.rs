//! Route definitions for the LexHub HTTP API.
//!
//! All routes are organized by resource and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.storage.max_upload_size_bytes as usize;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(usuario_routes())
        .merge(rol_routes())
        .merge(caso_routes())
        .merge(cliente_routes())
        .merge(empleado_routes())
        .merge(documento_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth endpoint: login
fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(handlers::auth::login))
}

/// Account administration endpoints
fn usuario_routes() -> Router<AppState> {
    Router::new()
        .route("/usuarios", get(handlers::usuarios::list_usuarios))
        .route("/usuarios", post(handlers::usuarios::create_usuario))
        .route("/usuarios/{id}", get(handlers::usuarios::get_usuario))
        .route("/usuarios/{id}", put(handlers::usuarios::update_usuario))
        .route("/usuarios/{id}", delete(handlers::usuarios::delete_usuario))
}

/// Role reference data
fn rol_routes() -> Router<AppState> {
    Router::new().route("/roles", get(handlers::roles::list_roles))
}

/// Case endpoints, including the case team
fn caso_routes() -> Router<AppState> {
    Router::new()
        .route("/casos", get(handlers::casos::list_casos))
        .route("/casos", post(handlers::casos::create_caso))
        .route(
            "/casos/{id}/empleados",
            get(handlers::casos::list_empleados_del_caso),
        )
        .route(
            "/casos/{id}/empleados",
            post(handlers::casos::asignar_empleado),
        )
        .route(
            "/casos/{id}/empleados",
            delete(handlers::casos::desasignar_empleado),
        )
}

/// Client endpoints
fn cliente_routes() -> Router<AppState> {
    Router::new()
        .route("/clientes", get(handlers::clientes::list_clientes))
        .route("/clientes", post(handlers::clientes::create_cliente))
        .route("/clientes/{id}", get(handlers::clientes::get_cliente))
        .route("/clientes/{id}", put(handlers::clientes::update_cliente))
        .route("/clientes/{id}", delete(handlers::clientes::delete_cliente))
}

/// Employee endpoints
fn empleado_routes() -> Router<AppState> {
    Router::new()
        .route("/empleados", get(handlers::empleados::list_empleados))
        .route("/empleados", post(handlers::empleados::create_empleado))
        .route("/empleados/{id}", get(handlers::empleados::get_empleado))
        .route("/empleados/{id}", put(handlers::empleados::update_empleado))
        .route(
            "/empleados/{id}",
            delete(handlers::empleados::delete_empleado),
        )
}

/// Document endpoints
fn documento_routes() -> Router<AppState> {
    Router::new()
        .route("/documentos", get(handlers::documentos::list_documentos))
        .route("/documentos", post(handlers::documentos::upload_documento))
        .route("/documentos/{id}", get(handlers::documentos::get_documento))
        .route(
            "/documentos/{id}",
            put(handlers::documentos::update_documento),
        )
        .route(
            "/documentos/{id}",
            delete(handlers::documentos::delete_documento),
        )
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use http::Method;
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors = cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds));

    cors
}
