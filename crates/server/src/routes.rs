use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod access_logs;
pub mod roles;
pub mod units;
pub mod users;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: CRUD resources, health and (optionally) Swagger UI.
pub fn build_router(state: ServerState, cors: CorsLayer, swagger_ui: bool) -> Router {
    let roles = Router::new()
        .route(
            "/roles",
            get(roles::index).post(roles::store).put(roles::update_role).delete(roles::delete),
        )
        .route("/roles/:id", get(roles::get_by_id))
        .route("/roles/:id/users", get(roles::users_of_role));

    let users = Router::new()
        .route(
            "/users",
            get(users::index).post(users::store).put(users::update_user).delete(users::delete),
        )
        .route("/users/:cpf", get(users::get_by_cpf))
        .route("/users/:cpf/access-logs", get(access_logs::list).post(access_logs::record));

    let units = Router::new()
        .route("/units", get(units::index).post(units::store))
        .route("/units/:id", get(units::get_by_id));

    let mut app = Router::new()
        .route("/health", get(health))
        .merge(roles)
        .merge(users)
        .merge(units)
        .with_state(state);

    if swagger_ui {
        app = app.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    app.layer(cors).layer(
        TraceLayer::new_for_http()
            // one span per request with method and path
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            // status code and latency
            .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
            .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
    )
}
