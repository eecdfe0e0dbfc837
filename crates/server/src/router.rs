use super::{handlers, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Creates the Axum router with all the application routes.
///
/// The permissive CORS layer answers pre-flight requests for the browser
/// client; axum's routing rejects any method other than the one designated
/// per route with a method-not-allowed response.
pub fn create_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/api/scrape", post(handlers::scrape_handler))
        .route("/api/proxy", get(handlers::proxy_handler))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
