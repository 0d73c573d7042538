// routes.rs
use std::sync::Arc;

use axum::{middleware, routing::get, Extension, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::{
    handler::{
        admin::admin_handler, auth::auth_handler, booking::booking_handler,
        business::business_handler, services::services_handler, worker::worker_handler,
    },
    middleware::{admin_auth, auth},
    AppState,
};

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "message": "Server is running"
    }))
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_route = Router::new()
        .nest("/auth", auth_handler())
        .nest("/services", services_handler())
        .nest("/bookings", booking_handler())
        .nest(
            "/business",
            business_handler().layer(middleware::from_fn(auth)),
        )
        .nest("/worker", worker_handler().layer(middleware::from_fn(auth)))
        .nest(
            "/admin",
            admin_handler().layer(middleware::from_fn(admin_auth)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_route)
}
