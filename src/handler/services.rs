// handler/services.rs
use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::{
    db::servicedb::ServiceExt,
    dtos::{servicedtos::ServiceListQueryDto, ApiResponse},
    error::HttpError,
    AppState,
};

pub fn services_handler() -> Router {
    Router::new()
        .route("/", get(list_services))
        .route("/:service_id", get(get_service))
}

pub async fn list_services(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(params): Query<ServiceListQueryDto>,
) -> Result<impl IntoResponse, HttpError> {
    let services = app_state
        .db_client
        .get_active_services(params.category.as_deref())
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(ApiResponse::success("Services fetched", services)))
}

pub async fn get_service(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(service_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let service = app_state
        .db_client
        .get_service_by_id(service_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .filter(|s| s.is_active.unwrap_or(true))
        .ok_or_else(|| HttpError::not_found("Service not found"))?;

    Ok(Json(ApiResponse::success("Service fetched", service)))
}
