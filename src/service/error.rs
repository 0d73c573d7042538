use axum::http::StatusCode;
use thiserror::Error;
use uuid::Uuid;

use crate::error::HttpError;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("No booking found for this accept link")]
    BookingTokenNotFound,

    #[error("Booking {0} not found")]
    BookingNotFound(Uuid),

    #[error("Booking {0} is no longer pending")]
    BookingNotPending(Uuid),

    #[error("Booking {0} has expired")]
    BookingExpired(Uuid),

    #[error("Worker {worker_id} does not offer the service '{service_type}'")]
    WorkerNotEligible {
        worker_id: Uuid,
        service_type: String,
    },

    #[error("You have already accepted this booking")]
    AlreadyAccepted,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Notification error: {0}")]
    Notification(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Postgres unique-violation (e.g. duplicate accept racing past the upsert).
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505"))
}

impl From<ServiceError> for HttpError {
    fn from(error: ServiceError) -> Self {
        match error {
            ServiceError::BookingTokenNotFound | ServiceError::BookingNotFound(_) => {
                HttpError::not_found(error.to_string())
            }

            ServiceError::BookingNotPending(_)
            | ServiceError::BookingExpired(_)
            | ServiceError::Validation(_) => HttpError::bad_request(error.to_string()),

            ServiceError::WorkerNotEligible { .. } => {
                HttpError::new(error.to_string(), StatusCode::FORBIDDEN)
            }

            ServiceError::AlreadyAccepted => HttpError::conflict(error.to_string()),

            ServiceError::Database(_) | ServiceError::Notification(_) => {
                HttpError::server_error(error.to_string())
            }
        }
    }
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::BookingTokenNotFound | ServiceError::BookingNotFound(_) => {
                StatusCode::NOT_FOUND
            }

            ServiceError::BookingNotPending(_)
            | ServiceError::BookingExpired(_)
            | ServiceError::Validation(_) => StatusCode::BAD_REQUEST,

            ServiceError::WorkerNotEligible { .. } => StatusCode::FORBIDDEN,

            ServiceError::AlreadyAccepted => StatusCode::CONFLICT,

            ServiceError::Database(_) | ServiceError::Notification(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
