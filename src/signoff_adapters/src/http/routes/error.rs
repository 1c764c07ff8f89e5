use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use signoff_application::LogoutError;
use signoff_core::TicketRegistryError;
use thiserror::Error;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum SloApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Ticket granting ticket not found")]
    TicketNotFound,

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for SloApiError {
    fn into_response(self) -> Response {
        let status_code = match self {
            SloApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            SloApiError::TicketNotFound => StatusCode::NOT_FOUND,
            SloApiError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status_code, body).into_response()
    }
}

impl From<TicketRegistryError> for SloApiError {
    fn from(error: TicketRegistryError) -> Self {
        match error {
            TicketRegistryError::TicketNotFound => SloApiError::TicketNotFound,
            TicketRegistryError::TicketAlreadyExists | TicketRegistryError::UnexpectedError(_) => {
                SloApiError::UnexpectedError(error.to_string())
            }
        }
    }
}

impl From<LogoutError> for SloApiError {
    fn from(error: LogoutError) -> Self {
        match error {
            LogoutError::TicketRegistryError(e) => e.into(),
        }
    }
}
