use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use log::error;
use nutriplan_planner::{chat::ChatError, PlanError};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No data provided")]
    NoData,
    #[error("Validation failed")]
    Validation(Vec<String>),
    #[error("{0}")]
    Computation(String),
    #[error(transparent)]
    Chat(#[from] ChatError),
    /// Details are logged, never sent to the client.
    #[error("Internal server error")]
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a [String]>,
}

impl From<PlanError> for ApiError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::Validation(details) => ApiError::Validation(details),
            PlanError::Computation(message) => ApiError::Computation(message),
            PlanError::Unexpected(message) => ApiError::Internal(message),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let details = match self {
            ApiError::Validation(details) => Some(details.as_slice()),
            ApiError::Internal(details) => {
                error!("Internal error: {}", details);
                None
            }
            _ => None,
        };

        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
            details,
        })
    }
}
