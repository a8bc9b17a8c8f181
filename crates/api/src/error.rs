use actix_web::{
    http::{header, StatusCode},
    HttpResponse,
};
use reminder_server_api_structs::ErrorResponse;
use thiserror::Error;

/// Every variant displays as the machine readable reason sent to the client
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    InternalError(String),
    #[error("{0}")]
    BadClientData(String),
    #[error("invalid json")]
    InvalidJson(String),
    #[error("invalid reminder shape")]
    InvalidShape(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    fn detail(&self) -> Option<String> {
        match self {
            Self::InvalidJson(detail) | Self::InvalidShape(detail) => Some(detail.clone()),
            _ => None,
        }
    }
}

impl actix_web::error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadClientData(_) => StatusCode::BAD_REQUEST,
            Self::InvalidJson(_) => StatusCode::BAD_REQUEST,
            Self::InvalidShape(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .json(ErrorResponse {
                error: self.to_string(),
                detail: self.detail(),
            })
    }
}
