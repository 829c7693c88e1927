use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::api::response::StatusMessage;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No todo found!!")]
    NoTodos,

    #[error("No todo found!")]
    NotFound,

    #[error("update error!")]
    Update(#[source] anyhow::Error),

    #[error("store error!")]
    Store(#[source] anyhow::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NoTodos | ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Update(_) | ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if let ApiError::Update(err) | ApiError::Store(err) = self {
            log::error!("{}: {:#}", self, err);
        }
        HttpResponse::build(status).json(StatusMessage::new(status.as_u16(), self.to_string()))
    }
}
