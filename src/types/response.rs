use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::Serialize;

use crate::types::error::AppError;

/// Successful handler output, serialized as JSON.
pub enum ApiResponse<T> {
    Ok(T),
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = actix_web::body::BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse {
        match self {
            ApiResponse::Ok(v) => HttpResponse::Ok().json(v),
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;
