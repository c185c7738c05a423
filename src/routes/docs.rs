use actix_web::HttpResponse;
use utoipa::OpenApi;

use crate::openapi::ApiDoc;

/// Serves the generated OpenAPI document.
pub async fn openapi_json(
    _req: actix_web::HttpRequest
) -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
