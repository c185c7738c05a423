use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct Greeting {
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "root",
    responses((status = 200, description = "Greeting", body = Greeting))
)]
pub async fn root(
    _req: actix_web::HttpRequest
) -> ApiResult<Greeting> {
    Ok(ApiResponse::Ok(Greeting {
        message: "Hello World".to_string(),
    }))
}
