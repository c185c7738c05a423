use actix_web::web;

use crate::types::item::OmittedTaxPrice;
use crate::types::response::{ApiResponse, ApiResult};

#[utoipa::path(
    get,
    path = "/items/omitted",
    tag = "items",
    request_body = OmittedTaxPrice,
    responses(
        (status = 200, description = "Item without price and tax", body = OmittedTaxPrice),
        (status = 422, description = "Malformed body", body = crate::types::error::ErrorBody)
    )
)]
pub async fn omitted_item(
    _req: actix_web::HttpRequest,
    body: web::Json<OmittedTaxPrice>,
) -> ApiResult<OmittedTaxPrice> {
    Ok(ApiResponse::Ok(body.into_inner()))
}
