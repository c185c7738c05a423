use actix_web::web;
use tracing::debug;

use crate::types::item::{BaseItem, Item};
use crate::types::response::{ApiResponse, ApiResult};

#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item identifier")),
    request_body = BaseItem,
    responses(
        (status = 200, description = "Item as replaced", body = Item),
        (status = 422, description = "Malformed id or incomplete body", body = crate::types::error::ErrorBody)
    )
)]
pub async fn put_item(
    _req: actix_web::HttpRequest,
    id: web::Path<i64>,
    body: web::Json<BaseItem>,
) -> ApiResult<Item> {
    let id = id.into_inner();
    debug!("replace item {}: {:?}", id, body);

    Ok(ApiResponse::Ok(Item::from(body.into_inner()).with_id(id)))
}
