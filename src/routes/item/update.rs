use actix_web::web;
use tracing::debug;

use crate::types::item::{Item, UpsertItem};
use crate::types::response::{ApiResponse, ApiResult};

#[utoipa::path(
    patch,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item identifier")),
    request_body = UpsertItem,
    responses(
        (status = 200, description = "Item with the patch applied", body = Item),
        (status = 422, description = "Malformed id or body", body = crate::types::error::ErrorBody)
    )
)]
pub async fn update_item(
    _req: actix_web::HttpRequest,
    id: web::Path<i64>,
    body: web::Json<UpsertItem>,
) -> ApiResult<Item> {
    let id = id.into_inner();
    debug!("update item {}: {:?}", id, body);

    Ok(ApiResponse::Ok(Item::from(body.into_inner()).with_id(id)))
}
