use actix_web::web;
use tracing::debug;

use crate::types::item::{Item, UpsertItem};
use crate::types::response::{ApiResponse, ApiResult};

#[utoipa::path(
    post,
    path = "/items/",
    tag = "items",
    request_body = UpsertItem,
    responses(
        (status = 200, description = "Item as it would be created", body = Item),
        (status = 422, description = "Malformed body", body = crate::types::error::ErrorBody)
    )
)]
pub async fn create_item(
    _req: actix_web::HttpRequest,
    body: web::Json<UpsertItem>,
) -> ApiResult<Item> {
    debug!("create item: {:?}", body);

    Ok(ApiResponse::Ok(Item::from(body.into_inner())))
}
