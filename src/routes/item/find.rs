use actix_web::web;
use tracing::debug;

use crate::types::item::{FindItem, Item};
use crate::types::response::{ApiResponse, ApiResult};

#[utoipa::path(
    get,
    path = "/items/",
    tag = "items",
    params(FindItem),
    responses(
        (status = 200, description = "Items matching the query", body = [Item]),
        (status = 422, description = "Malformed query", body = crate::types::error::ErrorBody)
    )
)]
pub async fn find_items(
    _req: actix_web::HttpRequest,
    query: web::Query<FindItem>,
) -> ApiResult<Vec<Item>> {
    let query = query.into_inner();
    debug!("find items: paging={:?} filter={:?}", query.paging(), query.filter());

    // Nothing is stored, so no item ever matches.
    Ok(ApiResponse::Ok(Vec::new()))
}
