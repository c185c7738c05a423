use utoipa::OpenApi;

use crate::routes::{item, root};
use crate::types::error::ErrorBody;
use crate::types::item::{BaseItem, FindBase, FindItem, Item, OmittedTaxPrice, UpsertItem};

#[derive(OpenApi)]
#[openapi(
    info(title = "Item API", description = "Item records and the request/response shapes derived from them"),
    paths(
        root::root,
        item::find::find_items,
        item::create::create_item,
        item::update::update_item,
        item::put::put_item,
        item::omitted::omitted_item,
    ),
    components(schemas(
        root::Greeting,
        BaseItem,
        UpsertItem,
        Item,
        OmittedTaxPrice,
        FindBase,
        FindItem,
        ErrorBody,
    )),
    tags(
        (name = "root", description = "Service root"),
        (name = "items", description = "Item records"),
    )
)]
pub struct ApiDoc;
