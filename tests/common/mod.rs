use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use item_api::config::DEFAULT_JSON_LIMIT;
use serde_json::{json, Value};

pub fn create_app() -> actix_web::App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    item_api::routes::create_app(DEFAULT_JSON_LIMIT)
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use super::*;

    pub fn base_item() -> Value {
        json!({
            "name": "Widget",
            "model": "W-100",
            "manufacturer": "Acme",
            "price": 19.99,
            "tax": 1.6
        })
    }

    pub fn partial_item() -> Value {
        json!({
            "name": "Widget",
            "price": 24.5
        })
    }

    pub fn omitted_item() -> Value {
        json!({
            "name": "Widget",
            "model": "W-100",
            "manufacturer": "Acme"
        })
    }
}
