use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{guard, web, App, HttpRequest, HttpResponse, Resource};

use crate::types::error::{json_error_handler, path_error_handler, query_error_handler, AppError};

pub mod docs;
pub mod item;
pub mod root;

/// A resource that answers methods it has no route for with 405.
fn resource(path: &str) -> Resource {
    web::resource(path).default_service(web::to(method_not_allowed))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(resource("/").route(web::get().to(root::root)));
    cfg.service(resource("/openapi.json").route(web::get().to(docs::openapi_json)));
    cfg.service(web::resource("/items").to(add_trailing_slash));
    cfg.service(
        web::scope("/items")
            .service(
                resource("/")
                    .route(web::get().to(item::find::find_items))
                    .route(web::post().to(item::create::create_item))
            )
            // other methods fall through to /{id}
            .service(
                resource("/omitted")
                    .guard(guard::Get())
                    .route(web::get().to(item::omitted::omitted_item))
            )
            .service(
                resource("/{id}")
                    .route(web::patch().to(item::update::update_item))
                    .route(web::put().to(item::put::put_item))
            )
    );
}

/// Routes extractor failures through [`AppError`] so they share its JSON body.
pub fn configure_extractors(json_limit: usize) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(
            web::JsonConfig::default()
                .limit(json_limit)
                .error_handler(json_error_handler),
        )
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler));
    }
}

/// Redirects a collection path without its trailing slash, keeping the query.
async fn add_trailing_slash(
    req: HttpRequest
) -> HttpResponse {
    let mut location = format!("{}/", req.path());
    if !req.query_string().is_empty() {
        location.push('?');
        location.push_str(req.query_string());
    }

    HttpResponse::TemporaryRedirect()
        .insert_header((header::LOCATION, location))
        .finish()
}

async fn method_not_allowed(
    _req: HttpRequest
) -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed)
}

async fn not_found(
    _req: HttpRequest
) -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound)
}

/// Builds the application the server runs; the integration tests use it too.
pub fn create_app(json_limit: usize) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .configure(configure_extractors(json_limit))
        .configure(configure_routes)
        .default_service(web::to(not_found))
}
