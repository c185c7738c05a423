use actix_web::{middleware::Logger, HttpServer};
use item_api::config::{self, EnvConfig};
use item_api::routes::create_app;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = config::init(EnvConfig::from_env());
    let addr = config.bind_addr();
    let json_limit = config.json_limit;

    info!("Starting server on {}", addr);

    let mut server = HttpServer::new(move || {
        create_app(json_limit).wrap(Logger::default())
    });

    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    server
        .bind(addr)?
        .run()
        .await
}
