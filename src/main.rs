use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use catalog_backend::api::routes::{self, AppState};
use catalog_backend::application::{CategoryService, ProductService};
use catalog_backend::config::AppConfig;
use catalog_backend::infrastructure::repositories::{
    InMemoryCategoryRepository, InMemoryProductRepository,
};
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().expect("failed to load application configuration");

    let registry =
        tracing_subscriber::registry().with(EnvFilter::new(config.logging.level.clone()));
    if config.logging.json_format {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }

    let category_repo = Arc::new(InMemoryCategoryRepository::default());
    let product_repo = Arc::new(InMemoryProductRepository::default());

    let state = AppState {
        category_service: Arc::new(CategoryService::new(category_repo)),
        product_service: Arc::new(ProductService::new(product_repo)),
    };

    let bind_address = (config.host.clone(), config.port);
    info!(
        host = %config.host,
        port = config.port,
        environment = %config.environment,
        "starting catalog backend"
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
