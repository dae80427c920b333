use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::application::{CategoryService, ProductService};

pub mod categories;
pub mod products;

#[derive(Clone)]
pub struct AppState {
    pub category_service: Arc<CategoryService>,
    pub product_service: Arc<ProductService>,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(categories::configure)
            .configure(products::configure),
    )
    .route("/health", web::get().to(health));
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
