use actix_web::{web, HttpRequest, HttpResponse};
use tracing::info;
use validator::Validate;

use crate::api::dtos::ProductRequest;
use crate::api::routes::AppState;
use crate::error::{AppError, AppResult};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .route("", web::get().to(find_all))
            .route("", web::post().to(save))
            .route("/{id}", web::get().to(find_by_id))
            .route("/{id}", web::put().to(update)),
    );
}

async fn find_all(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let products = state.product_service.list().await?;
    Ok(HttpResponse::Ok().json(products))
}

async fn find_by_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: HttpRequest,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let product = state
        .product_service
        .find_by_id(&id)
        .await?
        .ok_or_else(|| product_not_found(&id, &req))?;
    Ok(HttpResponse::Ok().json(product))
}

async fn save(
    state: web::Data<AppState>,
    payload: web::Json<ProductRequest>,
) -> AppResult<HttpResponse> {
    payload.validate()?;
    info!("saving product");
    let product = state.product_service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(product))
}

async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<ProductRequest>,
    req: HttpRequest,
) -> AppResult<HttpResponse> {
    payload.validate()?;
    let id = path.into_inner();
    let product = state
        .product_service
        .update(&id, payload.into_inner())
        .await?
        .ok_or_else(|| product_not_found(&id, &req))?;
    Ok(HttpResponse::Ok().json(product))
}

fn product_not_found(id: &str, req: &HttpRequest) -> AppError {
    AppError::invalid_request(format!("Product not found with this id: {id}"), req.path())
}
