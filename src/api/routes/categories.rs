use actix_web::{web, HttpRequest, HttpResponse};
use tracing::info;
use validator::Validate;

use crate::api::dtos::CategoryRequest;
use crate::api::routes::AppState;
use crate::error::{AppError, AppResult};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/categories")
            .route("", web::get().to(find_all))
            .route("", web::post().to(save))
            .route("/{id}", web::get().to(find_by_id)),
    );
}

async fn find_all(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let categories = state.category_service.list().await?;
    Ok(HttpResponse::Ok().json(categories))
}

async fn find_by_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: HttpRequest,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let category = state
        .category_service
        .find_by_id(&id)
        .await?
        .ok_or_else(|| {
            AppError::invalid_request(
                format!("Category not found with this id: {id}"),
                req.path(),
            )
        })?;
    Ok(HttpResponse::Ok().json(category))
}

async fn save(
    state: web::Data<AppState>,
    payload: web::Json<CategoryRequest>,
) -> AppResult<HttpResponse> {
    payload.validate()?;
    info!("saving category");
    let category = state.category_service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(category))
}
