use std::sync::{Arc, Mutex};

use actix_web::{http::StatusCode, test as actix_test, web, App};
use catalog_backend::api::routes;
use catalog_backend::domain::Product;
use catalog_backend::error::ApiError;
use serde_json::{json, Value};

use crate::common;
use crate::common::mocks::{MockCategoryRepo, MockProductRepo};

fn valid_payload() -> Value {
    json!({
        "name": "Desk Lamp",
        "description": "Adjustable LED desk lamp",
        "price": "34.50",
        "categoryId": "cat-1",
        "stock": 12
    })
}

#[actix_rt::test]
async fn get_products_on_empty_store_returns_empty_list() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(common::empty_app_state()))
            .configure(routes::configure),
    )
    .await;

    let request = actix_test::TestRequest::get()
        .uri("/api/v1/products")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Vec<Product> = actix_test::read_body_json(response).await;
    assert!(body.is_empty());
}

#[actix_rt::test]
async fn get_product_by_unknown_id_returns_invalid_request() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(common::empty_app_state()))
            .configure(routes::configure),
    )
    .await;

    let request = actix_test::TestRequest::get()
        .uri("/api/v1/products/123456")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: ApiError = actix_test::read_body_json(response).await;
    assert_eq!(body.status_code, "INVALID_REQUEST");
    assert_eq!(body.message, "Product not found with this id: 123456");
    assert_eq!(body.path, "uri=/api/v1/products/123456");
}

#[actix_rt::test]
async fn get_product_by_id_returns_seeded_product() {
    let seeded = common::test_product("Lamp");
    let state = common::app_state(
        Arc::new(MockCategoryRepo::default()),
        Arc::new(MockProductRepo {
            products: Mutex::new(vec![seeded.clone()]),
        }),
    );

    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await;

    let request = actix_test::TestRequest::get()
        .uri(&format!("/api/v1/products/{}", seeded.id))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Product = actix_test::read_body_json(response).await;
    assert_eq!(body, seeded);
}

#[actix_rt::test]
async fn post_product_returns_created_with_generated_id() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(common::empty_app_state()))
            .configure(routes::configure),
    )
    .await;

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/products")
        .set_json(valid_payload())
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Product = actix_test::read_body_json(response).await;
    assert!(!body.id.trim().is_empty());
    assert_eq!(body.name, "Desk Lamp");
    assert_eq!(body.category_id, "cat-1");
    assert_eq!(body.stock, 12);
}

#[actix_rt::test]
async fn post_then_get_roundtrips_product() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(common::empty_app_state()))
            .configure(routes::configure),
    )
    .await;

    let create = actix_test::TestRequest::post()
        .uri("/api/v1/products")
        .set_json(valid_payload())
        .to_request();
    let created: Product =
        actix_test::read_body_json(actix_test::call_service(&app, create).await).await;

    let get = actix_test::TestRequest::get()
        .uri(&format!("/api/v1/products/{}", created.id))
        .to_request();
    let response = actix_test::call_service(&app, get).await;
    assert_eq!(response.status(), StatusCode::OK);

    let fetched: Product = actix_test::read_body_json(response).await;
    assert_eq!(fetched, created);
}

#[actix_rt::test]
async fn post_product_with_invalid_fields_lists_every_violation() {
    let state = common::empty_app_state();
    let product_service = state.product_service.clone();

    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await;

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/products")
        .set_json(json!({
            "name": "",
            "description": " ",
            "price": null,
            "categoryId": "",
            "stock": 0
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["name"], "must not be blank");
    assert_eq!(body["description"], "must not be blank");
    assert_eq!(body["price"], "must not be null");
    assert_eq!(body["categoryId"], "must not be blank");
    assert_eq!(body["stock"], "must be greater than or equal to 1");

    // Nothing was persisted.
    let products = product_service.list().await.unwrap();
    assert!(products.is_empty());
}

#[actix_rt::test]
async fn post_product_with_null_fields_returns_field_map() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(common::empty_app_state()))
            .configure(routes::configure),
    )
    .await;

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/products")
        .set_json(json!({
            "name": null,
            "description": "Adjustable LED desk lamp",
            "price": "34.50",
            "categoryId": null,
            "stock": null
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({
            "name": "must not be blank",
            "categoryId": "must not be blank",
            "stock": "must not be null"
        })
    );
}

#[actix_rt::test]
async fn post_product_with_empty_body_reports_every_field() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(common::empty_app_state()))
            .configure(routes::configure),
    )
    .await;

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/products")
        .set_json(json!({}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["name"], "must not be blank");
    assert_eq!(body["description"], "must not be blank");
    assert_eq!(body["price"], "must not be null");
    assert_eq!(body["categoryId"], "must not be blank");
    assert_eq!(body["stock"], "must not be null");
}

#[actix_rt::test]
async fn put_product_persists_the_update() {
    let seeded = common::test_product("Lamp");
    let state = common::app_state(
        Arc::new(MockCategoryRepo::default()),
        Arc::new(MockProductRepo {
            products: Mutex::new(vec![seeded.clone()]),
        }),
    );

    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await;

    let put = actix_test::TestRequest::put()
        .uri(&format!("/api/v1/products/{}", seeded.id))
        .set_json(valid_payload())
        .to_request();
    let response = actix_test::call_service(&app, put).await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated: Product = actix_test::read_body_json(response).await;
    assert_eq!(updated.id, seeded.id);
    assert_eq!(updated.name, "Desk Lamp");

    // The update is observable on a subsequent read.
    let get = actix_test::TestRequest::get()
        .uri(&format!("/api/v1/products/{}", seeded.id))
        .to_request();
    let fetched: Product =
        actix_test::read_body_json(actix_test::call_service(&app, get).await).await;
    assert_eq!(fetched, updated);
}

#[actix_rt::test]
async fn put_product_with_unknown_id_returns_invalid_request() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(common::empty_app_state()))
            .configure(routes::configure),
    )
    .await;

    let request = actix_test::TestRequest::put()
        .uri("/api/v1/products/123456")
        .set_json(valid_payload())
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: ApiError = actix_test::read_body_json(response).await;
    assert_eq!(body.status_code, "INVALID_REQUEST");
    assert_eq!(body.message, "Product not found with this id: 123456");
    assert_eq!(body.path, "uri=/api/v1/products/123456");
}

#[actix_rt::test]
async fn put_product_with_invalid_payload_returns_field_map() {
    let seeded = common::test_product("Lamp");
    let state = common::app_state(
        Arc::new(MockCategoryRepo::default()),
        Arc::new(MockProductRepo {
            products: Mutex::new(vec![seeded.clone()]),
        }),
    );

    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await;

    let request = actix_test::TestRequest::put()
        .uri(&format!("/api/v1/products/{}", seeded.id))
        .set_json(json!({
            "name": "Lamp",
            "description": "LED lamp",
            "price": null,
            "categoryId": "cat-1",
            "stock": 1
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["price"], "must not be null");
}
