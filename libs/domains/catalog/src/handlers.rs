use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{InternalServerErrorResponse, ValidationErrorResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CatalogResult;
use crate::models::{
    CreatedResponse, EmptyNumber, EmptyNumberRecord, SosmedService, SosmedServiceRecord,
    SosmedUnit, TopupProduct, TopupProductRecord,
};
use crate::repository::CatalogRepository;
use crate::service::CatalogService;

/// OpenAPI documentation for the Catalog API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_topup,
        create_topup,
        list_sosmed,
        create_sosmed,
        list_numbers,
        create_number,
    ),
    components(
        schemas(
            TopupProduct,
            TopupProductRecord,
            SosmedService,
            SosmedServiceRecord,
            SosmedUnit,
            EmptyNumber,
            EmptyNumberRecord,
            CreatedResponse
        ),
        responses(ValidationErrorResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Catalog", description = "Product catalog endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the catalog router with all HTTP endpoints
pub fn router<R: CatalogRepository + 'static>(service: CatalogService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/topup", get(list_topup).post(create_topup))
        .route("/sosmed", get(list_sosmed).post(create_sosmed))
        .route("/numbers", get(list_numbers).post(create_number))
        .with_state(shared_service)
}

/// List top-up products
#[utoipa::path(
    get,
    path = "/topup",
    tag = "Catalog",
    responses(
        (status = 200, description = "List of top-up products", body = Vec<TopupProductRecord>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_topup<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
) -> CatalogResult<Json<Vec<TopupProductRecord>>> {
    let products = service.list_topup().await?;
    Ok(Json(products))
}

/// Create a top-up product
#[utoipa::path(
    post,
    path = "/topup",
    tag = "Catalog",
    request_body = TopupProduct,
    responses(
        (status = 201, description = "Top-up product created", body = CreatedResponse),
        (status = 422, response = ValidationErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_topup<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    ValidatedJson(input): ValidatedJson<TopupProduct>,
) -> CatalogResult<impl IntoResponse> {
    let id = service.create_topup(input).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse::from(id))))
}

/// List social-media boost services
#[utoipa::path(
    get,
    path = "/sosmed",
    tag = "Catalog",
    responses(
        (status = 200, description = "List of sosmed services", body = Vec<SosmedServiceRecord>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_sosmed<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
) -> CatalogResult<Json<Vec<SosmedServiceRecord>>> {
    let services = service.list_sosmed().await?;
    Ok(Json(services))
}

/// Create a social-media boost service
#[utoipa::path(
    post,
    path = "/sosmed",
    tag = "Catalog",
    request_body = SosmedService,
    responses(
        (status = 201, description = "Sosmed service created", body = CreatedResponse),
        (status = 422, response = ValidationErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_sosmed<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    ValidatedJson(input): ValidatedJson<SosmedService>,
) -> CatalogResult<impl IntoResponse> {
    let id = service.create_sosmed(input).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse::from(id))))
}

/// List numbers still available for sale
#[utoipa::path(
    get,
    path = "/numbers",
    tag = "Catalog",
    responses(
        (status = 200, description = "List of available numbers", body = Vec<EmptyNumberRecord>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_numbers<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
) -> CatalogResult<Json<Vec<EmptyNumberRecord>>> {
    let numbers = service.list_numbers().await?;
    Ok(Json(numbers))
}

/// Create a virtual number
#[utoipa::path(
    post,
    path = "/numbers",
    tag = "Catalog",
    request_body = EmptyNumber,
    responses(
        (status = 201, description = "Number created", body = CreatedResponse),
        (status = 422, response = ValidationErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_number<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    ValidatedJson(input): ValidatedJson<EmptyNumber>,
) -> CatalogResult<impl IntoResponse> {
    let id = service.create_number(input).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse::from(id))))
}
