use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{
        BadRequestReferenceResponse, InternalServerErrorResponse, NotFoundResponse,
        ValidationErrorResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::OrderResult;
use crate::models::{
    CreateOrder, OrderCategory, OrderListQuery, OrderReceipt, OrderRecord, OrderStatus,
};
use crate::repository::{OrderRepository, ProductLookup};
use crate::service::OrderService;

/// OpenAPI documentation for the Orders API
#[derive(OpenApi)]
#[openapi(
    paths(create_order, list_orders),
    components(
        schemas(CreateOrder, OrderCategory, OrderStatus, OrderReceipt, OrderRecord),
        responses(
            ValidationErrorResponse,
            BadRequestReferenceResponse,
            NotFoundResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Orders", description = "Order placement and listing (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the orders router with all HTTP endpoints
pub fn router<R, P>(service: OrderService<R, P>) -> Router
where
    R: OrderRepository + 'static,
    P: ProductLookup + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_orders).post(create_order))
        .with_state(shared_service)
}

/// Place an order
#[utoipa::path(
    post,
    path = "/",
    tag = "Orders",
    request_body = CreateOrder,
    responses(
        (status = 201, description = "Order placed", body = OrderReceipt),
        (status = 400, response = BadRequestReferenceResponse),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = ValidationErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_order<R: OrderRepository, P: ProductLookup>(
    State(service): State<Arc<OrderService<R, P>>>,
    ValidatedJson(input): ValidatedJson<CreateOrder>,
) -> OrderResult<impl IntoResponse> {
    let receipt = service.create_order(input).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

/// List placed orders
#[utoipa::path(
    get,
    path = "/",
    tag = "Orders",
    params(OrderListQuery),
    responses(
        (status = 200, description = "List of orders", body = Vec<OrderRecord>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_orders<R: OrderRepository, P: ProductLookup>(
    State(service): State<Arc<OrderService<R, P>>>,
    Query(query): Query<OrderListQuery>,
) -> OrderResult<Json<Vec<OrderRecord>>> {
    let orders = service.list_orders(query).await?;
    Ok(Json(orders))
}
