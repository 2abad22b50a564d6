use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderError {
    /// The supplied product_id is not a valid ObjectId hex string
    #[error("Invalid product_id")]
    InvalidProductId(String),

    /// No product with the given id exists in the category's collection
    #[error("Product not found")]
    ProductNotFound,

    /// The referenced product carries no usable numeric price
    #[error("Product has no usable price: {0}")]
    UnpricedProduct(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type OrderResult<T> = Result<T, OrderError>;

/// Convert OrderError to AppError for standardized error responses
impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::InvalidProductId(_) => AppError::BadRequest("Invalid product_id".to_string()),
            OrderError::ProductNotFound => AppError::NotFound("Product not found".to_string()),
            OrderError::UnpricedProduct(msg) => AppError::UnprocessableEntity(msg),
            OrderError::Validation(msg) => AppError::UnprocessableEntity(msg),
            OrderError::Database(msg) => AppError::InternalServerError(msg),
            OrderError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for OrderError {
    fn from(err: mongodb::error::Error) -> Self {
        OrderError::Database(err.to_string())
    }
}
