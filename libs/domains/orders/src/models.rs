use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::serialize_object_id_as_hex_string;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Product category an order refers to.
///
/// Each category maps to exactly one backing collection; the match in
/// [`OrderCategory::collection_name`] is exhaustive, so adding a category
/// without a collection mapping fails to compile.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OrderCategory {
    Topup,
    Sosmed,
    Number,
}

impl OrderCategory {
    /// Backing collection for products of this category
    pub fn collection_name(self) -> &'static str {
        match self {
            OrderCategory::Topup => "topupproduct",
            OrderCategory::Sosmed => "sosmedservice",
            OrderCategory::Number => "emptynumber",
        }
    }
}

/// Order lifecycle status. Stored as a plain string; no transitions are
/// implemented, every created order starts (and stays) pending.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Failed,
}

fn default_quantity() -> i64 {
    1
}

/// Order creation payload
///
/// Collection: `order`
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrder {
    pub category: OrderCategory,
    /// Hex ObjectId string of the product being ordered
    #[validate(length(min = 1))]
    pub product_id: String,
    #[serde(default = "default_quantity")]
    #[validate(range(min = 1))]
    pub quantity: i64,
    /// Game UID / profile link / destination phone number
    #[validate(length(min = 1, max = 500))]
    pub target: String,
    /// Customer contact for notifications
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email)]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub status: OrderStatus,
    /// Caller-supplied total. When absent the server derives it from the
    /// referenced product's price.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub total_price: Option<f64>,
}

/// Stored order, as returned by the listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderRecord {
    #[serde(
        rename(deserialize = "_id", serialize = "id"),
        serialize_with = "serialize_object_id_as_hex_string"
    )]
    #[schema(value_type = String)]
    pub id: ObjectId,
    pub category: OrderCategory,
    pub product_id: String,
    pub quantity: i64,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub status: OrderStatus,
    pub total_price: f64,
}

/// Response body for a successfully created order
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderReceipt {
    /// Hex string of the generated order id
    pub id: String,
    pub status: OrderStatus,
    pub total_price: f64,
}

/// Query parameters for the order listing endpoint
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
pub struct OrderListQuery {
    /// Maximum number of orders to return
    #[serde(default = "default_list_limit")]
    pub limit: i64,
}

fn default_list_limit() -> i64 {
    50
}

impl Default for OrderListQuery {
    fn default() -> Self {
        Self {
            limit: default_list_limit(),
        }
    }
}

/// Price view of a product document, as read during order pricing.
///
/// `price` is `None` when the stored document has no usable numeric price;
/// the service rejects such orders instead of silently pricing them at 0.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedProduct {
    pub price: Option<f64>,
}
