use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::serialize_object_id_as_hex_string;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use validator::Validate;

fn default_true() -> bool {
    true
}

/// Units a social-media boost package is denominated in
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SosmedUnit {
    #[default]
    Followers,
    Likes,
    Views,
    Comments,
}

/// Game top-up product payload (diamonds, credits, ...)
///
/// Collection: `topupproduct`
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TopupProduct {
    /// Display name, e.g., "Mobile Legends 86 Diamonds"
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Game name, e.g., "Mobile Legends", "Free Fire"
    #[validate(length(min = 1, max = 100))]
    pub game: String,
    /// Amount of diamonds/credits included
    #[validate(range(min = 1))]
    pub amount: i64,
    /// Price in local currency
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Stored top-up product, as returned by list endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TopupProductRecord {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(
        rename(deserialize = "_id", serialize = "id"),
        serialize_with = "serialize_object_id_as_hex_string"
    )]
    #[schema(value_type = String)]
    pub id: ObjectId,
    pub name: String,
    pub game: String,
    pub amount: i64,
    pub price: f64,
    pub is_active: bool,
}

/// Social-media boost service payload
///
/// Collection: `sosmedservice`
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SosmedService {
    /// Display name, e.g., "Instagram Followers +100"
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Platform: instagram, tiktok, youtube, ...
    #[validate(length(min = 1, max = 100))]
    pub platform: String,
    #[serde(default)]
    pub unit: SosmedUnit,
    /// Units included in one package
    #[validate(range(min = 1))]
    pub quantity: i64,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Stored social-media boost service
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SosmedServiceRecord {
    #[serde(
        rename(deserialize = "_id", serialize = "id"),
        serialize_with = "serialize_object_id_as_hex_string"
    )]
    #[schema(value_type = String)]
    pub id: ObjectId,
    pub name: String,
    pub platform: String,
    pub unit: SosmedUnit,
    pub quantity: i64,
    pub price: f64,
    pub is_active: bool,
}

/// Virtual/empty phone number payload, sold for registration/OTP use
///
/// Collection: `emptynumber`
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct EmptyNumber {
    /// Telco or virtual provider
    #[validate(length(min = 1, max = 100))]
    pub provider: String,
    /// Country code name, e.g., "ID", "US"
    #[validate(length(min = 1, max = 10))]
    pub country: String,
    /// Masked or full number to sell
    #[validate(length(min = 1, max = 40))]
    pub number: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(default = "default_true")]
    pub available: bool,
}

/// Stored virtual number
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EmptyNumberRecord {
    #[serde(
        rename(deserialize = "_id", serialize = "id"),
        serialize_with = "serialize_object_id_as_hex_string"
    )]
    #[schema(value_type = String)]
    pub id: ObjectId,
    pub provider: String,
    pub country: String,
    pub number: String,
    pub price: f64,
    pub available: bool,
}

/// Response body for successful creates
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    /// Hex string of the generated document id
    pub id: String,
}

impl From<ObjectId> for CreatedResponse {
    fn from(id: ObjectId) -> Self {
        Self { id: id.to_hex() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_topup_product_valid() {
        let product = TopupProduct {
            name: "ML 86 Diamonds".to_string(),
            game: "Mobile Legends".to_string(),
            amount: 86,
            price: 20000.0,
            is_active: true,
        };
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_topup_product_rejects_zero_amount() {
        let product = TopupProduct {
            name: "ML 86 Diamonds".to_string(),
            game: "Mobile Legends".to_string(),
            amount: 0,
            price: 20000.0,
            is_active: true,
        };
        let err = product.validate().unwrap_err();
        assert!(err.field_errors().contains_key("amount"));
    }

    #[test]
    fn test_topup_product_rejects_negative_price() {
        let product = TopupProduct {
            name: "ML 86 Diamonds".to_string(),
            game: "Mobile Legends".to_string(),
            amount: 86,
            price: -1.0,
            is_active: true,
        };
        let err = product.validate().unwrap_err();
        assert!(err.field_errors().contains_key("price"));
    }

    #[test]
    fn test_topup_product_is_active_defaults_to_true() {
        let product: TopupProduct = serde_json::from_value(serde_json::json!({
            "name": "ML 86 Diamonds",
            "game": "Mobile Legends",
            "amount": 86,
            "price": 20000.0
        }))
        .unwrap();
        assert!(product.is_active);
    }

    #[test]
    fn test_sosmed_unit_defaults_to_followers() {
        let service: SosmedService = serde_json::from_value(serde_json::json!({
            "name": "Instagram Followers +100",
            "platform": "instagram",
            "quantity": 100,
            "price": 15000.0
        }))
        .unwrap();
        assert_eq!(service.unit, SosmedUnit::Followers);
        assert!(service.is_active);
    }

    #[test]
    fn test_sosmed_unit_rejects_unknown_value() {
        let result: Result<SosmedService, _> = serde_json::from_value(serde_json::json!({
            "name": "Instagram Shares +100",
            "platform": "instagram",
            "unit": "shares",
            "quantity": 100,
            "price": 15000.0
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_number_available_defaults_to_true() {
        let number: EmptyNumber = serde_json::from_value(serde_json::json!({
            "provider": "Telkomsel",
            "country": "ID",
            "number": "+62812xxxx123",
            "price": 5000.0
        }))
        .unwrap();
        assert!(number.available);
    }

    #[test]
    fn test_record_serializes_id_as_hex_string() {
        let id = ObjectId::new();
        let record = TopupProductRecord {
            id,
            name: "ML 86 Diamonds".to_string(),
            game: "Mobile Legends".to_string(),
            amount: 86,
            price: 20000.0,
            is_active: true,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], id.to_hex());
        assert!(json.get("_id").is_none());
    }

    #[test]
    fn test_created_response_from_object_id() {
        let id = ObjectId::new();
        let response = CreatedResponse::from(id);
        assert_eq!(response.id, id.to_hex());
    }
}
