//! Persisted record types.
//!
//! Collection documents are JSON arrays of loosely-typed records: each
//! record carries the fields the server actually reads plus a flattened
//! bag of whatever else callers stored. `_id` is unique within a
//! collection; no cross-collection referential integrity is enforced by
//! the store (joins happen in memory at read time).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

fn default_true() -> bool {
    true
}

/// A user record in the `users` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    /// `"admin"` or `"user"`.
    pub role: String,
    pub created_at: DateTime<Utc>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Fields stored by callers that the server does not interpret
    /// (phone, address, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRecord {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub price: Decimal,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An order record in the `orders` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub total: Decimal,
    pub currency: String,
    /// Free-form status label ("Processing", "Shipped", ...). Kept as a
    /// string because the admin UI patches arbitrary labels through.
    pub status: String,
    #[serde(default)]
    pub items: Vec<OrderItemRecord>,
    pub placed_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An order joined with its owning user for admin listings.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedOrder {
    #[serde(flatten)]
    pub order: OrderRecord,
    /// `null` when the user no longer exists.
    pub user: Option<UserRecord>,
}

/// A product record in the `products` collection.
///
/// Admin-created products are stored as-is; only the bookkeeping fields
/// are typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Aggregate store counters for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_users: usize,
    pub total_orders: usize,
    pub total_revenue: Decimal,
    /// Placeholder until per-product stock thresholds exist.
    pub low_stock: u32,
}

/// Snapshot of all collections, written as `backup-<epochMillis>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupDocument {
    pub users: Vec<UserRecord>,
    pub orders: Vec<OrderRecord>,
    pub products: Vec<ProductRecord>,
    pub timestamp: DateTime<Utc>,
}

/// Shallow-merge patch fields over a record, the way a JS object spread
/// would.
///
/// The record round-trips through JSON so the patch can touch both typed
/// and extra fields; `_id` in the patch is ignored to keep identities
/// stable.
///
/// # Errors
///
/// Returns a `serde_json::Error` if the patched object no longer
/// deserializes as a valid record (e.g. a typed field was set to the
/// wrong shape).
pub fn merge_record<T>(record: &T, patch: &Map<String, Value>) -> Result<T, serde_json::Error>
where
    T: Serialize + serde::de::DeserializeOwned,
{
    let mut value = serde_json::to_value(record)?;
    if let Value::Object(fields) = &mut value {
        for (key, patch_value) in patch {
            if key == "_id" {
                continue;
            }
            fields.insert(key.clone(), patch_value.clone());
        }
    }
    serde_json::from_value(value)
}
