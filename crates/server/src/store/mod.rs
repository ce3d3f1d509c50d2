//! Record-oriented data store over blob-backed collections.
//!
//! [`DataStore::open`] loads the `users`, `orders`, and `products`
//! collections into an in-memory cache once; every record operation then
//! scans the cached list by `_id`, mutates or appends, and writes the whole
//! collection document back through [`BlobStorage`].
//!
//! The cache sits behind a single async mutex, so in-process operations
//! cannot interleave their read-modify-write cycles. The storage layer
//! still overwrites whole documents, so two server *processes* sharing one
//! container race last-writer-wins; see the crate docs.

pub mod seed;

use chrono::Utc;
use rand::Rng;
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use tokio::sync::Mutex;

use crate::models::{
    BackupDocument, EnrichedOrder, OrderRecord, ProductRecord, Stats, UserRecord, merge_record,
};
use crate::storage::BlobStorage;

const USERS: &str = "users";
const ORDERS: &str = "orders";
const PRODUCTS: &str = "products";

/// Placeholder until per-product stock thresholds exist.
const LOW_STOCK_PLACEHOLDER: u32 = 5;

/// In-memory copies of all collections.
#[derive(Debug, Default)]
struct Collections {
    users: Vec<UserRecord>,
    orders: Vec<OrderRecord>,
    products: Vec<ProductRecord>,
}

/// The record-oriented store handle.
///
/// Created once at startup via [`DataStore::open`] and shared through
/// application state. Missing records are reported as `None`/`false`,
/// never as errors; persistence failures are logged by the storage layer
/// and do not fail the operation.
#[derive(Debug)]
pub struct DataStore {
    storage: BlobStorage,
    collections: Mutex<Collections>,
}

impl DataStore {
    /// Load all collections and return a ready store.
    ///
    /// Collections that exist nowhere fall back to seeded defaults
    /// (users, orders) or an empty list (products).
    pub async fn open(storage: BlobStorage) -> Self {
        storage.ensure_container().await;

        let users = storage.load(USERS, seed::default_users()).await;
        let orders = storage.load(ORDERS, seed::default_orders()).await;
        let products = storage.load(PRODUCTS, Vec::new()).await;

        tracing::info!(
            users = users.len(),
            orders = orders.len(),
            products = products.len(),
            "data store opened"
        );

        Self {
            storage,
            collections: Mutex::new(Collections {
                users,
                orders,
                products,
            }),
        }
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// All users.
    pub async fn list_users(&self) -> Vec<UserRecord> {
        self.collections.lock().await.users.clone()
    }

    /// Append a new user built from the given fields.
    ///
    /// The store supplies `_id`, `createdAt`, and `isActive`; everything
    /// else comes from the caller.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if the fields do not form a valid
    /// user record.
    pub async fn add_user(
        &self,
        data: Map<String, Value>,
    ) -> Result<UserRecord, serde_json::Error> {
        let mut fields = data;
        fields.insert("_id".to_string(), Value::String(generate_id("u")));
        fields.insert(
            "createdAt".to_string(),
            serde_json::to_value(Utc::now())?,
        );
        fields.insert("isActive".to_string(), Value::Bool(true));
        let user: UserRecord = serde_json::from_value(Value::Object(fields))?;

        let mut collections = self.collections.lock().await;
        collections.users.push(user.clone());
        self.storage.save(USERS, &collections.users).await;
        Ok(user)
    }

    /// Shallow-merge patch fields into the user with the given id.
    ///
    /// `Ok(None)` when no user matches.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if the patch breaks the record shape.
    pub async fn update_user(
        &self,
        user_id: &str,
        patch: &Map<String, Value>,
    ) -> Result<Option<UserRecord>, serde_json::Error> {
        let mut collections = self.collections.lock().await;
        let Some(user) = collections.users.iter_mut().find(|u| u.id == user_id) else {
            return Ok(None);
        };

        *user = merge_record(user, patch)?;
        let updated = user.clone();
        self.storage.save(USERS, &collections.users).await;
        Ok(Some(updated))
    }

    /// Delete the user with the given id. `false` when no user matches.
    pub async fn delete_user(&self, user_id: &str) -> bool {
        let mut collections = self.collections.lock().await;
        let before = collections.users.len();
        collections.users.retain(|u| u.id != user_id);
        if collections.users.len() == before {
            return false;
        }
        self.storage.save(USERS, &collections.users).await;
        true
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// All orders, each joined in memory with its owning user.
    pub async fn list_orders(&self) -> Vec<EnrichedOrder> {
        let collections = self.collections.lock().await;
        collections
            .orders
            .iter()
            .map(|order| EnrichedOrder {
                order: order.clone(),
                user: collections
                    .users
                    .iter()
                    .find(|u| u.id == order.user_id)
                    .cloned(),
            })
            .collect()
    }

    /// Append a new order built from the given fields.
    ///
    /// The store supplies `_id` and `placedAt`; `status` defaults to
    /// `"Processing"` when absent.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if the fields do not form a valid
    /// order record.
    pub async fn add_order(
        &self,
        data: Map<String, Value>,
    ) -> Result<OrderRecord, serde_json::Error> {
        let mut fields = data;
        fields.insert("_id".to_string(), Value::String(generate_id("o")));
        fields.insert(
            "placedAt".to_string(),
            serde_json::to_value(Utc::now())?,
        );
        fields
            .entry("status".to_string())
            .or_insert_with(|| Value::String("Processing".to_string()));
        let order: OrderRecord = serde_json::from_value(Value::Object(fields))?;

        let mut collections = self.collections.lock().await;
        collections.orders.push(order.clone());
        self.storage.save(ORDERS, &collections.orders).await;
        Ok(order)
    }

    /// Set the status of the order with the given id and stamp
    /// `statusUpdatedAt`. `None` when no order matches.
    pub async fn update_order_status(&self, order_id: &str, status: &str) -> Option<OrderRecord> {
        let mut collections = self.collections.lock().await;
        let order = collections.orders.iter_mut().find(|o| o.id == order_id)?;

        order.status = status.to_string();
        order.status_updated_at = Some(Utc::now());
        let updated = order.clone();
        self.storage.save(ORDERS, &collections.orders).await;
        Some(updated)
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// All persisted products.
    pub async fn list_products(&self) -> Vec<ProductRecord> {
        self.collections.lock().await.products.clone()
    }

    /// Append a new product built from the given fields.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if the fields do not form a valid
    /// product record.
    pub async fn add_product(
        &self,
        data: Map<String, Value>,
    ) -> Result<ProductRecord, serde_json::Error> {
        let mut fields = data;
        fields.insert("_id".to_string(), Value::String(generate_id("p")));
        fields.insert(
            "createdAt".to_string(),
            serde_json::to_value(Utc::now())?,
        );
        fields.insert("isActive".to_string(), Value::Bool(true));
        let product: ProductRecord = serde_json::from_value(Value::Object(fields))?;

        let mut collections = self.collections.lock().await;
        collections.products.push(product.clone());
        self.storage.save(PRODUCTS, &collections.products).await;
        Ok(product)
    }

    /// Shallow-merge patch fields into the product with the given id.
    ///
    /// `Ok(None)` when no product matches.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if the patch breaks the record shape.
    pub async fn update_product(
        &self,
        product_id: &str,
        patch: &Map<String, Value>,
    ) -> Result<Option<ProductRecord>, serde_json::Error> {
        let mut collections = self.collections.lock().await;
        let Some(product) = collections.products.iter_mut().find(|p| p.id == product_id) else {
            return Ok(None);
        };

        *product = merge_record(product, patch)?;
        let updated = product.clone();
        self.storage.save(PRODUCTS, &collections.products).await;
        Ok(Some(updated))
    }

    // =========================================================================
    // Stats and backup
    // =========================================================================

    /// Aggregate counters for the admin dashboard.
    pub async fn get_stats(&self) -> Stats {
        let collections = self.collections.lock().await;
        Stats {
            total_users: collections.users.len(),
            total_orders: collections.orders.len(),
            total_revenue: collections.orders.iter().map(|o| o.total).sum::<Decimal>(),
            low_stock: LOW_STOCK_PLACEHOLDER,
        }
    }

    /// Snapshot all collections into a timestamped backup document.
    ///
    /// Returns the backup document name on success, `None` when the save
    /// failed.
    pub async fn backup(&self) -> Option<String> {
        let collections = self.collections.lock().await;
        let document = BackupDocument {
            users: collections.users.clone(),
            orders: collections.orders.clone(),
            products: collections.products.clone(),
            timestamp: Utc::now(),
        };

        let name = format!("backup-{}", Utc::now().timestamp_millis());
        if self.storage.save(&name, &document).await {
            Some(name)
        } else {
            None
        }
    }
}

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LEN: usize = 9;

/// Generate a record id: prefix + base-36 epoch millis + random base-36
/// suffix.
///
/// Uniqueness is probabilistic, not guaranteed; the suffix is not
/// cryptographic. Good enough for a single-instance admin store.
#[must_use]
pub fn generate_id(prefix: &str) -> String {
    let mut timestamp = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
    let mut encoded = Vec::new();
    loop {
        encoded.push(BASE36[(timestamp % 36) as usize]);
        timestamp /= 36;
        if timestamp == 0 {
            break;
        }
    }
    encoded.reverse();

    let mut rng = rand::rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| char::from(BASE36[rng.random_range(0..36)]))
        .collect();

    format!("{prefix}{}{suffix}", String::from_utf8_lossy(&encoded))
}
