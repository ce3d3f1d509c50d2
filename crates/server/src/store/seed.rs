//! Default records used when a collection exists nowhere yet.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use serde_json::Map;

use crate::models::{OrderItemRecord, OrderRecord, UserRecord};

/// Default users seeded into an empty store.
#[must_use]
pub fn default_users() -> Vec<UserRecord> {
    let now = Utc::now();
    vec![
        UserRecord {
            id: "u1".to_string(),
            name: "Admin User".to_string(),
            email: "admin@rxshops.com".to_string(),
            role: "admin".to_string(),
            created_at: now,
            is_active: true,
            extra: Map::new(),
        },
        UserRecord {
            id: "u2".to_string(),
            name: "Rahul Sharma".to_string(),
            email: "rahul.sharma@example.com".to_string(),
            role: "user".to_string(),
            created_at: now - Duration::days(1),
            is_active: true,
            extra: Map::new(),
        },
        UserRecord {
            id: "u3".to_string(),
            name: "Priya Verma".to_string(),
            email: "priya.verma@example.com".to_string(),
            role: "user".to_string(),
            created_at: now - Duration::days(2),
            is_active: true,
            extra: Map::new(),
        },
    ]
}

/// Default orders seeded into an empty store.
#[must_use]
pub fn default_orders() -> Vec<OrderRecord> {
    let now = Utc::now();
    vec![
        OrderRecord {
            id: "o1".to_string(),
            user_id: "u2".to_string(),
            total: Decimal::from(28999),
            currency: "INR".to_string(),
            status: "Processing".to_string(),
            items: vec![OrderItemRecord {
                product_id: "1".to_string(),
                product_name: "Sony WH-1000XM4 Wireless Headphones".to_string(),
                quantity: 1,
                price: Decimal::from(28999),
                extra: Map::new(),
            }],
            placed_at: now - Duration::hours(1),
            status_updated_at: None,
            extra: Map::new(),
        },
        OrderRecord {
            id: "o2".to_string(),
            user_id: "u3".to_string(),
            total: Decimal::from(12499),
            currency: "INR".to_string(),
            status: "Shipped".to_string(),
            items: vec![
                OrderItemRecord {
                    product_id: "4".to_string(),
                    product_name: "Nike Air Zoom Pegasus 40".to_string(),
                    quantity: 1,
                    price: Decimal::from(9199),
                    extra: Map::new(),
                },
                OrderItemRecord {
                    product_id: "2".to_string(),
                    product_name: "Premium Cotton T-Shirt".to_string(),
                    quantity: 1,
                    price: Decimal::from(2099),
                    extra: Map::new(),
                },
            ],
            placed_at: now - Duration::hours(3),
            status_updated_at: None,
            extra: Map::new(),
        },
    ]
}
