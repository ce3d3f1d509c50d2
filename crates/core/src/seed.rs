//! Seeded mock catalog.
//!
//! The storefront ships with an in-memory catalog so demos and tests have
//! realistic data before any products are persisted server-side.

use rust_decimal::Decimal;

use crate::catalog::{Category, ColorVariant, Product, ProductImage, RatingSummary};

fn image(url: &str, public_id: &str) -> ProductImage {
    ProductImage {
        url: url.to_string(),
        public_id: public_id.to_string(),
    }
}

fn color(name: &str, hex_code: &str) -> ColorVariant {
    ColorVariant {
        name: name.to_string(),
        hex_code: hex_code.to_string(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// The seeded product catalog.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn mock_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Sony WH-1000XM4 Wireless Headphones".to_string(),
            description: "Industry-leading noise canceling headphones with 30-hour battery life, quick charge, and premium sound quality".to_string(),
            price: Decimal::new(34999, 2),
            discount_price: Some(Decimal::new(29999, 2)),
            category: Category::Electronics,
            sub_category: Some("audio".to_string()),
            brand: "Sony".to_string(),
            images: vec![image("https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400&h=400&fit=crop&crop=center", "1")],
            stock: 45,
            sku: Some("SONY001".to_string()),
            ratings: RatingSummary { average: 4.8, count: 2847 },
            colors: vec![color("Black", "#000000"), color("Silver", "#c0c0c0")],
            sizes: strings(&["One Size"]),
            tags: strings(&["wireless", "bluetooth", "noise-cancelling", "premium"]),
            is_active: true,
            is_featured: true,
        },
        Product {
            id: "2".to_string(),
            name: "Premium Cotton T-Shirt".to_string(),
            description: "Ultra-soft 100% organic cotton t-shirt with modern fit. Perfect for casual wear and layering".to_string(),
            price: Decimal::new(3499, 2),
            discount_price: Some(Decimal::new(2499, 2)),
            category: Category::Clothing,
            sub_category: Some("shirts".to_string()),
            brand: "EcoWear".to_string(),
            images: vec![image("https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400&h=400&fit=crop&crop=center", "2")],
            stock: 150,
            sku: Some("ECO001".to_string()),
            ratings: RatingSummary { average: 4.5, count: 1245 },
            colors: vec![
                color("Navy", "#1a237e"),
                color("White", "#ffffff"),
                color("Charcoal", "#424242"),
                color("Forest Green", "#2e7d32"),
            ],
            sizes: strings(&["XS", "S", "M", "L", "XL", "XXL"]),
            tags: strings(&["organic", "cotton", "casual", "sustainable"]),
            is_active: true,
            is_featured: true,
        },
        Product {
            id: "4".to_string(),
            name: "Nike Air Zoom Pegasus 40".to_string(),
            description: "Responsive cushioning and smooth ride for everyday running. Engineered mesh upper for breathability".to_string(),
            price: Decimal::new(13999, 2),
            discount_price: Some(Decimal::new(10999, 2)),
            category: Category::Sports,
            sub_category: Some("footwear".to_string()),
            brand: "Nike".to_string(),
            images: vec![image("https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=400&h=400&fit=crop&crop=center", "4")],
            stock: 85,
            sku: Some("NIKE001".to_string()),
            ratings: RatingSummary { average: 4.7, count: 3456 },
            colors: vec![
                color("Black/White", "#000000"),
                color("Blue/Orange", "#1976d2"),
                color("Grey/Pink", "#757575"),
            ],
            sizes: strings(&["7", "8", "9", "10", "11", "12"]),
            tags: strings(&["running", "nike", "pegasus", "athletic"]),
            is_active: true,
            is_featured: true,
        },
        Product {
            id: "5".to_string(),
            name: "MacBook Air M2 Laptop".to_string(),
            description: "13.6-inch Liquid Retina display, Apple M2 chip, 8GB RAM, 256GB SSD. Incredibly portable and powerful".to_string(),
            price: Decimal::new(119_999, 2),
            discount_price: Some(Decimal::new(99999, 2)),
            category: Category::Electronics,
            sub_category: Some("computers".to_string()),
            brand: "Apple".to_string(),
            images: vec![image("https://images.unsplash.com/photo-1541807084-5c52b6b3adef?w=400&h=400&fit=crop&crop=center", "5")],
            stock: 25,
            sku: Some("APPLE001".to_string()),
            ratings: RatingSummary { average: 4.9, count: 1876 },
            colors: vec![
                color("Space Grey", "#4a4a4a"),
                color("Silver", "#c0c0c0"),
                color("Midnight", "#191970"),
            ],
            sizes: strings(&["One Size"]),
            tags: strings(&["laptop", "apple", "m2", "portable", "premium"]),
            is_active: true,
            is_featured: true,
        },
        Product {
            id: "7".to_string(),
            name: "KitchenAid Stand Mixer".to_string(),
            description: "Professional 5-quart stand mixer with 10 speeds and multiple attachments. Perfect for baking enthusiasts".to_string(),
            price: Decimal::new(42999, 2),
            discount_price: Some(Decimal::new(34999, 2)),
            category: Category::HomeGarden,
            sub_category: Some("kitchen".to_string()),
            brand: "KitchenAid".to_string(),
            images: vec![image("https://images.unsplash.com/photo-1556909114-f6e7ad7d3136?w=400&h=400&fit=crop&crop=center", "7")],
            stock: 35,
            sku: Some("KITCHEN001".to_string()),
            ratings: RatingSummary { average: 4.8, count: 987 },
            colors: vec![color("Red", "#d32f2f"), color("White", "#ffffff")],
            sizes: strings(&["One Size"]),
            tags: strings(&["kitchen", "mixer", "baking", "appliance"]),
            is_active: true,
            is_featured: false,
        },
        Product {
            id: "8".to_string(),
            name: "Ray-Ban Aviator Sunglasses".to_string(),
            description: "Classic aviator sunglasses with UV protection and polarized lenses. Timeless style meets modern technology".to_string(),
            price: Decimal::new(15499, 2),
            discount_price: Some(Decimal::new(12999, 2)),
            category: Category::Beauty,
            sub_category: Some("accessories".to_string()),
            brand: "Ray-Ban".to_string(),
            images: vec![image("https://images.unsplash.com/photo-1572635196237-14b3f281503f?w=400&h=400&fit=crop&crop=center", "8")],
            stock: 120,
            sku: Some("RAYBAN001".to_string()),
            ratings: RatingSummary { average: 4.7, count: 2341 },
            colors: vec![
                color("Gold/Green", "#ffd700"),
                color("Silver/Grey", "#c0c0c0"),
                color("Black/Black", "#000000"),
            ],
            sizes: strings(&["One Size"]),
            tags: strings(&["sunglasses", "aviator", "uv-protection", "classic"]),
            is_active: true,
            is_featured: false,
        },
    ]
}
