//! Cart line items and the aggregation engine.
//!
//! A cart is an ordered list of line items keyed by the composite identity
//! `(product id, size, color)`. Adding an item whose identity already exists
//! merges into the existing line instead of creating a duplicate. The two
//! derived totals are recomputed after every mutation, so they can never go
//! stale relative to the line items.
//!
//! Operations that miss their target are silent no-ops, never errors.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// One cart line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// The product, kept for display; identity beyond the id is not used.
    pub product: Product,
    /// Positive count. A line reaching zero is removed, never kept.
    pub quantity: u32,
    pub size: String,
    pub color: String,
    /// Effective unit price frozen at the moment the line was created.
    /// Later catalog price changes do not touch existing lines.
    pub price: Decimal,
}

impl CartItem {
    fn matches(&self, product_id: &str, size: &str, color: &str) -> bool {
        self.product.id == product_id && self.size == size && self.color == color
    }

    /// `quantity x unit price` for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// The cart aggregate: ordered line items plus derived totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
    total_quantity: u32,
    total_amount: Decimal,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of a product variant to the cart.
    ///
    /// If a line with the same `(product id, size, color)` already exists,
    /// its quantity is incremented; otherwise a new line is appended with
    /// the product's current effective price. Stock limits are a UI
    /// concern and are not enforced here.
    pub fn add(&mut self, product: &Product, quantity: u32, size: &str, color: &str) {
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.matches(&product.id, size, color))
        {
            item.quantity += quantity;
        } else {
            self.items.push(CartItem {
                price: product.effective_price(),
                product: product.clone(),
                quantity,
                size: size.to_string(),
                color: color.to_string(),
            });
        }
        self.recompute_totals();
    }

    /// Remove the line matching the composite identity. Missing lines are
    /// a no-op.
    pub fn remove(&mut self, product_id: &str, size: &str, color: &str) {
        self.items
            .retain(|item| !item.matches(product_id, size, color));
        self.recompute_totals();
    }

    /// Set the matching line's quantity to an absolute value.
    ///
    /// A quantity of zero or less removes the line. Missing lines are a
    /// no-op.
    pub fn update_quantity(&mut self, product_id: &str, size: &str, color: &str, quantity: i64) {
        let Some(index) = self
            .items
            .iter()
            .position(|item| item.matches(product_id, size, color))
        else {
            return;
        };

        if quantity <= 0 {
            self.items.remove(index);
        } else if let Some(item) = self.items.get_mut(index) {
            item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
        self.recompute_totals();
    }

    /// Empty the cart and zero both totals.
    pub fn clear(&mut self) {
        self.items.clear();
        self.total_quantity = 0;
        self.total_amount = Decimal::ZERO;
    }

    /// The ordered line items.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Sum of all line quantities.
    #[must_use]
    pub const fn total_quantity(&self) -> u32 {
        self.total_quantity
    }

    /// Sum of `quantity x unit price` over all lines.
    #[must_use]
    pub const fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    fn recompute_totals(&mut self) {
        self.total_quantity = self.items.iter().map(|item| item.quantity).sum();
        self.total_amount = self.items.iter().map(CartItem::line_total).sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, RatingSummary};

    fn product(id: &str, price: i64, discount: Option<i64>) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            description: String::new(),
            price: Decimal::from(price),
            discount_price: discount.map(Decimal::from),
            category: Category::Electronics,
            sub_category: None,
            brand: "TestBrand".to_string(),
            images: Vec::new(),
            stock: 100,
            sku: None,
            ratings: RatingSummary::default(),
            colors: Vec::new(),
            sizes: vec!["M".to_string()],
            tags: Vec::new(),
            is_active: true,
            is_featured: false,
        }
    }

    fn assert_totals_consistent(cart: &Cart) {
        let quantity: u32 = cart.items().iter().map(|i| i.quantity).sum();
        let amount: Decimal = cart.items().iter().map(CartItem::line_total).sum();
        assert_eq!(cart.total_quantity(), quantity);
        assert_eq!(cart.total_amount(), amount);
    }

    #[test]
    fn test_add_merges_duplicate_identity() {
        let mut cart = Cart::new();
        let p = product("p1", 20, None);

        cart.add(&p, 2, "M", "Red");
        cart.add(&p, 3, "M", "Red");

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 5);
        assert_eq!(cart.total_quantity(), 5);
        assert_eq!(cart.total_amount(), Decimal::from(100));
    }

    #[test]
    fn test_different_size_or_color_makes_a_new_line() {
        let mut cart = Cart::new();
        let p = product("p1", 20, None);

        cart.add(&p, 1, "M", "Red");
        cart.add(&p, 1, "L", "Red");
        cart.add(&p, 1, "M", "Blue");

        assert_eq!(cart.items().len(), 3);
        assert_eq!(cart.total_quantity(), 3);
        assert_totals_consistent(&cart);
    }

    #[test]
    fn test_unit_price_frozen_at_insertion() {
        let mut cart = Cart::new();
        let discounted = product("p1", 100, Some(80));

        cart.add(&discounted, 1, "M", "Red");
        assert_eq!(cart.items()[0].price, Decimal::from(80));

        // A later add of the same identity merges quantity; the frozen
        // price stays even if the product's pricing changed meanwhile.
        let repriced = product("p1", 100, None);
        cart.add(&repriced, 1, "M", "Red");
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].price, Decimal::from(80));
        assert_eq!(cart.total_amount(), Decimal::from(160));
    }

    #[test]
    fn test_remove_is_idempotent_on_missing_identity() {
        let mut cart = Cart::new();
        let p = product("p1", 20, None);
        cart.add(&p, 2, "M", "Red");

        cart.remove("p1", "XL", "Green");
        cart.remove("nope", "M", "Red");

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.total_amount(), Decimal::from(40));
    }

    #[test]
    fn test_update_quantity_sets_absolute_value() {
        let mut cart = Cart::new();
        let p = product("p1", 10, None);
        cart.add(&p, 5, "M", "Red");

        cart.update_quantity("p1", "M", "Red", 2);

        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.total_amount(), Decimal::from(20));
    }

    #[test]
    fn test_update_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        let p = product("p1", 10, None);
        cart.add(&p, 5, "M", "Red");

        cart.update_quantity("p1", "M", "Red", 0);

        assert!(cart.items().is_empty());
        assert_eq!(cart.total_quantity(), 0);
        assert_eq!(cart.total_amount(), Decimal::ZERO);
    }

    #[test]
    fn test_update_quantity_missing_line_is_noop() {
        let mut cart = Cart::new();
        let p = product("p1", 10, None);
        cart.add(&p, 1, "M", "Red");

        cart.update_quantity("p2", "M", "Red", 7);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut cart = Cart::new();
        cart.add(&product("p1", 10, None), 2, "M", "Red");
        cart.add(&product("p2", 30, Some(25)), 1, "L", "Blue");

        cart.clear();

        assert!(cart.items().is_empty());
        assert_eq!(cart.total_quantity(), 0);
        assert_eq!(cart.total_amount(), Decimal::ZERO);
    }

    #[test]
    fn test_totals_invariant_across_mixed_operations() {
        let mut cart = Cart::new();
        let a = product("a", 10, None);
        let b = product("b", 30, Some(25));

        cart.add(&a, 2, "M", "Red");
        assert_totals_consistent(&cart);
        cart.add(&b, 1, "L", "Blue");
        assert_totals_consistent(&cart);
        cart.update_quantity("a", "M", "Red", 4);
        assert_totals_consistent(&cart);
        cart.remove("b", "L", "Blue");
        assert_totals_consistent(&cart);
        cart.update_quantity("a", "M", "Red", -1);
        assert_totals_consistent(&cart);
        assert!(cart.items().is_empty());
    }
}
