//! Product catalog types and the filter/sort view engine.
//!
//! The [`Catalog`] keeps an immutable base list of products and derives a
//! `filtered_items` view from two pieces of state: the active
//! [`ProductFilters`] and the current [`SortKey`]. Every mutation ends by
//! recomputing the view in full; there is no incremental patching.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed set of top-level product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Electronics,
    Clothing,
    Sports,
    Books,
    HomeGarden,
    Beauty,
}

impl Category {
    /// All categories, in the order shown to shoppers.
    pub const ALL: [Self; 6] = [
        Self::Electronics,
        Self::Clothing,
        Self::Sports,
        Self::Books,
        Self::HomeGarden,
        Self::Beauty,
    ];

    /// The category's wire/display slug.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Electronics => "electronics",
            Self::Clothing => "clothing",
            Self::Sports => "sports",
            Self::Books => "books",
            Self::HomeGarden => "home-garden",
            Self::Beauty => "beauty",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub url: String,
    pub public_id: String,
}

/// Aggregated product rating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct RatingSummary {
    /// Average rating in `[0, 5]`.
    pub average: f32,
    /// Number of ratings contributing to the average.
    pub count: u32,
}

/// A purchasable color variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorVariant {
    pub name: String,
    pub hex_code: String,
}

/// A catalog product.
///
/// Products are loaded once into the base catalog and never mutated by the
/// view engine; the cart holds clones for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    /// Base price. Non-negative.
    pub price: Decimal,
    /// Discounted price, `<=` the base price when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<Decimal>,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    pub brand: String,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default)]
    pub ratings: RatingSummary,
    #[serde(default)]
    pub colors: Vec<ColorVariant>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub is_active: bool,
    pub is_featured: bool,
}

impl Product {
    /// The price a shopper actually pays: the discount price when one is
    /// set, otherwise the base price.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        self.discount_price.unwrap_or(self.price)
    }
}

/// Sort order for the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Name ascending (case-insensitive).
    #[default]
    #[serde(rename = "name")]
    Name,
    /// Effective price, low to high.
    #[serde(rename = "price-low")]
    PriceLowToHigh,
    /// Effective price, high to low.
    #[serde(rename = "price-high")]
    PriceHighToLow,
    /// Average rating, high to low.
    #[serde(rename = "rating")]
    Rating,
}

/// Active catalog filters.
///
/// Each field has an "unset" value at which its predicate is skipped:
/// empty category, the full price range, zero rating, empty search term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilters {
    /// Category slug; empty string means no category filter.
    pub category: String,
    /// Inclusive `[min, max]` range over the effective price.
    pub price_range: (Decimal, Decimal),
    /// Minimum average rating; `0` means no rating filter.
    pub rating: f32,
    /// Case-insensitive substring match against name, description, brand,
    /// and tags; empty string means no search filter.
    pub search_term: String,
}

impl ProductFilters {
    /// The full (unset) price range.
    pub const FULL_PRICE_RANGE: (Decimal, Decimal) = (Decimal::ZERO, Decimal::from_parts(1000, 0, 0, false, 0));
}

impl Default for ProductFilters {
    fn default() -> Self {
        Self {
            category: String::new(),
            price_range: Self::FULL_PRICE_RANGE,
            rating: 0.0,
            search_term: String::new(),
        }
    }
}

/// Partial filter update; fields left `None` keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterUpdate {
    pub category: Option<String>,
    pub price_range: Option<(Decimal, Decimal)>,
    pub rating: Option<f32>,
    pub search_term: Option<String>,
}

/// Apply the conjunction of all active filter predicates.
///
/// Predicates run in a fixed order (category, price range, rating, text
/// search) and each is skipped at its unset value. The relative order of
/// surviving products is preserved.
#[must_use]
pub fn apply_filters(items: &[Product], filters: &ProductFilters) -> Vec<Product> {
    items
        .iter()
        .filter(|product| {
            if !filters.category.is_empty() && product.category.as_str() != filters.category {
                return false;
            }

            if filters.price_range != ProductFilters::FULL_PRICE_RANGE {
                let price = product.effective_price();
                if price < filters.price_range.0 || price > filters.price_range.1 {
                    return false;
                }
            }

            if filters.rating > 0.0 && product.ratings.average < filters.rating {
                return false;
            }

            if !filters.search_term.is_empty() {
                let term = filters.search_term.to_lowercase();
                let matches = product.name.to_lowercase().contains(&term)
                    || product.description.to_lowercase().contains(&term)
                    || product.brand.to_lowercase().contains(&term)
                    || product.tags.iter().any(|tag| tag.to_lowercase().contains(&term));
                if !matches {
                    return false;
                }
            }

            true
        })
        .cloned()
        .collect()
}

/// Sort products in place by the given key.
///
/// Uses a stable sort, so equal-keyed products keep their prior relative
/// order across repeated re-sorts.
pub fn apply_sort(items: &mut [Product], sort_by: SortKey) {
    match sort_by {
        SortKey::Name => {
            items.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
        SortKey::PriceLowToHigh => {
            items.sort_by(|a, b| a.effective_price().cmp(&b.effective_price()));
        }
        SortKey::PriceHighToLow => {
            items.sort_by(|a, b| b.effective_price().cmp(&a.effective_price()));
        }
        SortKey::Rating => {
            items.sort_by(|a, b| b.ratings.average.total_cmp(&a.ratings.average));
        }
    }
}

/// The catalog view engine.
///
/// Holds the immutable base catalog plus the filter and sort state, and
/// keeps `filtered_items` consistent with them after every mutation.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Product>,
    filtered: Vec<Product>,
    filters: ProductFilters,
    sort_by: SortKey,
}

impl Catalog {
    /// Create a catalog over the given base products.
    #[must_use]
    pub fn new(items: Vec<Product>) -> Self {
        let mut catalog = Self {
            items,
            filtered: Vec::new(),
            filters: ProductFilters::default(),
            sort_by: SortKey::default(),
        };
        catalog.recompute();
        catalog
    }

    /// Replace the base catalog and recompute the view.
    pub fn set_products(&mut self, items: Vec<Product>) {
        self.items = items;
        self.recompute();
    }

    /// Merge a partial filter update into the current filters and
    /// recompute the view.
    pub fn set_filters(&mut self, update: FilterUpdate) {
        if let Some(category) = update.category {
            self.filters.category = category;
        }
        if let Some(price_range) = update.price_range {
            self.filters.price_range = price_range;
        }
        if let Some(rating) = update.rating {
            self.filters.rating = rating;
        }
        if let Some(search_term) = update.search_term {
            self.filters.search_term = search_term;
        }
        self.recompute();
    }

    /// Change the sort key and re-sort the current view.
    ///
    /// Only the ordering changes; the filtered set itself is untouched.
    pub fn set_sort_by(&mut self, sort_by: SortKey) {
        self.sort_by = sort_by;
        apply_sort(&mut self.filtered, self.sort_by);
    }

    /// Reset all filters to their defaults; the view becomes the full base
    /// catalog ordered by the current sort key.
    pub fn clear_filters(&mut self) {
        self.filters = ProductFilters::default();
        self.recompute();
    }

    /// The derived, filtered, sorted view.
    #[must_use]
    pub fn filtered_items(&self) -> &[Product] {
        &self.filtered
    }

    /// The immutable base catalog.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// The active filters.
    #[must_use]
    pub const fn filters(&self) -> &ProductFilters {
        &self.filters
    }

    /// The active sort key.
    #[must_use]
    pub const fn sort_by(&self) -> SortKey {
        self.sort_by
    }

    /// Rebuild the view from scratch: filter the base catalog, then sort.
    fn recompute(&mut self) {
        self.filtered = apply_filters(&self.items, &self.filters);
        apply_sort(&mut self.filtered, self.sort_by);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, price: i64, category: Category, rating: f32) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("{name} description"),
            price: Decimal::from(price),
            discount_price: None,
            category,
            sub_category: None,
            brand: "TestBrand".to_string(),
            images: Vec::new(),
            stock: 10,
            sku: None,
            ratings: RatingSummary {
                average: rating,
                count: 100,
            },
            colors: Vec::new(),
            sizes: vec!["One Size".to_string()],
            tags: vec!["test".to_string()],
            is_active: true,
            is_featured: false,
        }
    }

    fn sample_catalog() -> Vec<Product> {
        vec![
            product("1", "Headphones", 10, Category::Electronics, 4.8),
            product("2", "T-Shirt", 50, Category::Clothing, 4.5),
            product("3", "Laptop", 200, Category::Electronics, 4.9),
        ]
    }

    #[test]
    fn test_empty_catalog_yields_empty_view() {
        let catalog = Catalog::new(Vec::new());
        assert!(catalog.filtered_items().is_empty());
    }

    #[test]
    fn test_price_range_excludes_out_of_range_items() {
        let mut catalog = Catalog::new(sample_catalog());
        catalog.set_filters(FilterUpdate {
            price_range: Some((Decimal::ZERO, Decimal::from(100))),
            ..FilterUpdate::default()
        });

        let ids: Vec<&str> = catalog.filtered_items().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn test_filter_conjunction_requires_all_predicates() {
        let mut catalog = Catalog::new(sample_catalog());
        catalog.set_filters(FilterUpdate {
            category: Some("electronics".to_string()),
            price_range: Some((Decimal::ZERO, Decimal::from(100))),
            rating: Some(4.6),
            ..FilterUpdate::default()
        });

        // Only "Headphones" is electronics, under 100, and rated >= 4.6.
        let ids: Vec<&str> = catalog.filtered_items().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1"]);
    }

    #[test]
    fn test_search_matches_tags_case_insensitively() {
        let mut items = sample_catalog();
        items[1].tags.push("Organic-Cotton".to_string());

        let mut catalog = Catalog::new(items);
        catalog.set_filters(FilterUpdate {
            search_term: Some("organic".to_string()),
            ..FilterUpdate::default()
        });

        assert_eq!(catalog.filtered_items().len(), 1);
        assert_eq!(catalog.filtered_items()[0].id, "2");
    }

    #[test]
    fn test_effective_price_drives_price_sort() {
        let mut items = sample_catalog();
        // Laptop discounted below everything else.
        items[2].discount_price = Some(Decimal::from(5));

        let mut catalog = Catalog::new(items);
        catalog.set_sort_by(SortKey::PriceLowToHigh);

        let ids: Vec<&str> = catalog.filtered_items().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["3", "1", "2"]);
    }

    #[test]
    fn test_name_sort_is_stable_for_equal_names() {
        let items = vec![
            product("b1", "B", 10, Category::Books, 4.0),
            product("a1", "A", 10, Category::Books, 4.0),
            product("b2", "B", 10, Category::Books, 4.0),
        ];

        let catalog = Catalog::new(items);
        let ids: Vec<&str> = catalog.filtered_items().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a1", "b1", "b2"]);
    }

    #[test]
    fn test_rating_threshold_above_all_yields_empty_view() {
        let mut catalog = Catalog::new(sample_catalog());
        catalog.set_filters(FilterUpdate {
            rating: Some(5.0),
            ..FilterUpdate::default()
        });
        assert!(catalog.filtered_items().is_empty());
    }

    #[test]
    fn test_set_filters_preserves_unmentioned_fields() {
        let mut catalog = Catalog::new(sample_catalog());
        catalog.set_filters(FilterUpdate {
            category: Some("electronics".to_string()),
            ..FilterUpdate::default()
        });
        catalog.set_filters(FilterUpdate {
            rating: Some(4.85),
            ..FilterUpdate::default()
        });

        // The category filter from the first update still applies.
        assert_eq!(catalog.filters().category, "electronics");
        let ids: Vec<&str> = catalog.filtered_items().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["3"]);
    }

    #[test]
    fn test_clear_filters_restores_full_catalog_in_sort_order() {
        let mut catalog = Catalog::new(sample_catalog());
        catalog.set_sort_by(SortKey::PriceHighToLow);
        catalog.set_filters(FilterUpdate {
            category: Some("electronics".to_string()),
            ..FilterUpdate::default()
        });
        assert_eq!(catalog.filtered_items().len(), 2);

        catalog.clear_filters();

        assert_eq!(*catalog.filters(), ProductFilters::default());
        let ids: Vec<&str> = catalog.filtered_items().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["3", "2", "1"]);
    }

    #[test]
    fn test_inverted_price_range_yields_empty_view() {
        // min > max is a caller error; it is not validated and simply
        // matches nothing.
        let mut catalog = Catalog::new(sample_catalog());
        catalog.set_filters(FilterUpdate {
            price_range: Some((Decimal::from(500), Decimal::from(100))),
            ..FilterUpdate::default()
        });
        assert!(catalog.filtered_items().is_empty());
    }

    #[test]
    fn test_sort_key_wire_names() {
        assert_eq!(serde_json::to_string(&SortKey::Name).unwrap(), "\"name\"");
        assert_eq!(
            serde_json::to_string(&SortKey::PriceLowToHigh).unwrap(),
            "\"price-low\""
        );
        let key: SortKey = serde_json::from_str("\"rating\"").unwrap();
        assert_eq!(key, SortKey::Rating);
    }
}
