//! Rxshops Core - Shared domain types and client-side engines.
//!
//! This crate provides the pieces shared across all rxshops components:
//! - `server` - Admin/API binary backed by blob storage
//! - Browser-facing frontends (which consume these engines via bindings)
//!
//! # Architecture
//!
//! The core crate contains only types and pure state machines - no I/O, no
//! HTTP clients, no async. Every operation here is a synchronous, total
//! function over its inputs: the engines never return errors, and mutations
//! that miss their target are deliberate no-ops.
//!
//! # Modules
//!
//! - [`catalog`] - Product types and the filter/sort view engine
//! - [`cart`] - Cart line items and the aggregation engine
//! - [`seed`] - Seeded mock catalog used by demos and tests

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod seed;

pub use cart::{Cart, CartItem};
pub use catalog::{
    Catalog, Category, ColorVariant, FilterUpdate, Product, ProductFilters, ProductImage,
    RatingSummary, SortKey,
};
