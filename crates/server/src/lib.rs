//! Rxshops Server - Admin/API binary backed by blob storage.
//!
//! # Architecture
//!
//! - Axum web framework serving a JSON admin API
//! - One JSON document per logical collection (`users`, `orders`,
//!   `products`) in a remote object store, with a transparent local
//!   filesystem fallback when the store is unconfigured or unreachable
//! - Record operations load a collection into memory once, mutate the
//!   cached copy, and write the whole document back
//!
//! # Concurrency
//!
//! In-process record operations are serialized behind a mutex inside
//! [`store::DataStore`]. The blob layer itself still overwrites whole
//! documents, so two *processes* sharing one container race last-writer-wins.
//! Single-instance deployment is assumed.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod storage;
pub mod store;

pub use config::ServerConfig;
pub use state::AppState;
