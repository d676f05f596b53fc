//! HTTP layer for the pâtisserie storefront.
//!
//! Exposes the booking engine over an axum router. All store-mutating
//! handlers run inside exactly one [`patisserie_store::JsonStore::with_transaction`]
//! call; read-only queries run against the last-committed snapshot.

pub mod auth;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
