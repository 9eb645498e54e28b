//! # Tally Database Crate
//!
//! Read-only access to the hosted backend's PostgreSQL tables (`sales`,
//! `products`, `customers`).
//!
//! ## Architectural Principles
//!
//! - **Adapter:** This crate implements `analytics::SalesRepository` and hides
//!   every SQL detail from the rest of the application.
//! - **Schema Tolerant:** The backend owns the schema and its column types have
//!   drifted over time, so queries cast columns to `text`/`numeric` and hand raw
//!   values to `core-types` for coercion.
//! - **Asynchronous & Pooled:** All operations are asynchronous and share a `PgPool`.
//!
//! ## Public API
//!
//! - `connect`: Establishes the connection pool from `DATABASE_URL`.
//! - `DbRepository`: Fetches one account's sales, products and customers.
//! - `DbError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, connect_to};
pub use error::DbError;
pub use repository::{DbCustomer, DbProduct, DbRepository, DbSale};
