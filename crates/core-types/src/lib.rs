//! # Tally Core Types
//!
//! The records the hosted backend hands us (sales, products, customers) and the
//! rules for turning their loosely-typed fields into numbers and dates.
//!
//! Nothing in this crate performs I/O. Coercion happens exactly once, when a raw
//! record is normalized; downstream crates only ever see clean values.

pub mod coerce;
pub mod enums;
pub mod error;
pub mod structs;
pub mod value;

// Re-export the core types to provide a clean public API.
pub use coerce::{parse_amount, parse_quantity, parse_sale_date};
pub use enums::{DateLabelFormat, Gender};
pub use error::CoreError;
pub use structs::{Customer, NormalizedSale, Product, Sale, UNKNOWN_LABEL};
pub use value::RawValue;
