//! parley-core
//!
//! Shared building blocks for the matching crates: the error type, the
//! Figment-backed configuration, corpus row types, threshold constants, the
//! seam traits, and the CSV corpus stores.

pub mod config;
pub mod corpus;
pub mod error;
pub mod thresholds;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
