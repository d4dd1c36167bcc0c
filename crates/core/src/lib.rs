//! Songbook domain core.
//!
//! Pure logic with no database or network dependencies: error types, the
//! closed song filter, listing page normalization, verse pagination and
//! field validation.

pub mod error;
pub mod filter;
pub mod pagination;
pub mod types;
pub mod validation;
pub mod verses;
