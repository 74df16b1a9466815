//! Domain validation errors for core domain types.
//!
//! These errors are returned by `try_new` constructors that validate inputs.
//!
//! # Examples
//!
//! ```
//! use cartcompare::domain::error::DomainError;
//! use cartcompare::domain::ItemDetails;
//! use rust_decimal_macros::dec;
//!
//! let result = ItemDetails::try_new("p1", "", dec!(12.95), "");
//!
//! assert!(matches!(result, Err(DomainError::MissingField { field: "name" })));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required product field was empty or could not be resolved.
    #[error("missing product field: {field}")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// Unit prices cannot be negative.
    #[error("unit price must not be negative, got {price}")]
    NegativePrice {
        /// The invalid price that was provided.
        price: Decimal,
    },

    /// Quantities added to the cart must be at least one.
    #[error("quantity must be at least 1")]
    ZeroQuantity,
}
