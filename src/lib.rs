//! # Log/antilog arithmetic over GF(2^w)
//!
//! This library builds discrete logarithm tables for the binary extension
//! fields GF(2^w) and uses them to multiply, divide and exponentiate symbols
//! in O(1) after an O(2^w) setup.
//!
//! ## Layout
//!
//! 1. **Primitive polynomials**: compiled-in reduction polynomials for w = 1..31
//! 2. **Field tables**: log/antilog arrays walked from the primitive element `x`
//! 3. **Registry**: lazily built, shared tables keyed by width
//!
//! ## Usage Example
//!
//! ```
//! use gf_tables::get_field;
//!
//! let gf4 = get_field(2)?;
//! assert_eq!(gf4.multiply(2, 2)?, 3);
//! assert_eq!(gf4.divide(1, 2)?, 3);
//! assert_eq!(gf4.exponentiate(2, 3)?, 1);
//! # Ok::<(), gf_tables::FieldError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod field;      // Polynomials, table construction, arithmetic
pub mod registry;   // Shared per-width table cache

pub use field::{primitive_polynomial, FieldTable, MAX_POLYNOMIAL_WIDTH};
pub use registry::{FieldRegistry, MemoryStore, RegistryConfig, TableStore};

use std::sync::Arc;
use thiserror::Error;

/// A field element, held in the low `width` bits.
pub type Symbol = u32;

/// Smallest supported field width; GF(2) and below are rejected.
pub const MIN_WIDTH: u8 = 2;

/// Default ceiling on field width.
///
/// The polynomial table reaches [`MAX_POLYNOMIAL_WIDTH`]; raise the ceiling
/// through [`RegistryConfig::with_max_width`].
pub const MAX_WIDTH: u8 = 24;

/// Errors raised by table construction and field arithmetic
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Requested width lies outside the supported range
    #[error("field width {width} out of range [{min}, {max}]")]
    WidthOutOfRange {
        /// Width that was requested
        width: u8,
        /// Smallest accepted width
        min: u8,
        /// Largest accepted width
        max: u8,
    },

    /// Operand is not a symbol of the field
    #[error("element {element} out of range for field of size {size}")]
    ElementOutOfRange {
        /// Offending operand
        element: Symbol,
        /// Number of elements in the field
        size: u32,
    },

    /// Divisor was zero
    #[error("division by zero")]
    DivideByZero,

    /// Registry configuration rejected
    #[error("invalid registry configuration: {0}")]
    InvalidConfiguration(String),

    /// A built table violates the log/antilog invariants
    #[error("corrupt table for GF(2^{width}): {reason}")]
    CorruptTable {
        /// Width of the offending table
        width: u8,
        /// First invariant found broken
        reason: String,
    },
}

impl FieldError {
    /// True for both width and element range failures.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            FieldError::WidthOutOfRange { .. } | FieldError::ElementOutOfRange { .. }
        )
    }
}

/// Fetch the table for `width` from the process-wide registry.
///
/// The registry is created with [`RegistryConfig::default`] on first use.
pub fn get_field(width: u8) -> Result<Arc<FieldTable>, FieldError> {
    FieldRegistry::global().get_field(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_grouping() {
        let width = FieldError::WidthOutOfRange { width: 1, min: 2, max: 24 };
        let element = FieldError::ElementOutOfRange { element: 4, size: 4 };
        assert!(width.is_out_of_range());
        assert!(element.is_out_of_range());
        assert!(!FieldError::DivideByZero.is_out_of_range());
    }

    #[test]
    fn test_global_field_is_shared() {
        let first = get_field(3).unwrap();
        let second = get_field(3).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(get_field(MAX_WIDTH + 1).unwrap_err().is_out_of_range());
    }
}
