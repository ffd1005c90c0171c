//! Field engine for GF(2^w)
//!
//! - Compiled-in primitive polynomials
//! - Log/antilog table construction
//! - Table-driven multiply, divide, exponentiate

mod arithmetic;
mod polynomial;
mod table;

pub use polynomial::{primitive_polynomial, MAX_POLYNOMIAL_WIDTH};
pub use table::FieldTable;

pub(crate) use table::check_width;
