//! Primitive polynomials over GF(2)
//!
//! Entry `w` is the bit pattern of a primitive polynomial of degree `w`,
//! including the `x^w` term. Entry 0 is a sentinel and entry 1 is degenerate;
//! neither is used to build a field.

/// Highest degree covered by [`PRIMITIVE_POLYNOMIALS`].
pub const MAX_POLYNOMIAL_WIDTH: u8 = 31;

/// Reduction polynomials indexed by field width
pub(crate) const PRIMITIVE_POLYNOMIALS: [u32; 32] = [
    0x0,
    0x1,
    0x7,          // x^2 + x + 1
    0xB,          // x^3 + x + 1
    0x13,         // x^4 + x + 1
    0x25,
    0x43,
    0x89,
    0x11D,        // x^8 + x^4 + x^3 + x^2 + 1
    0x211,
    0x409,
    0x805,
    0x1053,
    0x201B,
    0x4443,
    0x8003,
    0x1100B,      // x^16 + x^12 + x^3 + x + 1
    0x20009,
    0x40081,
    0x80027,
    0x100009,
    0x200005,
    0x400003,
    0x800021,
    0x1000087,
    0x2000009,
    0x4000047,
    0x8000027,
    0x10000009,
    0x20000005,
    0x40800007,
    0x80000009,
];

/// Look up the primitive polynomial of degree `width`.
///
/// Returns `None` for the sentinel entry and for widths past the table.
pub fn primitive_polynomial(width: u8) -> Option<u32> {
    if width == 0 || width > MAX_POLYNOMIAL_WIDTH {
        return None;
    }
    Some(PRIMITIVE_POLYNOMIALS[width as usize])
}
