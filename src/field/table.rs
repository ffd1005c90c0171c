//! Log/antilog table construction
//!
//! The primitive element `x` (symbol 2) is multiplied into itself until the
//! cycle returns to 1, recording each power on the way. Overflow past bit
//! `width` is reduced by XOR with the field's primitive polynomial.

use bitvec::prelude::*;
use tracing::debug;

use super::polynomial::{MAX_POLYNOMIAL_WIDTH, PRIMITIVE_POLYNOMIALS};
use crate::{FieldError, Symbol, MAX_WIDTH, MIN_WIDTH};

/// One constructed field GF(2^w)
///
/// Immutable after construction. `log[0]` is never read; `antilog[size - 1]`
/// repeats `antilog[0]` because the walk runs one step past the full cycle,
/// and that extra step also leaves `log[1] == size - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawFieldTable"))]
pub struct FieldTable {
    width: u8,
    size: u32,
    pub(super) log: Vec<u32>,
    pub(super) antilog: Vec<Symbol>,
}

impl FieldTable {
    /// Build GF(2^width) under the default [`MAX_WIDTH`] ceiling.
    pub fn new(width: u8) -> Result<Self, FieldError> {
        Self::build(width, MAX_WIDTH)
    }

    /// Build GF(2^width), accepting widths up to `max_width`.
    ///
    /// `max_width` is capped at [`MAX_POLYNOMIAL_WIDTH`].
    pub fn build(width: u8, max_width: u8) -> Result<Self, FieldError> {
        check_width(width, max_width.min(MAX_POLYNOMIAL_WIDTH))?;

        let poly = PRIMITIVE_POLYNOMIALS[width as usize];
        let size: u32 = 1 << width;
        let mut log = vec![0u32; size as usize];
        let mut antilog = vec![0 as Symbol; size as usize];

        let mut b: u32 = 1;
        for exponent in 0..size {
            log[b as usize] = exponent;
            antilog[exponent as usize] = b;
            b <<= 1;
            if b & size != 0 {
                b ^= poly;
            }
        }

        debug!(width, size, poly, "built GF(2^w) log/antilog tables");

        Ok(Self {
            width,
            size,
            log,
            antilog,
        })
    }

    /// Field exponent `w`.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Number of elements, zero included (`2^w`).
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Order of the multiplicative group (`2^w - 1`).
    pub fn order(&self) -> u32 {
        self.size - 1
    }

    /// Reduction polynomial this field was built from.
    pub fn polynomial(&self) -> u32 {
        PRIMITIVE_POLYNOMIALS[self.width as usize]
    }

    /// Whether `a` is a symbol of this field.
    #[inline]
    pub fn contains(&self, a: Symbol) -> bool {
        a < self.size
    }

    /// Discrete logarithm table, indexed by element.
    pub fn log_table(&self) -> &[u32] {
        &self.log
    }

    /// Antilogarithm table, indexed by exponent.
    pub fn antilog_table(&self) -> &[Symbol] {
        &self.antilog
    }

    /// Check the table invariants
    ///
    /// - `antilog[0] == 1` and `antilog[size - 1]` repeats it
    /// - the first `size - 1` powers visit every nonzero element exactly once
    /// - `antilog[log[a]] == a` for every nonzero `a`
    pub fn verify(&self) -> Result<(), FieldError> {
        let corrupt = |reason: String| FieldError::CorruptTable {
            width: self.width,
            reason,
        };

        if check_width(self.width, MAX_POLYNOMIAL_WIDTH).is_err() || self.size != 1 << self.width {
            return Err(corrupt(format!("size {} does not match width", self.size)));
        }

        let size = self.size as usize;
        if self.log.len() != size || self.antilog.len() != size {
            return Err(corrupt(format!(
                "table lengths {}/{} do not match field size {}",
                self.log.len(),
                self.antilog.len(),
                size
            )));
        }
        if self.antilog[0] != 1 {
            return Err(corrupt(format!("antilog[0] is {}", self.antilog[0])));
        }
        if self.antilog[size - 1] != self.antilog[0] {
            return Err(corrupt("cycle does not wrap back to 1".to_string()));
        }

        let mut seen = bitvec![0; size];
        for (exponent, &element) in self.antilog[..size - 1].iter().enumerate() {
            let idx = element as usize;
            if element == 0 || idx >= size {
                return Err(corrupt(format!(
                    "antilog[{}] = {} is not a nonzero element",
                    exponent, element
                )));
            }
            if seen[idx] {
                return Err(corrupt(format!(
                    "element {} repeats at exponent {}",
                    element, exponent
                )));
            }
            seen.set(idx, true);
        }

        for a in 1..size {
            let exponent = self.log[a] as usize;
            if exponent >= size || self.antilog[exponent] as usize != a {
                return Err(corrupt(format!("antilog[log[{}]] does not round-trip", a)));
            }
        }

        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn antilog_mut(&mut self) -> &mut [Symbol] {
        &mut self.antilog
    }

    /// blake3 digest over the width and both tables.
    pub fn fingerprint(&self) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&[self.width]);
        let log_bytes: Vec<u8> = self.log.iter().flat_map(|v| v.to_le_bytes()).collect();
        hasher.update(&log_bytes);
        let antilog_bytes: Vec<u8> = self.antilog.iter().flat_map(|v| v.to_le_bytes()).collect();
        hasher.update(&antilog_bytes);
        hasher.finalize()
    }
}

/// Serialized form of a [`FieldTable`], accepted only if it matches a fresh build.
#[cfg(feature = "serde")]
#[derive(Debug, serde::Deserialize)]
struct RawFieldTable {
    width: u8,
    size: u32,
    log: Vec<u32>,
    antilog: Vec<Symbol>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFieldTable> for FieldTable {
    type Error = FieldError;

    fn try_from(raw: RawFieldTable) -> Result<Self, Self::Error> {
        let built = FieldTable::build(raw.width, MAX_POLYNOMIAL_WIDTH)?;
        if raw.size != built.size || raw.log != built.log || raw.antilog != built.antilog {
            return Err(FieldError::CorruptTable {
                width: raw.width,
                reason: "serialized tables differ from the constructed field".to_string(),
            });
        }
        Ok(built)
    }
}

/// Reject widths outside `[MIN_WIDTH, max_width]`.
pub(crate) fn check_width(width: u8, max_width: u8) -> Result<(), FieldError> {
    if width < MIN_WIDTH || width > max_width {
        return Err(FieldError::WidthOutOfRange {
            width,
            min: MIN_WIDTH,
            max: max_width,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gf4_tables() {
        let field = FieldTable::new(2).unwrap();
        assert_eq!(field.size(), 4);
        assert_eq!(field.order(), 3);
        assert_eq!(field.log_table(), &[0, 3, 1, 2]);
        assert_eq!(field.antilog_table(), &[1, 2, 3, 1]);
    }

    #[test]
    fn test_gf256_generator_powers() {
        let field = FieldTable::new(8).unwrap();
        // x^8 reduces to x^4 + x^3 + x^2 + 1
        assert_eq!(field.antilog_table()[8], 0x1D);
        assert_eq!(field.log_table()[0x1D], 8);
    }

    #[test]
    fn test_rejects_degenerate_widths() {
        for width in [0u8, 1, MAX_WIDTH + 1] {
            let err = FieldTable::new(width).unwrap_err();
            assert!(err.is_out_of_range(), "width {} accepted", width);
        }
        assert!(FieldTable::build(32, u8::MAX).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_verify_detects_corruption() {
        let mut field = FieldTable::new(4).unwrap();
        assert!(field.verify().is_ok());

        field.antilog.swap(3, 4);
        assert!(matches!(
            field.verify(),
            Err(FieldError::CorruptTable { width: 4, .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialized_form_must_match_construction() {
        let short = RawFieldTable {
            width: 2,
            size: 4,
            log: vec![0],
            antilog: vec![1],
        };
        assert!(matches!(
            FieldTable::try_from(short),
            Err(FieldError::CorruptTable { width: 2, .. })
        ));

        let wide = RawFieldTable {
            width: 40,
            size: 0,
            log: Vec::new(),
            antilog: Vec::new(),
        };
        assert!(FieldTable::try_from(wide).unwrap_err().is_out_of_range());

        let gf16 = FieldTable::new(4).unwrap();
        let exact = RawFieldTable {
            width: 4,
            size: 16,
            log: gf16.log.clone(),
            antilog: gf16.antilog.clone(),
        };
        let restored = FieldTable::try_from(exact).unwrap();
        assert_eq!(restored, gf16);
        assert_eq!(restored.multiply(2, 3).unwrap(), gf16.multiply(2, 3).unwrap());
    }

    #[test]
    fn test_fingerprint_distinguishes_widths() {
        let gf8 = FieldTable::new(3).unwrap();
        let gf16 = FieldTable::new(4).unwrap();
        assert_eq!(gf8.fingerprint(), FieldTable::new(3).unwrap().fingerprint());
        assert_ne!(gf8.fingerprint(), gf16.fingerprint());
    }
}
