//! Multiplication, division and exponentiation via the log tables
//!
//! Zero has no logarithm, so every operation handles zero operands before
//! touching the tables.

use super::FieldTable;
use crate::{FieldError, Symbol};

impl FieldTable {
    #[inline]
    fn check_element(&self, a: Symbol) -> Result<(), FieldError> {
        if !self.contains(a) {
            return Err(FieldError::ElementOutOfRange {
                element: a,
                size: self.size(),
            });
        }
        Ok(())
    }

    /// Multiply two symbols.
    ///
    /// A zero operand yields 0 before any range check.
    pub fn multiply(&self, a: Symbol, b: Symbol) -> Result<Symbol, FieldError> {
        if a == 0 || b == 0 {
            return Ok(0);
        }
        self.check_element(a)?;
        self.check_element(b)?;

        let order = self.order();
        let mut sum_log = self.log[a as usize] + self.log[b as usize];
        if sum_log >= order {
            sum_log -= order;
        }
        Ok(self.antilog[sum_log as usize])
    }

    /// Divide `a` by `b`.
    ///
    /// Checks run in order: zero divisor, zero dividend, then range.
    pub fn divide(&self, a: Symbol, b: Symbol) -> Result<Symbol, FieldError> {
        if b == 0 {
            return Err(FieldError::DivideByZero);
        }
        if a == 0 {
            return Ok(0);
        }
        self.check_element(a)?;
        self.check_element(b)?;

        let mut diff_log = i64::from(self.log[a as usize]) - i64::from(self.log[b as usize]);
        if diff_log < 0 {
            diff_log += i64::from(self.order());
        }
        Ok(self.antilog[diff_log as usize])
    }

    /// Raise `a` to the power `e` by repeated multiplication.
    ///
    /// `e == 0` gives 1 and `e == 1` gives `a` without validating `a`; larger
    /// exponents go through [`FieldTable::multiply`] and fail on an
    /// out-of-range base.
    pub fn exponentiate(&self, a: Symbol, e: u32) -> Result<Symbol, FieldError> {
        match e {
            0 => Ok(1),
            1 => Ok(a),
            _ => {
                let mut result = a;
                for _ in 1..e {
                    result = self.multiply(result, a)?;
                }
                Ok(result)
            }
        }
    }
}
