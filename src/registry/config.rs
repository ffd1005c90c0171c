//! Registry configuration

use crate::{FieldError, MAX_POLYNOMIAL_WIDTH, MAX_WIDTH, MIN_WIDTH};

/// Parameters controlling which fields a registry will build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegistryConfig {
    /// Largest width the registry accepts.
    pub max_width: u8,

    /// Run [`crate::FieldTable::verify`] on every freshly built table.
    pub verify_tables: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_width: MAX_WIDTH,
            verify_tables: false,
        }
    }
}

impl RegistryConfig {
    /// Raise or lower the width ceiling.
    ///
    /// The ceiling must lie within the polynomial table, `[2, 31]`.
    pub fn with_max_width(mut self, max_width: u8) -> Result<Self, FieldError> {
        if !(MIN_WIDTH..=MAX_POLYNOMIAL_WIDTH).contains(&max_width) {
            return Err(FieldError::InvalidConfiguration(format!(
                "max width {} outside [{}, {}]",
                max_width, MIN_WIDTH, MAX_POLYNOMIAL_WIDTH
            )));
        }
        self.max_width = max_width;
        Ok(self)
    }

    /// Toggle verification of built tables.
    pub fn with_verification(mut self, verify_tables: bool) -> Self {
        self.verify_tables = verify_tables;
        self
    }
}
