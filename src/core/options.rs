//! Width thresholds for the table adjuster

use crate::utils::error::{TabfitError, TabfitResult};

/// Column width thresholds, as fractions of `\textwidth`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthOptions {
    /// Width handed out across all wide columns in proportion to their content
    /// Default: 0.90
    pub max_width: f64,

    /// Lower bound for any single wide column
    /// Default: 0.15
    pub min_width: f64,
}

impl Default for WidthOptions {
    fn default() -> Self {
        Self {
            max_width: 0.90,
            min_width: 0.15,
        }
    }
}

impl WidthOptions {
    /// Create options with explicit thresholds, unchecked
    pub fn new(max_width: f64, min_width: f64) -> Self {
        Self {
            max_width,
            min_width,
        }
    }

    /// Create options after checking both thresholds are sane
    pub fn validated(max_width: f64, min_width: f64) -> TabfitResult<Self> {
        let options = Self::new(max_width, min_width);
        options.validate()?;
        Ok(options)
    }

    /// Leave more margin around narrow tables
    pub fn compact() -> Self {
        Self {
            max_width: 0.80,
            min_width: 0.10,
        }
    }

    /// Use the full text width and wider minimum columns
    pub fn spacious() -> Self {
        Self {
            max_width: 1.0,
            min_width: 0.20,
        }
    }

    /// Check that both thresholds are finite fractions in `(0, 1]` and ordered
    pub fn validate(&self) -> TabfitResult<()> {
        for (name, value) in [("max_width", self.max_width), ("min_width", self.min_width)] {
            if !value.is_finite() || value <= 0.0 || value > 1.0 {
                return Err(TabfitError::InvalidThreshold {
                    name,
                    value,
                    reason: "must be a fraction in (0, 1]",
                });
            }
        }
        if self.min_width > self.max_width {
            return Err(TabfitError::InvalidThreshold {
                name: "min_width",
                value: self.min_width,
                reason: "must not exceed max_width",
            });
        }
        Ok(())
    }
}
