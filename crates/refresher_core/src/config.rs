//! Footer configuration
//!
//! Footers can be configured in code or loaded from a TOML table:
//!
//! ```toml
//! height = 44.0
//! hidden = false
//! correction_duration_ms = 100
//!
//! [base_inset]
//! top = 64.0
//! bottom = 34.0
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{RefresherError, Result};
use crate::geometry::EdgeInsets;

/// Configuration for a footer refresh control
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct FooterConfig {
    /// Height of the footer strip below the content
    #[serde(default = "default_height")]
    pub height: f32,
    /// Start hidden (claims no inset, never triggers)
    #[serde(default)]
    pub hidden: bool,
    /// Neutral container inset, excluding the footer's own contribution
    #[serde(default)]
    pub base_inset: EdgeInsets,
    /// Snapshot the container's inset as the base inset when attaching
    #[serde(default = "default_true")]
    pub capture_inset_on_attach: bool,
    /// Duration of the offset correction when a stop lands above the top edge
    #[serde(default = "default_correction_duration_ms")]
    pub correction_duration_ms: u32,
}

fn default_height() -> f32 {
    50.0
}

fn default_true() -> bool {
    true
}

fn default_correction_duration_ms() -> u32 {
    100
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            height: default_height(),
            hidden: false,
            base_inset: EdgeInsets::ZERO,
            capture_inset_on_attach: true,
            correction_duration_ms: default_correction_duration_ms(),
        }
    }
}

impl FooterConfig {
    /// Create config with a custom footer height
    pub fn with_height(height: f32) -> Self {
        Self {
            height,
            ..Default::default()
        }
    }

    /// Create config for a footer that starts hidden
    pub fn hidden() -> Self {
        Self {
            hidden: true,
            ..Default::default()
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: FooterConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the geometry can describe a footer
    pub fn validate(&self) -> Result<()> {
        if !self.height.is_finite() || self.height < 0.0 {
            return Err(RefresherError::InvalidGeometry(format!(
                "footer height must be finite and non-negative, got {}",
                self.height
            )));
        }
        let inset = self.base_inset;
        if ![inset.top, inset.left, inset.bottom, inset.right]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(RefresherError::InvalidGeometry(
                "base inset must be finite".to_string(),
            ));
        }
        if self.correction_duration_ms == 0 {
            return Err(RefresherError::Config(
                "correction_duration_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
