//! Layout configuration.

use crate::errors::ConfigError;
use crate::types::Dp;

/// Span budget used when none is configured.
pub const DEFAULT_TOTAL_SPANS: u32 = 12;

/// How a span count is converted into a pixel width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GutterMode {
    /// `container / total` per span, gutters not subtracted
    Simple,
    /// Gutters reserved around and between every span unit
    #[default]
    GutterAware,
}

/// Options for one layout pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Available width in pixels
    pub container_width: i32,
    /// Span budget per row
    pub total_spans: u32,
    /// Space around and between items in a row
    pub gutter_space: Dp,
    /// Space between rows
    pub inter_row_spacing: Dp,
    /// Give every item in a row the height of the row's tallest item
    pub stretch_to_fill_row: bool,
    /// Width formula
    pub gutter_mode: GutterMode,
    /// Pixels per dp
    pub density: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            container_width: 0,
            total_spans: DEFAULT_TOTAL_SPANS,
            gutter_space: Dp::ZERO,
            inter_row_spacing: Dp::ZERO,
            stretch_to_fill_row: false,
            gutter_mode: GutterMode::default(),
            density: 1.0,
        }
    }
}

impl LayoutConfig {
    /// Create a default configuration for the given container width.
    pub fn new(container_width: i32) -> Self {
        Self {
            container_width,
            ..Default::default()
        }
    }

    pub fn with_container_width(mut self, container_width: i32) -> Self {
        self.container_width = container_width;
        self
    }

    pub fn with_total_spans(mut self, total_spans: u32) -> Self {
        self.total_spans = total_spans;
        self
    }

    pub fn with_gutter_space(mut self, gutter_space: impl Into<Dp>) -> Self {
        self.gutter_space = gutter_space.into();
        self
    }

    pub fn with_inter_row_spacing(mut self, spacing: impl Into<Dp>) -> Self {
        self.inter_row_spacing = spacing.into();
        self
    }

    pub fn with_stretch_to_fill_row(mut self, stretch: bool) -> Self {
        self.stretch_to_fill_row = stretch;
        self
    }

    pub fn with_gutter_mode(mut self, mode: GutterMode) -> Self {
        self.gutter_mode = mode;
        self
    }

    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    /// Gutter in whole pixels.
    pub fn gutter_px(&self) -> i32 {
        self.gutter_space.to_px(self.density)
    }

    /// Inter-row spacing in whole pixels.
    pub fn inter_row_spacing_px(&self) -> i32 {
        self.inter_row_spacing.to_px(self.density)
    }

    /// Check the configuration before a layout pass.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_spans < 1 {
            return Err(ConfigError::invalid("total_spans", "must be at least 1"));
        }
        if !self.gutter_space.is_valid_spacing() {
            return Err(ConfigError::invalid(
                "gutter_space",
                format!("must be a non-negative length, found {}", self.gutter_space.0),
            ));
        }
        if !self.inter_row_spacing.is_valid_spacing() {
            return Err(ConfigError::invalid(
                "inter_row_spacing",
                format!(
                    "must be a non-negative length, found {}",
                    self.inter_row_spacing.0
                ),
            ));
        }
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(ConfigError::invalid(
                "density",
                format!("must be positive, found {}", self.density),
            ));
        }
        if self.container_width < 0 {
            return Err(ConfigError::invalid(
                "container_width",
                format!("must not be negative, found {}", self.container_width),
            ));
        }
        Ok(())
    }

    /// Load and validate a configuration from JSON. Missing fields take
    /// their default values.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: LayoutConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.total_spans, 12);
        assert_eq!(config.gutter_px(), 0);
        assert_eq!(config.inter_row_spacing_px(), 0);
        assert_eq!(config.gutter_mode, GutterMode::GutterAware);
        assert!(!config.stretch_to_fill_row);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_px_conversion_uses_density() {
        let config = LayoutConfig::new(400)
            .with_gutter_space(8.0)
            .with_inter_row_spacing(4.0)
            .with_density(2.5);
        assert_eq!(config.gutter_px(), 20);
        assert_eq!(config.inter_row_spacing_px(), 10);
    }

    #[test]
    fn test_zero_spans_rejected() {
        let err = LayoutConfig::new(100).with_total_spans(0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfig { field: "total_spans", .. }));
    }

    #[test]
    fn test_negative_spacing_rejected() {
        let err = LayoutConfig::new(100).with_gutter_space(-4.0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfig { field: "gutter_space", .. }));

        let err = LayoutConfig::new(100)
            .with_inter_row_spacing(-0.5)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfig { field: "inter_row_spacing", .. }));
    }

    #[test]
    fn test_bad_density_and_width_rejected() {
        assert!(LayoutConfig::new(100).with_density(0.0).validate().is_err());
        assert!(LayoutConfig::new(100).with_density(f32::NAN).validate().is_err());
        assert!(LayoutConfig::new(-1).validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_fills_defaults() {
        let config = LayoutConfig::from_json(
            r#"{ "container_width": 360, "gutter_space": 8.0, "gutter_mode": "simple" }"#,
        )
        .unwrap();
        assert_eq!(config.container_width, 360);
        assert_eq!(config.total_spans, 12);
        assert_eq!(config.gutter_px(), 8);
        assert_eq!(config.gutter_mode, GutterMode::Simple);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_validates() {
        let err = LayoutConfig::from_json(r#"{ "total_spans": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfig { .. }));

        let err = LayoutConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
