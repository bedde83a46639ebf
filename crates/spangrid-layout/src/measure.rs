//! Span-to-pixel conversion and item measurement.

use spangrid_core::config::{GutterMode, LayoutConfig};
use spangrid_core::errors::LayoutError;
use spangrid_core::types::{Constraints, Size};

/// An element the grid can measure.
///
/// Implementations must be synchronous and should return promptly; the
/// engine calls them during the layout pass.
pub trait Measurable {
    /// Measure under the given constraints.
    fn measure(&self, constraints: Constraints) -> Result<Size, LayoutError>;

    /// Height the element wants when laid out at exactly `width`.
    fn max_intrinsic_height(&self, width: i32) -> Result<i32, LayoutError> {
        Ok(self.measure(Constraints::fixed_width(width))?.height)
    }
}

impl<T: Measurable + ?Sized> Measurable for &T {
    fn measure(&self, constraints: Constraints) -> Result<Size, LayoutError> {
        (**self).measure(constraints)
    }

    fn max_intrinsic_height(&self, width: i32) -> Result<i32, LayoutError> {
        (**self).max_intrinsic_height(width)
    }
}

impl<T: Measurable + ?Sized> Measurable for Box<T> {
    fn measure(&self, constraints: Constraints) -> Result<Size, LayoutError> {
        (**self).measure(constraints)
    }

    fn max_intrinsic_height(&self, width: i32) -> Result<i32, LayoutError> {
        (**self).max_intrinsic_height(width)
    }
}

/// Pixel width of an item spanning `span` units.
///
/// Both formulas use floor division; the rounding error that accumulates
/// across a row is left in place. A result below zero (gutters wider than
/// the container) is clamped to zero.
pub fn pixel_width_for_span(span: u32, config: &LayoutConfig) -> i32 {
    let total = i64::from(config.total_spans.max(1));
    let span = i64::from(span);
    let container = i64::from(config.container_width);

    let width = match config.gutter_mode {
        GutterMode::Simple => container.div_euclid(total) * span,
        GutterMode::GutterAware => {
            let gutter = i64::from(config.gutter_px());
            let available = container - gutter * (total + 1);
            available.div_euclid(total) * span + gutter * (span - 1)
        }
    };

    if width < 0 {
        tracing::warn!(
            span,
            container_width = config.container_width,
            gutter = config.gutter_px(),
            "gutters exceed container width; clamping item width to zero"
        );
        return 0;
    }
    width.min(i64::from(i32::MAX)) as i32
}

/// Measures items at the widths their spans dictate.
#[derive(Debug, Clone, Copy)]
pub struct Measurer<'a> {
    config: &'a LayoutConfig,
    height_bounds: (i32, i32),
}

impl<'a> Measurer<'a> {
    /// Create a measurer. `height_bounds` are the container's incoming
    /// `(min, max)` heights, passed through to items outside stretch mode.
    pub fn new(config: &'a LayoutConfig, height_bounds: (i32, i32)) -> Self {
        Self {
            config,
            height_bounds,
        }
    }

    pub fn width_for(&self, span: u32) -> i32 {
        pixel_width_for_span(span, self.config)
    }

    /// Constraints an item of `span` is measured under. A `row_height`
    /// fixes the height as well.
    pub fn constraints_for(&self, span: u32, row_height: Option<i32>) -> Constraints {
        let (min_height, max_height) = self.height_bounds;
        let constraints = Constraints::new(0, 0, min_height, max_height).with_fixed_width(self.width_for(span));
        match row_height {
            Some(height) => constraints.with_fixed_height(height),
            None => constraints,
        }
    }

    /// Measure an item, coercing its reported size into its constraints.
    pub fn measure<M: Measurable + ?Sized>(
        &self,
        item: &M,
        span: u32,
        row_height: Option<i32>,
    ) -> Result<Size, LayoutError> {
        let constraints = self.constraints_for(span, row_height);
        let size = item.measure(constraints)?;
        Ok(constraints.constrain(size))
    }

    /// Intrinsic height of an item at the width of `span`.
    pub fn intrinsic_height<M: Measurable + ?Sized>(
        &self,
        item: &M,
        span: u32,
    ) -> Result<i32, LayoutError> {
        item.max_intrinsic_height(self.width_for(span))
    }
}
