//! A span grid that can be measured like any other item, so grids nest.

use spangrid_core::config::LayoutConfig;
use spangrid_core::errors::LayoutError;
use spangrid_core::types::{Constraints, Size, WidthBreakpoint};

use crate::engine::{LayoutEngine, LayoutOutput};
use crate::measure::Measurable;
use crate::scope::LayoutItem;

/// Configuration, breakpoint, and items of one grid.
///
/// The grid fills the width it is offered. Its `container_width` is taken
/// from the incoming constraints on every measurement, so the value in
/// `config` only matters for [`SpanGrid::layout`].
#[derive(Debug, Clone)]
pub struct SpanGrid<M> {
    config: LayoutConfig,
    breakpoint: WidthBreakpoint,
    items: Vec<LayoutItem<M>>,
}

impl<M> SpanGrid<M> {
    pub fn new(config: LayoutConfig, breakpoint: WidthBreakpoint, items: Vec<LayoutItem<M>>) -> Self {
        Self {
            config,
            breakpoint,
            items,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn breakpoint(&self) -> WidthBreakpoint {
        self.breakpoint
    }

    pub fn items(&self) -> &[LayoutItem<M>] {
        &self.items
    }
}

impl<M: Measurable> SpanGrid<M> {
    /// Lay the grid out at its configured width.
    pub fn layout(&self) -> Result<LayoutOutput, LayoutError> {
        LayoutEngine::new(self.config.clone()).layout(&self.items, self.breakpoint)
    }

    /// Lay the grid out inside `constraints`.
    pub fn layout_within(&self, constraints: Constraints) -> Result<LayoutOutput, LayoutError> {
        let width = if constraints.has_bounded_width() {
            constraints.max_width
        } else {
            constraints.min_width
        };
        let config = self.config.clone().with_container_width(width);
        LayoutEngine::new(config)
            .with_height_bounds(constraints.min_height, constraints.max_height)
            .layout(&self.items, self.breakpoint)
    }
}

impl<M: Measurable> Measurable for SpanGrid<M> {
    fn measure(&self, constraints: Constraints) -> Result<Size, LayoutError> {
        let output = self.layout_within(constraints)?;
        Ok(constraints.constrain(output.size()))
    }

    fn max_intrinsic_height(&self, width: i32) -> Result<i32, LayoutError> {
        Ok(self.layout_within(Constraints::fixed_width(width))?.size().height)
    }
}
