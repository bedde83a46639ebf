//! The layout pass: resolve spans, plan rows, measure, place.

use spangrid_core::config::LayoutConfig;
use spangrid_core::errors::LayoutError;
use spangrid_core::types::{Constraints, Placement, Size, WidthBreakpoint};

use crate::measure::{Measurable, Measurer};
use crate::place::place;
use crate::rows::{plan_rows, plan_stretched_rows, Row};
use crate::scope::LayoutItem;
use crate::validate::resolve_spans;

/// Result of a layout pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutOutput {
    placements: Vec<Placement>,
    size: Size,
    rows: Vec<Row>,
}

impl LayoutOutput {
    /// Placements aligned with the input items.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Overall size: the container width by the height of all rows.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The row plan used for placement, with resolved heights.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Index of the row holding item `index`.
    pub fn row_of(&self, index: usize) -> Option<usize> {
        let row = self.rows.partition_point(|r| r.items.end <= index);
        self.rows.get(row).filter(|r| r.contains(index)).map(|_| row)
    }

    /// Bounding box of all placed items, if any.
    pub fn content_bounds(&self) -> Option<Placement> {
        let (first, rest) = self.placements.split_first()?;
        Some(rest.iter().fold(*first, |acc, p| acc.union(p)))
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Placement> {
        self.placements.iter()
    }

    pub fn into_placements(self) -> Vec<Placement> {
        self.placements
    }
}

impl<'a> IntoIterator for &'a LayoutOutput {
    type Item = &'a Placement;
    type IntoIter = std::slice::Iter<'a, Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.iter()
    }
}

/// Lays out one ordered sequence of items under one configuration.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    config: LayoutConfig,
    height_bounds: (i32, i32),
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            height_bounds: (0, Constraints::INFINITY),
        }
    }

    /// Height bounds of the container, passed to items measured outside
    /// stretch mode. Unbounded by default.
    pub fn with_height_bounds(mut self, min_height: i32, max_height: i32) -> Self {
        self.height_bounds = (min_height, max_height);
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Run a full layout pass.
    ///
    /// Fails before anything is measured if the configuration or any span
    /// is invalid.
    pub fn layout<M: Measurable>(
        &self,
        items: &[LayoutItem<M>],
        breakpoint: WidthBreakpoint,
    ) -> Result<LayoutOutput, LayoutError> {
        self.config.validate()?;

        let _span = tracing::debug_span!(
            "span_layout",
            items = items.len(),
            breakpoint = %breakpoint,
            total_spans = self.config.total_spans,
            stretch = self.config.stretch_to_fill_row,
        )
        .entered();

        let spans = resolve_spans(
            items.iter().map(|item| item.spans.as_ref()),
            breakpoint,
            self.config.total_spans,
        )?;
        let rows = self.plan_rows(items, &spans)?;
        let output = self.measure_and_place(items, &spans, rows)?;

        tracing::debug!(
            rows = output.rows.len(),
            width = output.size.width,
            height = output.size.height,
            "layout complete"
        );
        Ok(output)
    }

    /// First phase: decide row membership from the resolved spans. In
    /// stretch mode this also measures intrinsic heights to fix each row's
    /// height.
    pub fn plan_rows<M: Measurable>(
        &self,
        items: &[M],
        spans: &[u32],
    ) -> Result<Vec<Row>, LayoutError> {
        if self.config.stretch_to_fill_row {
            plan_stretched_rows(items, spans, self.config.total_spans, &self.measurer())
        } else {
            Ok(plan_rows(spans, self.config.total_spans))
        }
    }

    /// Second phase: measure every item at its span width (and row height,
    /// when stretching), then place the rows.
    pub fn measure_and_place<M: Measurable>(
        &self,
        items: &[M],
        spans: &[u32],
        mut rows: Vec<Row>,
    ) -> Result<LayoutOutput, LayoutError> {
        let measurer = self.measurer();
        let stretch = self.config.stretch_to_fill_row;
        let mut sizes = Vec::with_capacity(items.len());

        for row in &mut rows {
            let row_height = if stretch { row.height } else { None };
            let mut tallest = 0;
            for index in row.items.clone() {
                let size = measurer.measure(&items[index], spans[index], row_height)?;
                tallest = tallest.max(size.height);
                sizes.push(size);
            }
            row.height = Some(tallest);
        }

        let (placements, size) = place(&rows, &sizes, &self.config);
        Ok(LayoutOutput {
            placements,
            size,
            rows,
        })
    }

    fn measurer(&self) -> Measurer<'_> {
        Measurer::new(&self.config, self.height_bounds)
    }
}
