//! Placement of measured items.

use spangrid_core::config::LayoutConfig;
use spangrid_core::types::{Placement, Size};

use crate::rows::Row;

/// Cursor walking the grid row by row.
///
/// Within a row `x` advances past each item and its trailing gutter; at a
/// row boundary `x` returns to the leading gutter and `y` drops below the
/// finished row plus the inter-row spacing. Both saturate at `i32::MAX`,
/// which unbounded items may report as their height.
#[derive(Debug, Clone)]
struct Cursor {
    gutter: i32,
    row_spacing: i32,
    x: i32,
    y: i32,
    row_height: i32,
    started: bool,
}

impl Cursor {
    fn new(gutter: i32, row_spacing: i32) -> Self {
        Self {
            gutter,
            row_spacing,
            x: gutter,
            y: 0,
            row_height: 0,
            started: false,
        }
    }

    fn begin_row(&mut self) {
        if self.started {
            self.y = self
                .y
                .saturating_add(self.row_height)
                .saturating_add(self.row_spacing);
        }
        self.started = true;
        self.x = self.gutter;
        self.row_height = 0;
    }

    fn place(&mut self, size: Size) -> Placement {
        let placement = Placement::new(self.x, self.y, size.width, size.height);
        self.x = self.x.saturating_add(size.width).saturating_add(self.gutter);
        self.row_height = self.row_height.max(size.height);
        placement
    }

    /// Height of everything placed so far.
    fn extent(&self) -> i32 {
        if self.started {
            self.y.saturating_add(self.row_height)
        } else {
            0
        }
    }
}

/// Position measured items row by row.
///
/// `sizes` is aligned with the input items. Returns placements in input
/// order and the overall size, whose width is always the container width.
pub fn place(rows: &[Row], sizes: &[Size], config: &LayoutConfig) -> (Vec<Placement>, Size) {
    let mut cursor = Cursor::new(config.gutter_px(), config.inter_row_spacing_px());
    let mut placements = Vec::with_capacity(sizes.len());

    for row in rows {
        cursor.begin_row();
        for size in &sizes[row.items.clone()] {
            placements.push(cursor.place(*size));
        }
    }

    (placements, Size::new(config.container_width, cursor.extent()))
}
