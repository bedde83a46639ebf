//! Row planning.
//!
//! Items are packed greedily left to right: an item joins the current row
//! unless its span would push the row over the budget, in which case it
//! opens the next row. Rows are contiguous runs of the input sequence.

use std::ops::Range;

use spangrid_core::errors::LayoutError;

use crate::measure::{Measurable, Measurer};

/// A run of consecutive items sharing one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Indices of the member items
    pub items: Range<usize>,
    /// Sum of the members' spans
    pub used_spans: u32,
    /// Row height, once known
    pub height: Option<i32>,
}

impl Row {
    fn starting_at(index: usize) -> Self {
        Self {
            items: index..index,
            used_spans: 0,
            height: None,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.items.contains(&index)
    }
}

/// Partition items, given their resolved spans, into rows.
///
/// An item whose span alone exceeds the budget still gets a row of its own.
pub fn plan_rows(spans: &[u32], total_spans: u32) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut current = Row::starting_at(0);

    for (index, &span) in spans.iter().enumerate() {
        if current.used_spans.saturating_add(span) > total_spans && !current.is_empty() {
            let next = Row::starting_at(index);
            rows.push(std::mem::replace(&mut current, next));
        }
        current.items.end = index + 1;
        current.used_spans = current.used_spans.saturating_add(span);
    }

    if !current.is_empty() {
        rows.push(current);
    }

    for (i, row) in rows.iter().enumerate() {
        tracing::trace!(row = i, items = ?row.items, used_spans = row.used_spans, "planned row");
    }

    rows
}

/// Lookahead for stretch mode: plan rows, then set each row's height to the
/// tallest member's intrinsic height at that member's span width.
///
/// Each row is visited once; the returned plan is reused unchanged for the
/// final measurement.
pub fn plan_stretched_rows<M: Measurable>(
    items: &[M],
    spans: &[u32],
    total_spans: u32,
    measurer: &Measurer<'_>,
) -> Result<Vec<Row>, LayoutError> {
    let mut rows = plan_rows(spans, total_spans);

    for row in &mut rows {
        let mut height = 0;
        for index in row.items.clone() {
            height = height.max(measurer.intrinsic_height(&items[index], spans[index])?);
        }
        row.height = Some(height);
    }

    Ok(rows)
}
