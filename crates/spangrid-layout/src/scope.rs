//! Items and the breakpoint-bound scope that collects them.

use spangrid_core::config::LayoutConfig;
use spangrid_core::errors::LayoutError;
use spangrid_core::types::{Constraints, Size, SpanAssignment, WidthBreakpoint};

use crate::breakpoint::resolve_span;
use crate::grid::SpanGrid;
use crate::measure::Measurable;

/// A measurable element together with its declared spans.
#[derive(Debug, Clone)]
pub struct LayoutItem<M> {
    pub node: M,
    pub spans: Option<SpanAssignment>,
}

impl<M> LayoutItem<M> {
    pub fn new(node: M, spans: SpanAssignment) -> Self {
        Self {
            node,
            spans: Some(spans),
        }
    }

    /// An item with no span declaration. Only valid as the sole item of a
    /// grid, where it fills the row; this form is deprecated.
    pub fn unspanned(node: M) -> Self {
        Self { node, spans: None }
    }
}

impl<M: Measurable> Measurable for LayoutItem<M> {
    fn measure(&self, constraints: Constraints) -> Result<Size, LayoutError> {
        self.node.measure(constraints)
    }

    fn max_intrinsic_height(&self, width: i32) -> Result<i32, LayoutError> {
        self.node.max_intrinsic_height(width)
    }
}

/// Collects grid items under one breakpoint.
#[derive(Debug, Clone)]
pub struct SpanScope<M> {
    breakpoint: WidthBreakpoint,
    items: Vec<LayoutItem<M>>,
}

impl<M> SpanScope<M> {
    pub fn new(breakpoint: WidthBreakpoint) -> Self {
        Self {
            breakpoint,
            items: Vec::new(),
        }
    }

    pub fn breakpoint(&self) -> WidthBreakpoint {
        self.breakpoint
    }

    /// The span that applies in this scope.
    pub fn span(&self, compact: u32, medium: u32, expanded: u32) -> u32 {
        resolve_span(&SpanAssignment::new(compact, medium, expanded), self.breakpoint)
    }

    /// Add an item.
    pub fn item(mut self, node: M, spans: SpanAssignment) -> Self {
        self.push(node, spans);
        self
    }

    /// Add an item spanning `span` at every breakpoint.
    pub fn uniform(self, node: M, span: u32) -> Self {
        self.item(node, SpanAssignment::uniform(span))
    }

    /// Add an item without a span declaration.
    pub fn unspanned(mut self, node: M) -> Self {
        self.items.push(LayoutItem::unspanned(node));
        self
    }

    /// Add an item in place.
    pub fn push(&mut self, node: M, spans: SpanAssignment) {
        self.items.push(LayoutItem::new(node, spans));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[LayoutItem<M>] {
        &self.items
    }

    pub fn into_items(self) -> Vec<LayoutItem<M>> {
        self.items
    }

    /// Turn the collected items into a grid that can itself be measured.
    pub fn into_grid(self, config: LayoutConfig) -> SpanGrid<M> {
        SpanGrid::new(config, self.breakpoint, self.items)
    }
}

impl<M> Extend<LayoutItem<M>> for SpanScope<M> {
    fn extend<T: IntoIterator<Item = LayoutItem<M>>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_resolves_in_its_breakpoint() {
        let scope: SpanScope<()> = SpanScope::new(WidthBreakpoint::Medium);
        assert_eq!(scope.span(12, 6, 4), 6);

        let scope: SpanScope<()> = SpanScope::new(WidthBreakpoint::Unclassified);
        assert_eq!(scope.span(12, 6, 4), 12);
    }

    #[test]
    fn test_scope_collects_in_order() {
        let mut scope = SpanScope::new(WidthBreakpoint::Compact)
            .item("a", SpanAssignment::new(12, 6, 4))
            .uniform("b", 3)
            .unspanned("c");
        scope.push("d", SpanAssignment::uniform(1));

        let items = scope.into_items();
        let nodes: Vec<_> = items.iter().map(|i| i.node).collect();
        assert_eq!(nodes, vec!["a", "b", "c", "d"]);
        assert_eq!(items[1].spans, Some(SpanAssignment::uniform(3)));
        assert_eq!(items[2].spans, None);
    }
}
