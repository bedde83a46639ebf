//! Breakpoint-driven span resolution.

use spangrid_core::types::{SpanAssignment, WidthBreakpoint};

/// Pick the span that applies at `breakpoint`.
///
/// `Unclassified` falls back to the compact span.
pub fn resolve_span(assignment: &SpanAssignment, breakpoint: WidthBreakpoint) -> u32 {
    match breakpoint {
        WidthBreakpoint::Compact => assignment.compact,
        WidthBreakpoint::Medium => assignment.medium,
        WidthBreakpoint::Expanded => assignment.expanded,
        WidthBreakpoint::Unclassified => assignment.compact,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_breakpoint_selects_its_span() {
        let spans = SpanAssignment::new(12, 6, 4);
        assert_eq!(resolve_span(&spans, WidthBreakpoint::Compact), 12);
        assert_eq!(resolve_span(&spans, WidthBreakpoint::Medium), 6);
        assert_eq!(resolve_span(&spans, WidthBreakpoint::Expanded), 4);
    }

    #[test]
    fn test_unclassified_falls_back_to_compact() {
        let spans = SpanAssignment::new(3, 2, 1);
        assert_eq!(resolve_span(&spans, WidthBreakpoint::Unclassified), 3);
        let parsed = "ultrawide".parse::<WidthBreakpoint>().unwrap_or_default();
        assert_eq!(resolve_span(&spans, parsed), 3);
    }
}
