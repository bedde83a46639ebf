//! Span validation.
//!
//! Every item must resolve to a span in `[1, total_spans]`. Spans are
//! resolved and checked for the whole sequence before anything is measured,
//! so a bad declaration aborts the pass without side effects.

use spangrid_core::errors::SpanError;
use spangrid_core::types::{SpanAssignment, WidthBreakpoint};

use crate::breakpoint::resolve_span;

/// Check one resolved span against the budget.
pub fn validate(index: usize, span: u32, total_spans: u32) -> Result<(), SpanError> {
    if span < 1 || span > total_spans {
        return Err(SpanError::SpanOutOfRange {
            index,
            span,
            total_spans,
        });
    }
    Ok(())
}

/// Resolve and validate the span of every item in order.
///
/// A lone item without a span is accepted and occupies the full row. This
/// is a deprecated compatibility behavior kept for older callers; sequences
/// of two or more items must declare a span on every item.
pub fn resolve_spans<'a, I>(
    declared: I,
    breakpoint: WidthBreakpoint,
    total_spans: u32,
) -> Result<Vec<u32>, SpanError>
where
    I: IntoIterator<Item = Option<&'a SpanAssignment>>,
    I::IntoIter: ExactSizeIterator,
{
    let declared = declared.into_iter();
    let count = declared.len();
    let mut spans = Vec::with_capacity(count);

    for (index, assignment) in declared.enumerate() {
        let span = match assignment {
            Some(assignment) => resolve_span(assignment, breakpoint),
            None if count == 1 => {
                tracing::warn!(
                    total_spans,
                    "item without a span in a single-item grid; using the full row (deprecated)"
                );
                total_spans
            }
            None => return Err(SpanError::MissingSpan { index, count }),
        };
        validate(index, span, total_spans)?;
        spans.push(span);
    }

    Ok(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_range() {
        assert!(validate(0, 1, 12).is_ok());
        assert!(validate(0, 12, 12).is_ok());
        assert_eq!(
            validate(3, 0, 12),
            Err(SpanError::SpanOutOfRange { index: 3, span: 0, total_spans: 12 })
        );
        assert_eq!(
            validate(1, 13, 12),
            Err(SpanError::SpanOutOfRange { index: 1, span: 13, total_spans: 12 })
        );
    }

    #[test]
    fn test_resolve_spans_per_breakpoint() {
        let declared = [SpanAssignment::new(12, 6, 4), SpanAssignment::new(6, 3, 2)];
        let spans = resolve_spans(declared.iter().map(Some), WidthBreakpoint::Medium, 12).unwrap();
        assert_eq!(spans, vec![6, 3]);
    }

    #[test]
    fn test_missing_span_in_sequence() {
        let a = SpanAssignment::uniform(6);
        let declared = [Some(&a), None, Some(&a)];
        let err = resolve_spans(declared, WidthBreakpoint::Compact, 12).unwrap_err();
        assert_eq!(err, SpanError::MissingSpan { index: 1, count: 3 });
    }

    #[test]
    fn test_single_item_without_span_fills_row() {
        let spans = resolve_spans([None], WidthBreakpoint::Expanded, 7).unwrap();
        assert_eq!(spans, vec![7]);
    }

    #[test]
    fn test_out_of_range_reports_first_offender() {
        let ok = SpanAssignment::uniform(4);
        let bad = SpanAssignment::new(4, 4, 20);
        let declared = [Some(&ok), Some(&bad), Some(&bad)];
        let err = resolve_spans(declared, WidthBreakpoint::Expanded, 12).unwrap_err();
        assert_eq!(err, SpanError::SpanOutOfRange { index: 1, span: 20, total_spans: 12 });
    }

    #[test]
    fn test_empty_sequence() {
        let declared: [Option<&SpanAssignment>; 0] = [];
        assert!(resolve_spans(declared, WidthBreakpoint::Compact, 12).unwrap().is_empty());
    }
}
