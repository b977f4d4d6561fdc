//! Coordinate to span lookup

use fxhash::FxHashMap;

use super::span::{Coord, Span};

/// Find the span containing `(row, column)` by scanning `spans` in order
///
/// The first match wins when spans overlap; this is not a validity check.
pub fn lookup_span(spans: &[Span], row: usize, column: usize) -> Option<&Span> {
    spans.iter().find(|span| span.contains(row, column))
}

/// Precomputed coordinate to span map for repeated lookups
///
/// Built once per solver call so each grid cell resolves in O(1).
#[derive(Debug, Clone)]
pub struct SpanIndex<'a> {
    spans: &'a [Span],
    by_coord: FxHashMap<Coord, usize>,
}

impl<'a> SpanIndex<'a> {
    pub fn new(spans: &'a [Span]) -> Self {
        let mut by_coord = FxHashMap::default();
        for (idx, span) in spans.iter().enumerate() {
            for cell in span.cells() {
                // Keep the earliest span, matching `lookup_span`
                by_coord.entry(*cell).or_insert(idx);
            }
        }
        SpanIndex { spans, by_coord }
    }

    pub fn lookup(&self, row: usize, column: usize) -> Option<&'a Span> {
        self.by_coord
            .get(&Coord::new(row, column))
            .map(|&idx| &self.spans[idx])
    }
}
