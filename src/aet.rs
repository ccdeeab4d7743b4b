//! Active Edge Table

use crate::edge::EdgeRecord;
use crate::scan::Scanline;

use std::cmp::Ordering;

/// Edges crossing the scanline being processed
///
/// Kept in ascending `x_current` order after [sort](#method.sort)
#[derive(Debug,Default,Clone)]
pub struct ActiveEdgeTable {
    pub edges: Vec<EdgeRecord>,
}

/// Ascending by `x_current`, ties by `inv_slope`
fn by_x_then_slope(a: &EdgeRecord, b: &EdgeRecord) -> Ordering {
    a.x_current.partial_cmp(&b.x_current).unwrap_or(Ordering::Equal)
        .then_with(|| a.inv_slope.partial_cmp(&b.inv_slope).unwrap_or(Ordering::Equal))
}

/// Round half away from zero to the pixel grid
fn pixel(x: f64) -> i64 {
    x.round() as i64
}

impl ActiveEdgeTable {
    pub fn new() -> Self {
        Self { edges: vec![] }
    }
    pub fn len(&self) -> usize {
        self.edges.len()
    }
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
    pub fn clear(&mut self) {
        self.edges.clear();
    }
    /// Add edges starting on the current scanline
    pub fn admit(&mut self, edges: &[EdgeRecord]) {
        self.edges.extend_from_slice(edges);
    }
    /// Remove edges expiring at scanline `y`
    ///
    /// An edge is active on `[y_min, y_max)`
    pub fn retire(&mut self, y: i64) {
        self.edges.retain(|e| e.is_active(y));
    }
    pub fn sort(&mut self) {
        self.edges.sort_by(by_x_then_slope);
    }
    /// Pair crossings (0,1), (2,3), ... into spans on row `y`
    ///
    /// Pairs rounding to a single pixel are dropped; an unpaired
    /// trailing crossing is ignored.
    ///
    ///     use scanfill::{ActiveEdgeTable, EdgeRecord, Scanline};
    ///     let mut aet = ActiveEdgeTable::new();
    ///     aet.admit(&[EdgeRecord { y_max: 4, x_current: 7.5, inv_slope: 0.0 },
    ///                 EdgeRecord { y_max: 4, x_current: 1.2, inv_slope: 0.0 }]);
    ///     aet.sort();
    ///     let mut sl = Scanline::new();
    ///     aet.pair(2, &mut sl);
    ///     assert_eq!(sl.spans[0].line(), (1, 2, 8, 2));
    ///
    pub fn pair(&self, y: i64, sl: &mut Scanline) {
        sl.crossings = self.edges.len();
        for pair in self.edges.chunks_exact(2) {
            let x_start = pixel(pair[0].x_current);
            let x_end = pixel(pair[1].x_current);
            if x_start < x_end {
                sl.add_span(x_start, y, x_end);
            }
        }
    }
    /// Step every edge to the next scanline
    pub fn advance(&mut self) {
        for e in self.edges.iter_mut() {
            e.step();
        }
    }
}
