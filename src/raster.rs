//! Scanline fill engine

use crate::aet::ActiveEdgeTable;
use crate::edge::{build_edge_table, EdgeTable};
use crate::error::FillError;
use crate::scan::{Scanline, Span};
use crate::vertex::Vertex;

/// Minimum number of vertices of a polygon
pub const MIN_VERTICES: usize = 3;

/// Edge Table / Active Edge Table scanline rasterizer
///
/// Spans are produced one scanline at a time, top to bottom, using the
/// even-odd rule.
///
///     use scanfill::{FillEngine, Scanline, Vertex};
///
///     let v = [Vertex::new(0,0), Vertex::new(4,0), Vertex::new(4,2), Vertex::new(0,2)];
///     let mut ras = FillEngine::new(&v).unwrap();
///     let mut sl = Scanline::new();
///     assert!(ras.rewind_scanlines());
///     while ras.sweep_scanline(&mut sl) {
///         assert_eq!(sl.spans[0].line(), (0, sl.y, 4, sl.y));
///     }
///
#[derive(Debug)]
pub struct FillEngine {
    et: EdgeTable,
    aet: ActiveEdgeTable,
    scan_y: i64,
    range: Option<(i64,i64)>,
}

impl FillEngine {
    /// Build the Edge Table for `vertices`
    pub fn new(vertices: &[Vertex]) -> Result<Self, FillError> {
        if vertices.len() < MIN_VERTICES {
            return Err(FillError::InsufficientVertices { count: vertices.len() });
        }
        let et = build_edge_table(vertices);
        let range = match (et.min_y(), et.max_y()) {
            (Some(y0), Some(y1)) => Some((y0, y1)),
            _ => None,
        };
        let scan_y = range.map(|(y0,_)| y0).unwrap_or(0);
        Ok(Self { et, aet: ActiveEdgeTable::new(), scan_y, range })
    }
    /// The Edge Table being scanned
    pub fn edge_table(&self) -> &EdgeTable {
        &self.et
    }
    /// First scanline with an edge
    pub fn min_y(&self) -> Option<i64> {
        self.range.map(|(y0,_)| y0)
    }
    /// Last scanline visited, edges retire here
    pub fn max_y(&self) -> Option<i64> {
        self.range.map(|(_,y1)| y1)
    }
    /// Restart the sweep at the first scanline
    ///
    /// Returns false if there is nothing to fill
    pub fn rewind_scanlines(&mut self) -> bool {
        self.aet.clear();
        match self.range {
            None => false,
            Some((y0,_)) => {
                self.scan_y = y0;
                true
            }
        }
    }
    /// Process the current scanline and move to the next one
    ///
    /// The scanline receives the spans of that row, possibly none.
    /// Returns false once past the last scanline.
    pub fn next_row(&mut self, sl: &mut Scanline) -> bool {
        let y_last = match self.range {
            None => return false,
            Some((_,y1)) => y1,
        };
        if self.scan_y > y_last {
            return false;
        }
        let y = self.scan_y;
        sl.reset_spans();

        let starting = self.et.bucket(y);
        if ! starting.is_empty() {
            log::trace!("SWEEP SCANLINES: Y: {} admit {}", y, starting.len());
            self.aet.admit(starting);
        }
        self.aet.retire(y);
        if ! self.aet.is_empty() {
            self.aet.sort();
            self.aet.pair(y, sl);
            self.aet.advance();
        }
        sl.finalize(y);
        self.scan_y += 1;
        true
    }
    /// Advance to the next scanline with spans
    ///
    /// Returns false when the sweep is complete
    pub fn sweep_scanline(&mut self, sl: &mut Scanline) -> bool {
        while self.next_row(sl) {
            if sl.num_spans() != 0 {
                return true;
            }
        }
        false
    }
}

/// Fill the closed polygon `vertices` with horizontal spans
///
/// Spans are ordered by `y`, then by `x_start`, and each has
/// `x_start < x_end`. Polygons with only horizontal edges produce no spans.
///
///     use scanfill::{fill, FillError, Vertex};
///
///     let diamond = [Vertex::new(5,0), Vertex::new(10,5),
///                    Vertex::new(5,10), Vertex::new(0,5)];
///     let spans = fill(&diamond).unwrap();
///     assert!(spans.iter().any(|s| s.line() == (0, 5, 10, 5)));
///
///     let err = fill(&[Vertex::new(0,0), Vertex::new(1,1)]).unwrap_err();
///     assert_eq!(err, FillError::InsufficientVertices { count: 2 });
///
pub fn fill(vertices: &[Vertex]) -> Result<Vec<Span>, FillError> {
    let mut ras = FillEngine::new(vertices)?;
    let mut spans = vec![];
    if ! ras.rewind_scanlines() {
        log::debug!("FILL: no edges, nothing to fill");
        return Ok(spans);
    }
    let mut sl = Scanline::new();
    while ras.sweep_scanline(&mut sl) {
        spans.extend_from_slice(&sl.spans);
    }
    log::debug!("FILL: {} spans over y {:?}", spans.len(), ras.range);
    Ok(spans)
}

/// Fill as line segments `(x_start, y, x_end, y)`
pub fn fill_lines(vertices: &[Vertex]) -> Result<Vec<(i64,i64,i64,i64)>, FillError> {
    Ok(fill(vertices)?.iter().map(Span::line).collect())
}
