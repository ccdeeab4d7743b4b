//! Edge records and the Edge Table

use crate::vertex::Vertex;

use std::collections::BTreeMap;

/// Non-horizontal polygon edge tracked across scanlines
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct EdgeRecord {
    /// Scanline where the edge expires (exclusive)
    pub y_max: i64,
    /// Intersection with the current scanline
    pub x_current: f64,
    /// dx/dy, added to `x_current` for each scanline
    pub inv_slope: f64,
}

impl EdgeRecord {
    /// Record for the edge between `p1` and `p2`
    ///
    /// Returns the starting scanline with the record, or None for
    /// horizontal edges which never cross a scanline.
    ///
    ///     use scanfill::{EdgeRecord, Vertex};
    ///     let (y_min, e) = EdgeRecord::from_points(Vertex::new(10,0), Vertex::new(5,10)).unwrap();
    ///     assert_eq!(y_min, 0);
    ///     assert_eq!(e.y_max, 10);
    ///     assert_eq!(e.x_current, 10.0);
    ///     assert_eq!(e.inv_slope, -0.5);
    ///     assert!(EdgeRecord::from_points(Vertex::new(0,3), Vertex::new(9,3)).is_none());
    ///
    pub fn from_points(p1: Vertex, p2: Vertex) -> Option<(i64, EdgeRecord)> {
        if p1.y == p2.y {
            return None;
        }
        let (y_min, y_max) = if p1.y < p2.y { (p1.y, p2.y) } else { (p2.y, p1.y) };
        let x_at_ymin = if p1.y < p2.y { p1.x } else { p2.x };
        let inv_slope = (p2.x - p1.x) as f64 / (p2.y - p1.y) as f64;
        Some((y_min, EdgeRecord { y_max, x_current: x_at_ymin as f64, inv_slope }))
    }
    /// Move to the next scanline
    pub fn step(&mut self) {
        self.x_current += self.inv_slope;
    }
    /// Still crosses scanline `y`
    pub fn is_active(&self, y: i64) -> bool {
        y < self.y_max
    }
}

/// Edges keyed by the scanline they start on
#[derive(Debug,Default,Clone)]
pub struct EdgeTable {
    buckets: BTreeMap<i64, Vec<EdgeRecord>>,
}

impl EdgeTable {
    pub fn new() -> Self {
        Self { buckets: BTreeMap::new() }
    }
    /// Add an edge starting at scanline `y_min`
    pub fn insert(&mut self, y_min: i64, edge: EdgeRecord) {
        self.buckets.entry(y_min).or_insert_with(Vec::new).push(edge);
    }
    /// Edges starting at scanline `y`
    pub fn bucket(&self, y: i64) -> &[EdgeRecord] {
        self.buckets.get(&y).map(|b| b.as_slice()).unwrap_or(&[])
    }
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
    /// Total number of edges
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
    /// First scanline with a starting edge
    pub fn min_y(&self) -> Option<i64> {
        self.buckets.keys().next().copied()
    }
    /// Largest `y_max` of all edges
    ///
    /// The last key does not bound the scan, a long edge may start earlier
    pub fn max_y(&self) -> Option<i64> {
        self.buckets.values()
            .flat_map(|b| b.iter())
            .map(|e| e.y_max)
            .max()
    }
    /// Starting scanlines with their edges, in ascending order
    pub fn iter(&self) -> impl Iterator<Item=(i64, &[EdgeRecord])> {
        self.buckets.iter().map(|(&y, b)| (y, b.as_slice()))
    }
}

/// Build the Edge Table for the closed polygon `vertices`
///
/// Edge i connects vertex i with vertex (i+1) mod n. Horizontal
/// edges are skipped.
///
///     use scanfill::{build_edge_table, Vertex};
///     let v = [Vertex::new(0,0), Vertex::new(10,0), Vertex::new(10,10), Vertex::new(0,10)];
///     let et = build_edge_table(&v);
///     assert_eq!(et.len(), 2);
///     assert_eq!(et.min_y(), Some(0));
///     assert_eq!(et.max_y(), Some(10));
///
pub fn build_edge_table(vertices: &[Vertex]) -> EdgeTable {
    let mut et = EdgeTable::new();
    let n = vertices.len();
    for (i, &p1) in vertices.iter().enumerate() {
        let p2 = vertices[(i + 1) % n];
        match EdgeRecord::from_points(p1, p2) {
            Some((y_min, edge)) => {
                log::trace!("EDGE TABLE: ({},{}) -> ({},{}) y_min {} {:?}",
                            p1.x, p1.y, p2.x, p2.y, y_min, edge);
                et.insert(y_min, edge);
            },
            None => log::trace!("EDGE TABLE: skip horizontal ({},{}) -> ({},{})",
                                p1.x, p1.y, p2.x, p2.y),
        }
    }
    log::debug!("EDGE TABLE: {} edges from {} vertices", et.len(), n);
    et
}
