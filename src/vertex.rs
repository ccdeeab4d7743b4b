//! Polygon vertex storage

use crate::error::FillError;
use crate::raster::fill;
use crate::rect::Rectangle;
use crate::scan::Span;

/// Integer point on the canvas pixel grid, y increases downward
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Vertex {
    pub x: i64,
    pub y: i64,
}

impl Vertex {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64,i64)> for Vertex {
    fn from((x,y): (i64,i64)) -> Self {
        Self { x, y }
    }
}

/// Winding direction of a closed polygon in canvas (y-down) coordinates
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum PathOrientation {
    Clockwise,
    CounterClockwise
}

/// Implicitly closed sequence of vertices
///
/// The last vertex connects back to the first, no closing vertex is stored.
///
///     use scanfill::Polygon;
///
///     let mut poly = Polygon::new();
///     poly.push(0, 0);
///     poly.push(10, 0);
///     poly.push(5, 10);
///     let spans = poly.fill().unwrap();
///     assert_eq!(spans.len(), 10);
///     assert_eq!(spans[0].line(), (0, 0, 10, 0));
///
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Vertex>,
}

impl Polygon {
    pub fn new() -> Self {
        Self { vertices: vec![] }
    }
    /// Create a polygon from anything convertable to vertices
    pub fn with_vertices<V, I>(vertices: I) -> Self
        where I: IntoIterator<Item=V>, V: Into<Vertex>
    {
        Self { vertices: vertices.into_iter().map(Into::into).collect() }
    }
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
    /// Append a vertex
    pub fn push(&mut self, x: i64, y: i64) {
        self.vertices.push( Vertex::new(x,y) );
    }
    /// Remove all vertices
    pub fn clear(&mut self) {
        self.vertices.clear();
    }
    /// Reverse the winding direction
    pub fn reverse(&mut self) {
        self.vertices.reverse();
    }
    /// Start the vertex sequence at a different vertex
    ///
    /// Negative `k` rotates the other way; the edge set is unchanged
    pub fn rotate(&mut self, k: isize) {
        let n = self.vertices.len();
        if n == 0 {
            return;
        }
        let k = k.rem_euclid(n as isize) as usize;
        self.vertices.rotate_left(k);
    }
    /// Move every vertex by (`dx`,`dy`)
    pub fn translate(&mut self, dx: i64, dy: i64) {
        for v in self.vertices.iter_mut() {
            v.x += dx;
            v.y += dy;
        }
    }
    /// Twice the signed area (shoelace sum)
    ///
    /// Positive when the vertices turn clockwise on screen
    pub fn signed_area(&self) -> i64 {
        let n = self.vertices.len();
        self.vertices.iter().enumerate()
            .map(|(i,p1)| {
                let p2 = self.vertices[(i+1) % n];
                p1.x * p2.y - p1.y * p2.x
            })
            .sum()
    }
    /// Orientation as seen on a y-down canvas
    pub fn orientation(&self) -> PathOrientation {
        if self.signed_area() < 0 {
            PathOrientation::CounterClockwise
        } else {
            PathOrientation::Clockwise
        }
    }
    /// Smallest rectangle containing every vertex
    pub fn bounding_rect(&self) -> Option<Rectangle<i64>> {
        let first = self.vertices.first()?;
        let mut r = Rectangle::new(first.x, first.y, first.x, first.y);
        for p in &self.vertices {
            r.expand(p.x, p.y);
        }
        Some(r)
    }
    /// Scanline fill of this polygon, see [fill](fn.fill.html)
    pub fn fill(&self) -> Result<Vec<Span>, FillError> {
        fill(&self.vertices)
    }
}
