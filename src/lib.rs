//! Scanline polygon fill
//!
//! Rasterizes a simple polygon with integer vertices into horizontal
//! spans using an Edge Table and an Active Edge Table, inside-test by
//! the even-odd rule.
//!
//! # How does this work
//!
//! ```text
//! fill(vertices)
//!   FillEngine::new()
//!     build_edge_table()   -- 'EDGE TABLE'
//!       EdgeRecord::from_points()  (horizontal edges dropped)
//! Output: EdgeRecords keyed by starting scanline
//!   rewind_scanlines()
//!   sweep_scanline()       -- 'SWEEP SCANLINES'
//!     next_row()
//!       admit()    edges starting at y
//!       retire()   edges with y_max == y
//!       sort()     by x, then inverse slope
//!       pair()     crossings (0,1), (2,3), ... -- 'ADD_SPAN'
//!       advance()  x += dx/dy
//! Output: Spans ordered by y, then x
//!   Canvas::render_spans()
//!     blend_hline()
//! ```
//!
//! # Example
//!
//!     use scanfill::{fill, Vertex};
//!
//!     let square = [Vertex::new(0,0), Vertex::new(10,0),
//!                   Vertex::new(10,10), Vertex::new(0,10)];
//!     let spans = fill(&square).unwrap();
//!     assert_eq!(spans.len(), 10);
//!     for (y, s) in spans.iter().enumerate() {
//!         assert_eq!(s.line(), (0, y as i64, 10, y as i64));
//!     }
//!

pub mod vertex;
pub mod rect;
pub mod edge;
pub mod aet;
pub mod scan;
pub mod raster;
pub mod error;
pub mod canvas;

pub use vertex::*;
pub use rect::*;
pub use edge::*;
pub use aet::*;
pub use scan::*;
pub use raster::*;
pub use error::*;
pub use canvas::*;
