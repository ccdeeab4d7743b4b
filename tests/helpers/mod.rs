// Shared fixtures and checks for scanfill tests.

#![allow(dead_code)]

use scanfill::{Span, Vertex};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn poly(pts: &[(i64,i64)]) -> Vec<Vertex> {
    pts.iter().map(|&p| Vertex::from(p)).collect()
}

pub fn square() -> Vec<Vertex> {
    poly(&[(0,0),(10,0),(10,10),(0,10)])
}

pub fn triangle() -> Vec<Vertex> {
    poly(&[(0,0),(10,0),(5,10)])
}

pub fn diamond() -> Vec<Vertex> {
    poly(&[(5,0),(10,5),(5,10),(0,5)])
}

/// Notch open to the right between y = 3 and y = 7
pub fn c_shape() -> Vec<Vertex> {
    poly(&[(0,0),(10,0),(10,3),(3,3),(3,7),(10,7),(10,10),(0,10)])
}

/// Notch open to the top between x = 4 and x = 6
pub fn u_shape() -> Vec<Vertex> {
    poly(&[(0,0),(4,0),(4,6),(6,6),(6,0),(10,0),(10,10),(0,10)])
}

/// Self intersecting at (5,5)
pub fn bow_tie() -> Vec<Vertex> {
    poly(&[(0,0),(10,10),(10,0),(0,10)])
}

/// Fixtures whose slopes are exact in binary floating point
pub fn fixtures() -> Vec<(&'static str, Vec<Vertex>)> {
    vec![("square", square()),
         ("triangle", triangle()),
         ("diamond", diamond()),
         ("c_shape", c_shape()),
         ("u_shape", u_shape()),
         ("bow_tie", bow_tie()),
         ("arrow", poly(&[(2,0),(6,4),(4,4),(4,12),(0,12),(0,4),(-2,4)])),
    ]
}

pub fn spans_at(spans: &[Span], y: i64) -> Vec<(i64,i64,i64,i64)> {
    spans.iter().filter(|s| s.y == y).map(Span::line).collect()
}

pub fn assert_well_formed(name: &str, spans: &[Span]) {
    for s in spans {
        assert!(s.x_start < s.x_end, "{}: empty span {:?}", name, s);
        let (_, y0, _, y1) = s.line();
        assert_eq!(y0, y1, "{}: span not horizontal", name);
    }
    for w in spans.windows(2) {
        assert!((w[0].y, w[0].x_start) <= (w[1].y, w[1].x_start),
                "{}: spans out of order {:?} {:?}", name, w[0], w[1]);
    }
}
