mod helpers;

use helpers::*;
use scanfill::{fill, fill_lines, FillError, Vertex};

#[test]
fn axis_aligned_square() {
    init_logger();
    let spans = fill(&square()).unwrap();
    let want: Vec<(i64,i64,i64,i64)> = (0..10).map(|y| (0, y, 10, y)).collect();
    assert_eq!(fill_lines(&square()).unwrap(), want);
    // y = 10 retires both sides before pairing
    assert!(spans_at(&spans, 10).is_empty());
}

#[test]
fn upright_triangle() {
    let spans = fill(&triangle()).unwrap();
    assert_eq!(spans_at(&spans, 0), vec![(0,0,10,0)]);
    for y in 1 .. 10 {
        assert_eq!(spans_at(&spans, y).len(), 1, "y = {}", y);
    }
    assert!(spans_at(&spans, 10).is_empty());

    let widths: Vec<_> = spans.iter().map(|s| s.len()).collect();
    assert_eq!(widths, vec![10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);

    // Half pixel intersections round away from zero
    assert_eq!(spans_at(&spans, 1), vec![(1,1,10,1)]);
    assert_eq!(spans_at(&spans, 9), vec![(5,9,6,9)]);
}

#[test]
fn diamond_is_symmetric() {
    let spans = fill(&diamond()).unwrap();
    assert_eq!(spans_at(&spans, 5), vec![(0,5,10,5)]);
    // Apex rows pair two crossings at the same x
    assert!(spans_at(&spans, 0).is_empty());
    assert!(spans_at(&spans, 10).is_empty());
    for d in 1 .. 5 {
        let top = spans_at(&spans, 5 - d);
        let bottom = spans_at(&spans, 5 + d);
        assert_eq!(top, vec![(d, 5-d, 10-d, 5-d)]);
        assert_eq!(bottom, vec![(d, 5+d, 10-d, 5+d)]);
    }
    for s in &spans {
        assert_eq!(s.x_start + s.x_end, 10, "not centered {:?}", s);
    }
}

#[test]
fn collinear_horizontal_is_empty() {
    let v = poly(&[(0,0),(5,0),(10,0)]);
    assert!(fill(&v).unwrap().is_empty());
}

#[test]
fn insufficient_vertices() {
    let v = poly(&[(0,0),(1,1)]);
    assert_eq!(fill(&v), Err(FillError::InsufficientVertices { count: 2 }));
    assert_eq!(fill(&[]), Err(FillError::InsufficientVertices { count: 0 }));
    let msg = format!("{}", fill(&v).unwrap_err());
    assert!(msg.contains("got 2"), "{}", msg);
}

#[test]
fn c_shape_notch() {
    let spans = fill(&c_shape()).unwrap();
    assert_eq!(spans_at(&spans, 1), vec![(0,1,10,1)]);
    assert_eq!(spans_at(&spans, 5), vec![(0,5,3,5)]);
    // Notch edges start and end on rows 3 and 7
    assert_eq!(spans_at(&spans, 3), vec![(0,3,3,3)]);
    assert_eq!(spans_at(&spans, 7), vec![(0,7,10,7)]);
    assert_eq!(spans.len(), 10);
}

#[test]
fn u_shape_two_spans_per_row() {
    let spans = fill(&u_shape()).unwrap();
    for y in 0 .. 6 {
        assert_eq!(spans_at(&spans, y), vec![(0,y,4,y), (6,y,10,y)]);
    }
    for y in 6 .. 10 {
        assert_eq!(spans_at(&spans, y), vec![(0,y,10,y)]);
    }
}

#[test]
fn bow_tie_even_odd() {
    let spans = fill(&bow_tie()).unwrap();
    assert!(spans_at(&spans, 0).is_empty());
    assert_eq!(spans_at(&spans, 1), vec![(0,1,1,1), (9,1,10,1)]);
    assert_eq!(spans_at(&spans, 6), vec![(0,6,4,6), (6,6,10,6)]);
    assert_eq!(spans_at(&spans, 9), vec![(0,9,1,9), (9,9,10,9)]);
}

#[test]
fn monotone_vertex_counts_once() {
    // (10,5) joins an edge ending on row 5 with one starting there
    let v = poly(&[(0,0),(10,0),(10,5),(10,10),(0,10)]);
    let spans = fill(&v).unwrap();
    assert_eq!(spans_at(&spans, 5), vec![(0,5,10,5)]);
    assert_eq!(spans.len(), 10);
}

#[test]
fn extremum_vertex_counts_twice() {
    // (5,5) is a local maximum of the notch
    let v = poly(&[(0,0),(10,0),(10,10),(5,5),(0,10)]);
    let spans = fill(&v).unwrap();
    assert_eq!(spans_at(&spans, 4), vec![(0,4,10,4)]);
    assert_eq!(spans_at(&spans, 5), vec![(0,5,5,5), (5,5,10,5)]);
    assert_eq!(spans_at(&spans, 6), vec![(0,6,4,6), (6,6,10,6)]);
}

#[test]
fn single_vertex_repeated() {
    let v = vec![Vertex::new(3,3); 4];
    assert!(fill(&v).unwrap().is_empty());
}
