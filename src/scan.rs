//! Horizontal fill spans

/// Filled run of pixels on scanline `y` from `x_start` to `x_end`
///
/// Spans order by `y`, then by `x_start`.
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash,PartialOrd,Ord)]
pub struct Span {
    pub y: i64,
    pub x_start: i64,
    pub x_end: i64,
}

impl Span {
    pub fn new(x_start: i64, y: i64, x_end: i64) -> Self {
        Self { x_start, y, x_end }
    }
    /// Span as a line segment `(x_start, y, x_end, y)`
    pub fn line(&self) -> (i64,i64,i64,i64) {
        (self.x_start, self.y, self.x_end, self.y)
    }
    pub fn len(&self) -> i64 {
        self.x_end - self.x_start
    }
    pub fn is_empty(&self) -> bool {
        self.x_end <= self.x_start
    }
    pub fn translate(&self, dx: i64, dy: i64) -> Self {
        Self::new(self.x_start + dx, self.y + dy, self.x_end + dx)
    }
}

/// Spans of a single scanline
#[derive(Debug,Default)]
pub struct Scanline {
    pub spans: Vec<Span>,
    pub y: i64,
    /// Active edges at the pairing step
    pub crossings: usize,
}

impl Scanline {
    pub fn new() -> Self {
        Self { spans: vec![], y: 0, crossings: 0 }
    }
    pub fn reset_spans(&mut self) {
        self.spans.clear();
        self.crossings = 0;
    }
    pub fn finalize(&mut self, y: i64) {
        self.y = y;
    }
    pub fn num_spans(&self) -> usize {
        self.spans.len()
    }
    /// Add a span from `x_start` to `x_end` on row `y`
    pub fn add_span(&mut self, x_start: i64, y: i64, x_end: i64) {
        log::trace!("ADD_SPAN: {} -> {} y {}", x_start, x_end, y);
        self.spans.push( Span::new(x_start, y, x_end) );
    }
}
