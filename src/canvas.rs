//! Drawing spans onto an image
//!
//! Each span is painted as a one pixel high horizontal line in a single
//! fill color, endpoints included.

use crate::error::FillError;
use crate::raster::fill;
use crate::rect::Rectangle;
use crate::scan::Span;
use crate::vertex::Vertex;

use image::{ImageError, RgbImage};
use std::cmp::{max, min};
use std::path::Path;

pub use image::Rgb;

/// White (255,255,255)
pub const WHITE: Rgb<u8> = Rgb([255,255,255]);
/// Black (0,0,0)
pub const BLACK: Rgb<u8> = Rgb([0,0,0]);
/// Blue (0,0,255), the default fill
pub const BLUE: Rgb<u8> = Rgb([0,0,255]);

/// RGB raster receiving filled spans
///
///     use scanfill::{Canvas, Vertex, BLUE, WHITE};
///
///     let mut canvas = Canvas::new(20, 20);
///     let tri = [Vertex::new(0,0), Vertex::new(10,0), Vertex::new(5,10)];
///     let n = canvas.fill_polygon(&tri, BLUE).unwrap();
///     assert_eq!(n, 10);
///     assert_eq!(canvas.pixel(5, 5), Some(BLUE));
///     assert_eq!(canvas.pixel(15, 5), Some(WHITE));
///
#[derive(Debug,Clone)]
pub struct Canvas {
    img: RgbImage,
}

impl Canvas {
    /// Create a white canvas of `width` x `height` pixels
    pub fn new(width: u32, height: u32) -> Self {
        Self { img: RgbImage::from_pixel(width, height, WHITE) }
    }
    /// Load a canvas from an image file
    pub fn from_file<P: AsRef<Path>>(filename: P) -> Result<Self, ImageError> {
        let img = image::open(filename)?.to_rgb8();
        Ok(Self { img })
    }
    pub fn width(&self) -> u32 {
        self.img.width()
    }
    pub fn height(&self) -> u32 {
        self.img.height()
    }
    /// Drawable region, inclusive
    pub fn limits(&self) -> Rectangle<i64> {
        let w = i64::from(self.img.width());
        let h = i64::from(self.img.height());
        Rectangle { x1: 0, y1: 0, x2: w-1, y2: h-1 }
    }
    /// Set every pixel to `color`
    pub fn clear(&mut self, color: Rgb<u8>) {
        self.img.pixels_mut().for_each(|p| *p = color);
    }
    /// Color at (`x`,`y`), None outside of the canvas
    pub fn pixel(&self, x: i64, y: i64) -> Option<Rgb<u8>> {
        if ! self.limits().contains(x, y) {
            return None;
        }
        Some(*self.img.get_pixel(x as u32, y as u32))
    }
    /// Paint pixels `x1` through `x2` on row `y`
    ///
    /// Pixels outside of the canvas are ignored
    pub fn blend_hline(&mut self, x1: i64, y: i64, x2: i64, color: Rgb<u8>) {
        let r = self.limits();
        let (x1,x2) = if x2 > x1 { (x1,x2) } else { (x2,x1) };
        if y > r.y2 || y < r.y1 || x1 > r.x2 || x2 < r.x1 {
            return;
        }
        let x1 = max(x1, r.x1);
        let x2 = min(x2, r.x2);
        for x in x1 ..= x2 {
            self.img.put_pixel(x as u32, y as u32, color);
        }
    }
    /// Paint each span in `color`
    pub fn render_spans(&mut self, spans: &[Span], color: Rgb<u8>) {
        for s in spans {
            self.blend_hline(s.x_start, s.y, s.x_end, color);
        }
    }
    /// Fill the polygon `vertices` in `color`
    ///
    /// Returns the number of spans drawn
    pub fn fill_polygon(&mut self, vertices: &[Vertex], color: Rgb<u8>) -> Result<usize, FillError> {
        let spans = fill(vertices)?;
        self.render_spans(&spans, color);
        Ok(spans.len())
    }
    /// Raw RGB bytes, row major
    pub fn as_bytes(&self) -> &[u8] {
        self.img.as_raw()
    }
    pub fn into_image(self) -> RgbImage {
        self.img
    }
    /// Write the canvas, format is taken from the extension
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<(), ImageError> {
        self.img.save(filename)
    }
}

/// Compare two image files pixel by pixel
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool, ImageError> {
    let a = image::open(f1)?.to_rgb8();
    let b = image::open(f2)?.to_rgb8();
    if a.dimensions() != b.dimensions() {
        log::debug!("IMG_DIFF: size {:?} != {:?}", a.dimensions(), b.dimensions());
        return Ok(false);
    }
    let mut flag = true;
    for (x, y, p) in a.enumerate_pixels() {
        let q = b.get_pixel(x, y);
        if p != q {
            log::debug!("IMG_DIFF: [{},{}]: {:?} {:?}", x, y, p, q);
            flag = false;
        }
    }
    Ok(flag)
}
