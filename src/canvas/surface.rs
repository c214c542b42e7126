//! In-memory RGBA raster the user draws on.

use serde::{Deserialize, Serialize};

use crate::canvas::color::Color;

/// Bytes per stored pixel (RGBA8).
pub const PIXEL_SIZE: usize = 4;

/// Pixel value of an untouched surface (transparent black).
pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

/// A point in surface coordinates. May lie outside the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Fixed-size RGBA8 raster, row-major, top-left origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawingSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl DrawingSurface {
    /// Create a fully transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u8; width as usize * height as usize * PIXEL_SIZE],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes, `width * height * 4` long.
    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }

    /// Whether nothing has been drawn since creation or the last clear.
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|&b| b == 0)
    }

    /// Number of pixels that are not transparent.
    pub fn painted_pixels(&self) -> usize {
        self.pixels
            .chunks_exact(PIXEL_SIZE)
            .filter(|px| px[3] != 0)
            .count()
    }

    /// Reset every pixel to transparent.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    fn offset(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * PIXEL_SIZE)
    }

    /// Read a pixel, `None` when out of bounds.
    pub fn pixel(&self, x: i64, y: i64) -> Option<[u8; 4]> {
        let offset = self.offset(x, y)?;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.pixels[offset..offset + PIXEL_SIZE]);
        Some(px)
    }

    /// Write a pixel; out-of-bounds writes are dropped.
    pub fn put_pixel(&mut self, x: i64, y: i64, color: Color) {
        if let Some(offset) = self.offset(x, y) {
            self.pixels[offset..offset + PIXEL_SIZE].copy_from_slice(&color.to_rgba());
        }
    }

    /// Paint a `line_width`-sized square brush centered on `(x, y)`.
    pub fn stamp(&mut self, x: i64, y: i64, color: Color, line_width: u32) {
        let size = line_width.max(1) as i64;
        let start = -((size - 1) / 2);
        for dy in start..start + size {
            for dx in start..start + size {
                self.put_pixel(x + dx, y + dy, color);
            }
        }
    }

    /// Rasterize the segment `from → to` (both ends inclusive) with Bresenham.
    ///
    /// The segment is first clipped to the surface grown by the brush size,
    /// so the work done is bounded by the surface, not by the coordinates.
    pub fn draw_line(&mut self, from: Point, to: Point, color: Color, line_width: u32) {
        let margin = line_width.max(1) as i64;
        let bounds = Bounds {
            min_x: -margin,
            min_y: -margin,
            max_x: self.width as i64 - 1 + margin,
            max_y: self.height as i64 - 1 + margin,
        };
        let Some(((mut x, mut y), (x1, y1))) = clip_segment(
            (from.x as i64, from.y as i64),
            (to.x as i64, to.y as i64),
            bounds,
        ) else {
            return;
        };

        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.stamp(x, y, color, line_width);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Bounds {
    min_x: i64,
    min_y: i64,
    max_x: i64,
    max_y: i64,
}

/// Liang-Barsky clip of `from → to` against `bounds` (inclusive).
///
/// Endpoints already inside are returned unchanged; `None` when the segment
/// misses the rectangle entirely.
fn clip_segment(
    from: (i64, i64),
    to: (i64, i64),
    bounds: Bounds,
) -> Option<((i64, i64), (i64, i64))> {
    let (x0, y0) = (from.0 as f64, from.1 as f64);
    let dx = (to.0 - from.0) as f64;
    let dy = (to.1 - from.1) as f64;

    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    let edges = [
        (-dx, x0 - bounds.min_x as f64),
        (dx, bounds.max_x as f64 - x0),
        (-dy, y0 - bounds.min_y as f64),
        (dy, bounds.max_y as f64 - y0),
    ];

    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    let at = |t: f64, original: (i64, i64)| {
        if t == 0.0 {
            return from;
        }
        if t == 1.0 {
            return original;
        }
        let x = (x0 + t * dx).round() as i64;
        let y = (y0 + t * dy).round() as i64;
        (
            x.clamp(bounds.min_x, bounds.max_x),
            y.clamp(bounds.min_y, bounds.max_y),
        )
    };

    Some((at(t0, from), at(t1, to)))
}
