//! Committed raster image storage.

use super::color::{Color, TRANSPARENT};
use crate::util::Point;
use thiserror::Error;

/// Errors reported by bounded buffer access.
///
/// None of these are fatal; callers are expected to clip coordinates or drop
/// the offending operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BufferError {
    #[error("Pixel ({x}, {y}) is outside the {width}x{height} buffer")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    #[error("Snapshot is {found_width}x{found_height} but the buffer is {width}x{height}")]
    SizeMismatch {
        width: u32,
        height: u32,
        found_width: u32,
        found_height: u32,
    },
}

/// How a drawing primitive combines with the existing pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composite {
    /// Overwrite covered pixels with the stroke color
    Paint,
    /// Force covered pixels to full transparency
    Erase,
}

impl Composite {
    /// The color a covered pixel ends up with.
    pub(crate) fn resolve(self, color: Color) -> Color {
        match self {
            Composite::Paint => color,
            Composite::Erase => TRANSPARENT,
        }
    }
}

/// Fixed-size RGBA pixel grid.
///
/// Every in-range coordinate always holds a defined color; out-of-range access
/// through [`get`](Self::get)/[`set`](Self::set) is rejected with
/// [`BufferError::OutOfBounds`]. Drawing primitives clip silently instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

/// Immutable, independently owned copy of a buffer's full contents.
///
/// A snapshot never aliases the buffer it was taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    width: u32,
    height: u32,
    pixels: Box<[Color]>,
}

impl Snapshot {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reads a pixel from the snapshot, or `None` when out of range.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        (x < self.width && y < self.height)
            .then(|| self.pixels[(y * self.width + x) as usize])
    }
}

impl PixelBuffer {
    /// Creates a fully transparent buffer.
    ///
    /// Zero dimensions are bumped to 1 so the buffer is never empty.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, TRANSPARENT)
    }

    /// Creates a buffer with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns true if the coordinate addresses a pixel of this buffer.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Result<usize, BufferError> {
        if self.in_bounds(x, y) {
            Ok(y as usize * self.width as usize + x as usize)
        } else {
            Err(BufferError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Reads the pixel at `(x, y)`.
    pub fn get(&self, x: i32, y: i32) -> Result<Color, BufferError> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Writes the pixel at `(x, y)`.
    pub fn set(&mut self, x: i32, y: i32, color: Color) -> Result<(), BufferError> {
        let i = self.index(x, y)?;
        self.pixels[i] = color;
        Ok(())
    }

    /// Convenience wrapper around [`get`](Self::get) for a [`Point`].
    pub fn get_point(&self, point: Point) -> Result<Color, BufferError> {
        self.get(point.x, point.y)
    }

    /// Writes a pixel, silently dropping out-of-range coordinates.
    ///
    /// Returns true if the pixel was inside the buffer.
    pub(crate) fn put_clipped(&mut self, x: i32, y: i32, color: Color) -> bool {
        match self.index(x, y) {
            Ok(i) => {
                self.pixels[i] = color;
                true
            }
            Err(_) => false,
        }
    }

    /// Sets every pixel to `color`.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Row-major view of all pixels.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Row-major RGBA8 bytes, suitable for image encoders and texture uploads.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_array()).collect()
    }

    /// Counts pixels whose color differs from `color`.
    pub fn count_not(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&c| c != color).count()
    }

    /// Takes a deep copy of the current contents.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone().into_boxed_slice(),
        }
    }

    /// Replaces the entire contents with a snapshot's pixels.
    ///
    /// Dimensions never change: a snapshot of a different size is rejected.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), BufferError> {
        if snapshot.width != self.width || snapshot.height != self.height {
            return Err(BufferError::SizeMismatch {
                width: self.width,
                height: self.height,
                found_width: snapshot.width,
                found_height: snapshot.height,
            });
        }
        self.pixels.copy_from_slice(&snapshot.pixels);
        Ok(())
    }

    /// Returns true if the buffer currently matches the snapshot pixel-for-pixel.
    pub fn matches(&self, snapshot: &Snapshot) -> bool {
        self.width == snapshot.width
            && self.height == snapshot.height
            && *self.pixels == *snapshot.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, RED};

    #[test]
    fn new_buffer_is_transparent() {
        let buffer = PixelBuffer::new(4, 3);
        assert_eq!(buffer.pixels().len(), 12);
        assert_eq!(buffer.count_not(TRANSPARENT), 0);
    }

    #[test]
    fn zero_dimensions_are_bumped() {
        let buffer = PixelBuffer::new(0, 0);
        assert_eq!((buffer.width(), buffer.height()), (1, 1));
    }

    #[test]
    fn get_and_set_reject_out_of_range() {
        let mut buffer = PixelBuffer::new(4, 4);
        assert!(buffer.set(3, 3, RED).is_ok());
        assert_eq!(buffer.get(3, 3), Ok(RED));

        assert_eq!(
            buffer.set(4, 0, RED),
            Err(BufferError::OutOfBounds {
                x: 4,
                y: 0,
                width: 4,
                height: 4
            })
        );
        assert!(buffer.get(-1, 2).is_err());
        assert!(buffer.get(0, 4).is_err());
    }

    #[test]
    fn snapshot_does_not_alias_live_buffer() {
        let mut buffer = PixelBuffer::new(2, 2);
        buffer.set(0, 0, RED).unwrap();
        let snapshot = buffer.snapshot();

        buffer.set(0, 0, BLUE).unwrap();
        buffer.set(1, 1, BLUE).unwrap();

        assert_eq!(snapshot.pixel(0, 0), Some(RED));
        assert_eq!(snapshot.pixel(1, 1), Some(TRANSPARENT));
        assert!(!buffer.matches(&snapshot));
    }

    #[test]
    fn restore_replaces_contents() {
        let mut buffer = PixelBuffer::new(3, 3);
        let blank = buffer.snapshot();
        buffer.fill(RED);

        buffer.restore(&blank).unwrap();
        assert!(buffer.matches(&blank));
        assert_eq!(buffer.count_not(TRANSPARENT), 0);
    }

    #[test]
    fn restore_rejects_different_dimensions() {
        let mut buffer = PixelBuffer::new(3, 3);
        let other = PixelBuffer::filled(2, 3, RED).snapshot();
        assert!(matches!(
            buffer.restore(&other),
            Err(BufferError::SizeMismatch { .. })
        ));
        assert_eq!(buffer.count_not(TRANSPARENT), 0);
    }

    #[test]
    fn rgba_bytes_are_row_major() {
        let mut buffer = PixelBuffer::new(2, 1);
        buffer.set(1, 0, BLUE).unwrap();
        assert_eq!(buffer.to_rgba_bytes(), vec![0, 0, 0, 0, 0, 0, 255, 255]);
    }
}
