//! Pixel buffers
//!
//! A pixel buffer is a row-major grid of packed 32-bit pixels with explicit
//! width and height. Two types cover the two ownership situations:
//!
//! - [`PixelGrid`] borrows caller-owned storage mutably. Every pass in the
//!   workspace operates on a grid, in place, and never allocates.
//! - [`Pix`] owns its storage. It is what the loader returns and what the
//!   command-line tool and tests hold on to across several passes.
//!
//! Both carry their [`LaneOrder`] as a type parameter.
//!
//! A buffer with zero width or zero height is valid; every operation on it
//! is a no-op.

mod flip;
mod swap;

use crate::error::{Error, Result};
use crate::order::LaneOrder;
use std::marker::PhantomData;

fn checked_len(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(Error::InvalidDimension { width, height })
}

/// Mutable view of caller-owned pixel storage.
#[derive(Debug)]
pub struct PixelGrid<'a, O: LaneOrder> {
    data: &'a mut [u32],
    width: u32,
    height: u32,
    _order: PhantomData<O>,
}

impl<'a, O: LaneOrder> PixelGrid<'a, O> {
    /// Wrap `data` as a `width` x `height` grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if `data.len()` is not exactly
    /// `width * height`, or [`Error::InvalidDimension`] if that product
    /// overflows.
    pub fn new(data: &'a mut [u32], width: u32, height: u32) -> Result<Self> {
        let len = checked_len(width, height)?;
        if data.len() != len {
            return Err(Error::BufferSizeMismatch {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            _order: PhantomData,
        })
    }

    /// Get the grid width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the grid height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Raw pixel storage, row-major.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &*self.data
    }

    /// Mutable raw pixel storage, row-major.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut *self.data
    }

    /// Get row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u32] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.data[start..start + w]
    }

    /// Get row `y` mutably.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u32] {
        let w = self.width as usize;
        let start = y as usize * w;
        &mut self.data[start..start + w]
    }

    /// Get row `y` and its mirror row `height - 1 - y` at the same time.
    ///
    /// Returns `(top, bottom)`.
    ///
    /// # Panics
    ///
    /// Panics unless `y < height / 2`, i.e. the two rows are distinct and
    /// `y` is in the upper half.
    pub fn mirrored_rows_mut(&mut self, y: u32) -> (&mut [u32], &mut [u32]) {
        assert!(
            y < self.height / 2,
            "row {y} has no distinct mirror in a grid of height {}",
            self.height
        );
        let w = self.width as usize;
        let bottom_y = (self.height - 1 - y) as usize;
        let (upper, lower) = self.data.split_at_mut(bottom_y * w);
        let top_start = y as usize * w;
        (&mut upper[top_start..top_start + w], &mut lower[..w])
    }

    /// Reinterpret the same storage under another lane order without
    /// touching any byte.
    fn retag<P: LaneOrder>(self) -> PixelGrid<'a, P> {
        PixelGrid {
            data: self.data,
            width: self.width,
            height: self.height,
            _order: PhantomData,
        }
    }
}

/// Owned pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pix<O: LaneOrder> {
    data: Vec<u32>,
    width: u32,
    height: u32,
    _order: PhantomData<O>,
}

impl<O: LaneOrder> Pix<O> {
    /// Create a buffer filled with zero pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width * height` overflows.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = checked_len(width, height)?;
        Ok(Self {
            data: vec![0; len],
            width,
            height,
            _order: PhantomData,
        })
    }

    /// Take ownership of existing storage.
    ///
    /// # Errors
    ///
    /// Same conditions as [`PixelGrid::new`].
    pub fn from_vec(data: Vec<u32>, width: u32, height: u32) -> Result<Self> {
        let len = checked_len(width, height)?;
        if data.len() != len {
            return Err(Error::BufferSizeMismatch {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            _order: PhantomData,
        })
    }

    /// Build a buffer by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> u32) -> Result<Self> {
        let mut pix = Self::new(width, height)?;
        for y in 0..height {
            for (x, px) in pix.grid().row_mut(y).iter_mut().enumerate() {
                *px = f(x as u32, y);
            }
        }
        Ok(pix)
    }

    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw pixel storage, row-major.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Get the pixel at `(x, y)`, or `None` if out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Set the pixel at `(x, y)`. Out-of-bounds writes are ignored and
    /// reported by returning `false`.
    pub fn set_pixel(&mut self, x: u32, y: u32, value: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.data[y as usize * self.width as usize + x as usize] = value;
        true
    }

    /// Borrow the storage as a mutable grid.
    pub fn grid(&mut self) -> PixelGrid<'_, O> {
        PixelGrid {
            data: &mut self.data,
            width: self.width,
            height: self.height,
            _order: PhantomData,
        }
    }

    /// Release the storage.
    pub fn into_vec(self) -> Vec<u32> {
        self.data
    }

    fn retag<P: LaneOrder>(self) -> Pix<P> {
        Pix {
            data: self.data,
            width: self.width,
            height: self.height,
            _order: PhantomData,
        }
    }
}
