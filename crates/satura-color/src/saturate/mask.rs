//! Lane layout and row-end masks for the chunked engine
//!
//! One step of the chunked engine holds `CHUNK` pixels of an upper row in
//! lanes `0..CHUNK` and the same columns of its mirror row in lanes
//! `CHUNK..LANES`. When the width is not a multiple of `CHUNK` the last
//! step of each row only has `width % CHUNK` real pixels per half; the
//! [`RowEndMask`] marks which lanes those are.

/// Pixels taken from each row per step
pub const CHUNK: usize = 4;

/// Lanes per step: one chunk from each of the two mirrored rows
pub(crate) const LANES: usize = 2 * CHUNK;

/// Per-lane write selection for one engine step
///
/// A selected lane takes the transformed pixel; an unselected lane keeps
/// the input pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowEndMask {
    lanes: [bool; LANES],
}

impl RowEndMask {
    /// Every lane selected
    pub const FULL: RowEndMask = RowEndMask {
        lanes: [true; LANES],
    };

    /// Build the mask for the last chunk of a row of `width` pixels.
    ///
    /// Lane `i` of either half is selected when `width % CHUNK == 0` or
    /// `i < width % CHUNK`.
    pub fn for_width(width: u32) -> Self {
        let rem = width as usize % CHUNK;
        let mut lanes = [false; LANES];
        for (i, lane) in lanes.iter_mut().enumerate() {
            *lane = rem == 0 || i % CHUNK < rem;
        }
        Self { lanes }
    }

    /// Whether lane `i` is selected
    #[inline]
    pub fn is_selected(&self, i: usize) -> bool {
        self.lanes[i]
    }

    #[cfg(test)]
    fn valid_per_row(&self) -> usize {
        self.lanes[..CHUNK].iter().filter(|&&l| l).count()
    }

    #[inline]
    pub(crate) fn lanes(&self) -> [bool; LANES] {
        self.lanes
    }
}
