//! Satura - Saturation adjustment for packed 32-bit RGBA images
//!
//! # Overview
//!
//! Satura changes how far every pixel of an image sits from gray:
//!
//! - Packed pixel buffers tagged with their byte order at the type level
//! - RGB <-> HSV, HSL and linear light conversions
//! - A fused saturate + vertical flip pass with a scalar and a chunked engine
//! - A model-selectable saturate pass (HSV, HSL, sRGB or linear luminance)
//! - PNG loading and saving
//!
//! # Example
//!
//! ```
//! use satura::color::{Engine, pix_saturate_flip};
//! use satura::{DisplayOrder, Pix};
//!
//! let mut pix = Pix::<DisplayOrder>::from_vec(vec![0xff_c0_40_20; 6], 3, 2).unwrap();
//! pix_saturate_flip(&mut pix.grid(), 1.5, Engine::Vector);
//! assert_eq!(pix.width(), 3);
//! assert_eq!(pix.height(), 2);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use satura_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use satura_color as color;
pub use satura_io as io;
