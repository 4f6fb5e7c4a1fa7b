//! denoise-color - Pseudo-coloring for grayscale images
//!
//! Maps intensities to colors so that small differences in a denoised
//! image become visible:
//!
//! - **Intensity slicing** ([`intensity_slicing`]): random color per
//!   intensity interval
//! - **Color transformation** ([`color_transformation`]): phase-shifted
//!   sine per channel over the intervals

pub mod coloring;
pub mod error;

// Re-export core types
pub use denoise_core;

pub use error::{ColorError, ColorResult};

pub use coloring::{
    MAX_SLICES, SlicePalette, color_transformation, intensity_slicing, intensity_slicing_seeded,
};
