//! Paint settings for canvas draws.

use std::fmt;

use crate::filter::{BlendMode, ColourFilter};

/// Resampling quality when a bitmap is drawn scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterQuality {
    /// Nearest-neighbour: crisp, blocky.
    Nearest,
    /// Bilinear: smooth. When downscaling the kernel widens to cover every
    /// source pixel, so a 1x1 target averages the whole image.
    #[default]
    Bilinear,
}

/// How a draw call samples, filters and blends.
#[derive(Clone, Copy, Default)]
pub struct Paint<'f> {
    pub quality: FilterQuality,
    pub colour_filter: Option<&'f dyn ColourFilter>,
    pub blend_mode: BlendMode,
}

impl<'f> Paint<'f> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quality(mut self, quality: FilterQuality) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_colour_filter(mut self, filter: &'f dyn ColourFilter) -> Self {
        self.colour_filter = Some(filter);
        self
    }

    pub fn with_blend_mode(mut self, mode: BlendMode) -> Self {
        self.blend_mode = mode;
        self
    }
}

impl fmt::Debug for Paint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paint")
            .field("quality", &self.quality)
            .field("colour_filter", &self.colour_filter.is_some())
            .field("blend_mode", &self.blend_mode)
            .finish()
    }
}
