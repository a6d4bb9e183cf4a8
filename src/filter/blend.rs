//! Porter-Duff blend modes and the constant-colour blend filter.

use std::fmt;

use palette::blend::Compose;

use crate::types::Colour;

use super::ColourFilter;

/// Porter-Duff compositing rule between a source and a destination.
///
/// Computed on premultiplied colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendMode {
    /// Neither source nor destination.
    Clear,
    /// Source only.
    Src,
    /// Destination only.
    Dst,
    /// Source over destination.
    #[default]
    SrcOver,
    /// Destination over source.
    DstOver,
    /// Source where the destination is visible.
    SrcIn,
    /// Destination where the source is visible.
    DstIn,
    /// Source where the destination is not visible.
    SrcOut,
    /// Destination where the source is not visible.
    DstOut,
    /// Source over destination, masked by destination alpha.
    SrcAtop,
    /// Destination over source, masked by source alpha.
    DstAtop,
    /// Source and destination where they do not overlap.
    Xor,
    /// Sum of source and destination.
    Plus,
}

impl BlendMode {
    /// Composite `src` onto `dst`.
    pub fn compose(self, src: Colour, dst: Colour) -> Colour {
        let s = src.premultiplied();
        let d = dst.premultiplied();

        let out = match self {
            BlendMode::Clear => return Colour::TRANSPARENT,
            BlendMode::Src => return src,
            BlendMode::Dst => return dst,
            BlendMode::SrcOver if src.is_opaque() || dst.is_transparent() => return src,
            BlendMode::SrcOver => s.over(d),
            BlendMode::DstOver => d.over(s),
            BlendMode::SrcIn => s.inside(d),
            BlendMode::DstIn => d.inside(s),
            BlendMode::SrcOut => s.outside(d),
            BlendMode::DstOut => d.outside(s),
            BlendMode::SrcAtop => s.atop(d),
            BlendMode::DstAtop => d.atop(s),
            BlendMode::Xor => s.xor(d),
            BlendMode::Plus => s.plus(d),
        };

        Colour::from_premultiplied(out)
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlendMode::Clear => "clear",
            BlendMode::Src => "src",
            BlendMode::Dst => "dst",
            BlendMode::SrcOver => "src-over",
            BlendMode::DstOver => "dst-over",
            BlendMode::SrcIn => "src-in",
            BlendMode::DstIn => "dst-in",
            BlendMode::SrcOut => "src-out",
            BlendMode::DstOut => "dst-out",
            BlendMode::SrcAtop => "src-atop",
            BlendMode::DstAtop => "dst-atop",
            BlendMode::Xor => "xor",
            BlendMode::Plus => "plus",
        };
        f.write_str(name)
    }
}

/// Blends a constant colour onto every pixel.
///
/// The constant is the source and the pixel is the destination, so
/// `SrcAtop` tints the visible shape of an image without spilling past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlendModeFilter {
    pub colour: Colour,
    pub mode: BlendMode,
}

impl BlendModeFilter {
    pub fn new(colour: Colour, mode: BlendMode) -> Self {
        Self { colour, mode }
    }

    /// Monochrome tint: `colour` drawn source-atop.
    pub fn tint(colour: Colour) -> Self {
        Self::new(colour, BlendMode::SrcAtop)
    }
}

impl ColourFilter for BlendModeFilter {
    fn filter(&self, colour: Colour) -> Colour {
        self.mode.compose(self.colour, colour)
    }
}
