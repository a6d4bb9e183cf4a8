//! Colour type, packed ARGB conversion and hex parsing.

use std::fmt;
use std::str::FromStr;

use palette::blend::PreAlpha;
use palette::{Srgb, Srgba};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{BitmapError, Result};

/// An RGBA colour value with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Unpack a `0xAARRGGBB` colour integer.
    pub const fn from_argb(argb: u32) -> Self {
        Self::new(
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        )
    }

    /// Pack into a `0xAARRGGBB` colour integer.
    pub const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RGBA` (4 digits, expanded to 8)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.is_ascii() {
            return Err(invalid_hex(s));
        }

        match hex.len() {
            3 | 4 => {
                // Short form: each digit is doubled
                let mut channels = [255u8; 4];
                for (slot, c) in channels.iter_mut().zip(hex.chars()) {
                    let d = parse_hex_digit(c)?;
                    *slot = d << 4 | d;
                }
                let [r, g, b, a] = channels;
                Ok(Self::new(r, g, b, a))
            }
            6 | 8 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                let a = if hex.len() == 8 {
                    parse_hex_byte(&hex[6..8])?
                } else {
                    255
                };
                Ok(Self::new(r, g, b, a))
            }
            _ => Err(invalid_hex(s)),
        }
    }

    /// Convert to RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Premultiplied floating point form, used for compositing.
    pub(crate) fn premultiplied(self) -> PreAlpha<Srgb<f32>> {
        let srgba: Srgba<f32> = Srgba::<u8>::new(self.r, self.g, self.b, self.a).into_format();
        PreAlpha::from(srgba)
    }

    /// Back from premultiplied form, rounding each channel.
    pub(crate) fn from_premultiplied(pre: PreAlpha<Srgb<f32>>) -> Self {
        // Zero alpha loses the colour channels anyway
        if pre.alpha <= 0.0 {
            return Self::TRANSPARENT;
        }
        let srgba: Srgba<u8> = Srgba::<f32>::from(pre).into_format();
        Self::new(srgba.red, srgba.green, srgba.blue, srgba.alpha)
    }

    /// Premultiplied channels as `[r, g, b, a]` in `0.0..=1.0`.
    pub(crate) fn to_premultiplied_rgba(self) -> [f32; 4] {
        let pre = self.premultiplied();
        [pre.color.red, pre.color.green, pre.color.blue, pre.alpha]
    }

    pub(crate) fn from_premultiplied_rgba([r, g, b, a]: [f32; 4]) -> Self {
        Self::from_premultiplied(PreAlpha {
            color: Srgb::new(r, g, b),
            alpha: a,
        })
    }
}

impl From<image::Rgba<u8>> for Colour {
    fn from(px: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = px.0;
        Self::new(r, g, b, a)
    }
}

impl From<Colour> for image::Rgba<u8> {
    fn from(colour: Colour) -> Self {
        image::Rgba(colour.to_rgba())
    }
}

impl FromStr for Colour {
    type Err = BitmapError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

fn invalid_hex(s: &str) -> BitmapError {
    BitmapError::Parse {
        message: format!("Invalid hex colour: {}", s),
        help: Some("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format".to_string()),
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| BitmapError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| BitmapError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
