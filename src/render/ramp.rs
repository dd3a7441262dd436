//! Glyph ramps and the pixel → glyph intensity mapping
//!
//! A ramp runs from the lightest glyph (index 0) to the darkest (index N-1).
//! Intensity is an 8-bit level; the level selects an index by floor
//! division so that 0 lands on the first glyph and 255 on the last.

use super::decoder::Pixel;
use crate::error::Error;

/// Default ramp, lightest to darkest.
pub const DEFAULT_RAMP: &str = " .,:;i1tfLCG08@";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRamp {
    glyphs: Vec<char>,
}

impl GlyphRamp {
    pub fn new(glyphs: &str) -> Result<Self, Error> {
        let glyphs: Vec<char> = glyphs.chars().collect();
        if glyphs.len() < 2 {
            return Err(Error::InvalidRamp { len: glyphs.len() });
        }
        Ok(Self { glyphs })
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Index into the ramp for an 8-bit intensity level.
    #[inline]
    pub fn index(&self, level: u8) -> usize {
        level as usize * (self.len() - 1) / 255
    }

    #[inline]
    pub fn glyph(&self, level: u8) -> char {
        self.glyphs[self.index(level)]
    }
}

impl Default for GlyphRamp {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_RAMP.chars().collect(),
        }
    }
}

/// How a pixel collapses to a single intensity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intensity {
    /// Perceptual gray, used for plain output
    Luma,
    /// Integer mean of the 8-bit channels, used for colored output
    Average,
}

impl Intensity {
    #[inline]
    pub fn level(self, px: &Pixel) -> u8 {
        match self {
            Intensity::Luma => px.luma(),
            Intensity::Average => px.average(),
        }
    }
}
