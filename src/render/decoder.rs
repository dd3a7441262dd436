//! Image decoding and preprocessing
//!
//! Handles:
//! - Opening a file and sniffing its format from content
//! - Widening to 16-bit RGBA
//! - Resizing to the dimensions picked by the autoscaler

use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, ImageBuffer, Rgba};
use std::path::Path;

use super::scale::Dimensions;
use crate::error::Error;

/// 16-bit RGBA raster, the only image shape the renderer reads.
pub type Raster = ImageBuffer<Rgba<u16>, Vec<u16>>;

/// One pixel with 16-bit channels, alpha already multiplied in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pixel {
    pub r: u16,
    pub g: u16,
    pub b: u16,
}

impl Pixel {
    /// Builds a pixel from straight (non-premultiplied) alpha.
    pub fn from_rgba16(rgba: &Rgba<u16>) -> Self {
        let a = rgba[3] as u32;
        let premul = |c: u16| (c as u32 * a / 0xffff) as u16;

        Self {
            r: premul(rgba[0]),
            g: premul(rgba[1]),
            b: premul(rgba[2]),
        }
    }

    /// Channels narrowed to 8 bits.
    #[inline]
    pub fn rgb8(&self) -> (u8, u8, u8) {
        ((self.r >> 8) as u8, (self.g >> 8) as u8, (self.b >> 8) as u8)
    }

    /// Perceptual gray in 0..=255.
    ///
    /// Weights are the usual 0.299/0.587/0.114 scaled by 2^16, applied to
    /// the 16-bit channels with rounding, then shifted back down to 8 bits.
    #[inline]
    pub fn luma(&self) -> u8 {
        let (r, g, b) = (self.r as u32, self.g as u32, self.b as u32);
        ((19595 * r + 38470 * g + 7471 * b + (1 << 15)) >> 24) as u8
    }

    /// Integer mean of the 8-bit channels.
    #[inline]
    pub fn average(&self) -> u8 {
        let (r, g, b) = self.rgb8();
        ((r as u32 + g as u32 + b as u32) / 3) as u8
    }
}

pub fn load(path: &Path) -> Result<DynamicImage, Error> {
    let open_err = |source: std::io::Error| Error::Open {
        path: path.to_path_buf(),
        source,
    };

    let img = image::io::Reader::open(path)
        .map_err(open_err)?
        .with_guessed_format()
        .map_err(open_err)?
        .decode()?;

    let (w, h) = img.dimensions();
    log::debug!("decoded {} ({}x{})", path.display(), w, h);
    Ok(img)
}

/// Widens to 16-bit RGBA and resizes when a target is given.
pub fn prepare(img: &DynamicImage, target: Option<Dimensions>, filter: FilterType) -> Raster {
    let rgba = img.to_rgba16();

    match target {
        Some(dim) if (dim.width, dim.height) != rgba.dimensions() => {
            // the resizer cannot produce an empty image
            let (w, h) = (dim.width.max(1), dim.height.max(1));
            imageops::resize(&rgba, w, h, filter)
        }
        _ => rgba,
    }
}
