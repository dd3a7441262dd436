//! Image to ASCII rendering
//!
//! Architecture:
//!   mod.rs     - Public API, render options
//!   decoder.rs - Loading, 16-bit widening, resizing
//!   scale.rs   - Fitting the image into the terminal
//!   ramp.rs    - Glyph ramps and intensity mapping
//!   ascii.rs   - Plain and truecolor text rendering

pub mod ascii;
pub mod decoder;
pub mod ramp;
pub mod scale;

use image::imageops::FilterType;
use image::GenericImageView;
use std::path::Path;

use crate::error::Error;
use crate::output::Output;
use ramp::GlyphRamp;
use scale::Dimensions;

/// Resampling filter used when autoscaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Filter {
    Nearest,
    Triangle,
    /// Bicubic, the closest to Mitchell-Netravali
    #[default]
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<Filter> for FilterType {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::Nearest => FilterType::Nearest,
            Filter::Triangle => FilterType::Triangle,
            Filter::CatmullRom => FilterType::CatmullRom,
            Filter::Gaussian => FilterType::Gaussian,
            Filter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub color: bool,
    pub autoscale: bool,
    pub filter: Filter,
    pub ramp: GlyphRamp,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: false,
            autoscale: true,
            filter: Filter::default(),
            ramp: GlyphRamp::default(),
        }
    }
}

/// Decodes `path` and renders it to a complete text document.
pub fn render_file(path: &Path, opts: &RenderOptions, out: &Output) -> Result<String, Error> {
    let img = decoder::load(path)?;

    let target = if opts.autoscale {
        let (w, h) = img.dimensions();
        let target = scale::autoscale(Dimensions::new(w, h), out.term);
        log::debug!(
            "autoscale {}x{} in {}x{} terminal -> {}x{}",
            w,
            h,
            out.term.width,
            out.term.height,
            target.width,
            target.height
        );
        Some(target)
    } else {
        None
    };

    let raster = decoder::prepare(&img, target, opts.filter.into());
    Ok(ascii::render(&raster, &opts.ramp, opts.color))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(dir: &Path, w: u32, h: u32) -> std::path::PathBuf {
        let path = dir.join("img.png");
        let img = image::RgbImage::from_fn(w, h, |x, y| {
            image::Rgb([(x * 255 / w.max(1)) as u8, (y * 255 / h.max(1)) as u8, 90])
        });
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_render_file_autoscaled() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), 640, 480);
        let out = Output::with_term(scale::FALLBACK_TERMINAL);

        let doc = render_file(&path, &RenderOptions::default(), &out).unwrap();
        let lines: Vec<&str> = doc.lines().collect();
        assert_eq!(lines.len(), 22);
        assert!(lines.iter().all(|l| l.chars().count() == 73));
    }

    #[test]
    fn test_render_file_native_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), 12, 5);
        let out = Output::with_term(scale::FALLBACK_TERMINAL);
        let opts = RenderOptions {
            autoscale: false,
            ..RenderOptions::default()
        };

        let doc = render_file(&path, &opts, &out).unwrap();
        assert_eq!(doc.lines().count(), 5);
        assert!(doc.lines().all(|l| l.chars().count() == 12));
    }

    #[test]
    fn test_render_file_color() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), 8, 8);
        let out = Output::with_term(Dimensions::new(40, 10));
        let opts = RenderOptions {
            color: true,
            ..RenderOptions::default()
        };

        let doc = render_file(&path, &opts, &out).unwrap();
        assert!(doc.contains("\x1b[38;2;"));
        assert!(doc.lines().all(|l| l.ends_with("\x1b[0m")));
    }

    #[test]
    fn test_filter_maps_to_image_filter() {
        assert_eq!(FilterType::from(Filter::default()), FilterType::CatmullRom);
        assert_eq!(FilterType::from(Filter::Lanczos3), FilterType::Lanczos3);
    }
}
