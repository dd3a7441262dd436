//! Character-grid rendering
//!
//! Walks the raster once, top-to-bottom and left-to-right, emitting one
//! glyph per pixel and one line per row.
//!
//! Plain mode picks glyphs by luma. Color mode picks glyphs by the channel
//! average and wraps each one in a truecolor foreground escape; every row is
//! closed with a reset so colors never bleed into the next line or the
//! shell prompt.

use super::decoder::{Pixel, Raster};
use super::ramp::{GlyphRamp, Intensity};

const RESET: &str = "\x1b[0m";

pub fn render(img: &Raster, ramp: &GlyphRamp, color: bool) -> String {
    if color {
        render_truecolor(img, ramp)
    } else {
        render_gray(img, ramp)
    }
}

pub fn render_gray(img: &Raster, ramp: &GlyphRamp) -> String {
    let (width, height) = img.dimensions();
    let mut buf = String::with_capacity((width as usize + 1) * height as usize);

    for y in 0..height {
        for x in 0..width {
            let px = Pixel::from_rgba16(img.get_pixel(x, y));
            buf.push(ramp.glyph(Intensity::Luma.level(&px)));
        }
        buf.push('\n');
    }

    buf
}

pub fn render_truecolor(img: &Raster, ramp: &GlyphRamp) -> String {
    let (width, height) = img.dimensions();
    let mut buf = String::with_capacity((width as usize * 20 + 8) * height as usize);

    for y in 0..height {
        for x in 0..width {
            let px = Pixel::from_rgba16(img.get_pixel(x, y));
            let (r, g, b) = px.rgb8();
            write_fg(&mut buf, r, g, b);
            buf.push(ramp.glyph(Intensity::Average.level(&px)));
        }
        buf.push_str(RESET);
        buf.push('\n');
    }

    buf
}

#[inline]
fn write_fg(buf: &mut String, r: u8, g: u8, b: u8) {
    use std::fmt::Write;
    let _ = write!(buf, "\x1b[38;2;{};{};{}m", r, g, b);
}
