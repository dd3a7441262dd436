//! Fitting an image into the terminal viewport.

/// Share of the terminal height the image may use; the rest keeps the
/// prompt line visible.
pub const HEIGHT_MARGIN: f64 = 0.95;

/// Width correction for character cells being about twice as tall as wide.
pub const CELL_ASPECT: f64 = 2.5;

/// Terminal size used when the real one cannot be read.
pub const FALLBACK_TERMINAL: Dimensions = Dimensions::new(80, 24);

/// Width and height, in pixels for images or character cells for terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Output size for `img` rendered inside `term`.
///
/// Scales by height first (keeping a 5% margin) and widens by
/// [`CELL_ASPECT`]. If that overshoots the terminal width, scales by
/// width instead and takes the whole width.
///
/// Both image dimensions must be non-zero.
pub fn autoscale(img: Dimensions, term: Dimensions) -> Dimensions {
    let mut target_height = (term.height as f64 * HEIGHT_MARGIN) as u32;

    let ratio = target_height as f64 / img.height as f64;
    let mut new_width = (img.width as f64 * ratio * CELL_ASPECT) as u32;

    if new_width > term.width {
        let ratio = term.width as f64 / img.width as f64;
        target_height = (img.height as f64 * ratio) as u32;
        new_width = term.width;
    }

    Dimensions::new(new_width, target_height)
}
