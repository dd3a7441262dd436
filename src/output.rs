use std::io::{self, Write};

use terminal_size::{Height, Width};

use crate::render::scale::{Dimensions, FALLBACK_TERMINAL};

pub struct Output {
    pub term: Dimensions,
}

impl Output {
    pub fn new() -> Self {
        Self::with_term(terminal_dimensions())
    }

    pub fn with_term(term: Dimensions) -> Self {
        Self { term }
    }

    /// Writes a finished document to stdout in one go.
    pub fn emit(&self, doc: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(doc.as_bytes())?;
        stdout.flush()
    }
}

/// Size of the terminal attached to stdout, or 80x24 when there is none.
/// Only stdout is asked: output redirected to a file gets the fallback even
/// when stderr or stdin is still a terminal.
pub fn terminal_dimensions() -> Dimensions {
    to_dimensions(stdout_size())
}

#[cfg(unix)]
fn stdout_size() -> Option<(Width, Height)> {
    use std::os::unix::io::AsRawFd;
    terminal_size::terminal_size_using_fd(io::stdout().as_raw_fd())
}

#[cfg(windows)]
fn stdout_size() -> Option<(Width, Height)> {
    use std::os::windows::io::AsRawHandle;
    terminal_size::terminal_size_using_handle(io::stdout().as_raw_handle())
}

fn to_dimensions(size: Option<(Width, Height)>) -> Dimensions {
    size.map(|(w, h)| Dimensions::new(w.0 as u32, h.0 as u32))
        .unwrap_or(FALLBACK_TERMINAL)
}
