use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Local(PathBuf),
    Remote(String), // url
}

/// Decide whether an image argument names a URL or a local file.
///
/// Only `http://` and `https://` count as remote, compared without regard
/// to case. Anything else, including paths that merely contain "http", is
/// treated as a file.
pub fn classify(target: &str) -> Source {
    let lower = target.trim_start().to_ascii_lowercase();

    if lower.starts_with("http://") || lower.starts_with("https://") {
        Source::Remote(target.trim().to_string())
    } else {
        Source::Local(PathBuf::from(target))
    }
}
