//! Utility helpers shared across integration tests.

use std::{fs, path::Path};

/// Build a `String` from fragments, joined without separators.
///
/// Keeps long expected HTML readable in tests.
macro_rules! html {
    ($($part:expr),* $(,)?) => {{
        let mut out = String::new();
        $(out.push_str($part);)*
        out
    }};
}

/// Render the default anchor the linker emits for `href` and `text`.
pub fn anchor(href: &str, text: &str) -> String {
    format!(r#"<a href="{href}" target="_blank">{text}</a>"#)
}

/// Write `contents` to `dir/name` and return the full path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("failed to write temporary file");
    path
}
