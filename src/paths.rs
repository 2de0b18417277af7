//! Path helpers for the command-line inputs.

use std::path::{Path, PathBuf};

/// Location of the generated stylesheet, relative to the target repository root.
pub const STYLESHEET_PATH: &str = "FrontEnd/styles/images.scss";

/// Replaces a leading `~` with the current user's home directory.
///
/// Only `~` on its own or followed by a separator is expanded; `~name`
/// forms and every other path are returned as given, as is the path when
/// no home directory can be determined.
pub fn expand_tilde(path: impl AsRef<Path>) -> PathBuf {
    expand_tilde_with(path.as_ref(), dirs::home_dir())
}

fn expand_tilde_with(path: &Path, home: Option<PathBuf>) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match home {
        Some(home) if rest.as_os_str().is_empty() => home,
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

/// The stylesheet path inside the repository rooted at `root`.
pub fn stylesheet_file(root: impl AsRef<Path>) -> PathBuf {
    expand_tilde(root).join(STYLESHEET_PATH)
}
