use std::path::{Path, PathBuf};

/// Makefile names in the order `make` looks them up
pub const MAKEFILE_NAMES: &[&str] = &["GNUmakefile", "makefile", "Makefile"];

/// Finds the makefile in the current directory
///
/// The returned path is relative, e.g. `Makefile`.
pub fn find_makefile() -> Option<PathBuf> {
    find_makefile_in(Path::new(""))
}

pub fn find_makefile_in(dir: impl AsRef<Path>) -> Option<PathBuf> {
    let dir = dir.as_ref();
    MAKEFILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(thiserror::Error)]
#[error("could not get current user home directory")]
pub struct HomeDirNotFound;

/// Expands a leading `~/` to the home directory of the current user
///
/// Other forms (`~`, `~user/...`) are returned unchanged.
pub fn expand_home(path: &str) -> Result<PathBuf, HomeDirNotFound> {
    match path.strip_prefix("~/") {
        Some(rest) => {
            let home = dirs::home_dir().ok_or(HomeDirNotFound)?;
            Ok(home.join(rest))
        }
        None => Ok(PathBuf::from(path)),
    }
}
