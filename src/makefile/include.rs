use std::path::{Path, PathBuf};

use crate::makefile::{HomeDirNotFound, expand_home};

#[derive(Debug)]
#[derive(thiserror::Error)]
pub enum IncludeError {
    #[error("invalid include pattern `{0}`: {1}")]
    Pattern(String, glob::PatternError),
    #[error(transparent)]
    HomeDir(#[from] HomeDirNotFound),
}

/// Resolves the files included by a makefile
///
/// Both `include` and `-include` directives are recognized. Each argument is a
/// glob pattern, `~/` is expanded to the user home and relative patterns are
/// resolved against `base_dir` (an empty path meaning the current directory).
///
/// Paths are returned in directive order, then pattern order, then match
/// order. Patterns that match nothing are ignored.
pub fn extract_includes(source: &str, base_dir: &Path) -> Result<Vec<PathBuf>, IncludeError> {
    let re = regex!(r"^-?include[ \t]+(.+)$");

    let mut included = Vec::new();
    for line in source.lines() {
        let Some(captures) = re.captures(line) else {
            continue;
        };
        for pattern in captures[1].split_whitespace() {
            included.extend(glob_pattern(pattern, base_dir)?);
        }
    }

    Ok(included)
}

fn glob_pattern(pattern: &str, base_dir: &Path) -> Result<Vec<PathBuf>, IncludeError> {
    let expanded = expand_home(pattern)?;
    let full_pattern = if expanded.is_relative() && !base_dir.as_os_str().is_empty() {
        Path::new(&glob::Pattern::escape(&base_dir.to_string_lossy()))
            .join(&expanded)
            .to_string_lossy()
            .into_owned()
    } else {
        expanded.to_string_lossy().into_owned()
    };

    let entries = glob::glob(&full_pattern)
        .map_err(|e| IncludeError::Pattern(pattern.to_string(), e))?;

    let mut paths = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) => paths.push(path),
            Err(e) => log::warn!("skipping {}: {}", e.path().display(), e.error()),
        }
    }
    log::debug!("include pattern `{}` resolved to {:?}", full_pattern, paths);

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn touch(dir: &Path, names: &[&str]) {
        for name in names {
            fs::write(dir.join(name), "").unwrap();
        }
    }

    #[test]
    fn plain_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["Makefile", "README.md", "LICENSE.txt"]);

        let source = "
include Makefile README.md
include LICENSE.txt
	";
        let included = extract_includes(source, dir.path()).unwrap();
        assert_eq!(
            included,
            vec![
                dir.path().join("Makefile"),
                dir.path().join("README.md"),
                dir.path().join("LICENSE.txt"),
            ]
        );
    }

    #[test]
    fn empty_base_dir_keeps_paths_as_written() {
        let included = extract_includes("include Cargo.toml src/lib.rs\n", Path::new("")).unwrap();
        assert_eq!(included, vec![PathBuf::from("Cargo.toml"), PathBuf::from("src/lib.rs")]);
    }

    #[test]
    fn glob_patterns_in_pattern_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("mk")).unwrap();
        touch(&dir.path().join("mk"), &["b.mk", "a.mk", "notes.txt"]);
        touch(dir.path(), &["z.mk"]);

        let included = extract_includes("include z.mk mk/*.mk\n", dir.path()).unwrap();
        assert_eq!(
            included,
            vec![
                dir.path().join("z.mk"),
                dir.path().join("mk/a.mk"),
                dir.path().join("mk/b.mk"),
            ]
        );
    }

    #[test]
    fn soft_include() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["soft.mk"]);

        let included = extract_includes("-include soft.mk\n", dir.path()).unwrap();
        assert_eq!(included, vec![dir.path().join("soft.mk")]);
    }

    #[test]
    fn missing_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let included = extract_includes("include missing.mk *.none\n", dir.path()).unwrap();
        assert!(included.is_empty());
    }

    #[test]
    fn absolute_patterns_ignore_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["abs.mk"]);
        let source = format!("include {}\n", dir.path().join("abs.mk").display());

        let included = extract_includes(&source, Path::new("/nonexistent")).unwrap();
        assert_eq!(included, vec![dir.path().join("abs.mk")]);
    }

    #[test]
    fn home_patterns_ignore_base_dir() {
        let home = dirs::home_dir().unwrap();
        let dir = tempfile::tempdir_in(&home).unwrap();
        touch(dir.path(), &["a.mk", "notes.txt"]);
        let name = dir.path().file_name().unwrap().to_string_lossy();

        let source = format!("include ~/{name}/*.mk\n");
        let included = extract_includes(&source, Path::new("/nonexistent")).unwrap();
        assert_eq!(included, vec![home.join(&*name).join("a.mk")]);
    }

    #[test]
    fn invalid_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract_includes("include [broken\n", dir.path()).unwrap_err();
        assert!(matches!(err, IncludeError::Pattern(ref p, _) if p == "[broken"), "{err}");
    }

    #[test]
    fn not_a_directive() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["x.mk"]);
        let source = "includes: x.mk\n\tinclude x.mk\n# include x.mk\ninclude\n";
        assert!(extract_includes(source, dir.path()).unwrap().is_empty());
    }
}
