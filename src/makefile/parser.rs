use std::path::{Path, PathBuf};

use crate::makefile::{IncludeError, Target, extract_includes, extract_targets};

#[derive(Debug)]
#[derive(thiserror::Error)]
pub enum ParseError {
    #[error("Error reading makefile {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parsing included makefile: {0}")]
    Include(#[from] IncludeError),
    #[error("parsing included makefile: {0}")]
    Included(Box<ParseError>),
    #[error("cyclic include of makefile {}", .0.display())]
    CyclicInclude(PathBuf),
}

/// Parses a makefile and, optionally, the makefiles it includes
///
/// The targets of all the parsed files are merged and sorted by name. Targets
/// with the same name are all kept, in the order they were found.
#[derive(Debug, Clone)]
pub struct MakefileParser {
    recursive: bool,
    base_dir: PathBuf,
}

impl Default for MakefileParser {
    fn default() -> Self {
        Self {
            recursive: true,
            base_dir: PathBuf::new(),
        }
    }
}

impl MakefileParser {
    pub fn new() -> Self {
        Default::default()
    }

    /// Follow include directives, `true` by default
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Directory relative include patterns are resolved against
    ///
    /// Defaults to the current directory, as `make` does.
    pub fn base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Vec<Target>, ParseError> {
        let path = path.as_ref();
        let source = read_makefile(path)?;

        let mut stack = Vec::new();
        if self.recursive {
            stack.push(canonicalize(path)?);
        }

        let mut targets = Vec::new();
        self.collect(&source, &mut stack, &mut targets)?;
        Ok(sorted(targets))
    }

    pub fn parse_source(&self, source: &str) -> Result<Vec<Target>, ParseError> {
        let mut targets = Vec::new();
        self.collect(source, &mut Vec::new(), &mut targets)?;
        Ok(sorted(targets))
    }

    /// `stack` holds the canonical paths of the files being parsed, from the
    /// root down to the current one.
    fn collect(
        &self,
        source: &str,
        stack: &mut Vec<PathBuf>,
        targets: &mut Vec<Target>,
    ) -> Result<(), ParseError> {
        targets.extend(extract_targets(source));

        if !self.recursive {
            return Ok(());
        }

        for path in extract_includes(source, &self.base_dir)? {
            self.collect_included(&path, stack, targets)
                .map_err(|e| ParseError::Included(Box::new(e)))?;
        }

        Ok(())
    }

    fn collect_included(
        &self,
        path: &Path,
        stack: &mut Vec<PathBuf>,
        targets: &mut Vec<Target>,
    ) -> Result<(), ParseError> {
        let canonical = canonicalize(path)?;
        if stack.contains(&canonical) {
            return Err(ParseError::CyclicInclude(path.to_path_buf()));
        }

        let source = read_makefile(path)?;

        stack.push(canonical);
        let result = self.collect(&source, stack, targets);
        stack.pop();
        result
    }
}

/// Parses the makefile at `path`
pub fn parse_file(path: impl AsRef<Path>, recursive: bool) -> Result<Vec<Target>, ParseError> {
    MakefileParser::new().recursive(recursive).parse_file(path)
}

/// Parses makefile source that was already read by the caller
pub fn parse_source(source: &str, recursive: bool) -> Result<Vec<Target>, ParseError> {
    MakefileParser::new().recursive(recursive).parse_source(source)
}

fn read_makefile(path: &Path) -> Result<String, ParseError> {
    log::debug!("reading makefile {}", path.display());
    std::fs::read_to_string(path).map_err(|source| ParseError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn canonicalize(path: &Path) -> Result<PathBuf, ParseError> {
    path.canonicalize().map_err(|source| ParseError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn sorted(mut targets: Vec<Target>) -> Vec<Target> {
    targets.sort_by(|a, b| a.name.cmp(&b.name));
    targets
}
