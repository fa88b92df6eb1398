use serde::Serialize;

macro_rules! regex {
    ($re:literal $(,)?) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($re).expect("Invalid regex!"))
    }};
}

mod extract;
mod include;
mod parser;
mod probe;

pub use extract::extract_targets;
pub use include::{IncludeError, extract_includes};
pub use parser::{MakefileParser, ParseError, parse_file, parse_source};
pub use probe::{HomeDirNotFound, MAKEFILE_NAMES, expand_home, find_makefile, find_makefile_in};

/// A target declared in a makefile
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[derive(Serialize)]
pub struct Target {
    pub name: String,

    /// Trailing comment of the declaration line, empty if there is none
    pub description: String,

    /// Prerequisites in declaration order
    pub dependencies: Vec<String>,
}

impl Target {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            dependencies: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }
}
