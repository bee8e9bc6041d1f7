use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a database path could not be extracted from a document.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("document does not start with a `---` frontmatter block")]
    MissingFrontMatter,

    #[error("frontmatter block has no closing `---` line")]
    UnterminatedFrontMatter,

    #[error("invalid frontmatter YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("frontmatter is not a mapping")]
    NotMapping,

    #[error("frontmatter has no `test` section")]
    MissingTestSection,

    #[error("`test` must be a mapping, found {found}")]
    TestSectionNotMapping { found: &'static str },

    #[error("`test` section has no `local_database` key")]
    MissingLocalDatabase,

    #[error("`test.local_database` must be a string, found {found}")]
    LocalDatabaseNotString { found: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
