use crate::error::{Error, Result};
use crate::frontmatter;
use serde_yaml::{Mapping, Value};
use std::path::Path;
use tracing::debug;

/// Printed when a document does not declare `test.local_database`.
pub const DEFAULT_DATABASE_PATH: &str = "api/to-do-db-source.json";

/// Database path declared in the document's frontmatter, without leading slashes.
///
/// Every failure (no frontmatter, bad YAML, wrong shape or type) yields `None`.
pub fn extract(content: &str) -> Option<String> {
    try_extract(content)
        .inspect_err(|err| debug!(error = %err, "no database path in document"))
        .ok()
}

/// Like [`extract`], but reads the document first. An unreadable file yields `None`.
pub fn extract_from_file(path: &Path) -> Option<String> {
    let content = frontmatter::read_document(path)
        .inspect_err(|err| debug!(error = %err, "cannot read document"))
        .ok()?;
    extract(&content)
}

pub fn try_extract(content: &str) -> Result<String> {
    let metadata = frontmatter::parse_frontmatter(content)?;
    let db_path = local_database(&metadata)?;
    Ok(strip_leading_slashes(db_path).to_owned())
}

pub fn local_database(metadata: &Mapping) -> Result<&str> {
    let test_config = match metadata.get("test") {
        Some(Value::Mapping(test_config)) => test_config,
        Some(other) => {
            return Err(Error::TestSectionNotMapping {
                found: frontmatter::kind(other),
            })
        }
        None => return Err(Error::MissingTestSection),
    };

    match test_config.get("local_database") {
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(other) => Err(Error::LocalDatabaseNotString {
            found: frontmatter::kind(other),
        }),
        None => Err(Error::MissingLocalDatabase),
    }
}

pub fn strip_leading_slashes(s: &str) -> &str {
    s.trim_start_matches('/')
}

/// The path to print: the extracted one, or `default` when nothing usable was found.
pub fn resolve(extracted: Option<String>, default: &str) -> String {
    match extracted {
        Some(db_path) if !db_path.is_empty() => db_path,
        _ => strip_leading_slashes(default).to_owned(),
    }
}
