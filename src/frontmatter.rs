use crate::error::{Error, Result};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

const DELIMITER: &str = "---";

pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_frontmatter(content: &str) -> Result<Mapping> {
    let yaml_str = extract_block(content)?;
    if yaml_str.trim().is_empty() {
        return Err(Error::NotMapping);
    }

    let mut value: Value = serde_yaml::from_str(&yaml_str)?;
    // `<<: *anchor` keys stay literal unless merged explicitly.
    value.apply_merge()?;

    match value {
        Value::Mapping(mapping) => Ok(mapping),
        _ => Err(Error::NotMapping),
    }
}

fn extract_block(content: &str) -> Result<String> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.trim_start().lines();

    if !lines.next().is_some_and(is_delimiter) {
        return Err(Error::MissingFrontMatter);
    }

    let mut block = Vec::new();
    for line in lines {
        if is_delimiter(line) {
            return Ok(block.join("\n"));
        }
        block.push(line);
    }

    Err(Error::UnterminatedFrontMatter)
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

/// Name of a YAML value's type, for diagnostics.
pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
