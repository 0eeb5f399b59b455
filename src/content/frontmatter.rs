//! Front-matter parsing

use serde_json::{Map, Value};

use super::ContentError;

/// Decoded front-matter of a markdown document
#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatter {
    /// Raw key/value data, not yet checked against a schema
    pub data: Value,
}

impl Default for FrontMatter {
    fn default() -> Self {
        Self {
            data: Value::Object(Map::new()),
        }
    }
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str), ContentError> {
        let Some((yaml, body)) = Self::split(content) else {
            return Ok((FrontMatter::default(), content));
        };

        if yaml.trim().is_empty() {
            return Ok((FrontMatter::default(), body));
        }

        let data = match serde_yaml::from_str::<Value>(yaml)? {
            Value::Null => Value::Object(Map::new()),
            data => data,
        };

        Ok((FrontMatter { data }, body))
    }

    /// Split a document into its YAML block and body.
    ///
    /// The document must open with a `---` line (blank lines before it are
    /// allowed) and contain a closing `---` line; otherwise `None`.
    pub fn split(content: &str) -> Option<(&str, &str)> {
        let content = content.trim_start_matches(['\n', '\r']);
        let rest = content.strip_prefix("---")?;
        let rest = rest
            .strip_prefix("\r\n")
            .or_else(|| rest.strip_prefix('\n'))?;

        let mut offset = 0;
        for line in rest.split_inclusive('\n') {
            if line.trim_end() == "---" {
                let yaml = &rest[..offset];
                let body = rest[offset + line.len()..].trim_start_matches(['\n', '\r']);
                return Some((yaml, body));
            }
            offset += line.len();
        }

        None
    }
}
