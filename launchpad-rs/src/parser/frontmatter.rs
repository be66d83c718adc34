//! YAML frontmatter splitting, parsing and rendering.

use crate::error::{LaunchpadError, Result};
use crate::types::Frontmatter;
use serde_yaml::Value;
use std::path::Path;

/// Frontmatter extraction result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontmatterSplit<'a> {
    /// The raw YAML string (without delimiters).
    pub yaml: Option<&'a str>,
    /// Everything after the closing delimiter.
    pub body: &'a str,
}

impl<'a> FrontmatterSplit<'a> {
    fn none(content: &'a str) -> Self {
        Self {
            yaml: None,
            body: content,
        }
    }
}

/// Split content into frontmatter and body.
///
/// Frontmatter must open on the very first line with `---` and close with a
/// `---` on its own line. Anything else is treated as plain body.
pub fn split_frontmatter(content: &str) -> FrontmatterSplit<'_> {
    let yaml_start = if content.starts_with("---\n") {
        4
    } else if content.starts_with("---\r\n") {
        5
    } else {
        return FrontmatterSplit::none(content);
    };

    let rest = &content[yaml_start..];

    // An empty block closes immediately.
    if let Some(after) = rest.strip_prefix("---") {
        if after.is_empty() || after.starts_with('\n') || after.starts_with("\r\n") {
            return FrontmatterSplit {
                yaml: Some(""),
                body: strip_line_break(after),
            };
        }
    }

    let closing = rest
        .find("\n---\n")
        .or_else(|| rest.find("\n---\r\n"))
        .or_else(|| rest.ends_with("\n---").then(|| rest.len() - 4));

    match closing {
        Some(pos) => {
            let yaml = rest[..pos].trim_end_matches('\r');
            let after = &rest[pos + 4..];
            FrontmatterSplit {
                yaml: Some(yaml),
                body: strip_line_break(after),
            }
        }
        None => FrontmatterSplit::none(content),
    }
}

fn strip_line_break(s: &str) -> &str {
    s.strip_prefix("\r\n")
        .or_else(|| s.strip_prefix('\n'))
        .unwrap_or(s)
}

/// Extract frontmatter as a raw YAML string.
pub fn extract_frontmatter(content: &str) -> Option<&str> {
    split_frontmatter(content).yaml
}

/// Parse frontmatter with path context for error messages.
///
/// Returns `Ok(None)` when the note has no frontmatter block.
pub fn parse_frontmatter_with_path(content: &str, path: &Path) -> Result<Option<Value>> {
    match extract_frontmatter(content) {
        Some(yaml) if yaml.trim().is_empty() => Ok(Some(Value::Mapping(Default::default()))),
        Some(yaml) => {
            let value: Value =
                serde_yaml::from_str(yaml).map_err(|e| LaunchpadError::InvalidFrontmatter {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

/// Parse frontmatter without a path (errors report `<unknown>`).
pub fn parse_frontmatter(content: &str) -> Result<Option<Value>> {
    parse_frontmatter_with_path(content, Path::new("<unknown>"))
}

/// Render the fixed-order header block written into new notes.
///
/// Keys appear as: type, domain, status?, eisenhower?, due?, created, tags,
/// store?. Tags are written inline and the store is always quoted.
pub fn render_frontmatter(fm: &Frontmatter) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(10);
    lines.push("---".to_string());
    lines.push(format!("type: {}", fm.note_type));
    lines.push(format!("domain: {}", fm.domain));
    if let Some(status) = fm.status {
        lines.push(format!("status: {}", status));
    }
    if let Some(quadrant) = fm.quadrant {
        lines.push(format!("eisenhower: {}", quadrant));
    }
    if let Some(ref due) = fm.due {
        lines.push(format!("due: {}", due));
    }
    lines.push(format!("created: {}", fm.created));
    lines.push(format!("tags: [{}]", fm.tags.join(", ")));
    if let Some(ref store) = fm.store {
        lines.push(format!("store: \"{}\"", store));
    }
    lines.push("---".to_string());
    lines.join("\n")
}
