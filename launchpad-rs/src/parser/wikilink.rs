//! Link extraction for backlink counting.
//!
//! Recognises `[[target]]`, `[[target#heading|alias]]`, embeds `![[target]]`
//! and markdown links to notes (`[text](Some%20Note.md)`). Links inside
//! fenced code blocks and inline code spans are ignored.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

// (!)? [[ target (#... )? (|alias)? ]]
static WIKILINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(!?)\[\[([^\]\|#]+)(?:#[^\]\|]*)?(?:\|[^\]]*)?\]\]").unwrap()
});

// [text](target.md) or [text](target.md#heading); external URLs never end in .md here
static MARKDOWN_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(!?)\[[^\]]*\]\(<?([^)\s>#]+\.md)(?:#[^)]*)?>?\)").unwrap()
});

static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`[^`\n]+`").unwrap());

/// A reference from one note to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRef {
    /// The link target as written, without heading/alias suffixes.
    pub target: String,
    /// Whether this is an embed (`![[...]]`).
    pub embed: bool,
}

/// Parse every note reference in `content`.
pub fn parse_links(content: &str) -> Vec<LinkRef> {
    let skip = code_ranges(content);
    let in_code = |pos: usize| skip.iter().any(|r| r.contains(&pos));

    let mut links: Vec<(usize, LinkRef)> = Vec::new();

    for cap in WIKILINK.captures_iter(content) {
        let start = cap.get(0).map(|m| m.start()).unwrap_or(0);
        if in_code(start) {
            continue;
        }
        let target = cap.get(2).map(|m| m.as_str().trim()).unwrap_or("");
        if target.is_empty() {
            continue;
        }
        links.push((
            start,
            LinkRef {
                target: target.to_string(),
                embed: cap.get(1).is_some_and(|m| !m.as_str().is_empty()),
            },
        ));
    }

    for cap in MARKDOWN_LINK.captures_iter(content) {
        let start = cap.get(0).map(|m| m.start()).unwrap_or(0);
        if in_code(start) {
            continue;
        }
        let raw = cap.get(2).map(|m| m.as_str()).unwrap_or("");
        if raw.contains("://") {
            continue;
        }
        let target = urlencoding::decode(raw)
            .map(|t| t.into_owned())
            .unwrap_or_else(|_| raw.to_string());
        links.push((
            start,
            LinkRef {
                target,
                embed: cap.get(1).is_some_and(|m| !m.as_str().is_empty()),
            },
        ));
    }

    links.sort_by_key(|(start, _)| *start);
    links.into_iter().map(|(_, link)| link).collect()
}

/// Byte ranges covered by fenced code blocks and inline code spans.
fn code_ranges(content: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut fence_start: Option<(usize, &str)> = None;
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let marker = if trimmed.starts_with("```") {
            Some("```")
        } else if trimmed.starts_with("~~~") {
            Some("~~~")
        } else {
            None
        };

        match (fence_start, marker) {
            (None, Some(m)) => fence_start = Some((offset, m)),
            (Some((start, open)), Some(m)) if m == open => {
                ranges.push(start..offset + line.len());
                fence_start = None;
            }
            _ => {}
        }
        offset += line.len();
    }

    // Unclosed fence runs to end of file.
    if let Some((start, _)) = fence_start {
        ranges.push(start..content.len());
    }

    for m in INLINE_CODE.find_iter(content) {
        ranges.push(m.range());
    }

    ranges
}
