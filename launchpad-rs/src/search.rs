//! Launcher file search.

use crate::config::Settings;
use crate::error::Result;
use crate::graph::LinkResolver;
use crate::note::basename;
use crate::vault::Vault;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HitKind {
    /// A markdown note.
    Note,
    /// Any other file (only when `markdown_only` is off).
    File,
    /// A link target with no note behind it yet.
    Unresolved,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub path: PathBuf,
    pub name: String,
    pub score: f64,
    pub kind: HitKind,
}

/// Rank vault files against `query`, best first, at most `settings.max_results`.
///
/// A blank query matches nothing.
pub fn search_notes(vault: &Vault, query: &str, settings: &Settings) -> Result<Vec<SearchHit>> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(Vec::new());
    }

    let files = if settings.markdown_only {
        vault.list_notes()?
    } else {
        vault.list_files()?
    };

    let mut hits: Vec<SearchHit> = files
        .into_iter()
        .filter_map(|path| {
            let is_markdown = path.extension().and_then(|e| e.to_str()) == Some("md");
            let name = if is_markdown {
                basename(&path).to_string()
            } else {
                file_name(&path)
            };
            let score = subsequence_score(query, &name);
            (score > 0.0).then(|| SearchHit {
                path,
                name,
                score,
                kind: if is_markdown { HitKind::Note } else { HitKind::File },
            })
        })
        .collect();

    if settings.unresolved_links {
        for target in unresolved_targets(vault)? {
            let score = subsequence_score(query, &target);
            if score > 0.0 {
                hits.push(SearchHit {
                    path: PathBuf::from(format!("{}.md", target)),
                    name: target,
                    score,
                    kind: HitKind::Unresolved,
                });
            }
        }
    }

    // Stable: equal scores keep path order.
    hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    hits.truncate(settings.max_results);
    debug!(query, hits = hits.len(), "search");
    Ok(hits)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Link targets (without heading) that resolve to no note, sorted and unique.
fn unresolved_targets(vault: &Vault) -> Result<BTreeSet<String>> {
    let mut notes = Vec::new();
    for path in vault.list_notes()? {
        match vault.load_note(&path) {
            Ok(note) => notes.push(note),
            Err(e) => warn!(path = %path.display(), "skipping unreadable note: {}", e),
        }
    }

    let mut resolver = LinkResolver::default();
    for note in &notes {
        let aliases = note
            .metadata()
            .ok()
            .flatten()
            .map(|m| m.aliases)
            .unwrap_or_default();
        resolver.add_note(&note.path, &aliases);
    }

    let mut unresolved = BTreeSet::new();
    for note in &notes {
        for link in note.links() {
            let target = link.target.split('#').next().unwrap_or("").trim();
            if target.is_empty() || resolver.resolve(target).is_some() {
                continue;
            }
            unresolved.insert(target.strip_suffix(".md").unwrap_or(target).to_string());
        }
    }
    Ok(unresolved)
}

/// Subsequence match score in `0.0..=1.0`; `0.0` means no match.
///
/// Consecutive matched characters and a match at the first character earn a
/// bonus; longer names are penalized.
pub fn subsequence_score(query: &str, text: &str) -> f64 {
    let query_lower: Vec<char> = query.to_lowercase().chars().collect();
    let text_lower: Vec<char> = text.to_lowercase().chars().collect();

    if query_lower.is_empty() || text_lower.is_empty() {
        return 0.0;
    }

    let mut query_idx = 0;
    let mut positions: Vec<usize> = Vec::with_capacity(query_lower.len());
    for (text_idx, c) in text_lower.iter().enumerate() {
        if query_idx < query_lower.len() && *c == query_lower[query_idx] {
            positions.push(text_idx);
            query_idx += 1;
        }
    }
    if query_idx < query_lower.len() {
        return 0.0;
    }

    let mut score = 1.0;

    let consecutive = positions.windows(2).filter(|w| w[1] == w[0] + 1).count();
    score += (consecutive as f64 * 0.1).min(0.5);

    if positions[0] == 0 {
        score += 0.2;
    }

    let length_ratio = query_lower.len() as f64 / text_lower.len() as f64;
    score *= length_ratio.sqrt();

    score.min(1.0)
}
