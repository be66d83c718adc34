//! Backlink counting.

use super::resolution::LinkResolver;
use crate::error::Result;
use crate::note::Note;
use crate::vault::Vault;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Anything that can tell how many notes reference a given note.
pub trait BacklinkSource {
    /// Number of *other* notes that link to `path` (vault-relative).
    fn backlink_count(&self, path: &Path) -> usize;
}

/// Incoming-link index built from note contents.
#[derive(Debug, Default)]
pub struct BacklinkIndex {
    /// Target path -> distinct source notes linking to it.
    incoming: HashMap<PathBuf, HashSet<PathBuf>>,
}

impl BacklinkIndex {
    /// Build the index by reading every markdown file in the vault.
    pub fn build(vault: &Vault) -> Result<Self> {
        let mut notes = Vec::new();
        vault.scan_notes(|_, note| notes.extend(note))?;
        Ok(Self::from_notes(&notes))
    }

    /// Build the index from already-loaded notes.
    pub fn from_notes(notes: &[Note]) -> Self {
        let mut resolver = LinkResolver::default();
        for note in notes {
            let aliases = note
                .metadata()
                .ok()
                .flatten()
                .map(|m| m.aliases)
                .unwrap_or_default();
            resolver.add_note(&note.path, &aliases);
        }

        let mut index = BacklinkIndex::default();
        for note in notes {
            for link in note.links() {
                let Some(target) = resolver.resolve(&link.target) else {
                    continue;
                };
                if *target == note.path {
                    continue;
                }
                index
                    .incoming
                    .entry(target.clone())
                    .or_default()
                    .insert(note.path.clone());
            }
        }

        debug!(targets = index.incoming.len(), "built backlink index");
        index
    }

    /// Notes linking to `path`, sorted.
    pub fn sources(&self, path: &Path) -> Vec<&PathBuf> {
        let mut sources: Vec<&PathBuf> = self
            .incoming
            .get(path)
            .map(|s| s.iter().collect())
            .unwrap_or_default();
        sources.sort();
        sources
    }
}

impl BacklinkSource for BacklinkIndex {
    fn backlink_count(&self, path: &Path) -> usize {
        self.incoming.get(path).map(HashSet::len).unwrap_or(0)
    }
}

impl<F> BacklinkSource for F
where
    F: Fn(&Path) -> usize,
{
    fn backlink_count(&self, path: &Path) -> usize {
        self(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notes() -> Vec<Note> {
        vec![
            Note::new(
                "Business/Ideas/Roadmap.md",
                "---\nstatus: project\naliases: [Plan]\n---\n# Roadmap\nSee [[Roadmap#Goals]].\n",
            ),
            Note::new("Business/Issues/Bug.md", "Blocks [[Roadmap]] and [[Plan]] twice.\n"),
            Note::new("Business/Logs/Weekly.md", "---\nproject: \"[[Roadmap]]\"\n---\n"),
            Note::new("Personal/Other.md", "Links to [[Missing]].\n"),
        ]
    }

    #[test]
    fn test_counts_distinct_sources() {
        let index = BacklinkIndex::from_notes(&notes());
        // Bug.md links twice but counts once; Weekly.md links via frontmatter.
        assert_eq!(index.backlink_count(Path::new("Business/Ideas/Roadmap.md")), 2);
    }

    #[test]
    fn test_self_links_ignored() {
        let notes = vec![Note::new("A.md", "[[A]] [[A#top]]")];
        let index = BacklinkIndex::from_notes(&notes);
        assert_eq!(index.backlink_count(Path::new("A.md")), 0);
    }

    #[test]
    fn test_unlinked_note_has_zero() {
        let index = BacklinkIndex::from_notes(&notes());
        assert_eq!(index.backlink_count(Path::new("Personal/Other.md")), 0);
    }

    #[test]
    fn test_sources_sorted() {
        let index = BacklinkIndex::from_notes(&notes());
        let sources = index.sources(Path::new("Business/Ideas/Roadmap.md"));
        assert_eq!(
            sources,
            vec![
                &PathBuf::from("Business/Issues/Bug.md"),
                &PathBuf::from("Business/Logs/Weekly.md")
            ]
        );
    }

    #[test]
    fn test_build_from_vault() {
        let dir = tempfile::TempDir::new().unwrap();
        let vault = Vault::new(dir.path()).unwrap();
        vault.create_note(Path::new("Hub.md"), "# Hub").unwrap();
        vault.create_note(Path::new("a/One.md"), "[[Hub]]").unwrap();
        vault.create_note(Path::new("b/Two.md"), "[Hub](../Hub.md)").unwrap();

        let index = BacklinkIndex::build(&vault).unwrap();
        // Relative markdown links with ".." do not resolve by path but do by name.
        assert_eq!(index.backlink_count(Path::new("Hub.md")), 2);
    }

    #[test]
    fn test_closure_source() {
        let source = |_: &Path| 7usize;
        assert_eq!(source.backlink_count(Path::new("x.md")), 7);
    }
}
