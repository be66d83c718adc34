//! Static registry of domains and their note types.
//!
//! Each (domain, note type) pair maps to a target folder, a default tag set and
//! a template. The tables are fixed at compile time.

mod templates;

use crate::types::{Domain, Frontmatter, NoteType};
use serde::Serialize;

pub use crate::parser::render_frontmatter;

/// Pure markdown builder over `(title, frontmatter)`.
pub type TemplateFn = fn(&str, &Frontmatter) -> String;

/// Configuration for one note type within a domain.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NoteTypeConfig {
    pub id: NoteType,
    pub label: &'static str,
    pub emoji: &'static str,
    /// Vault-relative folder new notes are written to.
    pub folder: &'static str,
    pub tags: &'static [&'static str],
    /// Whether new notes get an Eisenhower quadrant.
    pub has_quadrant: bool,
    #[serde(skip)]
    pub template: TemplateFn,
}

impl NoteTypeConfig {
    /// Render the note body for `title`.
    pub fn render(&self, title: &str, fm: &Frontmatter) -> String {
        (self.template)(title, fm)
    }

    /// Default tags as owned strings.
    pub fn tag_list(&self) -> Vec<String> {
        self.tags.iter().map(|t| t.to_string()).collect()
    }
}

/// A top-level domain and the note types it offers.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DomainConfig {
    pub id: Domain,
    pub label: &'static str,
    pub emoji: &'static str,
    pub folder: &'static str,
    pub note_types: &'static [NoteTypeConfig],
}

impl DomainConfig {
    pub fn note_type(&self, note_type: NoteType) -> Option<&'static NoteTypeConfig> {
        self.note_types.iter().find(|nt| nt.id == note_type)
    }
}

const BUSINESS_IDEA: NoteTypeConfig = NoteTypeConfig {
    id: NoteType::Idea,
    label: "Idea",
    emoji: "💡",
    folder: "Business/Ideas",
    tags: &["business", "idea"],
    has_quadrant: false,
    template: templates::business_idea,
};

const BUSINESS_IDEA_PROBLEM: NoteTypeConfig = NoteTypeConfig {
    template: templates::business_idea_problem,
    ..BUSINESS_IDEA
};

const BUSINESS_NOTE_TYPES: &[NoteTypeConfig] = &[
    BUSINESS_IDEA,
    NoteTypeConfig {
        id: NoteType::Issue,
        label: "Issue",
        emoji: "🔧",
        folder: "Business/Issues",
        tags: &["business", "issue"],
        has_quadrant: false,
        template: templates::business_issue,
    },
    NoteTypeConfig {
        id: NoteType::Log,
        label: "Log",
        emoji: "📓",
        folder: "Business/Logs",
        tags: &["business", "log"],
        has_quadrant: false,
        template: templates::business_log,
    },
    NoteTypeConfig {
        id: NoteType::Sop,
        label: "SOP / Reference",
        emoji: "📋",
        folder: "Business/SOPs",
        tags: &["business", "sop"],
        has_quadrant: false,
        template: templates::business_sop,
    },
    NoteTypeConfig {
        id: NoteType::Contact,
        label: "Contact / Account",
        emoji: "👤",
        folder: "Business/Contacts",
        tags: &["business", "contact"],
        has_quadrant: false,
        template: templates::business_contact,
    },
    NoteTypeConfig {
        id: NoteType::Todo,
        label: "Todo",
        emoji: "✅",
        folder: "Business/Todos",
        tags: &["business", "todo"],
        has_quadrant: true,
        template: templates::business_todo,
    },
];

const PERSONAL_NOTE_TYPES: &[NoteTypeConfig] = &[
    NoteTypeConfig {
        id: NoteType::Idea,
        label: "Idea",
        emoji: "💡",
        folder: "Personal/Ideas",
        tags: &["personal", "idea"],
        has_quadrant: false,
        template: templates::personal_idea,
    },
    NoteTypeConfig {
        id: NoteType::Reference,
        label: "Reference",
        emoji: "🔖",
        folder: "Personal/Reference",
        tags: &["personal", "reference"],
        has_quadrant: false,
        template: templates::personal_reference,
    },
    NoteTypeConfig {
        id: NoteType::People,
        label: "People",
        emoji: "👥",
        folder: "Personal/People",
        tags: &["personal", "people"],
        has_quadrant: false,
        template: templates::personal_people,
    },
    NoteTypeConfig {
        id: NoteType::Todo,
        label: "Todo",
        emoji: "✅",
        folder: "Personal/Todos",
        tags: &["personal", "todo"],
        has_quadrant: true,
        template: templates::personal_todo,
    },
];

const LIST_NOTE_TYPES: &[NoteTypeConfig] = &[
    NoteTypeConfig {
        id: NoteType::Shopping,
        label: "Shopping List",
        emoji: "🛒",
        folder: "Lists/Shopping",
        tags: &["list", "shopping"],
        has_quadrant: false,
        template: templates::list_shopping,
    },
    NoteTypeConfig {
        id: NoteType::Checklist,
        label: "Checklist",
        emoji: "✅",
        folder: "Lists/Checklists",
        tags: &["list", "checklist"],
        has_quadrant: false,
        template: templates::list_checklist,
    },
    NoteTypeConfig {
        id: NoteType::Scratch,
        label: "Scratch Note",
        emoji: "📝",
        folder: "Lists/Scratch",
        tags: &["list", "scratch"],
        has_quadrant: false,
        template: templates::list_scratch,
    },
];

static DOMAINS: [DomainConfig; 3] = [
    DomainConfig {
        id: Domain::Business,
        label: "Business",
        emoji: "🏢",
        folder: "Business",
        note_types: BUSINESS_NOTE_TYPES,
    },
    DomainConfig {
        id: Domain::Personal,
        label: "Personal",
        emoji: "🏠",
        folder: "Personal",
        note_types: PERSONAL_NOTE_TYPES,
    },
    DomainConfig {
        id: Domain::Lists,
        label: "Lists",
        emoji: "📋",
        folder: "Lists",
        note_types: LIST_NOTE_TYPES,
    },
];

static PROBLEM_VARIANT: NoteTypeConfig = BUSINESS_IDEA_PROBLEM;

/// All domains in display order.
pub fn all_domains() -> &'static [DomainConfig] {
    &DOMAINS
}

/// Look up a domain's configuration.
pub fn domain_config(domain: Domain) -> Option<&'static DomainConfig> {
    DOMAINS.iter().find(|d| d.id == domain)
}

/// Look up a note type within a domain. `None` if the domain does not offer it.
pub fn note_type_config(domain: Domain, note_type: NoteType) -> Option<&'static NoteTypeConfig> {
    domain_config(domain)?.note_type(note_type)
}

/// Look up by wire identifiers, e.g. `("business", "todo")`.
///
/// Unknown identifiers resolve to `None` rather than an error.
pub fn lookup(domain: &str, note_type: &str) -> Option<&'static NoteTypeConfig> {
    let domain: Domain = domain.parse().ok()?;
    let note_type: NoteType = note_type.parse().ok()?;
    note_type_config(domain, note_type)
}

/// Alternate business-idea template for ideas sparked by a problem.
pub fn business_idea_problem() -> &'static NoteTypeConfig {
    &PROBLEM_VARIANT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_pairs() {
        let todo = note_type_config(Domain::Business, NoteType::Todo).unwrap();
        assert_eq!(todo.folder, "Business/Todos");
        assert!(todo.has_quadrant);

        let shopping = lookup("lists", "shopping").unwrap();
        assert_eq!(shopping.tags, &["list", "shopping"]);
        assert!(!shopping.has_quadrant);
    }

    #[test]
    fn test_lookup_not_found() {
        // Valid type, wrong domain.
        assert!(note_type_config(Domain::Lists, NoteType::Todo).is_none());
        assert!(note_type_config(Domain::Personal, NoteType::Sop).is_none());
        // Unknown identifiers.
        assert!(lookup("work", "todo").is_none());
        assert!(lookup("business", "memo").is_none());
    }

    #[test]
    fn test_domain_table_shape() {
        let counts: Vec<(Domain, usize)> = all_domains()
            .iter()
            .map(|d| (d.id, d.note_types.len()))
            .collect();
        assert_eq!(
            counts,
            vec![(Domain::Business, 6), (Domain::Personal, 4), (Domain::Lists, 3)]
        );
    }

    #[test]
    fn test_folders_live_under_domain_folder() {
        for domain in all_domains() {
            for nt in domain.note_types {
                assert!(
                    nt.folder.starts_with(&format!("{}/", domain.folder)),
                    "{} not under {}",
                    nt.folder,
                    domain.folder
                );
            }
        }
    }

    #[test]
    fn test_only_todos_have_quadrants() {
        for domain in all_domains() {
            for nt in domain.note_types {
                assert_eq!(nt.has_quadrant, nt.id == NoteType::Todo);
            }
        }
    }

    #[test]
    fn test_problem_variant_shares_config() {
        let base = note_type_config(Domain::Business, NoteType::Idea).unwrap();
        let problem = business_idea_problem();
        assert_eq!(problem.folder, base.folder);
        assert_eq!(problem.tags, base.tags);

        let fm = Frontmatter::new(NoteType::Idea, Domain::Business, "2024-01-01");
        assert!(base.render("X", &fm).contains("## The Spark"));
        assert!(problem.render("X", &fm).contains("## What's Broken?"));
    }

    #[test]
    fn test_every_template_has_heading() {
        for domain in all_domains() {
            for nt in domain.note_types {
                let mut fm = Frontmatter::new(nt.id, domain.id, "2024-01-01");
                fm.tags = nt.tag_list();
                let out = nt.render("Title", &fm);
                assert!(out.starts_with("---\ntype: "));
                assert!(out.contains(" Title\n"), "{:?}", nt.id);
            }
        }
    }
}
