//! Note creation from a completed capture, and idea-to-project promotion.

use crate::capture::CaptureState;
use crate::error::{LaunchpadError, Result};
use crate::note::Note;
use crate::registry;
use crate::types::{Domain, Frontmatter, NoteStatus, NoteType, Quadrant};
use crate::vault::Vault;
use chrono::{NaiveDate, Utc};
use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, info};

static UNSAFE_FILENAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\\/:*?"<>|]"#).unwrap());

static ACTIVE_STATUS_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^status: active$").unwrap());

const PROJECT_STATUS_HEADING: &str = "## 🎯 Project Status";

/// Result of a create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// A new file was written.
    Created(Note),
    /// A file already existed at the computed path and was left untouched.
    Existing(Note),
}

impl CreateOutcome {
    pub fn note(&self) -> &Note {
        match self {
            CreateOutcome::Created(note) | CreateOutcome::Existing(note) => note,
        }
    }

    pub fn into_note(self) -> Note {
        match self {
            CreateOutcome::Created(note) | CreateOutcome::Existing(note) => note,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, CreateOutcome::Created(_))
    }
}

/// Writes notes from capture state into a vault.
#[derive(Debug, Clone)]
pub struct NoteCreator {
    vault: Vault,
}

impl NoteCreator {
    pub fn new(vault: Vault) -> Self {
        Self { vault }
    }

    pub fn vault(&self) -> &Vault {
        &self.vault
    }

    /// Create a note dated today (UTC).
    pub fn create_note(&self, state: &CaptureState) -> Result<Option<CreateOutcome>> {
        self.create_note_on(state, today())
    }

    /// Create a note dated `date`.
    ///
    /// Returns `Ok(None)` when the state lacks a domain, note type or title, or
    /// names a pair the registry does not know.
    pub fn create_note_on(
        &self,
        state: &CaptureState,
        date: NaiveDate,
    ) -> Result<Option<CreateOutcome>> {
        let Some(planned) = plan_note(state, date) else {
            return Ok(None);
        };

        if let Some(parent) = planned.path.parent() {
            self.vault.ensure_folder(parent)?;
        }

        match self.vault.create_note(&planned.path, &planned.content) {
            Ok(note) => {
                info!(path = %note.path.display(), "created note");
                Ok(Some(CreateOutcome::Created(note)))
            }
            Err(LaunchpadError::NoteAlreadyExists(path)) => {
                info!(path = %path.display(), "note already exists");
                Ok(Some(CreateOutcome::Existing(self.vault.load_note(&path)?)))
            }
            Err(e) => Err(e),
        }
    }

    /// Promote an idea to a project, stamping today's date.
    pub fn promote_to_project(&self, path: &Path) -> Result<Note> {
        self.promote_to_project_on(path, today())
    }

    /// Set `status: project` and append the project section (once).
    pub fn promote_to_project_on(&self, path: &Path, date: NaiveDate) -> Result<Note> {
        if !self.vault.note_exists(path) {
            return Err(LaunchpadError::NoteNotFound(path.to_path_buf()));
        }
        let note = self.vault.load_note(path)?;
        let content = promote_content(&note.content, date);
        let note = note.with_content(content);
        self.vault.save_note(&note)?;
        info!(path = %path.display(), "promoted to project");
        Ok(note)
    }
}

/// Path and rendered content a capture would produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedNote {
    pub path: PathBuf,
    pub content: String,
}

/// Compute the note a capture would create on `date`, without touching disk.
///
/// The title is trimmed before it reaches the filename and heading. `None`
/// when domain, note type or a non-blank title is missing, or the pair is not
/// in the registry.
pub fn plan_note(state: &CaptureState, date: NaiveDate) -> Option<PlannedNote> {
    let (domain, note_type) = (state.domain?, state.note_type?);
    let title = state.title.trim();
    if title.is_empty() {
        return None;
    }
    let Some(config) = registry::note_type_config(domain, note_type) else {
        debug!(%domain, %note_type, "no registry entry");
        return None;
    };

    let created = date.format("%Y-%m-%d").to_string();
    let fm = build_frontmatter(state, domain, note_type, config.has_quadrant, config.tag_list(), &created);

    let template = if note_type == NoteType::Idea && state.problem_spark && domain == Domain::Business {
        registry::business_idea_problem()
    } else {
        config
    };

    Some(PlannedNote {
        path: note_path(config.folder, &created, title),
        content: template.render(title, &fm),
    })
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn build_frontmatter(
    state: &CaptureState,
    domain: Domain,
    note_type: NoteType,
    has_quadrant: bool,
    tags: Vec<String>,
    created: &str,
) -> Frontmatter {
    let mut fm = Frontmatter::new(note_type, domain, created);
    fm.tags = tags;

    if matches!(note_type, NoteType::Idea | NoteType::Issue) {
        fm.status = Some(NoteStatus::Active);
    }

    if has_quadrant {
        if let (Some(important), Some(urgent)) = (state.important, state.urgent) {
            fm.quadrant = Some(Quadrant::from_choice(important, urgent));
            fm.status = Some(NoteStatus::Active);
        }
    }

    fm.due = state.due_date.clone().filter(|d| !d.is_empty());
    fm.store = state.store.clone().filter(|s| !s.is_empty());
    fm
}

/// Replace filesystem-unsafe characters with `-`.
pub fn sanitize_title(title: &str) -> String {
    UNSAFE_FILENAME_CHARS.replace_all(title, "-").into_owned()
}

/// `<folder>/<date> - <sanitized title>.md`
pub fn note_path(folder: &str, date: &str, title: &str) -> PathBuf {
    Path::new(folder).join(format!("{} - {}.md", date, sanitize_title(title)))
}

fn promote_content(content: &str, date: NaiveDate) -> String {
    let updated = ACTIVE_STATUS_LINE.replace(content, "status: project").into_owned();
    if updated.contains(PROJECT_STATUS_HEADING) {
        return updated;
    }

    format!(
        "{updated}\n\n\
         {PROJECT_STATUS_HEADING}\n\
         - **Phase:** Planning\n\
         - **Started:** {}\n\n\
         ## Linked Notes\n\
         <!-- Issues, logs, and SOPs related to this project will appear here -->\n\n\
         ## Milestones\n\
         - [ ] \n\n",
        date.format("%Y-%m-%d")
    )
}
