//! Shared types for Launchpad.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Top-level life area a note belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Domain {
    Business,
    Personal,
    Lists,
}

impl Domain {
    pub const ALL: [Domain; 3] = [Domain::Business, Domain::Personal, Domain::Lists];

    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Business => "business",
            Domain::Personal => "personal",
            Domain::Lists => "lists",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "business" => Ok(Domain::Business),
            "personal" => Ok(Domain::Personal),
            "lists" => Ok(Domain::Lists),
            _ => Err(format!("Invalid domain: {}", s)),
        }
    }
}

/// Sub-classification of a note; selects its template and folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoteType {
    Idea,
    Issue,
    Log,
    Sop,
    Contact,
    Todo,
    Reference,
    People,
    Shopping,
    Checklist,
    Scratch,
}

impl NoteType {
    pub fn as_str(self) -> &'static str {
        match self {
            NoteType::Idea => "idea",
            NoteType::Issue => "issue",
            NoteType::Log => "log",
            NoteType::Sop => "sop",
            NoteType::Contact => "contact",
            NoteType::Todo => "todo",
            NoteType::Reference => "reference",
            NoteType::People => "people",
            NoteType::Shopping => "shopping",
            NoteType::Checklist => "checklist",
            NoteType::Scratch => "scratch",
        }
    }
}

impl fmt::Display for NoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoteType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idea" => Ok(NoteType::Idea),
            "issue" => Ok(NoteType::Issue),
            "log" => Ok(NoteType::Log),
            "sop" => Ok(NoteType::Sop),
            "contact" => Ok(NoteType::Contact),
            "todo" => Ok(NoteType::Todo),
            "reference" => Ok(NoteType::Reference),
            "people" => Ok(NoteType::People),
            "shopping" => Ok(NoteType::Shopping),
            "checklist" => Ok(NoteType::Checklist),
            "scratch" => Ok(NoteType::Scratch),
            _ => Err(format!("Invalid note type: {}", s)),
        }
    }
}

/// Eisenhower-matrix bucket derived from an importance/urgency pair.
///
/// Variant order is the dashboard priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quadrant {
    DoFirst,
    Schedule,
    Delegate,
    Drop,
}

/// Display metadata for a quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuadrantLabel {
    pub label: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::DoFirst,
        Quadrant::Schedule,
        Quadrant::Delegate,
        Quadrant::Drop,
    ];

    /// Map an (important, urgent) choice onto the 2x2 matrix.
    pub fn from_choice(important: bool, urgent: bool) -> Self {
        match (important, urgent) {
            (true, true) => Quadrant::DoFirst,
            (true, false) => Quadrant::Schedule,
            (false, true) => Quadrant::Delegate,
            (false, false) => Quadrant::Drop,
        }
    }

    /// Sort rank on the dashboard (lower sorts first).
    pub fn rank(self) -> u8 {
        match self {
            Quadrant::DoFirst => 0,
            Quadrant::Schedule => 1,
            Quadrant::Delegate => 2,
            Quadrant::Drop => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Quadrant::DoFirst => "do-first",
            Quadrant::Schedule => "schedule",
            Quadrant::Delegate => "delegate",
            Quadrant::Drop => "drop",
        }
    }

    pub fn label(self) -> QuadrantLabel {
        match self {
            Quadrant::DoFirst => QuadrantLabel {
                label: "Do First",
                emoji: "🔴",
                description: "Important & Urgent",
            },
            Quadrant::Schedule => QuadrantLabel {
                label: "Schedule",
                emoji: "🟡",
                description: "Important & Not Urgent",
            },
            Quadrant::Delegate => QuadrantLabel {
                label: "Delegate",
                emoji: "🔵",
                description: "Not Important & Urgent",
            },
            Quadrant::Drop => QuadrantLabel {
                label: "Drop / Batch",
                emoji: "⚪",
                description: "Not Important & Not Urgent",
            },
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quadrant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "do-first" => Ok(Quadrant::DoFirst),
            "schedule" => Ok(Quadrant::Schedule),
            "delegate" => Ok(Quadrant::Delegate),
            "drop" => Ok(Quadrant::Drop),
            _ => Err(format!("Invalid quadrant: {}", s)),
        }
    }
}

/// Lifecycle status stored in a note's frontmatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoteStatus {
    Active,
    Resolved,
    Archived,
    Project,
}

impl NoteStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            NoteStatus::Active => "active",
            NoteStatus::Resolved => "resolved",
            NoteStatus::Archived => "archived",
            NoteStatus::Project => "project",
        }
    }

    /// Whether a todo with this status is finished and leaves the dashboard.
    pub fn is_closed(self) -> bool {
        matches!(self, NoteStatus::Resolved | NoteStatus::Archived)
    }
}

impl fmt::Display for NoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoteStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(NoteStatus::Active),
            "resolved" => Ok(NoteStatus::Resolved),
            "archived" => Ok(NoteStatus::Archived),
            "project" => Ok(NoteStatus::Project),
            _ => Err(format!("Invalid status: {}", s)),
        }
    }
}

/// Frontmatter written into newly created notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frontmatter {
    #[serde(rename = "type")]
    pub note_type: NoteType,
    pub domain: Domain,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<NoteStatus>,
    #[serde(rename = "eisenhower", skip_serializing_if = "Option::is_none")]
    pub quadrant: Option<Quadrant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
    /// Creation date (YYYY-MM-DD).
    pub created: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
}

impl Frontmatter {
    pub fn new(note_type: NoteType, domain: Domain, created: impl Into<String>) -> Self {
        Self {
            note_type,
            domain,
            status: None,
            quadrant: None,
            due: None,
            created: created.into(),
            tags: Vec::new(),
            store: None,
        }
    }
}

/// An open todo shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Path relative to the vault root.
    pub path: PathBuf,
    pub title: String,
    pub domain: Domain,
    #[serde(rename = "eisenhower")]
    pub quadrant: Quadrant,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
    pub status: NoteStatus,
}

/// A note promoted to project status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveProject {
    /// Path relative to the vault root.
    pub path: PathBuf,
    pub title: String,
    pub domain: Domain,
    /// Number of other notes linking here.
    pub linked_count: usize,
}
