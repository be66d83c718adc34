//! Quick-capture wizard state.
//!
//! The wizard walks `domain -> type -> quadrant -> details -> done`. The
//! quadrant step is skipped for note types without an urgency quadrant.

use crate::error::{LaunchpadError, Result};
use crate::registry::{self, NoteTypeConfig};
use crate::types::{Domain, NoteType, Quadrant};
use serde::Serialize;
use std::fmt;

/// Current position in the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaptureStep {
    #[default]
    Domain,
    Type,
    Quadrant,
    Details,
    Done,
}

impl CaptureStep {
    pub fn as_str(self) -> &'static str {
        match self {
            CaptureStep::Domain => "domain",
            CaptureStep::Type => "type",
            CaptureStep::Quadrant => "quadrant",
            CaptureStep::Details => "details",
            CaptureStep::Done => "done",
        }
    }
}

impl fmt::Display for CaptureStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the user has picked so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CaptureState {
    pub step: CaptureStep,
    pub domain: Option<Domain>,
    pub note_type: Option<NoteType>,
    pub title: String,
    pub quadrant: Option<Quadrant>,
    pub due_date: Option<String>,
    pub important: Option<bool>,
    pub urgent: Option<bool>,
    pub store: Option<String>,
    /// Business idea born from a problem; selects the "What's Broken?" template.
    pub problem_spark: bool,
}

impl CaptureState {
    pub fn new() -> Self {
        Self::default()
    }

    fn expect_step(&self, expected: CaptureStep) -> Result<()> {
        if self.step != expected {
            return Err(LaunchpadError::InvalidStep {
                expected: expected.to_string(),
                actual: self.step.to_string(),
            });
        }
        Ok(())
    }

    /// Registry entry for the chosen pair, if both are set.
    pub fn config(&self) -> Option<&'static NoteTypeConfig> {
        registry::note_type_config(self.domain?, self.note_type?)
    }

    fn has_quadrant(&self) -> bool {
        self.config().is_some_and(|c| c.has_quadrant)
    }

    pub fn choose_domain(&mut self, domain: Domain) -> Result<()> {
        self.expect_step(CaptureStep::Domain)?;
        self.domain = Some(domain);
        self.step = CaptureStep::Type;
        Ok(())
    }

    pub fn choose_note_type(&mut self, note_type: NoteType) -> Result<()> {
        self.expect_step(CaptureStep::Type)?;
        let domain = self
            .domain
            .ok_or_else(|| LaunchpadError::InvalidCapture("no domain chosen".to_string()))?;

        let config = registry::note_type_config(domain, note_type).ok_or_else(|| {
            LaunchpadError::UnknownNoteType {
                domain: domain.to_string(),
                note_type: note_type.to_string(),
            }
        })?;

        self.note_type = Some(note_type);
        self.step = if config.has_quadrant {
            CaptureStep::Quadrant
        } else {
            CaptureStep::Details
        };
        Ok(())
    }

    /// Flag the idea as sparked by a problem. Allowed any time before completion.
    pub fn choose_problem_spark(&mut self, problem_spark: bool) -> Result<()> {
        if self.step == CaptureStep::Done {
            return Err(LaunchpadError::InvalidStep {
                expected: "any step before done".to_string(),
                actual: self.step.to_string(),
            });
        }
        self.problem_spark = problem_spark;
        Ok(())
    }

    pub fn choose_quadrant(&mut self, important: bool, urgent: bool) -> Result<()> {
        self.expect_step(CaptureStep::Quadrant)?;
        self.important = Some(important);
        self.urgent = Some(urgent);
        self.quadrant = Some(Quadrant::from_choice(important, urgent));
        self.step = CaptureStep::Details;
        Ok(())
    }

    pub fn fill_details(
        &mut self,
        title: &str,
        due_date: Option<String>,
        store: Option<String>,
    ) -> Result<()> {
        self.expect_step(CaptureStep::Details)?;
        let title = title.trim();
        if title.is_empty() {
            return Err(LaunchpadError::InvalidCapture("title is required".to_string()));
        }

        self.title = title.to_string();
        self.due_date = due_date.filter(|d| !d.trim().is_empty());
        self.store = store.filter(|s| !s.trim().is_empty());
        self.step = CaptureStep::Done;
        Ok(())
    }

    /// Step back once. A no-op at the first step.
    pub fn back(&mut self) {
        self.step = match self.step {
            CaptureStep::Domain | CaptureStep::Type => CaptureStep::Domain,
            CaptureStep::Quadrant => CaptureStep::Type,
            CaptureStep::Details if self.has_quadrant() => CaptureStep::Quadrant,
            CaptureStep::Details => CaptureStep::Type,
            CaptureStep::Done => CaptureStep::Details,
        };
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_complete(&self) -> bool {
        self.step == CaptureStep::Done
    }
}
