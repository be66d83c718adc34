//! New-note command implementation.

use crate::capture::{CaptureState, CaptureStep};
use crate::cli::args::NewArgs;
use crate::cli::output::{DryRunResponse, Output};
use crate::creator::{plan_note, CreateOutcome, NoteCreator};
use crate::error::{LaunchpadError, Result};
use crate::vault::Vault;
use chrono::Utc;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct NewResponse {
    pub path: String,
    pub created: bool,
    pub message: String,
}

impl NewResponse {
    pub fn from_outcome(outcome: &CreateOutcome) -> Self {
        let path = outcome.note().path.to_string_lossy().to_string();
        let (created, message) = match outcome {
            CreateOutcome::Created(_) => (true, "Note created successfully"),
            CreateOutcome::Existing(_) => (false, "Note already exists; left unchanged"),
        };
        Self {
            path,
            created,
            message: message.to_string(),
        }
    }
}

/// Walk the capture steps with the flags given on the command line.
pub fn state_from_args(args: &NewArgs) -> Result<CaptureState> {
    let mut state = CaptureState::new();
    state.choose_problem_spark(args.problem)?;
    state.choose_domain(args.domain)?;
    state.choose_note_type(args.note_type)?;
    if state.step == CaptureStep::Quadrant {
        state.choose_quadrant(args.important, args.urgent)?;
    }
    state.fill_details(&args.title, args.due.clone(), args.store.clone())?;
    Ok(state)
}

pub fn run(vault: &Vault, args: &NewArgs, output: &Output) -> Result<()> {
    let state = state_from_args(args)?;

    if args.dry_run {
        let planned = plan_note(&state, Utc::now().date_naive())
            .ok_or_else(|| LaunchpadError::InvalidCapture("incomplete capture".to_string()))?;
        let response = DryRunResponse {
            action: "create".to_string(),
            path: planned.path.to_string_lossy().to_string(),
            content: Some(planned.content),
        };
        return output.print(&response);
    }

    let creator = NoteCreator::new(vault.clone());
    let outcome = creator
        .create_note(&state)?
        .ok_or_else(|| LaunchpadError::InvalidCapture("incomplete capture".to_string()))?;

    if args.open {
        open_in_obsidian(vault, &outcome.note().path);
    }

    output.print(&NewResponse::from_outcome(&outcome))
}

/// Build the `obsidian://open` URI for a note.
pub fn obsidian_uri(vault: &Vault, path: &Path) -> String {
    let vault_name = vault
        .root
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("vault");

    format!(
        "obsidian://open?vault={}&file={}",
        urlencoding::encode(vault_name),
        urlencoding::encode(&path.to_string_lossy())
    )
}

fn open_in_obsidian(vault: &Vault, path: &Path) {
    let url = obsidian_uri(vault, path);

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(&url).spawn().ok();
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(&url).spawn().ok();
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", "", &url])
            .spawn()
            .ok();
    }
}
