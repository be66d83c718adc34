//! Promote command implementation.

use crate::cli::args::PromoteArgs;
use crate::cli::output::Output;
use crate::creator::NoteCreator;
use crate::error::Result;
use crate::vault::Vault;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PromoteResponse {
    pub path: String,
    pub status: String,
}

pub fn run(vault: &Vault, args: &PromoteArgs, output: &Output) -> Result<()> {
    let creator = NoteCreator::new(vault.clone());
    let note = creator.promote_to_project(&args.path)?;

    output.print(&PromoteResponse {
        path: note.path.to_string_lossy().to_string(),
        status: "project".to_string(),
    })
}
