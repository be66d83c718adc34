//! Search command implementation.

use crate::cli::args::SearchArgs;
use crate::cli::output::Output;
use crate::config::Settings;
use crate::error::Result;
use crate::search::{search_notes, SearchHit};
use crate::vault::Vault;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SearchHit>,
}

pub fn run(vault: &Vault, settings: &Settings, args: &SearchArgs, output: &Output) -> Result<()> {
    let mut settings = settings.clone();
    if let Some(limit) = args.limit {
        settings.max_results = limit;
    }
    if args.markdown_only {
        settings.markdown_only = true;
    }

    let results = search_notes(vault, &args.query, &settings)?;
    output.print(&SearchResponse {
        query: args.query.clone(),
        results,
    })
}
