//! Types command implementation.

use crate::cli::output::Output;
use crate::error::Result;
use crate::registry::{self, DomainConfig};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TypesResponse {
    pub domains: &'static [DomainConfig],
}

pub fn run(output: &Output) -> Result<()> {
    output.print(&TypesResponse {
        domains: registry::all_domains(),
    })
}
