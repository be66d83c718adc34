//! Launchpad - quick capture and a live dashboard for an Obsidian-style vault.
//!
//! # Overview
//!
//! - A static registry of domains and note types, each with a folder, tags and a template
//! - A step-by-step capture state that ends in a new note on disk
//! - Idea to project promotion
//! - Open todos and active projects scanned from note frontmatter, kept fresh by a
//!   debounced rescan whenever the vault changes
//! - Launcher search and a recent-files list
//!
//! # Example
//!
//! ```no_run
//! use launchpad::capture::CaptureState;
//! use launchpad::creator::NoteCreator;
//! use launchpad::{Domain, NoteType, Vault};
//!
//! let vault = Vault::new("/path/to/vault").unwrap();
//! let mut state = CaptureState::new();
//! state.choose_domain(Domain::Personal).unwrap();
//! state.choose_note_type(NoteType::Reference).unwrap();
//! state.fill_details("Reading list", None, None).unwrap();
//!
//! let outcome = NoteCreator::new(vault).create_note(&state).unwrap();
//! println!("{:?}", outcome);
//! ```

pub mod capture;
pub mod cli;
pub mod config;
pub mod creator;
pub mod dashboard;
pub mod error;
pub mod graph;
pub mod metadata;
pub mod note;
pub mod parser;
pub mod recent;
pub mod registry;
pub mod search;
pub mod store;
pub mod types;
pub mod vault;
pub mod watch;

// Re-export main types at crate root
pub use config::{Config, Settings};
pub use error::{LaunchpadError, Result};
pub use note::Note;
pub use types::*;
pub use vault::Vault;
