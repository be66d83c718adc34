//! Dashboard projections and the rescan loop.

mod debounce;
mod manager;
mod scan;

pub use debounce::{DebounceState, Debouncer, DEFAULT_QUIET_PERIOD};
pub use manager::{DashboardManager, DocumentSource, Scan};
pub use scan::{project_active_projects, project_todos};
