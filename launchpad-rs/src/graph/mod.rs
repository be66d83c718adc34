//! Link resolution and backlink counting.

mod backlinks;
pub mod resolution;

pub use backlinks::{BacklinkIndex, BacklinkSource};
pub use resolution::{normalize_key, LinkResolver};
