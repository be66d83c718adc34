//! Parsers for Obsidian markdown syntax.

pub mod frontmatter;
pub mod wikilink;

pub use frontmatter::{
    extract_frontmatter, parse_frontmatter, parse_frontmatter_with_path, render_frontmatter,
    split_frontmatter, FrontmatterSplit,
};
pub use wikilink::{parse_links, LinkRef};
