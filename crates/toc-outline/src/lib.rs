/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Hierarchical outline (table of contents) generation.
//!
//! This crate turns an ordered sequence of blocks into an outline tree. Each
//! heading becomes an entry whose children are the headings that follow it
//! at a deeper level, until a heading of equal or shallower level appears.
//!
//! The main pieces are:
//! - [`build_outline`] / [`build_outline_with_config`]: the outline builder
//! - [`Outline`] / [`OutlineEntry`]: the resulting tree
//! - [`render_vnode`] / [`render_html`]: nested list rendering
//! - [`TocConfig`]: depth limit, title and list kind
//!
//! # Example
//!
//! ```rust
//! use toc_outline::{ListKind, build_outline, render_vnode};
//! use toc_vnode::VNode;
//!
//! let blocks = vec![
//!     VNode::with_text("h1#intro", "Introduction"),
//!     VNode::with_text("p", "Some text."),
//!     VNode::with_text("h2#background", "Background"),
//! ];
//!
//! let outline = build_outline(&blocks);
//! assert_eq!(outline.entries.len(), 1);
//! assert_eq!(outline.entries[0].children[0].id.as_deref(), Some("background"));
//!
//! let list = render_vnode(&outline, ListKind::Unordered);
//! assert_eq!(
//!     toc_outline::to_html(&list),
//!     r##"<ul><li><a href="#intro">Introduction</a><ul><li><a href="#background">Background</a></li></ul></li></ul>"##
//! );
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod flatten;
pub mod heading;
pub mod html;
pub mod outline;
pub mod render;

pub use builder::{build_entries, build_outline, build_outline_with_config};
pub use config::{ListKind, TocConfig};
pub use error::{Result, TocError};
pub use flatten::flatten;
pub use heading::{
    Heading, HeadingLevel, classify_heading, decontextify, link_payload, resolve_id,
};
pub use html::{escape_html, to_html, write_html};
pub use outline::{Outline, OutlineEntry};
pub use render::{render_html, render_nav, render_vnode};

use toc_vnode::VNode;

/// Parse a JSON block sequence and build its outline.
pub fn outline_from_json(json: &str, config: &TocConfig) -> Result<Outline> {
    let blocks = VNode::list_from_json_str(json)?;
    Ok(build_outline_with_config(&blocks, config))
}
