/*
 * render.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Rendering outlines as nested lists.
//!
//! Each entry becomes an `li` holding its link and, when it has children, a
//! nested list of the same kind:
//!
//! ```html
//! <ul>
//!   <li><a href="#intro">Intro</a>
//!     <ul><li><a href="#background">Background</a></li></ul>
//!   </li>
//! </ul>
//! ```

use crate::config::{ListKind, TocConfig};
use crate::html::to_html;
use crate::outline::{Outline, OutlineEntry};
use toc_vnode::VNode;

/// Render an outline as a list vnode. An empty outline gives an empty list.
pub fn render_vnode(outline: &Outline, list: ListKind) -> VNode {
    render_list(&outline.entries, list)
}

fn render_list(entries: &[OutlineEntry], list: ListKind) -> VNode {
    VNode::element(
        list.tag(),
        entries
            .iter()
            .map(|entry| render_item(entry, list))
            .collect(),
    )
}

fn render_item(entry: &OutlineEntry, list: ListKind) -> VNode {
    let mut children = vec![entry.link.clone()];
    if !entry.children.is_empty() {
        children.push(render_list(&entry.children, list));
    }
    VNode::element("li", children)
}

/// Render an outline as a navigation vnode.
///
/// Without a title this is just the list. With one, the list is wrapped in
/// `<nav id="TOC" role="doc-toc">` after an `<h2 id="toc-title">` heading.
pub fn render_nav(outline: &Outline, list: ListKind) -> VNode {
    let list = render_vnode(outline, list);

    match &outline.title {
        Some(title) => VNode::element(
            "nav#TOC",
            vec![VNode::with_text("h2#toc-title", title.as_str()), list],
        )
        .attr("role", "doc-toc"),
        None => list,
    }
}

/// Render an outline as HTML, using the list kind from `config`.
pub fn render_html(outline: &Outline, config: &TocConfig) -> String {
    to_html(&render_nav(outline, config.list))
}
