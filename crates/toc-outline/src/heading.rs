/*
 * heading.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Heading classification, identifier resolution and link payloads.
 */

//! Adapter between raw vnodes and outline entries.
//!
//! A vnode is a heading when its selector tag is `h1` through `h6`. For each
//! heading we resolve an identifier and derive a link node from its content:
//!
//! - `data.attrs.id` wins when it is non-empty
//! - otherwise the id embedded in the selector (`h2#intro`) is used
//! - otherwise the heading has no identifier and its link has no `href`

use crate::error::TocError;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use toc_vnode::{Selector, VNode, VNodeData};

/// Deepest heading level.
pub const MAX_LEVEL: u8 = 6;

/// Tag given to link payloads.
pub const LINK_TAG: &str = "a";

/// A heading level in 1..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MIN: HeadingLevel = HeadingLevel(1);
    pub const MAX: HeadingLevel = HeadingLevel(MAX_LEVEL);

    /// Returns `None` for levels outside 1..=6.
    pub fn new(level: u8) -> Option<Self> {
        (1..=MAX_LEVEL).contains(&level).then_some(Self(level))
    }

    /// Level encoded in a tag name (`h1`..`h6`, ASCII case-insensitive).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.as_bytes() {
            [b'h' | b'H', digit @ b'1'..=b'6'] => Some(Self(digit - b'0')),
            _ => None,
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based slot for level-indexed tables.
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = TocError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level).ok_or(TocError::InvalidLevel { level })
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A block classified as a heading.
#[derive(Debug, Clone, PartialEq)]
pub struct Heading<'a> {
    pub level: HeadingLevel,
    pub id: Option<String>,
    /// The source node, borrowed from the caller's blocks
    pub node: &'a VNode,
}

/// Classify a block, returning `None` for anything that is not a heading.
///
/// Nodes without a selector, and tags such as `h0`, `h7` or `header`, are
/// not headings.
pub fn classify_heading(node: &VNode) -> Option<Heading<'_>> {
    let selector = node.selector()?;
    let level = HeadingLevel::from_tag(&selector.tag)?;
    let id = resolve_id(node, &selector);

    Some(Heading { level, id, node })
}

/// Resolve a heading's identifier: explicit `id` attribute first, then the
/// selector-embedded id. Empty strings count as absent.
pub fn resolve_id(node: &VNode, selector: &Selector) -> Option<String> {
    node.get_attr("id")
        .filter(|id| !id.is_empty())
        .map(Cow::into_owned)
        .or_else(|| selector.id.clone().filter(|id| !id.is_empty()))
}

/// Deep copy of a node with tree-local state (reconciliation keys) removed.
pub fn decontextify(node: &VNode) -> VNode {
    let mut copy = node.clone();

    let mut stack = vec![&mut copy];
    while let Some(current) = stack.pop() {
        current.key = None;
        if let Some(children) = current.children.as_mut() {
            stack.extend(children.iter_mut());
        }
    }

    copy
}

/// Derive the link node for a heading.
///
/// The heading's content is kept and re-tagged as `a`. With an identifier the
/// data is replaced by a single `href="#id"` attribute; without one the data
/// is left as it was.
pub fn link_payload(node: &VNode, id: Option<&str>) -> VNode {
    let mut link = decontextify(node);
    link.sel = Some(LINK_TAG.to_string());

    if let Some(id) = id {
        link.data = Some(VNodeData::with_attr("href", format!("#{}", id)));
    }

    link
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_level_bounds() {
        assert_eq!(HeadingLevel::new(0), None);
        assert_eq!(HeadingLevel::new(1), Some(HeadingLevel::MIN));
        assert_eq!(HeadingLevel::new(6), Some(HeadingLevel::MAX));
        assert_eq!(HeadingLevel::new(7), None);
        assert_eq!(HeadingLevel::MAX.index(), 5);
    }

    #[test]
    fn test_level_try_from() {
        assert_eq!(HeadingLevel::try_from(3).unwrap().get(), 3);
        assert!(matches!(
            HeadingLevel::try_from(9),
            Err(TocError::InvalidLevel { level: 9 })
        ));
    }

    #[test]
    fn test_level_from_tag() {
        assert_eq!(HeadingLevel::from_tag("h1").map(HeadingLevel::get), Some(1));
        assert_eq!(HeadingLevel::from_tag("H4").map(HeadingLevel::get), Some(4));
        assert_eq!(HeadingLevel::from_tag("h0"), None);
        assert_eq!(HeadingLevel::from_tag("h7"), None);
        assert_eq!(HeadingLevel::from_tag("h10"), None);
        assert_eq!(HeadingLevel::from_tag("th1"), None);
        assert_eq!(HeadingLevel::from_tag("header"), None);
    }

    #[test]
    fn test_classify_non_headings() {
        assert!(classify_heading(&VNode::with_text("p", "text")).is_none());
        assert!(classify_heading(&VNode::with_text("div.h2", "text")).is_none());
        assert!(classify_heading(&VNode::text_node("text")).is_none());
        assert!(classify_heading(&VNode::with_text("h7#x", "text")).is_none());
    }

    #[test]
    fn test_classify_heading_with_selector_id() {
        let node = VNode::with_text("h2#intro.lead", "Intro");
        let heading = classify_heading(&node).unwrap();
        assert_eq!(heading.level.get(), 2);
        assert_eq!(heading.id.as_deref(), Some("intro"));
        assert!(std::ptr::eq(heading.node, &node));
    }

    #[test]
    fn test_attr_id_overrides_selector_id() {
        let node = VNode::with_text("h2#foo", "2a").attr("id", "2a");
        assert_eq!(classify_heading(&node).unwrap().id.as_deref(), Some("2a"));
    }

    #[test]
    fn test_empty_attr_id_falls_back_to_selector() {
        let node = VNode::with_text("h2#foo", "2a").attr("id", "");
        assert_eq!(classify_heading(&node).unwrap().id.as_deref(), Some("foo"));
    }

    #[test]
    fn test_numeric_attr_id() {
        let node = VNode::with_text("h2#foo", "x").attr("id", 7i64);
        assert_eq!(classify_heading(&node).unwrap().id.as_deref(), Some("7"));

        let node = VNode::with_text("h2#foo", "x").attr("id", false);
        assert_eq!(classify_heading(&node).unwrap().id.as_deref(), Some("foo"));
    }

    #[test]
    fn test_heading_without_id() {
        let node = VNode::with_text("h3", "Untitled");
        assert_eq!(classify_heading(&node).unwrap().id, None);
    }

    #[test]
    fn test_link_payload_with_id() {
        let node = VNode::with_text("h1#top.big", "Top").attr("title", "t");
        let link = link_payload(&node, Some("top"));
        assert_eq!(link, VNode::with_text("a", "Top").attr("href", "#top"));
    }

    #[test]
    fn test_link_payload_without_id_keeps_data() {
        let node = VNode::with_text("h4", "Plain").attr("title", "t");
        let link = link_payload(&node, None);
        assert_eq!(link.sel.as_deref(), Some("a"));
        assert_eq!(link.get_attr("title").as_deref(), Some("t"));
        assert_eq!(link.get_attr("href"), None);
    }

    #[test]
    fn test_link_payload_keeps_inline_children() {
        let node = VNode::element(
            "h2#api",
            vec![
                VNode::text_node("The "),
                VNode::with_text("code", "build").keyed("k1"),
            ],
        )
        .keyed("heading");
        let link = link_payload(&node, Some("api"));

        assert_eq!(link.key, None);
        assert_eq!(
            link.children(),
            &[VNode::text_node("The "), VNode::with_text("code", "build")]
        );
        // Source block is untouched.
        assert_eq!(node.key.as_deref(), Some("heading"));
        assert_eq!(node.children()[1].key.as_deref(), Some("k1"));
    }
}
