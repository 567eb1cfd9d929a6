/*
 * outline.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Outline tree types.

use crate::error::Result;
use crate::heading::HeadingLevel;
use serde::Serialize;
use toc_vnode::{AttrValue, VNode};

/// A single entry in the outline.
///
/// Children are the entry's direct sub-headings, in document order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlineEntry {
    /// Heading level (1-6)
    pub level: HeadingLevel,

    /// Resolved heading identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Heading content re-tagged as a link
    pub link: VNode,

    /// Child entries (nested headings)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<OutlineEntry>,
}

impl OutlineEntry {
    /// Link target (`#id`), if the heading had an identifier.
    pub fn href(&self) -> Option<&str> {
        self.link.attr_value("href").and_then(AttrValue::as_str)
    }
}

/// A complete outline: the top-level entries and an optional title.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Outline {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Root entries (headings with no shallower heading before them)
    pub entries: Vec<OutlineEntry>,
}

impl Outline {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of entries at every depth.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Pre-order walk over all entries, which is document order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: self.entries.iter().rev().collect(),
        }
    }

    /// Number of nesting levels in the tree (0 for an empty outline).
    ///
    /// This counts tree depth, not heading levels: `h1 > h3` has depth 2.
    pub fn max_depth(&self) -> usize {
        let mut max = 0;
        let mut stack: Vec<(&OutlineEntry, usize)> =
            self.entries.iter().map(|entry| (entry, 1)).collect();

        while let Some((entry, depth)) = stack.pop() {
            max = max.max(depth);
            stack.extend(entry.children.iter().map(|child| (child, depth + 1)));
        }

        max
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Iterator returned by [`Outline::iter`].
pub struct Iter<'a> {
    stack: Vec<&'a OutlineEntry>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a OutlineEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.stack.pop()?;
        self.stack.extend(entry.children.iter().rev());
        Some(entry)
    }
}

impl<'a> IntoIterator for &'a Outline {
    type Item = &'a OutlineEntry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
