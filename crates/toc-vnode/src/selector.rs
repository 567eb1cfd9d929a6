/*
 * selector.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Compact selector descriptors (`tag#id.class1.class2`).
//!
//! A vnode's `sel` field packs the element tag, an optional id, and any
//! number of classes into one string, hyperscript style. [`parse_selector`]
//! splits it back into a [`Selector`]. Parsing never fails: unknown or empty
//! segments are skipped and a missing tag falls back to [`DEFAULT_TAG`].

use std::fmt;

/// Tag used when a selector has no tag segment (`#main`, `.note`).
pub const DEFAULT_TAG: &str = "div";

/// A parsed selector descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    /// Element tag name (e.g. `h2`)
    pub tag: String,

    /// Identifier embedded after `#`, if any
    pub id: Option<String>,

    /// Classes embedded after `.`, in source order
    pub classes: Vec<String>,
}

impl Selector {
    /// Returns true if the selector carries the given class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag)?;
        if let Some(id) = &self.id {
            write!(f, "#{}", id)?;
        }
        for class in &self.classes {
            write!(f, ".{}", class)?;
        }
        Ok(())
    }
}

/// Parse a selector descriptor into its tag, id and classes.
///
/// The first `#` segment is the id; later `#` segments are ignored, matching
/// how hyperscript builders resolve the element id.
pub fn parse_selector(sel: &str) -> Selector {
    let sel = sel.trim();
    let tag_end = sel.find(['#', '.']).unwrap_or(sel.len());
    let mut tag = sel[..tag_end].to_string();
    let mut id = None;
    let mut classes = Vec::new();

    let mut rest = &sel[tag_end..];
    while let Some(marker) = rest.chars().next() {
        // Markers are ASCII, so slicing past them is always on a char boundary.
        let body = &rest[1..];
        let end = body.find(['#', '.']).unwrap_or(body.len());
        let name = &body[..end];

        if !name.is_empty() {
            match marker {
                '#' if id.is_none() => id = Some(name.to_string()),
                '.' => classes.push(name.to_string()),
                _ => {}
            }
        }

        rest = &body[end..];
    }

    if tag.is_empty() {
        tag = DEFAULT_TAG.to_string();
    }

    Selector { tag, id, classes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tag_only() {
        let sel = parse_selector("h1");
        assert_eq!(sel.tag, "h1");
        assert_eq!(sel.id, None);
        assert!(sel.classes.is_empty());
    }

    #[test]
    fn test_tag_and_id() {
        let sel = parse_selector("h2#1a-2a");
        assert_eq!(sel.tag, "h2");
        assert_eq!(sel.id.as_deref(), Some("1a-2a"));
    }

    #[test]
    fn test_classes_in_any_position() {
        let sel = parse_selector("h3.lead#intro.wide");
        assert_eq!(
            sel,
            Selector {
                tag: "h3".to_string(),
                id: Some("intro".to_string()),
                classes: vec!["lead".to_string(), "wide".to_string()],
            }
        );
        assert!(sel.has_class("wide"));
        assert!(!sel.has_class("narrow"));
    }

    #[test]
    fn test_missing_tag_defaults_to_div() {
        let sel = parse_selector("#main.container");
        assert_eq!(sel.tag, DEFAULT_TAG);
        assert_eq!(sel.id.as_deref(), Some("main"));
        assert_eq!(sel.classes, vec!["container".to_string()]);
    }

    #[test]
    fn test_first_id_wins() {
        let sel = parse_selector("h1#first#second");
        assert_eq!(sel.id.as_deref(), Some("first"));
    }

    #[test]
    fn test_empty_segments_are_skipped() {
        let sel = parse_selector("p#..note.");
        assert_eq!(sel.tag, "p");
        assert_eq!(sel.id, None);
        assert_eq!(sel.classes, vec!["note".to_string()]);
    }

    #[test]
    fn test_display() {
        let sel = parse_selector("h4#a.b.c");
        assert_eq!(sel.to_string(), "h4#a.b.c");
        assert_eq!(parse_selector("").to_string(), "div");
    }
}
