/*
 * builder.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Outline construction from heading levels.
 */

//! Outline construction.
//!
//! Headings carry no parent pointers, so the hierarchy is inferred from
//! levels and document order in a single pass. A cursor table holds the most
//! recent entry at each level:
//!
//! 1. The parent of a level-`L` heading is the cursor at the largest level
//!    below `L` that is set; with none set the heading becomes a root.
//! 2. The new entry is appended as the parent's last child (or last root).
//! 3. `cursor[L]` becomes the new entry and every deeper cursor is cleared,
//!    so later headings cannot attach to a stale entry from an earlier branch.
//!
//! Entries live in an arena while the pass runs and are moved into the owned
//! tree at the end.

use crate::config::TocConfig;
use crate::flatten::flatten;
use crate::heading::{Heading, HeadingLevel, MAX_LEVEL, classify_heading, link_payload};
use crate::outline::{Outline, OutlineEntry};
use toc_vnode::VNode;

/// Build an outline from blocks, including every heading level.
pub fn build_outline(blocks: &[VNode]) -> Outline {
    build_outline_with_config(blocks, &TocConfig::default())
}

/// Build an outline from blocks.
///
/// Nested containers are flattened in document order first. Non-heading
/// blocks and headings deeper than `config.depth` are skipped. The config is
/// not validated here; a depth outside 1..=6 is clamped (see
/// [`TocConfig::includes`]).
pub fn build_outline_with_config(blocks: &[VNode], config: &TocConfig) -> Outline {
    let headings = flatten(blocks)
        .into_iter()
        .filter_map(classify_heading)
        .filter(|heading| config.includes(heading.level));

    Outline {
        title: config.title.clone(),
        entries: build_entries(headings),
    }
}

struct ArenaEntry {
    level: HeadingLevel,
    id: Option<String>,
    link: VNode,
    children: Vec<usize>,
}

/// Build the entry tree from headings already in document order.
pub fn build_entries<'a>(headings: impl IntoIterator<Item = Heading<'a>>) -> Vec<OutlineEntry> {
    let mut arena: Vec<ArenaEntry> = Vec::new();
    let mut roots: Vec<usize> = Vec::new();
    let mut cursor: [Option<usize>; MAX_LEVEL as usize] = [None; MAX_LEVEL as usize];

    for heading in headings {
        let slot = heading.level.index();
        let index = arena.len();

        let parent = cursor[..slot].iter().rev().find_map(|entry| *entry);
        match parent {
            Some(parent) => {
                tracing::trace!(
                    level = %heading.level,
                    id = ?heading.id,
                    parent_level = %arena[parent].level,
                    "Attaching heading to parent"
                );
                arena[parent].children.push(index);
            }
            None => {
                tracing::trace!(level = %heading.level, id = ?heading.id, "Adding root heading");
                roots.push(index);
            }
        }

        arena.push(ArenaEntry {
            level: heading.level,
            link: link_payload(heading.node, heading.id.as_deref()),
            id: heading.id,
            children: Vec::new(),
        });

        cursor[slot] = Some(index);
        for deeper in &mut cursor[slot + 1..] {
            *deeper = None;
        }
    }

    tracing::debug!(
        headings = arena.len(),
        roots = roots.len(),
        "Built outline"
    );

    into_tree(arena, &roots)
}

/// Move arena entries into an owned tree.
///
/// Children are always pushed after their parent, so walking the arena
/// backwards finishes every child before its parent needs it.
fn into_tree(arena: Vec<ArenaEntry>, roots: &[usize]) -> Vec<OutlineEntry> {
    let mut built: Vec<Option<OutlineEntry>> = Vec::with_capacity(arena.len());
    built.resize_with(arena.len(), || None);

    for (index, entry) in arena.into_iter().enumerate().rev() {
        let children = entry
            .children
            .iter()
            .filter_map(|&child| built[child].take())
            .collect();

        built[index] = Some(OutlineEntry {
            level: entry.level,
            id: entry.id,
            link: entry.link,
            children,
        });
    }

    roots
        .iter()
        .filter_map(|&root| built[root].take())
        .collect()
}
