/*
 * flatten.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Pre-order flattening of nested block trees.

use toc_vnode::VNode;

/// Flatten a block tree into document order.
///
/// Each node is emitted before its children, and children before the
/// node's next sibling. Containers are kept in the output. The walk uses an
/// explicit stack, so nesting depth is bounded by memory, not the call stack.
pub fn flatten(blocks: &[VNode]) -> Vec<&VNode> {
    let mut flat = Vec::with_capacity(blocks.len());
    let mut stack: Vec<&VNode> = blocks.iter().rev().collect();

    while let Some(node) = stack.pop() {
        flat.push(node);
        stack.extend(node.children().iter().rev());
    }

    flat
}
