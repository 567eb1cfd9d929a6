/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Virtual DOM node model for outline generation.
//!
//! This crate provides the block type consumed by `toc-outline`:
//! - [`VNode`]: a content block with a selector, data, children or text
//! - [`VNodeData`]: attributes, properties and class toggles
//! - [`AttrValue`]: a string, number or boolean attribute value
//! - [`Selector`] / [`parse_selector`]: the compact `tag#id.class` descriptor
//!
//! # Example
//!
//! ```rust
//! use toc_vnode::VNode;
//!
//! let heading = VNode::with_text("h2#intro", "Introduction");
//! let sel = heading.selector().unwrap();
//!
//! assert_eq!(sel.tag, "h2");
//! assert_eq!(sel.id.as_deref(), Some("intro"));
//! ```

pub mod selector;
pub mod vnode;

pub use selector::{DEFAULT_TAG, Selector, parse_selector};
pub use vnode::{AttrValue, VNode, VNodeData};
