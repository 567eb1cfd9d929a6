/*
 * html.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! HTML serialisation for vnode trees.
//!
//! Attributes are written in a fixed order: `id`, `class`, then the
//! remaining `data.attrs` in insertion order. A non-empty `id` attribute in
//! `data.attrs` takes precedence over the selector id, mirroring how ids are
//! resolved for headings. Numeric attributes are stringified, `true` becomes
//! an empty value and `false` omits the attribute.
//!
//! Tag and attribute names come from untrusted vnode data, so any name that
//! is not a plain identifier is dropped: an invalid element is replaced by
//! its escaped content and an invalid attribute is skipped.

use std::io::Write;
use toc_vnode::VNode;

fn push_escaped(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// Escape text for use in HTML content or a quoted attribute value.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    push_escaped(&mut out, s);
    out
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    push_escaped(out, value);
    out.push('"');
}

/// Tag and attribute names must be an ASCII letter followed by ASCII
/// alphanumerics or `-`.
fn is_markup_name(name: &str) -> bool {
    let mut bytes = name.bytes();
    bytes.next().is_some_and(|b| b.is_ascii_alphabetic())
        && bytes.all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

fn push_content(node: &VNode, out: &mut String) {
    if let Some(text) = &node.text {
        push_escaped(out, text);
    }
    for child in node.children() {
        push_node(child, out);
    }
}

fn push_node(node: &VNode, out: &mut String) {
    let Some(selector) = node.selector() else {
        // Bare text node
        push_content(node, out);
        return;
    };

    if !is_markup_name(&selector.tag) {
        // Keep the content, drop the element
        tracing::warn!(tag = %selector.tag, "Skipping element with invalid tag name");
        push_content(node, out);
        return;
    }

    let data = node.data.as_ref();

    out.push('<');
    out.push_str(&selector.tag);

    match node.get_attr("id").filter(|id| !id.is_empty()) {
        Some(id) => push_attr(out, "id", &id),
        None => {
            if let Some(id) = selector.id.as_deref().filter(|id| !id.is_empty()) {
                push_attr(out, "id", id);
            }
        }
    }

    let mut classes: Vec<&str> = selector.classes.iter().map(String::as_str).collect();
    if let Some(data) = data {
        for (class, enabled) in &data.class {
            if *enabled && !classes.contains(&class.as_str()) {
                classes.push(class);
            }
        }
    }
    if !classes.is_empty() {
        push_attr(out, "class", &classes.join(" "));
    }

    if let Some(data) = data {
        for (name, value) in &data.attrs {
            if name == "id" || name == "class" {
                continue;
            }
            if !is_markup_name(name) {
                tracing::warn!(attr = %name, "Skipping attribute with invalid name");
                continue;
            }
            if let Some(value) = value.as_text() {
                push_attr(out, name, &value);
            }
        }
    }

    out.push('>');
    push_content(node, out);
    out.push_str("</");
    out.push_str(&selector.tag);
    out.push('>');
}

/// Serialise a vnode tree as an HTML string.
pub fn to_html(node: &VNode) -> String {
    let mut out = String::new();
    push_node(node, &mut out);
    out
}

/// Serialise a vnode tree as HTML into a writer.
pub fn write_html<W: Write>(node: &VNode, writer: &mut W) -> std::io::Result<()> {
    writer.write_all(to_html(node).as_bytes())
}
