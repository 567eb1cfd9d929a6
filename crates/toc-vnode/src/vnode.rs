/*
 * vnode.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The virtual DOM node type.
//!
//! A [`VNode`] is one content block: an element described by a compact
//! selector (`h2#intro`), optional [`VNodeData`], and either child nodes or a
//! text payload. The JSON shape matches what hyperscript-style virtual DOM
//! libraries serialise, with absent fields omitted:
//!
//! ```json
//! { "sel": "h2", "data": { "attrs": { "id": "intro" } }, "text": "Intro" }
//! ```

use crate::selector::{Selector, parse_selector};
use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// An attribute value: a string, number or boolean.
///
/// Booleans follow DOM semantics: `true` sets the attribute with an empty
/// value and `false` removes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

impl AttrValue {
    /// The value when it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The value as it appears in markup; `None` for `false`.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            AttrValue::String(s) => Some(Cow::Borrowed(s)),
            AttrValue::Number(n) => Some(Cow::Owned(n.to_string())),
            AttrValue::Bool(true) => Some(Cow::Borrowed("")),
            AttrValue::Bool(false) => None,
        }
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::String(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::String(value.to_string())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Number(value.into())
    }
}

/// Element data attached to a vnode.
///
/// Only the modules relevant to static content are modelled. Maps keep
/// insertion order so that rendering is deterministic.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VNodeData {
    /// HTML attributes (`id`, `href`, ...)
    #[serde(default, skip_serializing_if = "LinkedHashMap::is_empty")]
    pub attrs: LinkedHashMap<String, AttrValue>,

    /// DOM properties; any JSON value, never rendered as markup
    #[serde(default, skip_serializing_if = "LinkedHashMap::is_empty")]
    pub props: LinkedHashMap<String, serde_json::Value>,

    /// Class toggles; classes mapped to `true` are applied
    #[serde(default, skip_serializing_if = "LinkedHashMap::is_empty")]
    pub class: LinkedHashMap<String, bool>,
}

impl VNodeData {
    /// Data holding a single attribute.
    pub fn with_attr(name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        let mut data = Self::default();
        data.attrs.insert(name.into(), value.into());
        data
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty() && self.props.is_empty() && self.class.is_empty()
    }
}

/// A virtual DOM node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VNode {
    /// Selector descriptor (`tag#id.class`); `None` for bare text nodes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sel: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<VNodeData>,

    /// Child nodes; `None` when the node carries text instead
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<VNode>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Reconciliation key, meaningful only inside the tree it came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl VNode {
    /// Element with child nodes.
    pub fn element(sel: impl Into<String>, children: Vec<VNode>) -> Self {
        VNode {
            sel: Some(sel.into()),
            children: Some(children),
            ..Default::default()
        }
    }

    /// Element whose content is a single text payload.
    pub fn with_text(sel: impl Into<String>, text: impl Into<String>) -> Self {
        VNode {
            sel: Some(sel.into()),
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Bare text node (no selector).
    pub fn text_node(text: impl Into<String>) -> Self {
        VNode {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Builder-style attribute setter; creates `data` if needed.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.data
            .get_or_insert_with(VNodeData::default)
            .attrs
            .insert(name.into(), value.into());
        self
    }

    /// Builder-style key setter.
    pub fn keyed(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Parse the selector descriptor, if the node has one.
    pub fn selector(&self) -> Option<Selector> {
        self.sel.as_deref().map(parse_selector)
    }

    /// Raw attribute value.
    pub fn attr_value(&self, name: &str) -> Option<&AttrValue> {
        self.data.as_ref().and_then(|d| d.attrs.get(name))
    }

    /// Look up an HTML attribute as text. Numbers are stringified and a
    /// `false` attribute counts as absent.
    pub fn get_attr(&self, name: &str) -> Option<Cow<'_, str>> {
        self.attr_value(name).and_then(AttrValue::as_text)
    }

    /// Child nodes, or an empty slice for text and leaf nodes.
    pub fn children(&self) -> &[VNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Parse a single vnode from JSON.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Parse a JSON array of vnodes (a block sequence).
    pub fn list_from_json_str(json: &str) -> serde_json::Result<Vec<Self>> {
        serde_json::from_str(json)
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_element_constructors() {
        let node = VNode::element("ul", vec![VNode::with_text("li", "one")]);
        assert_eq!(node.sel.as_deref(), Some("ul"));
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.children()[0].text.as_deref(), Some("one"));
        assert!(node.text.is_none());
    }

    #[test]
    fn test_children_of_text_node_is_empty() {
        let node = VNode::with_text("p", "hello");
        assert!(node.children().is_empty());
        assert!(VNode::text_node("raw").sel.is_none());
    }

    #[test]
    fn test_attr_builder() {
        let node = VNode::with_text("h2", "Intro").attr("id", "intro");
        assert_eq!(node.get_attr("id").as_deref(), Some("intro"));
        assert_eq!(node.get_attr("href"), None);
        assert_eq!(VNode::with_text("h2", "x").get_attr("id"), None);
    }

    #[test]
    fn test_selector_accessor() {
        let node = VNode::with_text("h3#a.b", "x");
        let sel = node.selector().unwrap();
        assert_eq!(sel.tag, "h3");
        assert_eq!(sel.id.as_deref(), Some("a"));
        assert!(VNode::text_node("x").selector().is_none());
    }

    #[test]
    fn test_parse_json_with_omitted_fields() {
        let json = r#"[
            {"sel": "h1#top", "text": "Top"},
            {"sel": "div", "children": [
                {"sel": "h2", "data": {"attrs": {"id": "sub"}}, "text": "Sub"}
            ]}
        ]"#;
        let nodes = VNode::list_from_json_str(json).unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0], VNode::with_text("h1#top", "Top"));
        assert_eq!(
            nodes[1].children()[0],
            VNode::with_text("h2", "Sub").attr("id", "sub")
        );
    }

    #[test]
    fn test_serialize_omits_empty_fields() {
        let node = VNode::with_text("a", "Intro").attr("href", "#intro");
        assert_eq!(
            node.to_json_string().unwrap(),
            r##"{"sel":"a","data":{"attrs":{"href":"#intro"}},"text":"Intro"}"##
        );
    }

    #[test]
    fn test_parse_json_with_number_and_bool_attrs() {
        let json = r#"{
            "sel": "h2",
            "data": {
                "attrs": {"id": "sub", "tabindex": 0, "hidden": true, "draggable": false},
                "props": {"hidden": true, "dataset": {"x": 1}}
            },
            "text": "Sub"
        }"#;
        let node = VNode::from_json_str(json).unwrap();

        assert_eq!(node.attr_value("tabindex"), Some(&AttrValue::from(0i64)));
        assert_eq!(node.get_attr("tabindex").as_deref(), Some("0"));
        assert_eq!(node.get_attr("hidden").as_deref(), Some(""));
        assert_eq!(node.get_attr("draggable"), None);
        assert_eq!(node.attr_value("draggable"), Some(&AttrValue::Bool(false)));

        let props = &node.data.as_ref().unwrap().props;
        assert_eq!(props.get("hidden"), Some(&serde_json::json!(true)));
        assert_eq!(props.get("dataset"), Some(&serde_json::json!({"x": 1})));
    }

    #[test]
    fn test_number_attrs_serialize_as_numbers() {
        let node = VNode::with_text("li", "x").attr("value", 3i64);
        assert_eq!(
            node.to_json_string().unwrap(),
            r#"{"sel":"li","data":{"attrs":{"value":3}},"text":"x"}"#
        );
    }

    #[test]
    fn test_attr_value_as_str() {
        assert_eq!(AttrValue::from("a").as_str(), Some("a"));
        assert_eq!(AttrValue::from(true).as_str(), None);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(VNode::list_from_json_str("{\"sel\": 3}").is_err());
    }

    #[test]
    fn test_data_is_empty() {
        assert!(VNodeData::default().is_empty());
        assert!(!VNodeData::with_attr("id", "x").is_empty());
    }
}
