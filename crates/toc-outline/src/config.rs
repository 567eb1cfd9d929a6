/*
 * config.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Configuration for outline generation and rendering.
//!
//! Configuration can be built in code or read from TOML:
//!
//! ```toml
//! [toc]
//! depth = 3
//! title = "Contents"
//! list = "ordered"
//! ```
//!
//! Every key is optional; a missing `[toc]` table yields the defaults.

use crate::error::{Result, TocError};
use crate::heading::{HeadingLevel, MAX_LEVEL};
use serde::{Deserialize, Serialize};

/// The list element used when rendering an outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListKind {
    /// `<ul>`
    #[default]
    Unordered,
    /// `<ol>`
    Ordered,
}

impl ListKind {
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

/// Configuration for outline generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TocConfig {
    /// Maximum heading level to include (1-6, default: 6)
    pub depth: u8,

    /// Title for the rendered outline (e.g., "Contents")
    pub title: Option<String>,

    /// List element for rendering
    pub list: ListKind,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            depth: MAX_LEVEL,
            title: None,
            list: ListKind::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    toc: Option<TocConfig>,
}

impl TocConfig {
    /// Parse configuration from the `[toc]` table of a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(source)?;
        let config = file.toc.unwrap_or_default();
        config.validate()?;
        Ok(config)
    }

    /// Check that the depth is a valid heading level.
    pub fn validate(&self) -> Result<()> {
        HeadingLevel::new(self.depth)
            .map(|_| ())
            .ok_or(TocError::InvalidDepth { depth: self.depth })
    }

    /// Returns true if headings at `level` are included.
    ///
    /// An out-of-range depth is clamped to 1..=6, so an unvalidated config
    /// never hides every heading.
    pub fn includes(&self, level: HeadingLevel) -> bool {
        level.get() <= self.depth.clamp(HeadingLevel::MIN.get(), MAX_LEVEL)
    }
}
