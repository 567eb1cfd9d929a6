/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for outline generation.
//!
//! Building an outline never fails; these errors come from the edges around
//! it (reading blocks, loading configuration, constructing levels).

use thiserror::Error;

/// Errors that can occur while preparing input for, or configuring, the
/// outline builder.
#[derive(Debug, Error)]
pub enum TocError {
    /// Block input could not be decoded.
    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error (e.g., reading an input or config file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Configured depth is outside 1..=6.
    #[error("Invalid TOC depth {depth}: expected a value between 1 and 6")]
    InvalidDepth { depth: u8 },

    /// Heading level is outside 1..=6.
    #[error("Invalid heading level {level}: expected a value between 1 and 6")]
    InvalidLevel { level: u8 },
}

/// Result type for outline operations.
pub type Result<T> = std::result::Result<T, TocError>;
