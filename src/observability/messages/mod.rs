// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] for emitting it with structured fields at its level.
//!
//! # Organization
//!
//! * `registry` - Unit registration and lookup events
//! * `resources` - Resource requirement resolution events
//! * `loader` - Config file load and save events
//!
//! # Usage Pattern
//!
//! ```rust
//! use nlu_pipeline_config::observability::messages::loader::ConfigLoadStarted;
//! use nlu_pipeline_config::observability::messages::StructuredLog;
//!
//! let msg = ConfigLoadStarted {
//!     path: "configs/default-engine.yaml",
//!     format: "yaml",
//! };
//!
//! msg.log();
//! ```

use tracing::Span;

pub mod loader;
pub mod registry;
pub mod resources;

/// A log message that knows its level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a tracing event.
    fn log(&self);

    /// Open a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
