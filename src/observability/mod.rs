// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! Message types follow a struct-based pattern with `Display` so that log
//! text lives in one place instead of as string literals at call sites.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::registry` - Unit registration and lookup
//! * `messages::resources` - Resource requirement resolution
//! * `messages::loader` - Config file loading and saving
//!
//! # Usage
//!
//! ```rust
//! use nlu_pipeline_config::observability::messages::registry::UnknownUnitRequested;
//!
//! let msg = UnknownUnitRequested {
//!     unit_name: "does-not-exist",
//! };
//!
//! tracing::error!("{}", msg);
//! ```

pub mod messages;
