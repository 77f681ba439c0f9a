// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // dictionary form + file loader
pub mod errors;     // error handling
pub mod observability;
pub mod registry;   // unit_name -> constructor
pub mod resources;  // resource requirements + merge
pub mod traits;     // unified abstractions
pub mod units;      // concrete unit configs
