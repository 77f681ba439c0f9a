// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod loader;
mod registry;
mod resources;

pub use config::{ConfigError, KeyProblem, MalformedConfigError};
pub use loader::LoadError;
pub use registry::{RegistrationError, UnknownUnitError};
pub use resources::ResourceConflictError;
