// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod dict;
mod loader;

pub mod consts;

pub use dict::{unit_dict, unit_name_of, ConfigDict, DictReader, DictWriter};
pub use loader::{
    load_dict, load_engine_config, load_unit_config, save_unit_config, ConfigFormat,
};
