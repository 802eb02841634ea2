// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TOML trigger instance configuration
//!
//! This module provides:
//! - Raw types that mirror the TOML structure exactly
//! - A parser producing them
//! - A loader that validates instances against the registry and
//!   declared settings, seeding a settings store
//!
//! # Example
//!
//! ```ignore
//! use lifecycle_core::{load_instances, parse_instances};
//!
//! let raw = parse_instances(toml_content)?;
//! let instances = load_instances(&raw, &registry, &mut store)?;
//! ```

mod loader;
mod types;


pub use loader::{load_instances, parse_instances, ConfigError, TriggerInstance};
pub use types::{RawInstanceConfig, RawTriggerInstance};
