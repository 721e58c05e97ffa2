//! Core types and configuration for tagmake.
//!
//! This crate defines the `tagmake.toml` schema ([`TagmakeConfig`]),
//! environment/CLI [`Overrides`], tag discovery from a directory of
//! version folders, and the resolved [`BuildPlan`] handed to the script
//! generator.

pub mod config;
pub mod error;
pub mod tags;

pub use config::{BuildPlan, ImageConfig, OutputConfig, Overrides, TagmakeConfig};
pub use error::{Error, Result};
pub use tags::discover_tags;
