//! Core logic for file-filter
//!
//! This module contains pure logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Pattern, MatchResult, EventContext, RefSpec)
//! - `services/` - Matching, change-set resolution, result emission
//! - `ports/` - Trait definitions for the metadata API and output sink

pub mod models;
pub mod ports;
pub mod services;
