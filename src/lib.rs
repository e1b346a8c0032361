//! tl - Task List Library
//!
//! This library provides the core functionality for the tl CLI tool:
//! a personal task list with tags, filters, search, and manual ordering.
//!
//! # Core Concepts
//!
//! - **Record store**: the ordered list of tasks, the single source of truth
//! - **Derived views**: pure filtering into the visible subset plus counters
//! - **Tag index**: every distinct tag in use, for filter chips
//! - **Reorder reconciliation**: merging a reordering of the visible subset
//!   back into the full list without disturbing hidden tasks
//!
//! # Module Organization
//!
//! - `cli`: command-line interface using clap
//! - `config`: configuration loading from `tl.toml`
//! - `error`: error types and result aliases
//! - `record`: task records and input normalization
//! - `store`: the record store and its mutations
//! - `view`: view filters and derivation
//! - `reorder`: visible-subset order reconciliation
//! - `session`: the controller owning store and filter state
//! - `storage`: file storage with atomic writes
//! - `events`: JSONL event output for integrations
//! - `output`: shared CLI output formatting

pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod output;
pub mod record;
pub mod reorder;
pub mod session;
pub mod storage;
pub mod store;
pub mod view;

pub use error::{Error, Result};
