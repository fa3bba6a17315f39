//! fitcomplete - autocomplete metadata for table-based wiki test pages
//!
//! Scans a page's tables for scenarios, table templates and `$variable=`
//! assignments, describes the fixture types its import and library tables
//! bring into scope, and emits everything as one JSON document.

pub mod catalog;
pub mod cli;
pub mod core;
pub mod grid;
pub mod output;
pub mod page;
pub mod usage;

pub use core::config::Config;
pub use core::error::{Error, Result};
