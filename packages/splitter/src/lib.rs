//! Lunonex SQL Splitter - Split the combined database setup script into parts.
//!
//! The Lunonex database setup ships as one document made of three parts,
//! each introduced by a banner ending in `LUNONEX DATABASE SETUP - PART`.
//! This crate cuts the document on that banner and writes every part that
//! carries a `1 OF 3`, `2 OF 3` or `3 OF 3` marker to its Supabase file.
//!
//! # Example
//!
//! ```
//! use lunonex_sql_splitter::config::DELIMITER;
//! use lunonex_sql_splitter::splitter::plan;
//!
//! let content = format!("{DELIMITER}1 OF 3\nAAA{DELIMITER}2 OF 3\nBBB");
//! let parts = plan(&content);
//! assert_eq!(parts.len(), 2);
//! assert_eq!(parts[1].file_name(), "SUPABASE-PART-2-TIERS-MARKETPLACES.sql");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Delimiter constants and output validation
//! - [`error`]: Error types and Result alias
//! - [`splitting`]: Fragment splitting and marker routing
//! - [`input`]: Reading the document from a file or stdin
//! - [`writer`]: Writing part files
//! - [`splitter`]: Main split-and-write service
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod splitter;
pub mod splitting;
pub mod writer;

// Re-export main functions
pub use splitter::{plan, split_and_route, SplitReport, WrittenPart};

// Re-export commonly used items
pub use config::{DELIMITER, PART_KEYWORD};
pub use error::{Result, SplitterError};
pub use splitting::{PartRoute, RoutedPart, SplitEngine, PART_ROUTES};
