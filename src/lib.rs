//! Orderlens - read-only work order status reporting
//!
//! This library provides the core functionality for Orderlens, including:
//! - Environment-based database configuration
//! - A scoped, blocking PostgreSQL connection layer
//! - Repository layer for the two read queries over the work order table
//! - Aggregation of status occurrence counts (first-occurrence ordered)
//! - Shaping of rows into fixed-label records with arity validation
//! - CLI command parsing and table/JSON output formatting
//!
//! # Example
//!
//! ```no_run
//! use orderlens::cli::run;
//!
//! fn main() {
//!     if let Err(e) = run() {
//!         eprintln!("Error: {}", e);
//!         std::process::exit(orderlens::cli::exit_code(&e));
//!     }
//! }
//! ```

pub mod cli;
pub mod config;
pub mod db;
pub mod models;
pub mod repo;
pub mod report;

mod error;
pub use error::Error;
