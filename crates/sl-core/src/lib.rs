//! sl-core - Core library for Starlift
//!
//! This crate provides the shared types used across all Starlift components:
//! project configuration parsing, the coded error type, the schema-less
//! `Table` abstraction, and CSV read/write for tables.

pub mod config;
pub mod csv;
pub mod error;
pub mod table;

pub use config::Config;
pub use crate::csv::{read_csv, write_csv};
pub use error::{CoreError, CoreResult};
pub use table::{Table, Value};
