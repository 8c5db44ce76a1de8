//! Verforte - RISC-V support matrix explorer
//!
//! Reads a support matrix repository and derives board records, status
//! records and the board × system matrix from it.
//!
//! - [`metadata`]: inline key lines and front-matter blocks
//! - [`document`]: the document index over a matrix root
//! - [`repository`]: board and status record loading
//! - [`matrix`]: the matrix, the status table and their sorting
//! - [`filter`]: record filters and filter options

pub mod cli;
pub mod commands;
pub mod config;
pub mod document;
pub mod domain;
pub mod error;
pub mod filter;
pub mod matrix;
pub mod metadata;
pub mod repository;
pub mod ui;
