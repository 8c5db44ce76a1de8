//! Domain models for verforte
//!
//! Plain records produced by the repositories and consumed by the matrix
//! builder and the presentation layer.

pub mod record;
pub mod status;

pub use record::{BoardRecord, SystemRecord};
pub use status::{StatusCode, StatusTone};
