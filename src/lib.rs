//! Shared library for `CourseLens`
//! Contains core display-data shaping used by the CLI and report generators

pub mod core;
pub mod shared;

pub use shared::config;
pub use shared::get_version;
