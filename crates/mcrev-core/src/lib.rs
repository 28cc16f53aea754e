//! Core domain types for managed-care plan submissions.
//!
//! This crate is deliberately free of wire-format and I/O dependencies.
//! The codec crate depends on it; it depends on nothing heavier than serde.

pub mod catalog;
pub mod contacts;
pub mod contract;
pub mod documents;
pub mod error;
pub mod rates;
pub mod submission;
pub mod validate;

pub use error::{Error, Result};
