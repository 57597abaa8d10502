//! Error handling for the access-control core
//!
//! Authorization predicates never fail; these errors are raised only by
//! configuration loading, registry validation and administrative edits.

#![allow(missing_docs)]

mod helpers;
mod types;

pub use types::{AccessError, Result};
