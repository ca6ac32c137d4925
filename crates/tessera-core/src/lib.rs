//! Core types and utilities for the Tessera design-token pipeline.
//!
//! This crate provides the foundational types used across the other
//! tessera crates:
//! - The typed token tree (documents, groups, leaves, value union)
//! - Path naming rules shared by every generator
//! - Parsing from the on-disk JSON token format
//! - Error types

pub mod errors;
pub mod model;
pub mod parse;
pub mod path;

pub use errors::*;
pub use model::*;
pub use parse::parse_document;
