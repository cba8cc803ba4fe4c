//! # stackforge-common
//!
//! Shared error definitions, constants, and structured report records
//! used across the entire stackforge workspace.
//!
//! This crate is the leaf of the dependency graph — it depends on no other
//! internal crate and provides the foundational primitives that all other
//! crates build upon.

pub mod constants;
pub mod error;
pub mod report;
