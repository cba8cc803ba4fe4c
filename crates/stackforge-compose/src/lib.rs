//! # stackforge-compose
//!
//! Document model, catalog, emitter, merger, and validator for
//! compose-file scaffolding.
//!
//! Handles:
//! - **Value**: closed value tree the emitter is total over.
//! - **Model**: typed `Document` and `ServiceEntry` representation.
//! - **Catalog**: immutable registries of predefined stacks and services.
//! - **Emit**: deterministic document-to-text rendering.
//! - **Merge**: fresh single-service documents and textual augmentation.
//! - **Validate**: shallow structural checks over raw document text.

pub mod catalog;
pub mod emit;
pub mod merge;
pub mod model;
pub mod validate;
pub mod value;
