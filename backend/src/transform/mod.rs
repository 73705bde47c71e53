//! Transformation module.
//!
//! This module holds the text effects served by the API:
//! - Catalog: the closed set of transformation names
//! - Engine: name lookup and seeded application
//! - Case / Cipher / Effects / Words: the rewrite functions themselves

pub mod case;
pub mod catalog;
pub mod cipher;
pub mod effects;
pub mod engine;
pub mod words;

pub use catalog::{transformations_description, Transformation};
pub use engine::{Transformer, TransformerConfig};
