//! Design-document input parsing.
//!
//! This module provides:
//! - [`Node`] and friends - serde types for the Figma-style node graph
//! - [`DocumentRoot`] - accepted root shapes and their normalization
//! - [`parse_document`] - JSON value to traversal roots

pub mod node;
pub mod shape;

pub use node::{BoundingBox, Color, Effect, Node, Paint, ShadowVector, TypeStyle};
pub use shape::{parse_document, DocumentRoot, NodeWrapper};
