//! Design Extraction (DEX) Library
//!
//! A library for extracting design properties from exported design-document
//! trees (Figma-style JSON). One traversal turns a node tree into a flat
//! element list with normalized coordinates, deduplicated style collections,
//! detected form fields, spacing relationships, and a screen-type guess.
//!
//! # Module Overview
//!
//! - [`document`] - Input node model and root-shape normalization
//! - [`extract`] - The extraction engine and its style collectors
//! - [`config`] - Configuration file support (detection thresholds)
//! - [`types`] - Output data types and structures
//!
//! # Example
//!
//! ```
//! use dex_lib::{extract_design_properties, Config};
//! use serde_json::json;
//!
//! # fn example() -> dex_lib::Result<()> {
//! let document = json!({
//!     "document": {
//!         "type": "DOCUMENT",
//!         "children": [{ "type": "FRAME", "name": "Home" }]
//!     }
//! });
//! let properties = extract_design_properties(document, &Config::default())?;
//! assert_eq!(properties.elements.len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod types;

pub use config::Config;
pub use document::{parse_document, DocumentRoot, Node};
pub use error::{DexError, ErrorCategory, ErrorPayload, Result};
pub use extract::{
    classify_screen, color_to_hex, extract_design_properties, extract_from_nodes,
    spacing_relationships,
};
pub use types::{
    BorderRadius, ColorEntry, DesignProperties, Element, ElementProperties, FieldType, FormField,
    HierarchyEntry, Position, ScreenType, Shadow, SpacingKind, SpacingRelationship,
    TypographyEntry,
};
