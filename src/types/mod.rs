//! Core data types for the extraction result.
//!
//! This module contains the output-side data structures:
//! - [`DesignProperties`] - The aggregate extraction result
//! - [`Element`] - Per-node derived record
//! - [`ColorEntry`], [`TypographyEntry`] - Deduplicated style collections
//! - [`FormField`], [`SpacingRelationship`] - Heuristic analysis results

mod properties;

pub use properties::{
    Border, BorderRadius, ColorEntry, ColorUsage, CornerRadii, DesignProperties, Dimensions,
    DocumentBorders, DocumentSpacing, Element, ElementProperties, FieldDimensions, FieldPosition,
    FieldStyling, FieldType, FormField, FormFieldProperties, HierarchyEntry, LayoutProperties,
    Padding, Position, ScreenType, Shadow, ShadowOffset, SpacingKind, SpacingRelationship,
    Typography, TypographyEntry,
};
