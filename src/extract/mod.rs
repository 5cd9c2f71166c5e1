//! The extraction engine.
//!
//! One traversal pass builds the element list, hierarchy, deduplicated style
//! collections, and form-field candidates; three finishing passes then
//! resolve field labels/placeholders, spacing relationships, and the screen
//! type, since each depends on the complete traversal result.
//!
//! The engine is a pure, synchronous, single-threaded computation: repeated
//! invocation with identical input yields byte-identical output.

mod color;
mod form_fields;
mod geometry;
mod screen;
mod spacing;
mod styles;
mod walker;


pub use color::color_to_hex;
pub use screen::classify_screen;
pub use spacing::spacing_relationships;

use crate::config::Config;
use crate::document::{parse_document, Node};
use crate::error::Result;
use crate::types::{DesignProperties, DocumentBorders, DocumentSpacing};

use walker::Accumulator;

/// Extract design properties from a parsed JSON document.
///
/// Accepts any of the four root shapes (see [`crate::document::shape`]);
/// fails only when the value is not a well-formed object.
pub fn extract_design_properties(
    value: serde_json::Value,
    config: &Config,
) -> Result<DesignProperties> {
    let roots = parse_document(value)?;
    Ok(extract_from_nodes(&roots, config))
}

/// Extract design properties from already-parsed traversal roots.
/// Total: this never fails, whatever the nodes contain.
pub fn extract_from_nodes(roots: &[Node], config: &Config) -> DesignProperties {
    let mut acc = Accumulator::default();
    walker::walk_roots(roots, &mut acc);

    let form_fields = form_fields::resolve_fields(acc.candidates, &acc.text_nodes, config);
    let spacing_relationships = spacing::spacing_relationships(&acc.elements, config);
    let screen_type = screen::classify_screen(&acc.typography, &acc.elements, &form_fields);

    DesignProperties {
        colors: acc.colors,
        typography: acc.typography,
        spacing: DocumentSpacing {
            padding: acc.padding,
            gap: acc.gap,
        },
        dimensions: acc.dimensions,
        layout: acc.layout,
        borders: DocumentBorders {
            border_radius: acc.border_radius,
        },
        shadows: acc.shadow,
        elements: acc.elements,
        hierarchy: acc.hierarchy,
        form_fields,
        spacing_relationships,
        screen_type,
    }
}
