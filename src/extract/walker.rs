//! Pre-order traversal of the node tree.
//!
//! One pass drives everything: each visited node yields exactly one element
//! with a stable sequential id, while the style collectors populate the
//! shared accumulator. The accumulator's document-level slots are set-if-
//! absent, so the first node in traversal order providing an attribute wins
//! and later nodes never overwrite it.

use crate::document::Node;
use crate::types::{
    BorderRadius, ColorEntry, Dimensions, Element, ElementProperties, HierarchyEntry,
    LayoutProperties, Padding, Shadow, TypographyEntry,
};

use super::form_fields::{self, FieldCandidate, TextNode};
use super::geometry::FrameOrigin;
use super::styles;

/// The single-pass accumulator threaded through traversal.
#[derive(Default)]
pub(crate) struct Accumulator {
    pub colors: Vec<ColorEntry>,
    pub typography: Vec<TypographyEntry>,
    pub elements: Vec<Element>,
    pub hierarchy: Vec<HierarchyEntry>,
    pub dimensions: Option<Dimensions>,
    pub padding: Option<Padding>,
    pub gap: Option<f64>,
    pub layout: Option<LayoutProperties>,
    pub border_radius: Option<BorderRadius>,
    pub shadow: Option<Shadow>,
    pub origin: FrameOrigin,
    pub text_nodes: Vec<TextNode>,
    pub candidates: Vec<FieldCandidate>,
}

/// Walk every root in order, filling the accumulator.
pub(crate) fn walk_roots(roots: &[Node], acc: &mut Accumulator) {
    for root in roots {
        walk(root, None, 0, acc);
    }
}

fn walk(node: &Node, parent_id: Option<&str>, depth: u32, acc: &mut Accumulator) {
    let id = format!("element_{}", acc.elements.len());
    let name = node.display_name();
    let mut props = ElementProperties::default();

    if let Some(bb) = &node.absolute_bounding_box {
        if depth == 0 {
            acc.origin.capture(bb);
            if acc.dimensions.is_none() {
                acc.dimensions = Some(Dimensions {
                    width: bb.width,
                    height: bb.height,
                });
            }
        }
        props.position = Some(acc.origin.relative(bb));
    }

    if let Some(constraints) = &node.constraints {
        props.constraints = Some(constraints.clone());
    }

    styles::collect_fills(node, &id, &mut props, &mut acc.colors);
    styles::collect_strokes(node, &id, &mut props, &mut acc.colors);
    styles::collect_corner_radius(node, &mut props, &mut acc.border_radius);
    styles::collect_shadows(node, &mut props, &mut acc.shadow);

    if node.node_type == "TEXT" {
        styles::collect_typography(node, &id, &mut props, &mut acc.typography, &mut acc.colors);
        if let Some(bb) = &node.absolute_bounding_box {
            if let Some(content) = node.characters.as_deref() {
                if !content.is_empty() {
                    acc.text_nodes.push(TextNode {
                        x: bb.x,
                        y: bb.y,
                        content: content.to_string(),
                    });
                }
            }
        }
    }

    styles::collect_padding(node, &mut props, &mut acc.padding);
    styles::collect_layout(node, &mut props, &mut acc.layout);

    if let Some(gap) = node.item_spacing {
        props.gap = Some(gap);
        if acc.gap.is_none() {
            acc.gap = Some(gap);
        }
    }

    if form_fields::is_field_candidate(node) {
        if let Some(candidate) = form_fields::build_candidate(node, &id, &props) {
            acc.candidates.push(candidate);
        }
    }

    acc.elements.push(Element {
        id: id.clone(),
        node_type: node.node_type.clone(),
        name: name.clone(),
        parent_id: parent_id.map(str::to_string),
        depth,
        properties: props,
    });
    acc.hierarchy.push(HierarchyEntry {
        id: id.clone(),
        name,
        node_type: node.node_type.clone(),
        depth,
        parent_id: parent_id.map(str::to_string),
    });

    for child in &node.children {
        walk(child, Some(&id), depth + 1, acc);
    }
}
