//! Heuristic detection of interactive form fields.
//!
//! Detection happens in two phases. During traversal, nodes matching the
//! candidate predicate are captured together with the geometry and styling
//! already extracted for them. After the full tree has been walked, two
//! finishing passes resolve each candidate's nearest label (a nearest-neighbor
//! search over every text node in the document) and contained placeholder
//! (a scan over the candidate's direct text children only).

use std::sync::LazyLock;

use regex::Regex;

use crate::config::Config;
use crate::document::{BoundingBox, Node};
use crate::types::{
    ElementProperties, FieldDimensions, FieldPosition, FieldStyling, FieldType, FormField,
    FormFieldProperties, Position,
};

/// Node types that can host an interactive field.
const FIELD_CONTAINER_TYPES: [&str; 4] = ["RECTANGLE", "FRAME", "COMPONENT", "INSTANCE"];

static FIELD_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("(?i)input|field|email|password|username|search|button|submit|login|register|signup|signin")
        .unwrap()
});

static PLACEHOLDER_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)@|example\.com|username").unwrap());

static SUBTYPE_RULES: LazyLock<Vec<(Regex, FieldType)>> = LazyLock::new(|| {
    // Order matters: a name matching both "button" and "email" is a button.
    vec![
        (
            Regex::new("button|submit|login|register|signup|signin|continue|next").unwrap(),
            FieldType::Button,
        ),
        (Regex::new("password").unwrap(), FieldType::Password),
        (Regex::new("email").unwrap(), FieldType::Email),
        (Regex::new("checkbox|check").unwrap(), FieldType::Checkbox),
        (Regex::new("radio").unwrap(), FieldType::Radio),
        (Regex::new("select|dropdown").unwrap(), FieldType::Select),
        (Regex::new("textarea|text area").unwrap(), FieldType::Textarea),
    ]
});

/// A text node observed during traversal, in absolute coordinates.
#[derive(Debug, Clone)]
pub(crate) struct TextNode {
    pub x: f64,
    pub y: f64,
    pub content: String,
}

/// A direct text child of a field candidate.
#[derive(Debug, Clone)]
pub(crate) struct ChildText {
    pub bbox: BoundingBox,
    pub content: String,
}

/// A field candidate captured mid-traversal, pending label/placeholder
/// resolution.
#[derive(Debug, Clone)]
pub(crate) struct FieldCandidate {
    pub id: String,
    pub name: String,
    pub field_type: FieldType,
    pub node_type: String,
    pub component_id: Option<String>,
    pub bbox: BoundingBox,
    pub position: Position,
    pub styling: FieldStyling,
    pub text_children: Vec<ChildText>,
}

/// Candidate predicate: a container-typed node with a field-like name, or an
/// INSTANCE with a direct text child that reads like a placeholder.
pub(crate) fn is_field_candidate(node: &Node) -> bool {
    if FIELD_CONTAINER_TYPES.contains(&node.node_type.as_str()) {
        if let Some(name) = node.name.as_deref() {
            if FIELD_NAME.is_match(name) {
                return true;
            }
        }
    }
    node.node_type == "INSTANCE"
        && node.children.iter().any(|child| {
            child.node_type == "TEXT"
                && child
                    .characters
                    .as_deref()
                    .is_some_and(|text| PLACEHOLDER_TEXT.is_match(text))
        })
}

/// Resolve the field subtype from its lower-cased name; first matching rule
/// wins, `input` when nothing matches.
pub(crate) fn resolve_field_type(name: &str) -> FieldType {
    let lower = name.to_lowercase();
    SUBTYPE_RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(&lower))
        .map(|(_, field_type)| *field_type)
        .unwrap_or(FieldType::Input)
}

/// Materialize a candidate for a node that passed the predicate. Candidates
/// without a bounding box (or, therefore, a recorded position) are dropped.
pub(crate) fn build_candidate(
    node: &Node,
    element_id: &str,
    props: &ElementProperties,
) -> Option<FieldCandidate> {
    let bbox = node.absolute_bounding_box?;
    let position = props.position?;
    let name = node.display_name();

    let text_children = node
        .children
        .iter()
        .filter(|child| child.node_type == "TEXT")
        .filter_map(|child| {
            Some(ChildText {
                bbox: child.absolute_bounding_box?,
                content: child.characters.clone().unwrap_or_default(),
            })
        })
        .collect();

    Some(FieldCandidate {
        id: element_id.to_string(),
        field_type: resolve_field_type(&name),
        name,
        node_type: node.node_type.clone(),
        component_id: node.component_id.clone(),
        bbox,
        position,
        styling: FieldStyling {
            background_color: props.background_color.clone(),
            border_color: props.border.as_ref().map(|b| b.color.clone()),
            border_width: props.border.as_ref().map(|b| b.width),
            border_radius: props.border_radius.clone(),
            shadow: props.shadows.as_ref().and_then(|s| s.first().cloned()),
        },
        text_children,
    })
}

/// Finishing pass: resolve labels and placeholders against the complete
/// text-node set.
pub(crate) fn resolve_fields(
    candidates: Vec<FieldCandidate>,
    text_nodes: &[TextNode],
    config: &Config,
) -> Vec<FormField> {
    candidates
        .into_iter()
        .map(|candidate| {
            let label = nearest_label(&candidate.bbox, text_nodes, config);
            let placeholder = contained_placeholder(&candidate);
            FormField {
                id: candidate.id,
                name: candidate.name,
                field_type: candidate.field_type,
                node_type: candidate.node_type,
                component_id: candidate.component_id,
                properties: FormFieldProperties {
                    position: FieldPosition {
                        x: candidate.position.x,
                        y: candidate.position.y,
                    },
                    dimensions: FieldDimensions {
                        width: candidate.position.width,
                        height: candidate.position.height,
                    },
                    styling: candidate.styling,
                },
                label,
                placeholder,
            }
        })
        .collect()
}

/// Nearest-label search: among text nodes above the field, or to its left
/// within a tight vertical band, take the one closest (Euclidean) to the
/// field origin. Strict `<` against the running minimum keeps the first
/// encountered on ties; nothing within the search radius yields `None`.
fn nearest_label(field: &BoundingBox, text_nodes: &[TextNode], config: &Config) -> Option<String> {
    let mut best: Option<&TextNode> = None;
    let mut best_distance = config.label_search_radius;

    for text in text_nodes {
        let above = text.y < field.y;
        let left_of = text.x < field.x && (text.y - field.y).abs() < config.label_row_band;
        if !above && !left_of {
            continue;
        }
        let dx = text.x - field.x;
        let dy = text.y - field.y;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance < best_distance {
            best_distance = distance;
            best = Some(text);
        }
    }

    best.map(|t| t.content.clone())
}

/// Placeholder search: first direct text child whose box sits fully inside
/// the field's box, all four edges inclusive.
fn contained_placeholder(candidate: &FieldCandidate) -> Option<String> {
    let field = &candidate.bbox;
    candidate
        .text_children
        .iter()
        .find(|child| {
            let b = &child.bbox;
            b.x >= field.x
                && b.y >= field.y
                && b.x + b.width <= field.x + field.width
                && b.y + b.height <= field.y + field.height
        })
        .map(|child| child.content.clone())
}
