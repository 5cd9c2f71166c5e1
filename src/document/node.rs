//! Serde types for the Figma-style design-document tree.
//!
//! Every field is optional or defaulted: the extraction engine is best-effort
//! and must accept partial nodes without failing. Unknown fields are ignored.

use serde::Deserialize;

/// One node of the input design-document tree.
///
/// The `type` tag comes from a fixed vocabulary (FRAME, TEXT, RECTANGLE,
/// COMPONENT, INSTANCE, GROUP, ...); all other fields are present only for
/// some node kinds.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Node {
    #[serde(rename = "type")]
    pub node_type: String,
    pub name: Option<String>,
    pub children: Vec<Node>,
    pub absolute_bounding_box: Option<BoundingBox>,
    pub fills: Vec<Paint>,
    pub strokes: Vec<Paint>,
    pub stroke_weight: Option<f64>,
    pub effects: Vec<Effect>,
    pub style: Option<TypeStyle>,
    pub characters: Option<String>,
    pub constraints: Option<serde_json::Value>,
    pub component_id: Option<String>,
    pub corner_radius: Option<f64>,
    pub rectangle_corner_radii: Option<Vec<f64>>,
    pub layout_mode: Option<String>,
    pub primary_axis_sizing_mode: Option<String>,
    pub counter_axis_sizing_mode: Option<String>,
    pub primary_axis_align_items: Option<String>,
    pub counter_axis_align_items: Option<String>,
    pub item_spacing: Option<f64>,
    pub padding_top: Option<f64>,
    pub padding_right: Option<f64>,
    pub padding_bottom: Option<f64>,
    pub padding_left: Option<f64>,
}

impl Node {
    /// Display name, defaulting to `"Unnamed <type>"` when absent.
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Unnamed {}", self.node_type))
    }
}

/// Absolute bounding box coordinates.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A fill or stroke paint descriptor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Paint {
    #[serde(rename = "type")]
    pub paint_type: String,
    pub color: Option<Color>,
    pub opacity: Option<f64>,
    pub visible: Option<bool>,
}

/// A device-independent color triple with channels in `[0, 1]`.
/// Missing channels are treated as 0.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: Option<f64>,
}

/// A visual effect descriptor; only shadow effects are extracted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Effect {
    #[serde(rename = "type")]
    pub effect_type: String,
    pub color: Option<Color>,
    pub offset: Option<ShadowVector>,
    pub radius: Option<f64>,
    pub spread: Option<f64>,
    pub visible: Option<bool>,
}

/// Shadow offset vector.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShadowVector {
    pub x: f64,
    pub y: f64,
}

/// Font attributes attached to TEXT nodes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeStyle {
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<f64>,
    pub line_height_px: Option<f64>,
    pub letter_spacing: Option<f64>,
    pub text_align_horizontal: Option<String>,
    pub text_case: Option<String>,
    pub text_decoration: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_accepts_minimal_object() {
        let node: Node = serde_json::from_str("{}").expect("empty object is a valid node");
        assert_eq!(node.node_type, "");
        assert!(node.children.is_empty());
        assert!(node.absolute_bounding_box.is_none());
    }

    #[test]
    fn node_parses_figma_shaped_json() {
        let node: Node = serde_json::from_value(serde_json::json!({
            "type": "TEXT",
            "name": "Heading",
            "characters": "Welcome",
            "absoluteBoundingBox": { "x": 10.0, "y": 20.0, "width": 100.0, "height": 30.0 },
            "fills": [{ "type": "SOLID", "color": { "r": 1.0, "g": 0.5, "b": 0.0 } }],
            "style": { "fontFamily": "Inter", "fontSize": 24.0, "fontWeight": 600.0 },
            "unknownField": true
        }))
        .expect("parse");

        assert_eq!(node.node_type, "TEXT");
        assert_eq!(node.characters.as_deref(), Some("Welcome"));
        let bb = node.absolute_bounding_box.expect("bounding box");
        assert_eq!(bb.width, 100.0);
        assert_eq!(node.fills.len(), 1);
        let style = node.style.expect("style");
        assert_eq!(style.font_family.as_deref(), Some("Inter"));
    }

    #[test]
    fn display_name_defaults_to_unnamed_type() {
        let node: Node = serde_json::from_value(serde_json::json!({ "type": "FRAME" })).unwrap();
        assert_eq!(node.display_name(), "Unnamed FRAME");
    }

    #[test]
    fn color_channels_default_to_zero() {
        let color: Color = serde_json::from_value(serde_json::json!({ "r": 0.5 })).unwrap();
        assert_eq!(color.g, 0.0);
        assert_eq!(color.b, 0.0);
    }
}
