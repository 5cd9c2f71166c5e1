//! Per-node style extraction and document-wide color deduplication.
//!
//! Colors are deduplicated purely by hex value: the first insertion wins and
//! later observations of the same hex are dropped, whatever their opacity or
//! usage. Property names are derived from the deduplicated list length at
//! insertion time (`primaryColor` for the first fill into an empty list,
//! `color_<k>` / `borderColor_<k>` after that, `textColor` for text).

use crate::document::Node;
use crate::types::{
    Border, BorderRadius, ColorEntry, ColorUsage, CornerRadii, ElementProperties,
    LayoutProperties, Padding, Shadow, ShadowOffset, Typography, TypographyEntry,
};

use super::color::color_to_hex;

const SOLID_PAINT: &str = "SOLID";
const SHADOW_EFFECTS: [&str; 2] = ["DROP_SHADOW", "INNER_SHADOW"];

fn is_visible_solid(paint: &crate::document::Paint) -> bool {
    paint.visible != Some(false) && paint.paint_type == SOLID_PAINT
}

fn known_hex(colors: &[ColorEntry], hex: &str) -> bool {
    colors.iter().any(|c| c.value == hex)
}

/// Collect visible solid fills into the deduplicated color list and record
/// the element's background color.
pub(crate) fn collect_fills(
    node: &Node,
    element_id: &str,
    props: &mut ElementProperties,
    colors: &mut Vec<ColorEntry>,
) {
    for fill in &node.fills {
        if !is_visible_solid(fill) {
            continue;
        }
        let hex = color_to_hex(fill.color.as_ref());
        if known_hex(colors, &hex) {
            continue;
        }
        let property = if colors.is_empty() {
            "primaryColor".to_string()
        } else {
            format!("color_{}", colors.len())
        };
        colors.push(ColorEntry {
            property,
            value: hex.clone(),
            opacity: fill.opacity.unwrap_or(1.0),
            element_id: element_id.to_string(),
            element_type: node.node_type.clone(),
            usage: ColorUsage::Fill,
        });
        if props.background_color.is_none() {
            props.background_color = Some(hex);
        }
    }
}

/// Collect visible solid strokes. The element's own border record is written
/// for every visible solid stroke even when the color was already known.
pub(crate) fn collect_strokes(
    node: &Node,
    element_id: &str,
    props: &mut ElementProperties,
    colors: &mut Vec<ColorEntry>,
) {
    for stroke in &node.strokes {
        if !is_visible_solid(stroke) {
            continue;
        }
        let hex = color_to_hex(stroke.color.as_ref());
        if !known_hex(colors, &hex) {
            colors.push(ColorEntry {
                property: format!("borderColor_{}", colors.len()),
                value: hex.clone(),
                opacity: stroke.opacity.unwrap_or(1.0),
                element_id: element_id.to_string(),
                element_type: node.node_type.clone(),
                usage: ColorUsage::Stroke,
            });
        }
        props.border = Some(Border {
            width: node.stroke_weight.unwrap_or(1.0),
            color: hex,
            style: "solid".to_string(),
        });
    }
}

/// Record scalar and per-corner radii. Both paths run independently, in this
/// order, so a node defining both ends up with the per-corner shape on the
/// element while the document slot keeps whichever arrived first.
pub(crate) fn collect_corner_radius(
    node: &Node,
    props: &mut ElementProperties,
    doc_radius: &mut Option<BorderRadius>,
) {
    if let Some(radius) = node.corner_radius {
        props.border_radius = Some(BorderRadius::Uniform(radius));
        if doc_radius.is_none() {
            *doc_radius = Some(BorderRadius::Uniform(radius));
        }
    }
    if let Some(radii) = &node.rectangle_corner_radii {
        let corners = CornerRadii {
            top_left: radii.first().copied().unwrap_or(0.0),
            top_right: radii.get(1).copied().unwrap_or(0.0),
            bottom_right: radii.get(2).copied().unwrap_or(0.0),
            bottom_left: radii.get(3).copied().unwrap_or(0.0),
        };
        props.border_radius = Some(BorderRadius::PerCorner(corners));
        if doc_radius.is_none() {
            *doc_radius = Some(BorderRadius::PerCorner(corners));
        }
    }
}

/// Map shadow effects onto the element; the first shadow seen anywhere in the
/// document also fills the document-level slot.
pub(crate) fn collect_shadows(
    node: &Node,
    props: &mut ElementProperties,
    doc_shadow: &mut Option<Shadow>,
) {
    let shadows: Vec<Shadow> = node
        .effects
        .iter()
        .filter(|e| SHADOW_EFFECTS.contains(&e.effect_type.as_str()))
        .map(|e| Shadow {
            shadow_type: e.effect_type.clone(),
            color: color_to_hex(e.color.as_ref()),
            offset: e
                .offset
                .map(|o| ShadowOffset { x: o.x, y: o.y })
                .unwrap_or_default(),
            radius: e.radius.unwrap_or(0.0),
            spread: e.spread.unwrap_or(0.0),
            visible: e.visible.unwrap_or(true),
        })
        .collect();

    if shadows.is_empty() {
        return;
    }
    if doc_shadow.is_none() {
        *doc_shadow = Some(shadows[0].clone());
    }
    props.shadows = Some(shadows);
}

/// Build the typography entry for a TEXT node, applying the documented
/// defaults and attaching the first fill color when one exists. A text color
/// hex not yet in the deduplicated list registers as `textColor`.
pub(crate) fn collect_typography(
    node: &Node,
    element_id: &str,
    props: &mut ElementProperties,
    entries: &mut Vec<TypographyEntry>,
    colors: &mut Vec<ColorEntry>,
) {
    let style = node.style.clone().unwrap_or_default();
    let mut typography = Typography {
        font_family: style.font_family.unwrap_or_else(|| "Unknown".to_string()),
        font_size: style.font_size.unwrap_or(16.0),
        font_weight: style.font_weight.unwrap_or(400.0),
        line_height: style.line_height_px,
        letter_spacing: style.letter_spacing.unwrap_or(0.0),
        text_align: style
            .text_align_horizontal
            .unwrap_or_else(|| "left".to_string()),
        text_case: style.text_case.unwrap_or_else(|| "none".to_string()),
        text_decoration: style.text_decoration.unwrap_or_else(|| "none".to_string()),
        content: node.characters.clone().unwrap_or_default(),
        color: None,
    };

    if let Some(first_fill) = node.fills.first() {
        if let Some(color) = first_fill.color.as_ref() {
            let hex = color_to_hex(Some(color));
            if !known_hex(colors, &hex) {
                colors.push(ColorEntry {
                    property: "textColor".to_string(),
                    value: hex.clone(),
                    opacity: first_fill.opacity.unwrap_or(1.0),
                    element_id: element_id.to_string(),
                    element_type: node.node_type.clone(),
                    usage: ColorUsage::Text,
                });
            }
            typography.color = Some(hex);
        }
    }

    entries.push(TypographyEntry {
        element_id: element_id.to_string(),
        typography: typography.clone(),
    });
    props.typography = Some(typography);
}

/// Record padding when any of the four sides is present; absent sides
/// default to 0.
pub(crate) fn collect_padding(
    node: &Node,
    props: &mut ElementProperties,
    doc_padding: &mut Option<Padding>,
) {
    let any_side = node.padding_top.is_some()
        || node.padding_right.is_some()
        || node.padding_bottom.is_some()
        || node.padding_left.is_some();
    if !any_side {
        return;
    }
    let padding = Padding {
        top: node.padding_top.unwrap_or(0.0),
        right: node.padding_right.unwrap_or(0.0),
        bottom: node.padding_bottom.unwrap_or(0.0),
        left: node.padding_left.unwrap_or(0.0),
    };
    if doc_padding.is_none() {
        *doc_padding = Some(padding);
    }
    props.padding = Some(padding);
}

/// Record auto-layout attributes when `layoutMode` is present.
pub(crate) fn collect_layout(
    node: &Node,
    props: &mut ElementProperties,
    doc_layout: &mut Option<LayoutProperties>,
) {
    let Some(mode) = &node.layout_mode else {
        return;
    };
    let layout = LayoutProperties {
        mode: mode.clone(),
        primary_axis_sizing_mode: node.primary_axis_sizing_mode.clone(),
        counter_axis_sizing_mode: node.counter_axis_sizing_mode.clone(),
        primary_axis_align_items: node.primary_axis_align_items.clone(),
        counter_axis_align_items: node.counter_axis_align_items.clone(),
        item_spacing: node.item_spacing,
    };
    if doc_layout.is_none() {
        *doc_layout = Some(layout.clone());
    }
    props.layout = Some(layout);
}
