use serde::{Deserialize, Serialize};

/// The aggregate extraction result for one design document.
///
/// This is the unified output format consumed by downstream comparison and
/// reporting tools. Document-level slots (`dimensions`, `spacing`, `layout`,
/// `borders`, `shadows`) hold representative values taken from the first node
/// in traversal order that provided the attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignProperties {
    /// Deduplicated colors across the whole document, keyed by hex value
    pub colors: Vec<ColorEntry>,
    /// One entry per TEXT node
    pub typography: Vec<TypographyEntry>,
    /// Representative padding/gap values
    pub spacing: DocumentSpacing,
    /// Dimensions of the first positioned top-level frame
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    /// Representative auto-layout attributes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutProperties>,
    /// Representative border attributes
    pub borders: DocumentBorders,
    /// Representative shadow (first shadow of the first node carrying one)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadows: Option<Shadow>,
    /// Flat per-node records in pre-order
    pub elements: Vec<Element>,
    /// Parent/depth links in pre-order
    pub hierarchy: Vec<HierarchyEntry>,
    /// Heuristically detected interactive fields
    pub form_fields: Vec<FormField>,
    /// Pairwise adjacency relationships between positioned elements
    pub spacing_relationships: Vec<SpacingRelationship>,
    /// Coarse screen intent
    pub screen_type: ScreenType,
}

/// Document-level representative spacing values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSpacing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f64>,
}

/// Document-level representative border values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentBorders {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<BorderRadius>,
}

/// Width and height of the reference frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

/// One derived record per visited node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Traversal-assigned id, `element_<n>` with a zero-based pre-order counter
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub name: String,
    pub parent_id: Option<String>,
    pub depth: u32,
    pub properties: ElementProperties,
}

/// Sparse per-element style record; fields are populated only when the
/// source node carried the corresponding attribute.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<BorderRadius>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadows: Option<Vec<Shadow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography: Option<Typography>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f64>,
}

/// Frame-relative, integer-rounded coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

/// Parent/depth link for one element.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyEntry {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub depth: u32,
    pub parent_id: Option<String>,
}

/// A deduplicated color observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorEntry {
    /// `primaryColor`, `color_<k>`, `borderColor_<k>`, or `textColor`
    pub property: String,
    /// Lowercase 6-digit hex, e.g. `#1a2b3c`
    pub value: String,
    pub opacity: f64,
    pub element_id: String,
    pub element_type: String,
    pub usage: ColorUsage,
}

/// Where a color was observed on its element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorUsage {
    Fill,
    Stroke,
    Text,
}

/// Font attributes for one TEXT node, with the documented defaults applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    pub letter_spacing: f64,
    pub text_align: String,
    pub text_case: String,
    pub text_decoration: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Document-level typography record: one per TEXT node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyEntry {
    pub element_id: String,
    #[serde(flatten)]
    pub typography: Typography,
}

/// Border attributes derived from strokes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Border {
    pub width: f64,
    pub color: String,
    pub style: String,
}

/// Corner radius, either uniform or per-corner depending on which source
/// attribute the node carried. Consumers must tolerate both shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BorderRadius {
    Uniform(f64),
    PerCorner(CornerRadii),
}

/// Named corner radii from `rectangleCornerRadii`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CornerRadii {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

/// A drop or inner shadow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    #[serde(rename = "type")]
    pub shadow_type: String,
    pub color: String,
    pub offset: ShadowOffset,
    pub radius: f64,
    pub spread: f64,
    pub visible: bool,
}

/// Shadow offset in absolute pixels.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowOffset {
    pub x: f64,
    pub y: f64,
}

/// Per-side padding; absent sides default to 0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Auto-layout attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutProperties {
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_axis_sizing_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_axis_sizing_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_axis_align_items: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_axis_align_items: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_spacing: Option<f64>,
}

/// A heuristically detected interactive field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub node_type: String,
    pub component_id: Option<String>,
    pub properties: FormFieldProperties,
    pub label: Option<String>,
    pub placeholder: Option<String>,
}

/// Resolved field subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Input,
    Button,
    Password,
    Email,
    Checkbox,
    Radio,
    Select,
    Textarea,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Input => "input",
            FieldType::Button => "button",
            FieldType::Password => "password",
            FieldType::Email => "email",
            FieldType::Checkbox => "checkbox",
            FieldType::Radio => "radio",
            FieldType::Select => "select",
            FieldType::Textarea => "textarea",
        }
    }
}

/// Geometry and styling extracted for one form field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFieldProperties {
    pub position: FieldPosition,
    pub dimensions: FieldDimensions,
    pub styling: FieldStyling,
}

/// Frame-relative field origin.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldPosition {
    pub x: i64,
    pub y: i64,
}

/// Integer-rounded field size.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDimensions {
    pub width: i64,
    pub height: i64,
}

/// Visual styling carried over from the field's element record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldStyling {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<BorderRadius>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
}

/// Adjacency relationship between two positioned elements.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingRelationship {
    pub from: String,
    pub to: String,
    pub horizontal: i64,
    pub vertical: i64,
    #[serde(rename = "type")]
    pub kind: SpacingKind,
}

/// Dominant axis of a spacing relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingKind {
    Horizontal,
    Vertical,
}

/// Coarse screen intent inferred from textual content and field counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenType {
    Login,
    Register,
    Dashboard,
    Profile,
    Form,
    Unknown,
}

impl ScreenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenType::Login => "login",
            ScreenType::Register => "register",
            ScreenType::Dashboard => "dashboard",
            ScreenType::Profile => "profile",
            ScreenType::Form => "form",
            ScreenType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ScreenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
