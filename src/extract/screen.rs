//! Screen-type classification from aggregated textual content.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{Element, FormField, ScreenType, TypographyEntry};

static SCREEN_RULES: LazyLock<[(ScreenType, Regex); 5]> = LazyLock::new(|| {
    // Priority order: the first matching pattern wins, so a login screen
    // that also mentions "settings" still classifies as login.
    [
        (
            ScreenType::Login,
            Regex::new("(?i)sign in|log in|login|signin|welcome back").unwrap(),
        ),
        (
            ScreenType::Register,
            Regex::new("(?i)sign up|register|signup|create account|join").unwrap(),
        ),
        (
            ScreenType::Dashboard,
            Regex::new("(?i)dashboard|overview|analytics|statistics").unwrap(),
        ),
        (
            ScreenType::Profile,
            Regex::new("(?i)profile|account|settings|preferences").unwrap(),
        ),
        (
            ScreenType::Form,
            Regex::new("(?i)form|submit|input|field").unwrap(),
        ),
    ]
});

/// Infer a coarse screen intent.
///
/// The corpus concatenates all typography content, then all element names,
/// then all form field names, space-joined in that fixed order. When no
/// pattern matches, the form-field count decides: more than 3 fields reads
/// as a generic form, 1 to 3 as a login screen, none as unknown.
pub fn classify_screen(
    typography: &[TypographyEntry],
    elements: &[Element],
    form_fields: &[FormField],
) -> ScreenType {
    let corpus = typography
        .iter()
        .map(|t| t.typography.content.as_str())
        .chain(elements.iter().map(|e| e.name.as_str()))
        .chain(form_fields.iter().map(|f| f.name.as_str()))
        .collect::<Vec<_>>()
        .join(" ");

    for (screen_type, pattern) in SCREEN_RULES.iter() {
        if pattern.is_match(&corpus) {
            return *screen_type;
        }
    }

    match form_fields.len() {
        n if n > 3 => ScreenType::Form,
        1..=3 => ScreenType::Login,
        _ => ScreenType::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        ElementProperties, FieldDimensions, FieldPosition, FieldStyling, FieldType,
        FormFieldProperties, Typography,
    };

    fn text_entry(content: &str) -> TypographyEntry {
        TypographyEntry {
            element_id: "element_0".to_string(),
            typography: Typography {
                font_family: "Unknown".to_string(),
                font_size: 16.0,
                font_weight: 400.0,
                line_height: None,
                letter_spacing: 0.0,
                text_align: "left".to_string(),
                text_case: "none".to_string(),
                text_decoration: "none".to_string(),
                content: content.to_string(),
                color: None,
            },
        }
    }

    fn named_element(name: &str) -> Element {
        Element {
            id: "element_0".to_string(),
            node_type: "FRAME".to_string(),
            name: name.to_string(),
            parent_id: None,
            depth: 0,
            properties: ElementProperties::default(),
        }
    }

    fn field(name: &str) -> FormField {
        FormField {
            id: "element_0".to_string(),
            name: name.to_string(),
            field_type: FieldType::Input,
            node_type: "RECTANGLE".to_string(),
            component_id: None,
            properties: FormFieldProperties {
                position: FieldPosition { x: 0, y: 0 },
                dimensions: FieldDimensions {
                    width: 10,
                    height: 10,
                },
                styling: FieldStyling::default(),
            },
            label: None,
            placeholder: None,
        }
    }

    #[test]
    fn login_wins_over_profile_by_priority() {
        let typography = [
            text_entry("Sign in to your account"),
            text_entry("Manage your settings"),
        ];
        assert_eq!(classify_screen(&typography, &[], &[]), ScreenType::Login);
    }

    #[test]
    fn element_names_feed_the_corpus() {
        let elements = [named_element("Analytics panel")];
        assert_eq!(classify_screen(&[], &elements, &[]), ScreenType::Dashboard);
    }

    #[test]
    fn register_is_detected_from_text() {
        let typography = [text_entry("Create account to get started")];
        assert_eq!(classify_screen(&typography, &[], &[]), ScreenType::Register);
    }

    #[test]
    fn field_count_fallback_when_nothing_matches() {
        let quiet: Vec<FormField> = (0..2).map(|_| field("xyz")).collect();
        assert_eq!(classify_screen(&[], &[], &quiet), ScreenType::Login);

        let busy: Vec<FormField> = (0..4).map(|_| field("xyz")).collect();
        assert_eq!(classify_screen(&[], &[], &busy), ScreenType::Form);

        assert_eq!(classify_screen(&[], &[], &[]), ScreenType::Unknown);
    }
}
