//! Color normalization to canonical hex strings.

use crate::document::Color;

/// Convert a `{r,g,b}` triple with channels in `[0, 1]` to a lowercase
/// 6-digit hex string (e.g. `#ff7f00`). Channels are scaled by 255 and
/// rounded; a missing color yields `#000000`. Total - never fails.
pub fn color_to_hex(color: Option<&Color>) -> String {
    let Some(c) = color else {
        return "#000000".to_string();
    };
    format!(
        "#{:02x}{:02x}{:02x}",
        (c.r * 255.0).round() as u8,
        (c.g * 255.0).round() as u8,
        (c.b * 255.0).round() as u8
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(r: f64, g: f64, b: f64) -> Color {
        Color { r, g, b, a: None }
    }

    #[test]
    fn black_and_white_endpoints() {
        assert_eq!(color_to_hex(Some(&rgb(0.0, 0.0, 0.0))), "#000000");
        assert_eq!(color_to_hex(Some(&rgb(1.0, 1.0, 1.0))), "#ffffff");
    }

    #[test]
    fn missing_color_defaults_to_black() {
        assert_eq!(color_to_hex(None), "#000000");
    }

    #[test]
    fn channels_are_rounded_not_truncated() {
        // 0.5 * 255 = 127.5 rounds up to 128 (0x80)
        assert_eq!(color_to_hex(Some(&rgb(0.5, 0.5, 0.5))), "#808080");
    }

    #[test]
    fn out_of_range_channels_saturate() {
        assert_eq!(color_to_hex(Some(&rgb(1.5, -0.3, 0.0))), "#ff0000");
    }
}
