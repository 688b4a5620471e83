use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Style-constant table consumed verbatim by the rendering component.
/// Nothing here feeds back into placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Style {
    pub background: String,
    pub text_color: String,
    pub border_color: String,
    pub border_radius: f32,
    pub font_family: String,
    pub font_size: f32,
    pub line_height: f32,
    pub padding_x: f32,
    pub padding_y: f32,
    pub max_width: f32,
    pub shadow: String,
    pub z_index: i32,
}

impl Style {
    pub fn dark() -> Self {
        Self {
            background: "#2B2B38".to_string(),
            text_color: "#F5F5F7".to_string(),
            border_color: "#3C3C4A".to_string(),
            border_radius: 4.0,
            font_family: "system-ui, -apple-system, Segoe UI, sans-serif".to_string(),
            font_size: 12.0,
            line_height: 1.4,
            padding_x: 8.0,
            padding_y: 5.0,
            max_width: 280.0,
            shadow: "0 2px 8px rgba(0, 0, 0, 0.35)".to_string(),
            z_index: 1000,
        }
    }

    pub fn light() -> Self {
        Self {
            background: "#FFFFFF".to_string(),
            text_color: "#1C2430".to_string(),
            border_color: "#D7E0F0".to_string(),
            border_radius: 4.0,
            font_family: "system-ui, -apple-system, Segoe UI, sans-serif".to_string(),
            font_size: 12.0,
            line_height: 1.4,
            padding_x: 8.0,
            padding_y: 5.0,
            max_width: 280.0,
            shadow: "0 2px 8px rgba(28, 36, 48, 0.15)".to_string(),
            z_index: 1000,
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::dark()
    }
}

/// Shared default table for renderers that carry no per-instance style.
pub static DEFAULT_STYLE: Lazy<Style> = Lazy::new(Style::dark);
