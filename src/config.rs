use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::style::Style;

/// Tunables of the placement algorithm itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementConfig {
    /// Gap between the anchor edge and the tip, in pixels.
    pub gap: f32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self { gap: 12.0 }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub placement: PlacementConfig,
    pub style: Style,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    gap: Option<f32>,
    style: Option<StyleFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StyleFile {
    theme: Option<String>,
    background: Option<String>,
    text_color: Option<String>,
    border_color: Option<String>,
    border_radius: Option<f32>,
    font_family: Option<String>,
    font_size: Option<f32>,
    max_width: Option<f32>,
}

fn overlay(config: &mut Config, parsed: ConfigFile) {
    if let Some(gap) = parsed.gap {
        config.placement.gap = gap;
    }
    let Some(style) = parsed.style else {
        return;
    };
    if let Some(theme) = style.theme.as_deref() {
        if theme == "light" {
            config.style = Style::light();
        } else if theme == "dark" {
            config.style = Style::dark();
        }
    }
    if let Some(v) = style.background {
        config.style.background = v;
    }
    if let Some(v) = style.text_color {
        config.style.text_color = v;
    }
    if let Some(v) = style.border_color {
        config.style.border_color = v;
    }
    if let Some(v) = style.border_radius {
        config.style.border_radius = v;
    }
    if let Some(v) = style.font_family {
        config.style.font_family = v;
    }
    if let Some(v) = style.font_size {
        config.style.font_size = v;
    }
    if let Some(v) = style.max_width {
        config.style.max_width = v;
    }
}

/// Loads a JSON overlay on top of the defaults. No path means defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };
    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;
    overlay(&mut config, parsed);
    Ok(config)
}
