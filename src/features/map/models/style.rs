use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Region fill colors, picked by `region_id` modulo the palette length
pub const PALETTE: [&str; 14] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD", "#F7DC6F", "#BB8FCE",
    "#85C1E9", "#F8C471", "#82E0AA", "#F1948A", "#AED6F1", "#A2D5F2",
];

pub const HIGHLIGHT_COLOR: &str = "#1a73e8";
pub const REGION_OUTLINE_COLOR: &str = "white";

/// Path style for one polygon, in Leaflet's option names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LayerStyle {
    pub color: String,
    pub weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    pub fill_opacity: f64,
}

impl LayerStyle {
    pub fn region(region_id: Option<i64>) -> Self {
        Self {
            color: REGION_OUTLINE_COLOR.to_string(),
            weight: 1.0,
            opacity: Some(1.0),
            fill_color: Some(palette_color(region_id).to_string()),
            fill_opacity: 0.5,
        }
    }

    /// Region style while hovered; keeps the fill color
    pub fn region_hover(region_id: Option<i64>) -> Self {
        Self {
            color: HIGHLIGHT_COLOR.to_string(),
            weight: 2.0,
            fill_opacity: 0.7,
            ..Self::region(region_id)
        }
    }

    pub fn district() -> Self {
        Self {
            color: HIGHLIGHT_COLOR.to_string(),
            weight: 1.5,
            opacity: None,
            fill_color: None,
            fill_opacity: 0.2,
        }
    }

    pub fn district_hover() -> Self {
        Self {
            weight: 3.0,
            fill_opacity: 0.8,
            ..Self::district()
        }
    }
}

/// Missing ids use the first color
pub fn palette_color(region_id: Option<i64>) -> &'static str {
    let index = region_id.unwrap_or(0).rem_euclid(PALETTE.len() as i64);
    PALETTE[index as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_wraps() {
        assert_eq!(palette_color(None), "#FF6B6B");
        assert_eq!(palette_color(Some(0)), "#FF6B6B");
        assert_eq!(palette_color(Some(13)), "#A2D5F2");
        assert_eq!(palette_color(Some(14)), "#FF6B6B");
        assert_eq!(palette_color(Some(15)), "#4ECDC4");
        assert_eq!(palette_color(Some(-1)), "#A2D5F2");
    }

    #[test]
    fn test_region_hover_keeps_fill() {
        let base = LayerStyle::region(Some(3));
        let hover = LayerStyle::region_hover(Some(3));
        assert_eq!(hover.fill_color, base.fill_color);
        assert_eq!(hover.color, HIGHLIGHT_COLOR);
        assert_eq!(hover.weight, 2.0);
        assert_eq!(hover.fill_opacity, 0.7);
        assert_eq!(base.color, "white");
        assert_eq!(base.fill_opacity, 0.5);
    }

    #[test]
    fn test_district_styles() {
        let base = LayerStyle::district();
        let hover = LayerStyle::district_hover();
        assert_eq!(base.weight, 1.5);
        assert_eq!(base.fill_opacity, 0.2);
        assert_eq!(hover.weight, 3.0);
        assert_eq!(hover.fill_opacity, 0.8);
        assert_eq!(hover.color, base.color);
    }

    #[test]
    fn test_serialized_names() {
        let value = serde_json::to_value(LayerStyle::district()).unwrap();
        assert_eq!(value["fillOpacity"], 0.2);
        assert!(value.get("fillColor").is_none());
    }
}
