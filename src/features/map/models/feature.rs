use geojson::JsonObject;

/// The properties of a boundary feature the map layers care about
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureLabel {
    pub name: Option<String>,
    /// Only present on nationwide region features
    pub region_id: Option<i64>,
}

impl FeatureLabel {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            region_id: None,
        }
    }

    pub fn from_properties(properties: Option<&JsonObject>) -> Self {
        let Some(properties) = properties else {
            return Self::default();
        };

        Self {
            name: properties
                .get("name")
                .and_then(|v| v.as_str())
                .filter(|name| !name.is_empty())
                .map(str::to_string),
            region_id: properties.get("region_id").and_then(|v| v.as_i64()),
        }
    }

    pub fn name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_properties() {
        let props = json!({ "name": "Andijon vil.", "region_id": 3 });
        let label = FeatureLabel::from_properties(props.as_object());
        assert_eq!(label.name.as_deref(), Some("Andijon vil."));
        assert_eq!(label.region_id, Some(3));
    }

    #[test]
    fn test_missing_or_blank_name() {
        let props = json!({ "name": "", "region_id": "x" });
        let label = FeatureLabel::from_properties(props.as_object());
        assert_eq!(label, FeatureLabel::default());
        assert_eq!(FeatureLabel::from_properties(None), FeatureLabel::default());
        assert_eq!(label.name_or("Noma'lum"), "Noma'lum");
    }
}
