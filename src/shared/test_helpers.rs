#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use geojson::FeatureCollection;

#[cfg(test)]
use crate::features::regions::models::{Catalog, District};

/// The shipped nationwide catalog
#[cfg(test)]
pub fn uzbekistan_catalog() -> Arc<Catalog> {
    Arc::new(Catalog::uzbekistan().expect("shipped catalog must be valid"))
}

/// Two districts whose names share the stem "qosh" once apostrophes are dropped
#[cfg(test)]
pub fn shared_stem_districts() -> Vec<District> {
    vec![
        District::new("Qo'shrabot", "qoshrabot"),
        District::new("Qo'shko'pir", "koshkupir"),
    ]
}

/// Feature collection with one geometry-less feature per name.
/// An empty name produces a feature without properties.
#[cfg(test)]
pub fn feature_collection(names: &[&str]) -> FeatureCollection {
    let features: Vec<serde_json::Value> = names
        .iter()
        .map(|name| {
            let properties = if name.is_empty() {
                serde_json::Value::Null
            } else {
                serde_json::json!({ "name": name })
            };
            serde_json::json!({
                "type": "Feature",
                "geometry": null,
                "properties": properties,
            })
        })
        .collect();

    serde_json::from_value(serde_json::json!({
        "type": "FeatureCollection",
        "features": features,
    }))
    .expect("valid feature collection")
}
