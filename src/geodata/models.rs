use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// collection
//  ├── type = "FeatureCollection"
//  └── features[]
//       ├── type = "Feature"
//       ├── geometry      (passed through untouched)
//       └── properties    (ListingProperties + popup_html)
//
// Members we don't model (bbox, id, crs, ...) ride along in `extra`.

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<Feature>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Feature {
    #[serde(rename = "type", default = "feature_kind")]
    pub kind: String,
    #[serde(default)]
    pub geometry: Value,
    #[serde(default)]
    pub properties: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn feature_kind() -> String {
    "Feature".to_string()
}
