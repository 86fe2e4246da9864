use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A recipe record, as served by the recipe search API and the meals backend.
///
/// Field names follow the wire format: `yield`, `cuisineType` and `totalTime`
/// are the search API's spellings. Anything else the API sends is preserved
/// in `extra` so favoriting a search result does not lose data.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Recipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<i64>,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(default, rename = "yield", skip_serializing_if = "Option::is_none")]
    pub servings: Option<i64>,
    #[serde(default, rename = "cuisineType", skip_serializing_if = "Option::is_none")]
    pub cuisine_type: Option<String>,
    #[serde(default, rename = "totalTime", skip_serializing_if = "Option::is_none")]
    pub total_time: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Recipe {
    /// Construct a minimal recipe with just an id and a label.
    pub fn new(recipe_id: i64, label: impl Into<String>) -> Self {
        Recipe {
            recipe_id: Some(recipe_id),
            label: label.into(),
            uri: None,
            img: None,
            calories: None,
            servings: None,
            cuisine_type: None,
            total_time: None,
            extra: Map::new(),
        }
    }
}
