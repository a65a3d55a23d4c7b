use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{poi_feature::is_truthy, PoiFeature};

/// a rule deriving an activity category from the properties of a feature.
/// rules are evaluated in order and the first one that applies wins.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CategoryRule {
    /// the value of the property is the category, e.g. `leisure=park` -> `park`
    PropertyValue { key: String },
    /// a fixed label applies when the property is present and not null
    PropertyPresent { key: String, label: String },
}

impl CategoryRule {
    pub fn property_value(key: &str) -> CategoryRule {
        CategoryRule::PropertyValue {
            key: String::from(key),
        }
    }

    pub fn property_present(key: &str, label: &str) -> CategoryRule {
        CategoryRule::PropertyPresent {
            key: String::from(key),
            label: String::from(label),
        }
    }

    /// the category this rule assigns to the feature, if any.
    pub fn apply(&self, feature: &PoiFeature) -> Option<String> {
        match self {
            CategoryRule::PropertyValue { key } => feature
                .property(key)
                .filter(|v| is_truthy(v))
                .map(|v| match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                }),
            CategoryRule::PropertyPresent { key, label } => feature
                .property(key)
                .filter(|v| !v.is_null())
                .map(|_| label.clone()),
        }
    }
}

/// hiking/biking routes, leisure areas and tourism sites, with museums
/// tagged without a tourism value grouped as arts.
pub fn default_category_rules() -> Vec<CategoryRule> {
    vec![
        CategoryRule::property_value("route"),
        CategoryRule::property_value("leisure"),
        CategoryRule::property_value("tourism"),
        CategoryRule::property_present("museum", "arts"),
    ]
}

/// the category of the first rule that applies to the feature.
pub fn infer_category(rules: &[CategoryRule], feature: &PoiFeature) -> Option<String> {
    rules.iter().find_map(|rule| rule.apply(feature))
}
