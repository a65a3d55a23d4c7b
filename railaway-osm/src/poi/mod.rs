pub mod buffer;
mod category_rule;
pub mod import_ops;
mod poi_error;
mod poi_feature;
mod poi_spatial_index;
pub mod representative_point;
pub mod web_mercator;

pub use category_rule::{default_category_rules, infer_category, CategoryRule};
pub use poi_error::PoiError;
pub use poi_feature::{is_truthy, PoiFeature};
pub use poi_spatial_index::{PoiSpatialIndex, PoiSpatialRow};
