use thiserror::Error;

#[derive(Error, Debug)]
pub enum PoiError {
    #[error("failure decoding GeoJSON: {source}")]
    JsonDecodeError {
        #[from]
        source: serde_json::Error,
    },
    #[error("invalid GeoJSON structure: {0}")]
    InvalidGeoJson(String),
}
