use railaway_gtfs::schedule::ScheduleError;
use railaway_osm::poi::PoiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RailawayError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure reading schedule: {source}")]
    ScheduleError {
        #[from]
        source: ScheduleError,
    },
    #[error("failure reading points of interest: {source}")]
    PoiError {
        #[from]
        source: PoiError,
    },
    #[error("failure accessing file '{0}': {1}")]
    FileError(String, std::io::Error),
    #[error("output file '{0}' already exists, use --overwrite to replace it")]
    OutputExists(String),
    #[error("failure reading or writing edge table: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("invalid recommendation query: {0}")]
    InvalidQuery(String),
}
