#[derive(thiserror::Error, Debug)]
pub enum ScheduleError {
    #[error("{source_name} is missing required columns: {}", .columns.join(", "))]
    MissingColumns {
        source_name: String,
        columns: Vec<String>,
    },
    #[error("failure reading {0}: {1}")]
    CsvReadError(String, csv::Error),
    #[error("trip {trip_id} has a stop_sequence that is not a non-negative integer: '{value}'")]
    MalformedStopSequence { trip_id: String, value: String },
}
