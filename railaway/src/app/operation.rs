use std::path::Path;

use clap::Subcommand;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    config::RailawayConfiguration,
    edge_table::read_edge_table_file,
    pipeline,
    recommend::{recommend, RecommendQuery, Recommendation},
    RailawayError,
};

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum RailawayOperation {
    /// build the edge table from a GTFS schedule and OSM points of interest
    Build {
        /// GTFS stops.txt file, optionally gzipped
        #[arg(long)]
        stops: String,
        /// GTFS stop_times.txt file, optionally gzipped
        #[arg(long)]
        stop_times: String,
        /// GeoJSON file with points of interest, optionally gzipped
        #[arg(long)]
        features: String,
        /// output CSV file, gzipped if it ends with .gz
        #[arg(long)]
        output: String,
        /// .toml or .json file with build parameters
        #[arg(long)]
        configuration_file: Option<String>,
        /// replace an existing output file
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },
    /// suggest destinations from the stop nearest to a location
    Recommend {
        /// edge table written by the build operation
        #[arg(long)]
        table: String,
        /// WGS84 longitude of the user
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// WGS84 latitude of the user
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// minutes available for the outing
        #[arg(long)]
        time_to_spend: f64,
        /// category of point of interest to look for, e.g. park
        #[arg(long)]
        activity: Option<String>,
        /// share of the time that may be spent travelling
        #[arg(long, default_value_t = RecommendQuery::DEFAULT_TRAVEL_FRACTION)]
        travel_fraction: f64,
        #[arg(long, default_value_t = RecommendQuery::DEFAULT_LIMIT)]
        limit: usize,
    },
}

impl RailawayOperation {
    pub fn run(&self) -> Result<(), RailawayError> {
        match self {
            RailawayOperation::Build {
                stops,
                stop_times,
                features,
                output,
                configuration_file,
                overwrite,
            } => {
                let conf = match configuration_file {
                    None => Ok(RailawayConfiguration::default()),
                    Some(f) => {
                        log::info!("reading railaway configuration from {f}");
                        RailawayConfiguration::try_from(f)
                    }
                }?;
                let summary = pipeline::run_pipeline(
                    Path::new(stops),
                    Path::new(stop_times),
                    Path::new(features),
                    Path::new(output),
                    &conf,
                    *overwrite,
                )?;
                eprintln!("finished. {summary}");
                Ok(())
            }
            RailawayOperation::Recommend {
                table,
                lon,
                lat,
                time_to_spend,
                activity,
                travel_fraction,
                limit,
            } => {
                let query = RecommendQuery {
                    lon: *lon,
                    lat: *lat,
                    time_to_spend: *time_to_spend,
                    activity: activity.clone(),
                    travel_fraction: *travel_fraction,
                    limit: *limit,
                };
                query.validate()?;
                let rows = read_edge_table_file(Path::new(table))?;
                let result = recommend(&rows, &query)?
                    .into_iter()
                    .map(Recommendation::from)
                    .collect_vec();
                if result.is_empty() {
                    log::info!("no destinations match the query");
                }
                println!("{}", serde_json::to_string_pretty(&result)?);
                Ok(())
            }
        }
    }
}
