pub mod arrival_time;
pub mod reachability;
mod schedule_error;
pub mod schedule_ops;
mod sorted_trip;
mod stop;
mod stop_id_namespace;
pub mod travel_time;
mod trip_stop;

pub use reachability::{build_reachability, OdPair, ReachabilityGraph, TravelTimeSample};
pub use schedule_error::ScheduleError;
pub use schedule_ops::Schedule;
pub use sorted_trip::{group_trips, SortedTrip};
pub use stop::{Stop, StopRecord};
pub use stop_id_namespace::StopIdNamespace;
pub use travel_time::{aggregate_travel_times, AggregatedEdge};
pub use trip_stop::{StopTimeRecord, TripStop};
