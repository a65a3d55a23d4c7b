/// converts a GTFS `HH:MM:SS` time into whole minutes after midnight.
///
/// hours may exceed 23 for service running past midnight. seconds are
/// truncated, so `08:05:59` is minute 485. returns None for anything that is
/// not three colon-separated non-negative integers with minutes and seconds
/// below 60.
pub fn parse_arrival_minutes(value: &str) -> Option<u32> {
    let mut parts = value.trim().split(':');
    let hours = parse_component(parts.next()?)?;
    let minutes = parse_component(parts.next()?)?;
    let seconds = parse_component(parts.next()?)?;
    if parts.next().is_some() || minutes >= 60 || seconds >= 60 {
        return None;
    }
    hours.checked_mul(60)?.checked_add(minutes)
}

fn parse_component(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u32>().ok()
}
