/// Green time for the chosen direction, scaled by its share of all traffic.
///
/// With no traffic the result is exactly `min_green`. Otherwise the share is
/// mapped linearly onto `[min_green, max_green]` and rounded to the nearest
/// second, halves away from zero.
pub fn calculate_durations(chosen_count: u32, total_count: u64, min_green: u32, max_green: u32) -> u32 {
    if total_count == 0 {
        return min_green;
    }
    let proportion = chosen_count as f64 / total_count as f64;
    let span = max_green as f64 - min_green as f64;
    let duration = (min_green as f64 + span * proportion).round();
    // Never below the minimum green, even if the inputs are inconsistent.
    duration.max(min_green as f64) as u32
}
