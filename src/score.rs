/// Raw total for one exam attempt: `((structure + listening + reading) / 3) * 10`.
pub fn calculate_total_score(structure: u32, listening: u32, reading: u32) -> f64 {
    let sum = f64::from(structure) + f64::from(listening) + f64::from(reading);
    (sum / 3.0) * 10.0
}

/// The total as stored and displayed: [`calculate_total_score`] rounded half up.
/// Three `u32` sections can total more than `u32::MAX`.
pub fn rounded_total_score(structure: u32, listening: u32, reading: u32) -> u64 {
    // Inputs are non-negative, so `round` (half away from zero) is half up.
    calculate_total_score(structure, listening, reading).round() as u64
}
