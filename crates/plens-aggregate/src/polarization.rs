use plens_core::Intervention;

/// Mean polarization over the interventions that carry a level.
pub fn average_polarization(items: &[&Intervention]) -> Option<f64> {
    let levels: Vec<f64> = items
        .iter()
        .filter_map(|i| i.polarization_level())
        .map(f64::from)
        .collect();
    if levels.is_empty() {
        return None;
    }
    Some(levels.iter().sum::<f64>() / levels.len() as f64)
}

/// Average rounded to the nearest integer, 0 when no level is set.
pub fn rounded_average(items: &[&Intervention]) -> u32 {
    average_polarization(items)
        .map(|avg| avg.round() as u32)
        .unwrap_or(0)
}

/// Average rounded to one decimal place, 0 when no level is set.
pub fn rounded_average_1dp(items: &[&Intervention]) -> f64 {
    average_polarization(items).map(round_1dp).unwrap_or(0.0)
}

/// One-decimal rounding of the stored binary value, exact ties upward.
///
/// `1.15` is stored just below 1.15 and gives 1.1; scaling by 10 first would
/// round it up. The formatter breaks exact ties (`x.25`, `x.75`) to even, so
/// those are rounded up by hand.
fn round_1dp(value: f64) -> f64 {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        return (value * 10.0).ceil() / 10.0;
    }
    format!("{value:.1}").parse().unwrap_or(value)
}
