/// Display convention for XP amounts.
///
/// With a unit, amounts below 1,000,000 are shown in kB (amount / 1000),
/// everything above in MB (amount / 1,000,000). Values are rounded to two
/// decimals; a result that lands exactly on an integer collapses the
/// decimals, and zero collapses to the literal digit "0".
pub fn format_amount(value: f64, with_unit: bool) -> String {
    let (scaled, unit) = if with_unit {
        if value < 1_000_000.0 {
            (value / 1_000.0, " kB")
        } else {
            (value / 1_000_000.0, " MB")
        }
    } else {
        (value, "")
    };

    let rounded = (scaled * 100.0).round() / 100.0;
    let text = if rounded == 0.0 {
        "0".to_string()
    } else if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.2}")
    };

    format!("{text}{unit}")
}
