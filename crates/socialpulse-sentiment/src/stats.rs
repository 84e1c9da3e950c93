//! Rounding and averaging helpers shared by the scorer and aggregators.

/// Round half away from zero to `decimals` places. Never returns `-0.0`.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Arithmetic mean, or `0.0` for an empty input.
pub(crate) fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0_f64, 0_usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let denom = count as f64;
    sum / denom
}

/// `part / total * 100` rounded to 2 decimals, or `0.0` when `total` is zero.
pub(crate) fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let ratio = part as f64 / total as f64;
    round_to(ratio * 100.0, 2)
}
