//! Moving-window arithmetic over plain `f64` slices.

/// Simple moving average at every index.
///
/// The output has the same length as `values`; index `i` holds the mean of
/// `values[i + 1 - window..=i]` once `i + 1 >= window` and `None` before that.
/// A zero window never fills.
///
/// Each window is summed on its own as offsets from `values[i]`, so the result
/// depends only on the window contents and a constant window yields its value
/// exactly, whatever the window length.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }

    (0..values.len())
        .map(|i| {
            if i + 1 >= window {
                Some(pivot_mean(&values[i + 1 - window..=i], values[i]))
            } else {
                None
            }
        })
        .collect()
}

fn pivot_mean(values: &[f64], pivot: f64) -> f64 {
    pivot + values.iter().map(|v| v - pivot).sum::<f64>() / values.len() as f64
}

/// Minimum and maximum of the finite values, `None` when there are none.
pub fn bounds<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
