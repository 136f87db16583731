//! Window Statistics
//!
//! Pure helpers shared by the sensor variants. Both take any iterator of
//! readings so they work directly on [`SlidingWindow::iter`].
//!
//! [`SlidingWindow::iter`]: crate::buffer::SlidingWindow::iter

/// Arithmetic mean, `0.0` for no values
///
/// Kept as a running mean so finite readings near `f64::MAX` still give a
/// finite result.
pub fn mean<'a, I>(values: I) -> f64
where
    I: IntoIterator<Item = &'a f64>,
{
    running_mean(values.into_iter().copied())
}

/// Sample standard deviation (n - 1 denominator)
///
/// Returns `None` for fewer than two values. Deviations are taken on values
/// scaled by the largest magnitude so squaring cannot overflow.
pub fn sample_std_dev<'a, I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a f64> + Clone,
{
    let (scale, count) = values
        .clone()
        .into_iter()
        .fold((0.0_f64, 0usize), |(scale, count), v| {
            (scale.max(libm::fabs(*v)), count + 1)
        });

    if count < 2 {
        return None;
    }
    if scale == 0.0 {
        return Some(0.0);
    }

    let scaled_mean = running_mean(values.clone().into_iter().map(|v| v / scale));
    let sum_sq = values.into_iter().fold(0.0, |acc, v| {
        let d = v / scale - scaled_mean;
        acc + d * d
    });

    Some(libm::sqrt(sum_sq / (count - 1) as f64) * scale)
}

fn running_mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut avg = 0.0;

    for (i, v) in values.enumerate() {
        let n = (i + 1) as f64;
        // Both terms are at most max |v| / n
        avg += v / n - avg / n;
    }

    avg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_is_zero() {
        let empty: [f64; 0] = [];
        assert_eq!(mean(&empty), 0.0);
    }

    #[test]
    fn mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
    }

    #[test]
    fn std_dev_needs_two_values() {
        assert_eq!(sample_std_dev(&[5.0]), None);
        let empty: [f64; 0] = [];
        assert_eq!(sample_std_dev(&empty), None);
    }

    #[test]
    fn std_dev_sample_denominator() {
        // mean 5, squared deviations sum 32, 32 / 7
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let sd = sample_std_dev(&values).unwrap();
        assert!((sd - libm::sqrt(32.0 / 7.0)).abs() < 1e-12);
    }

    #[test]
    #[allow(overflowing_literals)]
    fn mean_of_huge_values_stays_finite() {
        assert_eq!(mean(&[1e308, 1e308]), 1e308);

        let m = mean(&[1.5e308, 1.5e308, -1e308]);
        assert!(m.is_finite());
        assert!((m / (2e308 / 3.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn std_dev_of_huge_values_stays_finite() {
        let sd = sample_std_dev(&[1e308, -1e308]).unwrap();
        assert!(sd.is_finite());
        assert!((sd / (1e308 * libm::sqrt(2.0)) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn std_dev_of_constant_is_zero() {
        assert_eq!(sample_std_dev(&[3.0, 3.0, 3.0]), Some(0.0));
    }
}
