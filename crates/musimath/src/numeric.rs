//! Evenly spaced sample generation.

/// Generate `n` evenly spaced values over `[start, end]`, both ends included.
///
/// `n == 1` yields `[start]` and `n == 0` yields an empty vector. The last
/// value is exactly `end`.
///
/// # Examples
/// ```
/// use musimath::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
/// assert!(linspace(0.0, 1.0, 0).is_empty());
/// ```
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            // Pin the endpoint against accumulated rounding
            values[n - 1] = end;
            values
        }
    }
}
