use num_traits::Float;

/// Return `(min, max)` for two owned values.
pub fn sorted_pair<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Position of `value` within `[min, max]` as a fraction.
///
/// Returns exactly zero for a zero-width interval instead of dividing by zero.
/// Values outside the interval produce fractions below 0 or above 1.
///
/// # Examples
///
/// ```
/// use skala::scale::util::normalize;
///
/// assert_eq!(normalize(25.0, 0.0, 100.0), 0.25);
/// assert_eq!(normalize(150.0, 0.0, 100.0), 1.5);
/// assert_eq!(normalize(7.0, 50.0, 50.0), 0.0);
/// ```
pub fn normalize<T: Float>(value: T, min: T, max: T) -> T {
    if max == min {
        return T::zero();
    }
    (value - min) / (max - min)
}

/// Linear interpolation from `a` to `b`. `t` outside `[0, 1]` extrapolates.
pub fn interpolate<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Restrict `value` to `[min, max]`. The caller guarantees `min <= max`.
pub fn clamp_value<T: Float>(value: T, min: T, max: T) -> T {
    value.max(min).min(max)
}
