use super::util;

/// Band scale: maps discrete values onto evenly spaced bands of a numeric range.
///
/// Each domain value owns one band. Bands are laid out in domain order with a
/// fixed [`step`](BandScale::step) between consecutive band starts. Inner padding
/// is the gap between adjacent bands and outer padding the gap before the
/// first and after the last band, both as fractions of the step.
///
/// # Layout
///
/// For `n` domain values over a range spanning `w`:
///
/// - `step = w / (n - padding_inner + 2 * padding_outer)`
/// - `bandwidth = step * (1 - padding_inner)`
/// - the first band starts `step * padding_outer` after the lower range bound
///
/// An empty domain has zero step and bandwidth.
///
/// # Reversed Range
///
/// When the range end is below its start, positions are computed in the
/// increasing orientation and reflected, so the first domain value maps to
/// the high end of the range.
///
/// # Examples
///
/// ```rust
/// use skala::BandScale;
///
/// let scale = BandScale::new(["A", "B", "C"], (0.0, 300.0));
///
/// assert_eq!(scale.apply(&"A"), 0.0);
/// assert_eq!(scale.apply(&"B"), 100.0);
/// assert_eq!(scale.apply(&"C"), 200.0);
/// assert_eq!(scale.bandwidth(), 100.0);
///
/// // Unknown values map to NaN, or `None` through `apply_opt`
/// assert!(scale.apply(&"D").is_nan());
/// assert_eq!(scale.apply_opt(&"D"), None);
/// ```
///
/// ## Padding
///
/// ```rust
/// use skala::BandScale;
///
/// let scale = BandScale::new(["A", "B", "C"], (0.0, 300.0)).with_padding(0.2);
///
/// assert!((scale.step() - 93.75).abs() < 1e-9);
/// assert!((scale.bandwidth() - 75.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BandScale<T> {
    domain: Vec<T>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
}

/// Band geometry for one configuration snapshot.
struct BandLayout {
    step: f64,
    bandwidth: f64,
    offset: f64,
    reverse: bool,
}

impl<T: PartialEq> BandScale<T> {
    /// Creates a new band scale without padding.
    ///
    /// Domain order is significant. Duplicate values are kept, but only the
    /// first occurrence is ever looked up.
    pub fn new<D>(domain: D, range: (f64, f64)) -> Self
    where
        D: IntoIterator<Item = T>,
    {
        Self {
            domain: domain.into_iter().collect(),
            range,
            padding_inner: 0.0,
            padding_outer: 0.0,
        }
    }

    /// Builder form of [`set_padding`](BandScale::set_padding).
    pub fn with_padding(mut self, value: f64) -> Self {
        self.set_padding(value);
        self
    }

    /// Builder form of [`set_padding_inner`](BandScale::set_padding_inner).
    pub fn with_padding_inner(mut self, value: f64) -> Self {
        self.set_padding_inner(value);
        self
    }

    /// Builder form of [`set_padding_outer`](BandScale::set_padding_outer).
    pub fn with_padding_outer(mut self, value: f64) -> Self {
        self.set_padding_outer(value);
        self
    }

    /// Sets inner and outer padding to the same value.
    pub fn set_padding(&mut self, value: f64) -> &mut Self {
        self.set_padding_inner(value).set_padding_outer(value)
    }

    /// Sets the gap between adjacent bands, as a fraction of the step.
    pub fn set_padding_inner(&mut self, value: f64) -> &mut Self {
        check_padding("inner", value);
        self.padding_inner = value;
        self
    }

    /// Sets the gap before the first and after the last band, as a fraction of the step.
    pub fn set_padding_outer(&mut self, value: f64) -> &mut Self {
        check_padding("outer", value);
        self.padding_outer = value;
        self
    }

    pub fn padding_inner(&self) -> f64 {
        self.padding_inner
    }

    pub fn padding_outer(&self) -> f64 {
        self.padding_outer
    }

    /// Returns the domain values in band order.
    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    /// Replaces the domain values.
    pub fn set_domain<D>(&mut self, domain: D) -> &mut Self
    where
        D: IntoIterator<Item = T>,
    {
        self.domain = domain.into_iter().collect();
        log::trace!("band scale: domain replaced ({} values)", self.domain.len());
        self
    }

    /// Returns the range endpoints in their original order.
    pub fn range(&self) -> (&f64, &f64) {
        (&self.range.0, &self.range.1)
    }

    /// Replaces the range endpoints.
    pub fn set_range(&mut self, start: f64, end: f64) -> &mut Self {
        log::trace!("band scale: range replaced");
        self.range = (start, end);
        self
    }

    /// Number of domain values.
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    /// Index of the first domain entry equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.domain.iter().position(|v| v == value)
    }

    /// Start position of the band for `value`, or NaN if `value` is not in the domain.
    pub fn apply(&self, value: &T) -> f64 {
        self.apply_opt(value).unwrap_or(f64::NAN)
    }

    /// Start position of the band for `value`, or `None` if `value` is not in the domain.
    pub fn apply_opt(&self, value: &T) -> Option<f64> {
        let index = self.index_of(value)?;
        let layout = self.layout()?;
        let position = layout.offset + index as f64 * layout.step;

        if layout.reverse {
            Some(self.range.0 - (position - self.range.1))
        } else {
            Some(position)
        }
    }

    /// Width of one band after inner padding. Zero for an empty domain.
    pub fn bandwidth(&self) -> f64 {
        self.layout().map_or(0.0, |layout| layout.bandwidth)
    }

    /// Distance between the starts of consecutive bands. Zero for an empty domain.
    pub fn step(&self) -> f64 {
        self.layout().map_or(0.0, |layout| layout.step)
    }

    fn layout(&self) -> Option<BandLayout> {
        if self.domain.is_empty() {
            return None;
        }

        let n = self.domain.len() as f64;
        let reverse = self.range.1 < self.range.0;
        let (r0, r1) = util::sorted_pair(self.range.0, self.range.1);

        let step = (r1 - r0) / (n - self.padding_inner + self.padding_outer * 2.0);
        Some(BandLayout {
            step,
            bandwidth: step * (1.0 - self.padding_inner),
            offset: r0 + step * self.padding_outer,
            reverse,
        })
    }
}

fn check_padding(kind: &str, value: f64) {
    if !(0.0..=1.0).contains(&value) {
        log::debug!("band scale: {kind} padding {value} is outside [0, 1]");
    } else {
        log::trace!("band scale: {kind} padding = {value}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC: [&str; 3] = ["A", "B", "C"];

    #[test]
    fn test_band_apply() {
        let scale = BandScale::new(ABC, (0.0, 300.0));

        assert_eq!(scale.apply(&"A"), 0.0);
        assert_eq!(scale.apply(&"B"), 100.0);
        assert_eq!(scale.apply(&"C"), 200.0);
        assert_eq!(scale.bandwidth(), 100.0);
        assert_eq!(scale.step(), 100.0);
    }

    #[test]
    fn test_band_unknown_value() {
        let scale = BandScale::new(ABC, (0.0, 300.0));

        assert!(scale.apply(&"D").is_nan());
        assert!(scale.apply(&"Z").is_nan());
        assert_eq!(scale.apply_opt(&"D"), None);
        assert_eq!(scale.index_of(&"D"), None);
    }

    #[test]
    fn test_band_numeric_domain() {
        let scale = BandScale::new([1, 2, 3, 4], (0.0, 400.0));

        assert_eq!(scale.apply(&1), 0.0);
        assert_eq!(scale.apply(&2), 100.0);
        assert_eq!(scale.apply(&3), 200.0);
        assert_eq!(scale.apply(&4), 300.0);
    }

    #[test]
    fn test_band_single_value() {
        let scale = BandScale::new(["A"], (0.0, 100.0));

        assert_eq!(scale.apply(&"A"), 0.0);
        assert_eq!(scale.bandwidth(), 100.0);
    }

    #[test]
    fn test_band_empty_domain() {
        let scale = BandScale::<&str>::new([], (0.0, 100.0));

        assert!(scale.is_empty());
        assert!(scale.apply(&"A").is_nan());
        assert_eq!(scale.bandwidth(), 0.0);
        assert_eq!(scale.step(), 0.0);
    }

    #[test]
    fn test_band_uniform_padding() {
        let scale = BandScale::new(ABC, (0.0, 300.0)).with_padding(0.1);
        let positions: Vec<f64> = ABC.iter().map(|v| scale.apply(v)).collect();

        let first_gap = positions[1] - positions[0];
        let second_gap = positions[2] - positions[1];
        assert!((first_gap - second_gap).abs() < 1e-9);
        assert!(positions[0] > 0.0);
        assert_eq!(scale.padding_inner(), 0.1);
        assert_eq!(scale.padding_outer(), 0.1);
    }

    #[test]
    fn test_band_inner_padding_only() {
        let scale = BandScale::new(ABC, (0.0, 300.0)).with_padding_inner(0.2);

        assert_eq!(scale.apply(&"A"), 0.0);
        assert!((scale.bandwidth() - 85.714).abs() < 1e-3);
    }

    #[test]
    fn test_band_outer_padding_only() {
        let scale = BandScale::new(ABC, (0.0, 300.0)).with_padding_outer(0.5);

        assert_eq!(scale.step(), 75.0);
        assert_eq!(scale.apply(&"A"), 37.5);
        assert_eq!(scale.bandwidth(), scale.step());
    }

    #[test]
    fn test_band_inner_and_outer_padding() {
        let scale = BandScale::new(ABC, (0.0, 300.0))
            .with_padding_inner(0.2)
            .with_padding_outer(0.5);

        assert!(scale.apply(&"A") > 0.0);
        assert!(scale.bandwidth() < scale.step());
    }

    #[test]
    fn test_band_padding_setter_overrides() {
        let mut scale = BandScale::new(ABC, (0.0, 300.0));
        scale.set_padding(0.1).set_padding_inner(0.2).set_padding_outer(0.5);

        assert_eq!(scale.padding_inner(), 0.2);
        assert_eq!(scale.padding_outer(), 0.5);
    }

    #[test]
    fn test_band_full_padding() {
        let scale = BandScale::new(ABC, (0.0, 300.0)).with_padding(1.0);

        assert_eq!(scale.bandwidth(), 0.0);
        assert_eq!(scale.step(), 75.0);
    }

    #[test]
    fn test_band_reversed_range() {
        let scale = BandScale::new(ABC, (300.0, 0.0));

        assert_eq!(scale.apply(&"A"), 300.0);
        assert_eq!(scale.apply(&"B"), 200.0);
        assert_eq!(scale.apply(&"C"), 100.0);
        assert_eq!(scale.bandwidth(), 100.0);
        assert_eq!(scale.range(), (&300.0, &0.0));
    }

    #[test]
    fn test_band_reversed_range_with_padding() {
        let scale = BandScale::new(ABC, (300.0, 0.0)).with_padding(0.1);
        let positions: Vec<f64> = ABC.iter().map(|v| scale.apply(v)).collect();

        assert!(positions[0] > positions[1]);
        assert!(positions[1] > positions[2]);
    }

    #[test]
    fn test_band_negative_range() {
        let scale = BandScale::new(["A", "B"], (-200.0, -100.0));

        assert_eq!(scale.apply(&"A"), -200.0);
        assert_eq!(scale.apply(&"B"), -150.0);
        assert_eq!(scale.bandwidth(), 50.0);
    }

    #[test]
    fn test_band_many_values() {
        let domain: Vec<String> = (0..100).map(|i| format!("item-{i}")).collect();
        let scale = BandScale::new(domain, (0.0, 1000.0));

        assert_eq!(scale.len(), 100);
        assert_eq!(scale.apply(&"item-0".to_string()), 0.0);
        assert_eq!(scale.apply(&"item-50".to_string()), 500.0);
        assert_eq!(scale.apply(&"item-99".to_string()), 990.0);
        assert_eq!(scale.bandwidth(), 10.0);
    }

    #[test]
    fn test_band_duplicates_use_first_occurrence() {
        let scale = BandScale::new(["A", "B", "A"], (0.0, 300.0));

        assert_eq!(scale.index_of(&"A"), Some(0));
        assert_eq!(scale.apply(&"A"), 0.0);
    }

    #[test]
    fn test_band_set_domain_and_range() {
        let mut scale = BandScale::new(ABC, (0.0, 300.0));
        scale.set_domain(["X", "Y"]).set_range(0.0, 100.0);

        assert_eq!(scale.domain(), &["X", "Y"]);
        assert!(scale.apply(&"A").is_nan());
        assert_eq!(scale.apply(&"Y"), 50.0);
    }
}
