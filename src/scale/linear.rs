use super::{ContinuousScale, project, util};
use num_traits::Float;

/// Linear scale: affine mapping between a numeric domain and a numeric range.
///
/// # Type Parameters
///
/// - `T`: Numeric type of both domain and range (typically `f64`, but any
///   [`Float`] works, including decimal types)
///
/// # Features
///
/// - **Exact inversion**: [`invert`](LinearScale::invert) undoes the unclamped mapping
/// - **Optional clamping**: Restrict output to the range bounds
/// - **Reversed axes**: Both domain and range may be decreasing
/// - **Degenerate domains**: A zero-width domain maps everything to the range start
///
/// # Examples
///
/// ## Basic Usage
///
/// ```rust
/// use skala::{ContinuousScale, LinearScale};
///
/// let scale = LinearScale::new((0.0, 100.0), (0.0, 500.0));
///
/// assert_eq!(scale.apply(&50.0), 250.0);
/// assert_eq!(scale.invert(250.0), 50.0);
///
/// // Out-of-domain values extrapolate
/// assert_eq!(scale.apply(&150.0), 750.0);
/// ```
///
/// ## Clamping
///
/// ```rust
/// use skala::{ContinuousScale, LinearScale};
///
/// let mut scale = LinearScale::new((0.0, 100.0), (0.0, 500.0)).with_clamp(true);
/// assert_eq!(scale.apply(&150.0), 500.0);
/// assert_eq!(scale.apply(&-50.0), 0.0);
///
/// scale.set_clamp(false);
/// assert_eq!(scale.apply(&150.0), 750.0);
/// ```
///
/// ## Reversed Range
///
/// ```rust
/// use skala::{ContinuousScale, LinearScale};
///
/// // Typical for y-axes where screen coordinates grow downward
/// let scale = LinearScale::new((0.0, 100.0), (500.0, 0.0));
///
/// assert_eq!(scale.apply(&0.0), 500.0);
/// assert_eq!(scale.apply(&100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearScale<T = f64>
where
    T: Float,
{
    domain: (T, T),
    range: (T, T),
    clamp: bool,
}

impl<T: Float> LinearScale<T> {
    /// Creates a new unclamped linear scale.
    ///
    /// # Examples
    ///
    /// ```
    /// use skala::{ContinuousScale, LinearScale};
    ///
    /// let scale = LinearScale::new((0.0, 100.0), (0.0, 1.0));
    /// assert_eq!(scale.domain(), (&0.0, &100.0));
    /// assert_eq!(scale.range(), (&0.0, &1.0));
    /// assert!(!scale.is_clamped());
    /// ```
    pub fn new(domain: (T, T), range: (T, T)) -> Self {
        Self {
            domain,
            range,
            clamp: false,
        }
    }

    /// Builder form of [`ContinuousScale::set_clamp`].
    pub fn with_clamp(mut self, enable: bool) -> Self {
        self.set_clamp(enable);
        self
    }

    /// Maps a range value back into the domain.
    ///
    /// This is the inverse of the unclamped forward mapping, whatever the
    /// current clamp setting. For a zero-width domain every value inverts to
    /// the domain start.
    ///
    /// # Examples
    ///
    /// ```
    /// use skala::LinearScale;
    ///
    /// let scale = LinearScale::new((-100.0, 100.0), (0.0, 200.0)).with_clamp(true);
    /// assert_eq!(scale.invert(0.0), -100.0);
    /// assert_eq!(scale.invert(300.0), 200.0);
    /// ```
    pub fn invert(&self, value: T) -> T {
        let t = util::normalize(value, self.range.0, self.range.1);
        util::interpolate(self.domain.0, self.domain.1, t)
    }
}

impl<T: Float> ContinuousScale for LinearScale<T> {
    type Domain = T;
    type Range = T;

    fn domain(&self) -> (&T, &T) {
        (&self.domain.0, &self.domain.1)
    }

    fn set_domain(&mut self, start: T, end: T) {
        log::trace!("linear scale: domain replaced");
        self.domain = (start, end);
    }

    fn range(&self) -> (&T, &T) {
        (&self.range.0, &self.range.1)
    }

    fn set_range(&mut self, start: T, end: T) {
        log::trace!("linear scale: range replaced");
        self.range = (start, end);
    }

    fn is_clamped(&self) -> bool {
        self.clamp
    }

    fn set_clamp(&mut self, enable: bool) -> &mut Self {
        log::trace!("linear scale: clamp = {enable}");
        self.clamp = enable;
        self
    }

    fn apply(&self, value: &T) -> T {
        let t = util::normalize(*value, self.domain.0, self.domain.1);
        project(t, self.range, self.clamp)
    }

    fn invert_opt(&self, value: T) -> Option<T> {
        Some(self.invert(value))
    }
}
