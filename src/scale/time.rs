use super::{ContinuousScale, project, util};
use crate::error::{ScaleError, ScaleResult};
use chrono::{DateTime, NaiveDateTime, Utc};

/// An instant that can be converted to and from epoch milliseconds.
///
/// Implemented for [`DateTime<Utc>`], [`NaiveDateTime`] (read as UTC) and
/// plain `i64` millisecond timestamps.
pub trait TimeInstant: Copy {
    /// Milliseconds since the Unix epoch.
    fn timestamp_millis(&self) -> i64;

    /// Builds an instant from milliseconds since the Unix epoch.
    ///
    /// Returns `None` if the timestamp is outside the representable range.
    fn from_timestamp_millis(millis: i64) -> Option<Self>;
}

impl TimeInstant for DateTime<Utc> {
    fn timestamp_millis(&self) -> i64 {
        DateTime::timestamp_millis(self)
    }

    fn from_timestamp_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis)
    }
}

impl TimeInstant for NaiveDateTime {
    fn timestamp_millis(&self) -> i64 {
        self.and_utc().timestamp_millis()
    }

    fn from_timestamp_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(|dt| dt.naive_utc())
    }
}

impl TimeInstant for i64 {
    fn timestamp_millis(&self) -> i64 {
        *self
    }

    fn from_timestamp_millis(millis: i64) -> Option<Self> {
        Some(millis)
    }
}

/// Time scale: linear mapping between an interval of instants and a numeric range.
///
/// Instants are bridged to numbers through their millisecond timestamps. The
/// distance from the domain start is taken in integer milliseconds before any
/// floating point division, so domains far from the epoch keep millisecond
/// precision.
///
/// # Examples
///
/// ```rust
/// use chrono::{DateTime, TimeZone, Utc};
/// use skala::{ContinuousScale, TimeScale};
///
/// let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 1).unwrap();
/// let scale = TimeScale::new((start, end), (0.0, 1000.0));
///
/// let mid = DateTime::from_timestamp_millis(start.timestamp_millis() + 500).unwrap();
/// assert_eq!(scale.apply(&mid), 500.0);
/// assert_eq!(scale.invert(500.0).unwrap(), mid);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeScale<I = DateTime<Utc>>
where
    I: TimeInstant,
{
    domain: (I, I),
    range: (f64, f64),
    clamp: bool,
}

impl<I: TimeInstant> TimeScale<I> {
    /// Creates a new unclamped time scale.
    pub fn new(domain: (I, I), range: (f64, f64)) -> Self {
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

    /// Maps a range value back to a new instant, ignoring clamping.
    ///
    /// The result is rounded to the nearest millisecond.
    ///
    /// # Errors
    ///
    /// [`ScaleError::TimestampOutOfRange`] if the interpolated timestamp is
    /// not finite or cannot be represented by `I`.
    pub fn invert(&self, value: f64) -> ScaleResult<I> {
        self.invert_opt(value).ok_or_else(|| {
            let millis = self.domain.0.timestamp_millis() as f64 + self.invert_offset(value);
            log::debug!("time scale: {value} inverts to unrepresentable timestamp {millis} ms");
            ScaleError::timestamp_out_of_range(millis)
        })
    }

    /// Milliseconds from the domain start to `value`.
    fn offset_millis(&self, value: &I) -> f64 {
        (i128::from(value.timestamp_millis()) - i128::from(self.domain.0.timestamp_millis())) as f64
    }

    fn invert_offset(&self, value: f64) -> f64 {
        let t = util::normalize(value, self.range.0, self.range.1);
        util::interpolate(0.0, self.offset_millis(&self.domain.1), t).round()
    }
}

impl<I: TimeInstant> ContinuousScale for TimeScale<I> {
    type Domain = I;
    type Range = f64;

    fn domain(&self) -> (&I, &I) {
        (&self.domain.0, &self.domain.1)
    }

    fn set_domain(&mut self, start: I, end: I) {
        log::trace!("time scale: domain replaced");
        self.domain = (start, end);
    }

    fn range(&self) -> (&f64, &f64) {
        (&self.range.0, &self.range.1)
    }

    fn set_range(&mut self, start: f64, end: f64) {
        log::trace!("time scale: range replaced");
        self.range = (start, end);
    }

    fn is_clamped(&self) -> bool {
        self.clamp
    }

    fn set_clamp(&mut self, enable: bool) -> &mut Self {
        log::trace!("time scale: clamp = {enable}");
        self.clamp = enable;
        self
    }

    fn apply(&self, value: &I) -> f64 {
        let t = util::normalize(
            self.offset_millis(value),
            0.0,
            self.offset_millis(&self.domain.1),
        );
        project(t, self.range, self.clamp)
    }

    fn invert_opt(&self, value: f64) -> Option<I> {
        let offset: i64 = num_traits::cast(self.invert_offset(value))?;
        let millis = self.domain.0.timestamp_millis().checked_add(offset)?;
        I::from_timestamp_millis(millis)
    }
}
