//! Scale types mapping data values into visual coordinates.
//!
//! - [`LinearScale`] maps a numeric interval onto a numeric range.
//! - [`TimeScale`] maps an interval of instants onto a numeric range.
//! - [`BandScale`] maps discrete values onto evenly spaced bands of a range.
//!
//! The two continuous scales share the [`ContinuousScale`] trait.

pub mod band;
pub mod linear;
pub mod time;
pub mod util;

use num_traits::Float;

pub use band::BandScale;
pub use linear::LinearScale;
pub use time::{TimeInstant, TimeScale};

/// A continuous mapping from a two-point domain onto a two-point numeric range.
///
/// Domain and range are kept exactly as given (no implicit sorting), so
/// reversed pairs flip the direction of the mapping.
pub trait ContinuousScale {
    /// Input values (numbers, instants).
    type Domain;
    /// Output coordinates.
    type Range: Float;

    /// Returns the domain endpoints in their original order.
    fn domain(&self) -> (&Self::Domain, &Self::Domain);

    /// Replaces the domain endpoints.
    fn set_domain(&mut self, start: Self::Domain, end: Self::Domain);

    /// Returns the range endpoints in their original order.
    fn range(&self) -> (&Self::Range, &Self::Range);

    /// Replaces the range endpoints.
    fn set_range(&mut self, start: Self::Range, end: Self::Range);

    /// Whether forward mapping restricts its output to the range bounds.
    fn is_clamped(&self) -> bool;

    /// Enables or disables clamping of the forward mapping.
    fn set_clamp(&mut self, enable: bool) -> &mut Self;

    /// Maps a domain value into the range.
    ///
    /// Values outside the domain extrapolate linearly unless clamping is enabled.
    fn apply(&self, value: &Self::Domain) -> Self::Range;

    /// Maps a range value back into the domain, ignoring clamping.
    ///
    /// Returns `None` if the result cannot be represented in the domain type.
    fn invert_opt(&self, value: Self::Range) -> Option<Self::Domain>;
}

/// Interpolates `t` across `range` and optionally clamps to its bounds.
pub(crate) fn project<R: Float>(t: R, range: (R, R), clamp: bool) -> R {
    let result = util::interpolate(range.0, range.1, t);
    if clamp {
        let (lo, hi) = util::sorted_pair(range.0, range.1);
        util::clamp_value(result, lo, hi)
    } else {
        result
    }
}
