//! Scales for charting
//!
//! `skala` provides the mapping functions behind chart axes: pure functions
//! from data values (the domain) to visual coordinates (the range). There is
//! no rendering and no tick generation here, only the arithmetic.
//!
//! # Core Concepts
//!
//! ## Continuous Scales
//!
//! Continuous scales map a two-point domain onto a two-point range and share
//! the [`ContinuousScale`] trait:
//! - [`LinearScale`] - Numeric domain, generic over any [`num_traits::Float`]
//! - [`TimeScale`] - Domain of instants (see [`TimeInstant`])
//!
//! Both support optional clamping and exact inversion of the unclamped mapping.
//!
//! ## Band Scales
//!
//! [`BandScale`] maps discrete values (categories) onto evenly spaced bands,
//! with independent inner and outer padding. Values outside the domain map to
//! NaN.
//!
//! ## Orientation
//!
//! Domains and ranges keep the order they were given in. A reversed pair is
//! valid and flips the direction of the mapping, which is how y-axes growing
//! downward on screen are expressed.
//!
//! # Examples
//!
//! ## Linear Scale
//!
//! ```rust
//! use skala::{ContinuousScale, LinearScale};
//!
//! let scale = LinearScale::new((0.0, 100.0), (0.0, 500.0));
//! assert_eq!(scale.apply(&50.0), 250.0);
//! assert_eq!(scale.invert(250.0), 50.0);
//!
//! let clamped = scale.with_clamp(true);
//! assert_eq!(clamped.apply(&150.0), 500.0);
//! ```
//!
//! ## Band Scale for a Bar Chart
//!
//! ```rust
//! use skala::BandScale;
//!
//! let x = BandScale::new(["Mon", "Tue", "Wed"], (0.0, 300.0)).with_padding_inner(0.25);
//!
//! for day in x.domain() {
//!     let left = x.apply(day);
//!     let right = left + x.bandwidth();
//!     assert!(left >= 0.0 && right <= 300.0 + 1e-9);
//! }
//! ```
//!
//! ## Time Scale for a Timeline
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use skala::{ContinuousScale, TimeScale};
//!
//! let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let end = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
//! let scale = TimeScale::new((start, end), (0.0, 800.0));
//!
//! let noon = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
//! assert_eq!(scale.apply(&noon), 400.0);
//! assert_eq!(scale.invert(400.0).unwrap(), noon);
//! ```
//!
//! # Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for all scale types, so a
//!   configured scale can be stored and reloaded.

pub mod error;
pub mod scale;

pub use error::{ScaleError, ScaleResult};
pub use scale::{BandScale, ContinuousScale, LinearScale, TimeInstant, TimeScale};
