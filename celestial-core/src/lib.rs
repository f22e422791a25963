//! Numeric foundations for survey catalog entries.
//!
//! Everything a catalog row needs before it becomes a typed record: lenient
//! cell parsing, unit factors, decimal formatting policies, sky positions and
//! the derived astrometric quantities. All functions are pure.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`numeric`] | Text cells to numbers, with `0` as the missing-value sentinel |
//! | [`rounding`] | Fixed, trimmed and zero-padded decimal formatting |
//! | [`constants`] | Angular scale factors and AB − Vega offsets |
//! | [`astrometry`] | Distances, absolute magnitudes, velocities, error propagation |
//! | [`position`] | [`SkyPosition`] parsing and sexagesimal output |
//! | [`math`] | Vincenty separation kernel and value sanitizing |
//! | [`errors`] | [`SurveyError`] and [`SurveyResult`] |
//!
//! # Quick Start
//!
//! ```
//! use celestial_core::astrometry::{absolute_magnitude_from_parallax, angular_distance};
//! use celestial_core::constants::DEG_ARCSEC;
//! use celestial_core::numeric::to_double;
//! use celestial_core::SkyPosition;
//!
//! let g = to_double("12.5");
//! let plx = to_double("NaN");
//! assert_eq!(absolute_magnitude_from_parallax(g, plx), 0.0);
//!
//! let target = SkyPosition::parse("00:42:44.33 +41:16:07.5")?;
//! let source = SkyPosition::new(10.6848, 41.2690);
//! assert!(angular_distance(target, source, DEG_ARCSEC) < 2.0);
//! # Ok::<(), celestial_core::SurveyError>(())
//! ```

pub mod astrometry;
pub mod constants;
pub mod errors;
pub mod math;
pub mod numeric;
pub mod position;
pub mod rounding;

pub use errors::{SurveyError, SurveyResult};
pub use position::SkyPosition;
