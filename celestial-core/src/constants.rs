//! Unit conversion factors and photometric zero-point offsets.
//!
//! Angles in catalog rows come in degrees (positions), arcseconds (position
//! errors, search radii), milliarcseconds (parallax, proper motion) and, for a
//! few surveys, arcseconds per year. The factors below are the only place
//! those scales are written down.
//!
//! # Angular scales
//!
//! | Constant | Meaning |
//! |----------|---------|
//! | [`DEG_ARCSEC`] | arcseconds per degree |
//! | [`DEG_ARCMIN`] | arcminutes per degree |
//! | [`ARCMIN_ARCSEC`] | arcseconds per arcminute |
//! | [`DEG_MAS`] | milliarcseconds per degree |
//! | [`ARCSEC_MAS`] | milliarcseconds per arcsecond |
//!
//! # AB − Vega offsets
//!
//! Optical surveys (SDSS, Pan-STARRS, DES, NSC) publish AB magnitudes; the
//! infrared surveys and Gaia are Vega-referenced. `m_Vega = m_AB − offset`.
//! SDSS values follow Blanton & Roweis (2007), Pan-STARRS follows Tonry et al.
//! (2012); DES and NSC reuse the SDSS g/r/i/z offsets for their closely
//! matching filters.

pub const DEG_ARCSEC: f64 = 3600.0;

pub const DEG_ARCMIN: f64 = 60.0;

pub const ARCMIN_ARCSEC: f64 = 60.0;

pub const DEG_MAS: f64 = 3_600_000.0;

pub const ARCSEC_MAS: f64 = 1000.0;

/// Parallax in mas that corresponds to 1 parsec.
pub const MAS_PER_PARSEC_PARALLAX: f64 = 1000.0;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

/// km/s corresponding to 1 AU/yr. Converts (mas/yr) / (mas) to km/s.
pub const KM_PER_S_PER_AU_PER_YR: f64 = 4.740470446;

/// 2.5 / ln(10): magnitude error for a unit flux signal-to-noise ratio.
#[allow(clippy::excessive_precision)]
pub const MAG_ERROR_PER_FLUX_SNR: f64 = 1.0857362047581294;

/// AB − Vega offsets for SDSS ugriz.
pub mod sdss {
    pub const U: f64 = 0.91;
    pub const G: f64 = -0.08;
    pub const R: f64 = 0.16;
    pub const I: f64 = 0.37;
    pub const Z: f64 = 0.54;
}

/// AB − Vega offsets for Pan-STARRS1 grizy.
pub mod panstarrs {
    pub const G: f64 = -0.104;
    pub const R: f64 = 0.131;
    pub const I: f64 = 0.356;
    pub const Z: f64 = 0.517;
    pub const Y: f64 = 0.556;
}

/// AB − Vega offsets for DECam grizY (DES and NSC).
pub mod decam {
    pub const U: f64 = 0.91;
    pub const G: f64 = -0.08;
    pub const R: f64 = 0.16;
    pub const I: f64 = 0.37;
    pub const Z: f64 = 0.54;
    pub const Y: f64 = 0.6;
    pub const VR: f64 = 0.13;
}
