//! Descriptors for every supported survey.
//!
//! Each submodule holds one static [`SurveySchema`]. [`Survey`] is the
//! closed set of surveys and the entry point to their schemas.
//!
//! | Survey | VizieR table | Native service |
//! |--------|--------------|----------------|
//! | AllWISE | `II/328/allwise` | IRSA `allwise_p3as_psd` |
//! | CatWISE2020 | `II/365/catwise` | IRSA `catwise_2020` |
//! | unWISE | | NOIRLab `unwise_dr1.object` |
//! | Gaia DR2 | `I/345/gaia2` | ESAC `gaiadr2.gaia_source` |
//! | Gaia DR3 | `I/355/gaiadr3` | ESAC `gaiadr3.gaia_source` |
//! | Gaia WD | `J/MNRAS/508/3877/maincat` | |
//! | SDSS DR16 | `V/154/sdss16` | |
//! | Pan-STARRS DR2 | `II/349/ps1` | MAST `panstarrs/dr2/mean` |
//! | 2MASS | `II/246/out` | IRSA `fp_psc` |
//! | UKIDSS | `II/319/las9` | |
//! | VHS | `II/367/vhs_dr5` | |
//! | UHS | `II/366/uhsdr1` | |
//! | DES DR2 | `II/371/des_dr2` | NOIRLab `des_dr2.main` |
//! | NSC DR2 | | NOIRLab `nsc_dr2.object` |
//! | SIMBAD | | SIMBAD `basic` ⟕ `allfluxes` |
//! | TESS | `IV/39/tic82` | |
//! | MOCA | | MOCAdb `summary_all_objects` |

mod allwise;
mod catwise;
mod des;
mod gaia_dr2;
mod gaia_dr3;
mod gaia_wd;
mod moca;
mod noirlab;
mod panstarrs;
mod sdss;
mod simbad;
mod tess;
mod two_mass;
mod uhs;
mod ukidss;
mod unwise;
mod vhs;

use crate::schema::SurveySchema;
use celestial_core::SurveyError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Everything a descriptor module needs.
mod prelude {
    pub(super) use super::Survey;
    pub(super) use crate::band::Band;
    pub(super) use crate::dialect::{QueryPlan, TapService};
    pub(super) use crate::schema::formats::*;
    pub(super) use crate::schema::{
        BandSpec, Capabilities, ColorSpec, ColumnSource, ColumnSpec, FieldSpec, Quantity as Q,
        SurveySchema, Transform,
    };
    pub(super) use crate::value::IdKind;

    pub(super) const TARGET_DISTANCE: ColumnSpec =
        ColumnSpec::new("dist (arcsec)", ColumnSource::TargetDistance, DISTANCE)
            .tip("Angular distance to the target in arcsec");
    pub(super) const SOURCE_ID: ColumnSpec = ColumnSpec::field("source id", Q::SourceId, TEXT);
    pub(super) const RA: ColumnSpec =
        ColumnSpec::field("ra", Q::Ra, COORD).tip("Right ascension (deg)");
    pub(super) const DEC: ColumnSpec =
        ColumnSpec::field("dec", Q::Dec, COORD).tip("Declination (deg)");
    pub(super) const RA_ERR: ColumnSpec =
        ColumnSpec::field("ra err", Q::RaErr, ASTROMETRY).tip("Right ascension error (arcsec)");
    pub(super) const DEC_ERR: ColumnSpec =
        ColumnSpec::field("dec err", Q::DecErr, ASTROMETRY).tip("Declination error (arcsec)");
    pub(super) const PLX: ColumnSpec =
        ColumnSpec::field("plx", Q::Parallax, ASTROMETRY).tip("Parallax (mas)");
    pub(super) const PLX_ERR: ColumnSpec = ColumnSpec::field("plx err", Q::ParallaxErr, ASTROMETRY);
    pub(super) const PMRA: ColumnSpec =
        ColumnSpec::field("pmra", Q::Pmra, ASTROMETRY).tip("Proper motion in RA (mas/yr)");
    pub(super) const PMRA_ERR: ColumnSpec = ColumnSpec::field("pmra err", Q::PmraErr, ASTROMETRY);
    pub(super) const PMDEC: ColumnSpec =
        ColumnSpec::field("pmdec", Q::Pmdec, ASTROMETRY).tip("Proper motion in Dec (mas/yr)");
    pub(super) const PMDEC_ERR: ColumnSpec =
        ColumnSpec::field("pmdec err", Q::PmdecErr, ASTROMETRY);
    pub(super) const RV: ColumnSpec =
        ColumnSpec::field("rv", Q::RadialVelocity, VELOCITY).tip("Radial velocity (km/s)");
    pub(super) const RV_ERR: ColumnSpec =
        ColumnSpec::field("rv err", Q::RadialVelocityErr, VELOCITY);
    pub(super) const PLX_DISTANCE: ColumnSpec =
        ColumnSpec::new("dist (pc)", ColumnSource::ParallacticDistance, DISTANCE)
            .tip("Distance from parallax (pc)");
    pub(super) const TOTAL_PM: ColumnSpec =
        ColumnSpec::new("tot pm", ColumnSource::TotalProperMotion, ASTROMETRY)
            .tip("Total proper motion (mas/yr)");
    pub(super) const TAN_VELOCITY: ColumnSpec =
        ColumnSpec::new("vtan", ColumnSource::TangentialVelocity, VELOCITY)
            .tip("Tangential velocity (km/s)");
    pub(super) const TOT_VELOCITY: ColumnSpec =
        ColumnSpec::new("vtot", ColumnSource::TotalVelocity, VELOCITY).tip("Total velocity (km/s)");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Survey {
    AllWise,
    CatWise,
    UnWise,
    GaiaDr2,
    GaiaDr3,
    GaiaWd,
    Sdss,
    PanStarrs,
    TwoMass,
    Ukidss,
    Vhs,
    Uhs,
    Des,
    NoirLab,
    Simbad,
    Tess,
    Moca,
}

impl Survey {
    pub const ALL: [Survey; 17] = [
        Survey::AllWise,
        Survey::CatWise,
        Survey::UnWise,
        Survey::GaiaDr2,
        Survey::GaiaDr3,
        Survey::GaiaWd,
        Survey::Sdss,
        Survey::PanStarrs,
        Survey::TwoMass,
        Survey::Ukidss,
        Survey::Vhs,
        Survey::Uhs,
        Survey::Des,
        Survey::NoirLab,
        Survey::Simbad,
        Survey::Tess,
        Survey::Moca,
    ];

    pub fn schema(self) -> &'static SurveySchema {
        match self {
            Survey::AllWise => &allwise::SCHEMA,
            Survey::CatWise => &catwise::SCHEMA,
            Survey::UnWise => &unwise::SCHEMA,
            Survey::GaiaDr2 => &gaia_dr2::SCHEMA,
            Survey::GaiaDr3 => &gaia_dr3::SCHEMA,
            Survey::GaiaWd => &gaia_wd::SCHEMA,
            Survey::Sdss => &sdss::SCHEMA,
            Survey::PanStarrs => &panstarrs::SCHEMA,
            Survey::TwoMass => &two_mass::SCHEMA,
            Survey::Ukidss => &ukidss::SCHEMA,
            Survey::Vhs => &vhs::SCHEMA,
            Survey::Uhs => &uhs::SCHEMA,
            Survey::Des => &des::SCHEMA,
            Survey::NoirLab => &noirlab::SCHEMA,
            Survey::Simbad => &simbad::SCHEMA,
            Survey::Tess => &tess::SCHEMA,
            Survey::Moca => &moca::SCHEMA,
        }
    }

    /// Display name and catalog selection key.
    pub fn name(self) -> &'static str {
        self.schema().name
    }

    /// Short lower-case key for command lines and settings files.
    pub fn key(self) -> &'static str {
        match self {
            Survey::AllWise => "allwise",
            Survey::CatWise => "catwise",
            Survey::UnWise => "unwise",
            Survey::GaiaDr2 => "gaia-dr2",
            Survey::GaiaDr3 => "gaia-dr3",
            Survey::GaiaWd => "gaia-wd",
            Survey::Sdss => "sdss",
            Survey::PanStarrs => "panstarrs",
            Survey::TwoMass => "2mass",
            Survey::Ukidss => "ukidss",
            Survey::Vhs => "vhs",
            Survey::Uhs => "uhs",
            Survey::Des => "des",
            Survey::NoirLab => "noirlab",
            Survey::Simbad => "simbad",
            Survey::Tess => "tess",
            Survey::Moca => "moca",
        }
    }
}

impl fmt::Display for Survey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Survey {
    type Err = SurveyError;

    /// Accepts the display name or the key, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Survey::ALL
            .into_iter()
            .find(|survey| {
                survey.name().eq_ignore_ascii_case(wanted)
                    || survey.key().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| {
                SurveyError::invalid_input("catalog", &format!("unknown catalog '{}'", wanted))
            })
    }
}
