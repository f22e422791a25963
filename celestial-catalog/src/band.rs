//! Photometric bands and the extinction band identifiers they map onto.
//!
//! Every filter any supported survey publishes is a [`Band`]. A band knows the
//! magnitude system it is calibrated in and, for AB-calibrated optical bands,
//! the offset to the Vega system. Extinction values come from an external
//! collaborator keyed by [`ExtinctionBand`]; [`Band::extinction_band`] picks
//! the closest filter for which such a value exists.

use celestial_core::constants::{decam, panstarrs, sdss};
use celestial_core::{SurveyError, SurveyResult};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Zero-point reference of a published magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MagnitudeSystem {
    Ab,
    Vega,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Band {
    GaiaG,
    GaiaBp,
    GaiaRp,
    SdssU,
    SdssG,
    SdssR,
    SdssI,
    SdssZ,
    Ps1G,
    Ps1R,
    Ps1I,
    Ps1Z,
    Ps1Y,
    DesG,
    DesR,
    DesI,
    DesZ,
    DesY,
    NscU,
    NscG,
    NscR,
    NscI,
    NscZ,
    NscY,
    NscVr,
    TwoMassJ,
    TwoMassH,
    TwoMassKs,
    UkirtY,
    UkirtJ,
    UkirtH,
    UkirtK,
    VistaY,
    VistaJ,
    VistaH,
    VistaKs,
    WiseW1,
    WiseW2,
    WiseW3,
    WiseW4,
    JohnsonU,
    JohnsonB,
    JohnsonV,
    CousinsR,
    CousinsI,
    TessT,
}

impl Band {
    /// Short filter label used in color names (`g-r`, `J-Ks`, `BP-RP`).
    pub fn label(self) -> &'static str {
        use Band::*;
        match self {
            GaiaG => "G",
            GaiaBp => "BP",
            GaiaRp => "RP",
            SdssU | NscU => "u",
            SdssG | Ps1G | DesG | NscG => "g",
            SdssR | Ps1R | DesR | NscR => "r",
            SdssI | Ps1I | DesI | NscI => "i",
            SdssZ | Ps1Z | DesZ | NscZ => "z",
            Ps1Y | DesY | NscY => "y",
            NscVr => "VR",
            UkirtY | VistaY => "Y",
            TwoMassJ | UkirtJ | VistaJ => "J",
            TwoMassH | UkirtH | VistaH => "H",
            TwoMassKs | VistaKs => "Ks",
            UkirtK => "K",
            WiseW1 => "W1",
            WiseW2 => "W2",
            WiseW3 => "W3",
            WiseW4 => "W4",
            JohnsonU => "U",
            JohnsonB => "B",
            JohnsonV => "V",
            CousinsR => "R",
            CousinsI => "I",
            TessT => "T",
        }
    }

    pub fn system(self) -> MagnitudeSystem {
        if self.ab_vega_offset().is_some() {
            MagnitudeSystem::Ab
        } else {
            MagnitudeSystem::Vega
        }
    }

    /// `m_AB − m_Vega` for AB-calibrated bands, `None` for Vega bands.
    pub fn ab_vega_offset(self) -> Option<f64> {
        use Band::*;
        let offset = match self {
            SdssU => sdss::U,
            SdssG => sdss::G,
            SdssR => sdss::R,
            SdssI => sdss::I,
            SdssZ => sdss::Z,
            Ps1G => panstarrs::G,
            Ps1R => panstarrs::R,
            Ps1I => panstarrs::I,
            Ps1Z => panstarrs::Z,
            Ps1Y => panstarrs::Y,
            DesG | NscG => decam::G,
            DesR | NscR => decam::R,
            DesI | NscI => decam::I,
            DesZ | NscZ => decam::Z,
            DesY | NscY => decam::Y,
            NscU => decam::U,
            NscVr => decam::VR,
            _ => return None,
        };
        Some(offset)
    }

    /// Converts a magnitude in this band to the Vega system.
    ///
    /// The sentinel stays the sentinel; Vega bands are returned unchanged.
    pub fn to_vega(self, magnitude: f64) -> f64 {
        match self.ab_vega_offset() {
            Some(offset) if magnitude != 0.0 => magnitude - offset,
            _ => magnitude,
        }
    }

    /// The extinction identifier whose value applies to this band, if any.
    pub fn extinction_band(self) -> Option<ExtinctionBand> {
        use Band::*;
        use ExtinctionBand as E;
        let band = match self {
            SdssU | NscU => E::SdssU,
            SdssG | Ps1G | DesG | NscG => E::SdssG,
            SdssR | Ps1R | DesR | NscR => E::SdssR,
            SdssI | Ps1I | DesI | NscI => E::SdssI,
            SdssZ | Ps1Z | DesZ | NscZ => E::SdssZ,
            UkirtJ => E::UkirtJ,
            UkirtH => E::UkirtH,
            UkirtK => E::UkirtK,
            TwoMassJ | VistaJ => E::TwoMassJ,
            TwoMassH | VistaH => E::TwoMassH,
            TwoMassKs | VistaKs => E::TwoMassK,
            WiseW1 => E::Wise1,
            WiseW2 => E::Wise2,
            JohnsonU => E::CtioU,
            JohnsonB => E::CtioB,
            JohnsonV => E::CtioV,
            CousinsR => E::CtioR,
            CousinsI => E::CtioI,
            GaiaG | GaiaBp | GaiaRp | Ps1Y | DesY | NscY | NscVr | UkirtY | VistaY | WiseW3
            | WiseW4 | TessT => return None,
        };
        Some(band)
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Filter identifiers shared with the extinction collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExtinctionBand {
    CtioU,
    CtioB,
    CtioV,
    CtioR,
    CtioI,
    SdssU,
    SdssG,
    SdssR,
    SdssI,
    SdssZ,
    UkirtJ,
    UkirtH,
    UkirtK,
    TwoMassJ,
    TwoMassH,
    TwoMassK,
    Wise1,
    Wise2,
}

impl ExtinctionBand {
    pub const ALL: [ExtinctionBand; 18] = [
        Self::CtioU,
        Self::CtioB,
        Self::CtioV,
        Self::CtioR,
        Self::CtioI,
        Self::SdssU,
        Self::SdssG,
        Self::SdssR,
        Self::SdssI,
        Self::SdssZ,
        Self::UkirtJ,
        Self::UkirtH,
        Self::UkirtK,
        Self::TwoMassJ,
        Self::TwoMassH,
        Self::TwoMassK,
        Self::Wise1,
        Self::Wise2,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::CtioU => "CTIO_U",
            Self::CtioB => "CTIO_B",
            Self::CtioV => "CTIO_V",
            Self::CtioR => "CTIO_R",
            Self::CtioI => "CTIO_I",
            Self::SdssU => "SDSS_U",
            Self::SdssG => "SDSS_G",
            Self::SdssR => "SDSS_R",
            Self::SdssI => "SDSS_I",
            Self::SdssZ => "SDSS_Z",
            Self::UkirtJ => "UKIRT_J",
            Self::UkirtH => "UKIRT_H",
            Self::UkirtK => "UKIRT_K",
            Self::TwoMassJ => "TWO_MASS_J",
            Self::TwoMassH => "TWO_MASS_H",
            Self::TwoMassK => "TWO_MASS_K",
            Self::Wise1 => "WISE_1",
            Self::Wise2 => "WISE_2",
        }
    }
}

impl fmt::Display for ExtinctionBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ExtinctionBand {
    type Err = SurveyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|band| band.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                SurveyError::invalid_input("extinction band", &format!("unknown key '{}'", wanted))
            })
    }
}

/// Parses a JSON object of `{"SDSS_G": 0.21, ...}` into an extinction map.
pub fn extinction_from_json(json: &str) -> SurveyResult<HashMap<ExtinctionBand, f64>> {
    let raw: HashMap<String, f64> = serde_json::from_str(json)
        .map_err(|e| SurveyError::invalid_input("extinction map", &e.to_string()))?;
    raw.into_iter()
        .map(|(key, value)| Ok((key.parse::<ExtinctionBand>()?, value)))
        .collect()
}
