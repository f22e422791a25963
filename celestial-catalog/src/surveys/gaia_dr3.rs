//! Gaia Data Release 3 (Gaia Collaboration 2023).
//!
//! Native magnitude errors are derived from the published flux
//! signal-to-noise ratios; VizieR publishes magnitude errors directly.

use super::prelude::*;

const MAS_TO_ARCSEC: Transform = Transform::Scale(0.001);
const FLUX_SNR: Transform = Transform::MagErrorFromFluxOverError;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::long(Q::SourceId, "Source", "source_id"),
    FieldSpec::double(Q::Ra, "RA_ICRS", "ra"),
    FieldSpec::double(Q::Dec, "DE_ICRS", "dec"),
    FieldSpec::double(Q::RaErr, "e_RA_ICRS", "ra_error").with(MAS_TO_ARCSEC),
    FieldSpec::double(Q::DecErr, "e_DE_ICRS", "dec_error").with(MAS_TO_ARCSEC),
    FieldSpec::double(Q::Parallax, "Plx", "parallax"),
    FieldSpec::double(Q::ParallaxErr, "e_Plx", "parallax_error"),
    FieldSpec::double(Q::Pmra, "pmRA", "pmra"),
    FieldSpec::double(Q::PmraErr, "e_pmRA", "pmra_error"),
    FieldSpec::double(Q::Pmdec, "pmDE", "pmdec"),
    FieldSpec::double(Q::PmdecErr, "e_pmDE", "pmdec_error"),
    FieldSpec::double(Q::RadialVelocity, "RV", "radial_velocity"),
    FieldSpec::double(Q::RadialVelocityErr, "e_RV", "radial_velocity_error"),
    FieldSpec::double(Q::Mag(Band::GaiaG), "Gmag", "phot_g_mean_mag"),
    FieldSpec::double(Q::MagErr(Band::GaiaG), "e_Gmag", "phot_g_mean_flux_over_error")
        .native_with(FLUX_SNR),
    FieldSpec::double(Q::Mag(Band::GaiaBp), "BPmag", "phot_bp_mean_mag"),
    FieldSpec::double(Q::MagErr(Band::GaiaBp), "e_BPmag", "phot_bp_mean_flux_over_error")
        .native_with(FLUX_SNR),
    FieldSpec::double(Q::Mag(Band::GaiaRp), "RPmag", "phot_rp_mean_mag"),
    FieldSpec::double(Q::MagErr(Band::GaiaRp), "e_RPmag", "phot_rp_mean_flux_over_error")
        .native_with(FLUX_SNR),
    FieldSpec::double(Q::Extra("ruwe"), "RUWE", "ruwe"),
    FieldSpec::double(Q::Extra("teff"), "Teff", "teff_gspphot"),
    FieldSpec::double(Q::Extra("logg"), "logg", "logg_gspphot"),
    FieldSpec::double(Q::Extra("dist"), "Dist", "distance_gspphot"),
];

const PHOTOMETRY: &[BandSpec] = &[
    BandSpec::new(Band::GaiaG),
    BandSpec::new(Band::GaiaBp),
    BandSpec::new(Band::GaiaRp),
];

const COLORS: &[ColorSpec] = &[
    ColorSpec::new(Band::GaiaBp, Band::GaiaRp),
    ColorSpec::new(Band::GaiaG, Band::GaiaRp),
    ColorSpec::new(Band::GaiaBp, Band::GaiaG),
];

const COLUMNS: &[ColumnSpec] = &[
    TARGET_DISTANCE,
    SOURCE_ID,
    RA,
    DEC,
    RA_ERR,
    DEC_ERR,
    PLX,
    PLX_ERR,
    PMRA,
    PMRA_ERR,
    PMDEC,
    PMDEC_ERR,
    RV,
    RV_ERR,
    ColumnSpec::field("G", Q::Mag(Band::GaiaG), MAG),
    ColumnSpec::field("G err", Q::MagErr(Band::GaiaG), MAG),
    ColumnSpec::field("BP", Q::Mag(Band::GaiaBp), MAG),
    ColumnSpec::field("BP err", Q::MagErr(Band::GaiaBp), MAG),
    ColumnSpec::field("RP", Q::Mag(Band::GaiaRp), MAG),
    ColumnSpec::field("RP err", Q::MagErr(Band::GaiaRp), MAG),
    ColumnSpec::field("ruwe", Q::Extra("ruwe"), GENERIC).tip("Renormalised unit weight error"),
    ColumnSpec::field("teff", Q::Extra("teff"), GENERIC)
        .tip("Effective temperature from GSP-Phot (K)"),
    ColumnSpec::field("logg", Q::Extra("logg"), GENERIC).tip("Surface gravity from GSP-Phot"),
    ColumnSpec::field("gspphot dist", Q::Extra("dist"), DISTANCE)
        .tip("Distance from GSP-Phot (pc)"),
    PLX_DISTANCE,
    TOTAL_PM,
    TAN_VELOCITY,
    TOT_VELOCITY,
    ColumnSpec::new("BP-RP", ColumnSource::Color(Band::GaiaBp, Band::GaiaRp), MAG),
    ColumnSpec::new("G-RP", ColumnSource::Color(Band::GaiaG, Band::GaiaRp), MAG),
    ColumnSpec::new("BP-G", ColumnSource::Color(Band::GaiaBp, Band::GaiaG), MAG),
    ColumnSpec::new("M G", ColumnSource::AbsoluteMagnitude(Band::GaiaG), MAG)
        .tip("Absolute G magnitude from parallax"),
];

pub(super) static SCHEMA: SurveySchema = SurveySchema {
    survey: Survey::GaiaDr3,
    name: "Gaia DR3",
    id_kind: IdKind::Numeric,
    capabilities: Capabilities::PROPER_MOTION
        .union(Capabilities::GAIA_CMD)
        .union(Capabilities::WHITE_DWARF),
    fields: FIELDS,
    photometry: PHOTOMETRY,
    colors: COLORS,
    columns: COLUMNS,
    vizier: Some(QueryPlan::new(TapService::Vizier, "I/355/gaiadr3")),
    native: Some(QueryPlan::new(TapService::Esac, "gaiadr3.gaia_source")),
};
