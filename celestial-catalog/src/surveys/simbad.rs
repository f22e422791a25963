//! SIMBAD basic data joined with its flux table.
//!
//! SIMBAD publishes one proper-motion error ellipse; its major axis stands in
//! for both component errors.

use super::prelude::*;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text(Q::SourceId, "", "main_id"),
    FieldSpec::double(Q::Ra, "", "ra"),
    FieldSpec::double(Q::Dec, "", "dec"),
    FieldSpec::double(Q::Parallax, "", "plx_value"),
    FieldSpec::double(Q::ParallaxErr, "", "plx_err"),
    FieldSpec::double(Q::Pmra, "", "pmra"),
    FieldSpec::double(Q::PmraErr, "", "pm_err_maj"),
    FieldSpec::double(Q::Pmdec, "", "pmdec"),
    FieldSpec::double(Q::PmdecErr, "", "pm_err_maj"),
    FieldSpec::double(Q::RadialVelocity, "", "rvz_radvel"),
    FieldSpec::double(Q::RadialVelocityErr, "", "rvz_err"),
    FieldSpec::text(Q::Extra("otype"), "", "otype"),
    FieldSpec::text(Q::Extra("sp_type"), "", "sp_type"),
    FieldSpec::double(Q::Mag(Band::JohnsonU), "", "U"),
    FieldSpec::double(Q::Mag(Band::JohnsonB), "", "B"),
    FieldSpec::double(Q::Mag(Band::JohnsonV), "", "V"),
    FieldSpec::double(Q::Mag(Band::CousinsR), "", "R"),
    FieldSpec::double(Q::Mag(Band::CousinsI), "", "I"),
    FieldSpec::double(Q::Mag(Band::GaiaG), "", "G"),
    FieldSpec::double(Q::Mag(Band::TwoMassJ), "", "J"),
    FieldSpec::double(Q::Mag(Band::TwoMassH), "", "H"),
    FieldSpec::double(Q::Mag(Band::TwoMassKs), "", "K"),
];

const PHOTOMETRY: &[BandSpec] = &[
    BandSpec::new(Band::JohnsonU),
    BandSpec::new(Band::JohnsonB),
    BandSpec::new(Band::JohnsonV),
    BandSpec::new(Band::CousinsR),
    BandSpec::new(Band::CousinsI),
    BandSpec::new(Band::GaiaG),
    BandSpec::new(Band::TwoMassJ),
    BandSpec::new(Band::TwoMassH),
    BandSpec::new(Band::TwoMassKs),
];

const COLORS: &[ColorSpec] = &[
    ColorSpec::new(Band::JohnsonU, Band::JohnsonB),
    ColorSpec::new(Band::JohnsonB, Band::JohnsonV),
    ColorSpec::new(Band::JohnsonV, Band::CousinsR),
    ColorSpec::new(Band::CousinsR, Band::CousinsI),
    ColorSpec::new(Band::TwoMassJ, Band::TwoMassH),
    ColorSpec::new(Band::TwoMassH, Band::TwoMassKs),
];

const COLUMNS: &[ColumnSpec] = &[
    TARGET_DISTANCE,
    SOURCE_ID,
    RA,
    DEC,
    ColumnSpec::field("object type", Q::Extra("otype"), TEXT),
    ColumnSpec::field("spectral type", Q::Extra("sp_type"), TEXT),
    PLX,
    PLX_ERR,
    PMRA,
    PMRA_ERR,
    PMDEC,
    PMDEC_ERR,
    RV,
    RV_ERR,
    ColumnSpec::field("U", Q::Mag(Band::JohnsonU), MAG),
    ColumnSpec::field("B", Q::Mag(Band::JohnsonB), MAG),
    ColumnSpec::field("V", Q::Mag(Band::JohnsonV), MAG),
    ColumnSpec::field("R", Q::Mag(Band::CousinsR), MAG),
    ColumnSpec::field("I", Q::Mag(Band::CousinsI), MAG),
    ColumnSpec::field("G", Q::Mag(Band::GaiaG), MAG),
    ColumnSpec::field("J", Q::Mag(Band::TwoMassJ), MAG),
    ColumnSpec::field("H", Q::Mag(Band::TwoMassH), MAG),
    ColumnSpec::field("K", Q::Mag(Band::TwoMassKs), MAG),
    PLX_DISTANCE,
    TOTAL_PM,
    TAN_VELOCITY,
    TOT_VELOCITY,
    ColumnSpec::new("U-B", ColumnSource::Color(Band::JohnsonU, Band::JohnsonB), MAG),
    ColumnSpec::new("B-V", ColumnSource::Color(Band::JohnsonB, Band::JohnsonV), MAG),
    ColumnSpec::new("V-R", ColumnSource::Color(Band::JohnsonV, Band::CousinsR), MAG),
    ColumnSpec::new("R-I", ColumnSource::Color(Band::CousinsR, Band::CousinsI), MAG),
    ColumnSpec::new("J-H", ColumnSource::Color(Band::TwoMassJ, Band::TwoMassH), MAG),
    ColumnSpec::new("H-K", ColumnSource::Color(Band::TwoMassH, Band::TwoMassKs), MAG),
];

pub(super) static SCHEMA: SurveySchema = SurveySchema {
    survey: Survey::Simbad,
    name: "SIMBAD",
    id_kind: IdKind::Text,
    capabilities: Capabilities::EXTINCTION.union(Capabilities::PROPER_MOTION),
    fields: FIELDS,
    photometry: PHOTOMETRY,
    colors: COLORS,
    columns: COLUMNS,
    vizier: None,
    native: Some(QueryPlan::new(
        TapService::Simbad,
        "basic LEFT JOIN allfluxes ON basic.oid = allfluxes.oidref",
    )),
};
