//! NOIRLab Source Catalog DR2 (Nidever et al. 2021).
//!
//! Unmeasured magnitudes and errors are published as `99.99`.

use super::prelude::*;

const NO_DATA: Transform = Transform::Sentinel(99.99);

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text(Q::SourceId, "", "id"),
    FieldSpec::double(Q::Ra, "", "ra"),
    FieldSpec::double(Q::Dec, "", "dec"),
    FieldSpec::double(Q::RaErr, "", "raerr"),
    FieldSpec::double(Q::DecErr, "", "decerr"),
    FieldSpec::double(Q::Pmra, "", "pmra"),
    FieldSpec::double(Q::PmraErr, "", "pmraerr"),
    FieldSpec::double(Q::Pmdec, "", "pmdec"),
    FieldSpec::double(Q::PmdecErr, "", "pmdecerr"),
    FieldSpec::double(Q::Mag(Band::NscU), "", "umag").with(NO_DATA),
    FieldSpec::double(Q::MagErr(Band::NscU), "", "uerr").with(NO_DATA),
    FieldSpec::double(Q::Mag(Band::NscG), "", "gmag").with(NO_DATA),
    FieldSpec::double(Q::MagErr(Band::NscG), "", "gerr").with(NO_DATA),
    FieldSpec::double(Q::Mag(Band::NscR), "", "rmag").with(NO_DATA),
    FieldSpec::double(Q::MagErr(Band::NscR), "", "rerr").with(NO_DATA),
    FieldSpec::double(Q::Mag(Band::NscI), "", "imag").with(NO_DATA),
    FieldSpec::double(Q::MagErr(Band::NscI), "", "ierr").with(NO_DATA),
    FieldSpec::double(Q::Mag(Band::NscZ), "", "zmag").with(NO_DATA),
    FieldSpec::double(Q::MagErr(Band::NscZ), "", "zerr").with(NO_DATA),
    FieldSpec::double(Q::Mag(Band::NscY), "", "ymag").with(NO_DATA),
    FieldSpec::double(Q::MagErr(Band::NscY), "", "yerr").with(NO_DATA),
    FieldSpec::double(Q::Mag(Band::NscVr), "", "vrmag").with(NO_DATA),
    FieldSpec::double(Q::MagErr(Band::NscVr), "", "vrerr").with(NO_DATA),
    FieldSpec::double(Q::Extra("class_star"), "", "class_star"),
    FieldSpec::double(Q::Extra("ebv"), "", "ebv"),
];

const PHOTOMETRY: &[BandSpec] = &[
    BandSpec::new(Band::NscU),
    BandSpec::new(Band::NscG),
    BandSpec::new(Band::NscR),
    BandSpec::new(Band::NscI),
    BandSpec::new(Band::NscZ),
    BandSpec::new(Band::NscY),
    BandSpec::new(Band::NscVr),
];

const COLORS: &[ColorSpec] = &[
    ColorSpec::new(Band::NscU, Band::NscG),
    ColorSpec::new(Band::NscG, Band::NscR),
    ColorSpec::new(Band::NscR, Band::NscI),
    ColorSpec::new(Band::NscI, Band::NscZ),
    ColorSpec::new(Band::NscZ, Band::NscY),
];

const COLUMNS: &[ColumnSpec] = &[
    TARGET_DISTANCE,
    SOURCE_ID,
    RA,
    DEC,
    RA_ERR,
    DEC_ERR,
    PMRA,
    PMRA_ERR,
    PMDEC,
    PMDEC_ERR,
    TOTAL_PM,
    ColumnSpec::field("u", Q::Mag(Band::NscU), MAG),
    ColumnSpec::field("u err", Q::MagErr(Band::NscU), MAG),
    ColumnSpec::field("g", Q::Mag(Band::NscG), MAG),
    ColumnSpec::field("g err", Q::MagErr(Band::NscG), MAG),
    ColumnSpec::field("r", Q::Mag(Band::NscR), MAG),
    ColumnSpec::field("r err", Q::MagErr(Band::NscR), MAG),
    ColumnSpec::field("i", Q::Mag(Band::NscI), MAG),
    ColumnSpec::field("i err", Q::MagErr(Band::NscI), MAG),
    ColumnSpec::field("z", Q::Mag(Band::NscZ), MAG),
    ColumnSpec::field("z err", Q::MagErr(Band::NscZ), MAG),
    ColumnSpec::field("y", Q::Mag(Band::NscY), MAG),
    ColumnSpec::field("y err", Q::MagErr(Band::NscY), MAG),
    ColumnSpec::field("VR", Q::Mag(Band::NscVr), MAG),
    ColumnSpec::field("VR err", Q::MagErr(Band::NscVr), MAG),
    ColumnSpec::field("class star", Q::Extra("class_star"), GENERIC)
        .tip("Star/galaxy classifier, 1 = star"),
    ColumnSpec::field("E(B-V)", Q::Extra("ebv"), MAG).tip("Schlegel-Finkbeiner-Davis reddening"),
    ColumnSpec::new("u-g", ColumnSource::Color(Band::NscU, Band::NscG), MAG),
    ColumnSpec::new("g-r", ColumnSource::Color(Band::NscG, Band::NscR), MAG),
    ColumnSpec::new("r-i", ColumnSource::Color(Band::NscR, Band::NscI), MAG),
    ColumnSpec::new("i-z", ColumnSource::Color(Band::NscI, Band::NscZ), MAG),
    ColumnSpec::new("z-y", ColumnSource::Color(Band::NscZ, Band::NscY), MAG),
];

pub(super) static SCHEMA: SurveySchema = SurveySchema {
    survey: Survey::NoirLab,
    name: "NSC DR2",
    id_kind: IdKind::Text,
    capabilities: Capabilities::EXTINCTION.union(Capabilities::PROPER_MOTION),
    fields: FIELDS,
    photometry: PHOTOMETRY,
    colors: COLORS,
    columns: COLUMNS,
    vizier: None,
    native: Some(QueryPlan::new(TapService::NoirLab, "nsc_dr2.object")),
};
