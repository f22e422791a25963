//! Pan-STARRS1 DR2 mean-object photometry (Flewelling et al. 2020).
//!
//! The MAST service marks missing measurements with `-999`.

use super::prelude::*;

const NO_DATA: Transform = Transform::Sentinel(-999.0);

const FIELDS: &[FieldSpec] = &[
    FieldSpec::long(Q::SourceId, "objID", "objID"),
    FieldSpec::text(Q::Extra("name"), "", "objName"),
    FieldSpec::double(Q::Ra, "RAJ2000", "raMean").with(NO_DATA),
    FieldSpec::double(Q::Dec, "DEJ2000", "decMean").with(NO_DATA),
    FieldSpec::double(Q::RaErr, "e_RAJ2000", "raMeanErr").with(NO_DATA),
    FieldSpec::double(Q::DecErr, "e_DEJ2000", "decMeanErr").with(NO_DATA),
    FieldSpec::double(Q::Mag(Band::Ps1G), "gmag", "gMeanPSFMag").with(NO_DATA),
    FieldSpec::double(Q::MagErr(Band::Ps1G), "e_gmag", "gMeanPSFMagErr").with(NO_DATA),
    FieldSpec::double(Q::Mag(Band::Ps1R), "rmag", "rMeanPSFMag").with(NO_DATA),
    FieldSpec::double(Q::MagErr(Band::Ps1R), "e_rmag", "rMeanPSFMagErr").with(NO_DATA),
    FieldSpec::double(Q::Mag(Band::Ps1I), "imag", "iMeanPSFMag").with(NO_DATA),
    FieldSpec::double(Q::MagErr(Band::Ps1I), "e_imag", "iMeanPSFMagErr").with(NO_DATA),
    FieldSpec::double(Q::Mag(Band::Ps1Z), "zmag", "zMeanPSFMag").with(NO_DATA),
    FieldSpec::double(Q::MagErr(Band::Ps1Z), "e_zmag", "zMeanPSFMagErr").with(NO_DATA),
    FieldSpec::double(Q::Mag(Band::Ps1Y), "ymag", "yMeanPSFMag").with(NO_DATA),
    FieldSpec::double(Q::MagErr(Band::Ps1Y), "e_ymag", "yMeanPSFMagErr").with(NO_DATA),
    FieldSpec::integer(Q::Extra("quality"), "Qual", "qualityFlag"),
];

const PHOTOMETRY: &[BandSpec] = &[
    BandSpec::new(Band::Ps1G),
    BandSpec::new(Band::Ps1R),
    BandSpec::new(Band::Ps1I),
    BandSpec::new(Band::Ps1Z),
    BandSpec::new(Band::Ps1Y),
];

const COLORS: &[ColorSpec] = &[
    ColorSpec::new(Band::Ps1G, Band::Ps1R),
    ColorSpec::new(Band::Ps1R, Band::Ps1I),
    ColorSpec::new(Band::Ps1I, Band::Ps1Z),
    ColorSpec::new(Band::Ps1Z, Band::Ps1Y),
];

const COLUMNS: &[ColumnSpec] = &[
    TARGET_DISTANCE,
    SOURCE_ID,
    ColumnSpec::field("name", Q::Extra("name"), TEXT),
    RA,
    DEC,
    RA_ERR,
    DEC_ERR,
    ColumnSpec::field("quality", Q::Extra("quality"), INTEGER).tip("Object quality flags"),
    ColumnSpec::field("g", Q::Mag(Band::Ps1G), MAG),
    ColumnSpec::field("g err", Q::MagErr(Band::Ps1G), MAG),
    ColumnSpec::field("r", Q::Mag(Band::Ps1R), MAG),
    ColumnSpec::field("r err", Q::MagErr(Band::Ps1R), MAG),
    ColumnSpec::field("i", Q::Mag(Band::Ps1I), MAG),
    ColumnSpec::field("i err", Q::MagErr(Band::Ps1I), MAG),
    ColumnSpec::field("z", Q::Mag(Band::Ps1Z), MAG),
    ColumnSpec::field("z err", Q::MagErr(Band::Ps1Z), MAG),
    ColumnSpec::field("y", Q::Mag(Band::Ps1Y), MAG),
    ColumnSpec::field("y err", Q::MagErr(Band::Ps1Y), MAG),
    ColumnSpec::new("g-r", ColumnSource::Color(Band::Ps1G, Band::Ps1R), MAG),
    ColumnSpec::new("r-i", ColumnSource::Color(Band::Ps1R, Band::Ps1I), MAG),
    ColumnSpec::new("i-z", ColumnSource::Color(Band::Ps1I, Band::Ps1Z), MAG),
    ColumnSpec::new("z-y", ColumnSource::Color(Band::Ps1Z, Band::Ps1Y), MAG),
];

pub(super) static SCHEMA: SurveySchema = SurveySchema {
    survey: Survey::PanStarrs,
    name: "Pan-STARRS DR2",
    id_kind: IdKind::Numeric,
    capabilities: Capabilities::EXTINCTION,
    fields: FIELDS,
    photometry: PHOTOMETRY,
    colors: COLORS,
    columns: COLUMNS,
    vizier: Some(QueryPlan::new(TapService::Vizier, "II/349/ps1")),
    native: Some(QueryPlan::new(TapService::Mast, "panstarrs/dr2/mean")),
};
