//! SDSS photometric catalogue, release 16 (Ahumada et al. 2020).

use super::prelude::*;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::long(Q::SourceId, "objID", ""),
    FieldSpec::double(Q::Ra, "RA_ICRS", ""),
    FieldSpec::double(Q::Dec, "DE_ICRS", ""),
    FieldSpec::double(Q::RaErr, "e_RA_ICRS", ""),
    FieldSpec::double(Q::DecErr, "e_DE_ICRS", ""),
    FieldSpec::integer(Q::Extra("class"), "class", ""),
    FieldSpec::double(Q::Extra("zsp"), "zsp", ""),
    FieldSpec::double(Q::Mag(Band::SdssU), "umag", ""),
    FieldSpec::double(Q::MagErr(Band::SdssU), "e_umag", ""),
    FieldSpec::double(Q::Mag(Band::SdssG), "gmag", ""),
    FieldSpec::double(Q::MagErr(Band::SdssG), "e_gmag", ""),
    FieldSpec::double(Q::Mag(Band::SdssR), "rmag", ""),
    FieldSpec::double(Q::MagErr(Band::SdssR), "e_rmag", ""),
    FieldSpec::double(Q::Mag(Band::SdssI), "imag", ""),
    FieldSpec::double(Q::MagErr(Band::SdssI), "e_imag", ""),
    FieldSpec::double(Q::Mag(Band::SdssZ), "zmag", ""),
    FieldSpec::double(Q::MagErr(Band::SdssZ), "e_zmag", ""),
];

const PHOTOMETRY: &[BandSpec] = &[
    BandSpec::new(Band::SdssU),
    BandSpec::new(Band::SdssG),
    BandSpec::new(Band::SdssR),
    BandSpec::new(Band::SdssI),
    BandSpec::new(Band::SdssZ),
];

const COLORS: &[ColorSpec] = &[
    ColorSpec::new(Band::SdssU, Band::SdssG),
    ColorSpec::new(Band::SdssG, Band::SdssR),
    ColorSpec::new(Band::SdssR, Band::SdssI),
    ColorSpec::new(Band::SdssI, Band::SdssZ),
];

const COLUMNS: &[ColumnSpec] = &[
    TARGET_DISTANCE,
    SOURCE_ID,
    RA,
    DEC,
    RA_ERR,
    DEC_ERR,
    ColumnSpec::field("class", Q::Extra("class"), INTEGER).tip("Morphology: 3 galaxy, 6 star"),
    ColumnSpec::field("spec z", Q::Extra("zsp"), GENERIC).tip("Spectroscopic redshift"),
    ColumnSpec::field("u", Q::Mag(Band::SdssU), MAG),
    ColumnSpec::field("u err", Q::MagErr(Band::SdssU), MAG),
    ColumnSpec::field("g", Q::Mag(Band::SdssG), MAG),
    ColumnSpec::field("g err", Q::MagErr(Band::SdssG), MAG),
    ColumnSpec::field("r", Q::Mag(Band::SdssR), MAG),
    ColumnSpec::field("r err", Q::MagErr(Band::SdssR), MAG),
    ColumnSpec::field("i", Q::Mag(Band::SdssI), MAG),
    ColumnSpec::field("i err", Q::MagErr(Band::SdssI), MAG),
    ColumnSpec::field("z", Q::Mag(Band::SdssZ), MAG),
    ColumnSpec::field("z err", Q::MagErr(Band::SdssZ), MAG),
    ColumnSpec::new("u-g", ColumnSource::Color(Band::SdssU, Band::SdssG), MAG),
    ColumnSpec::new("g-r", ColumnSource::Color(Band::SdssG, Band::SdssR), MAG),
    ColumnSpec::new("r-i", ColumnSource::Color(Band::SdssR, Band::SdssI), MAG),
    ColumnSpec::new("i-z", ColumnSource::Color(Band::SdssI, Band::SdssZ), MAG),
];

pub(super) static SCHEMA: SurveySchema = SurveySchema {
    survey: Survey::Sdss,
    name: "SDSS DR16",
    id_kind: IdKind::Numeric,
    capabilities: Capabilities::EXTINCTION,
    fields: FIELDS,
    photometry: PHOTOMETRY,
    colors: COLORS,
    columns: COLUMNS,
    vizier: Some(QueryPlan::new(TapService::Vizier, "V/154/sdss16")),
    native: None,
};
