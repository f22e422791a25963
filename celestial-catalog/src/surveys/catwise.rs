//! CatWISE2020 (Marocco et al. 2021). Proper motions are published in
//! arcsec/yr and stored in mas/yr.

use super::prelude::*;

const ARCSEC_TO_MAS: Transform = Transform::Scale(1000.0);

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text(Q::SourceId, "Name", "source_name"),
    FieldSpec::double(Q::Ra, "RA_ICRS", "ra"),
    FieldSpec::double(Q::Dec, "DE_ICRS", "dec"),
    FieldSpec::double(Q::RaErr, "e_RA_ICRS", "sigra"),
    FieldSpec::double(Q::DecErr, "e_DE_ICRS", "sigdec"),
    FieldSpec::double(Q::Mag(Band::WiseW1), "W1mproPM", "w1mpro_pm"),
    FieldSpec::double(Q::MagErr(Band::WiseW1), "e_W1mproPM", "w1sigmpro_pm"),
    FieldSpec::double(Q::Mag(Band::WiseW2), "W2mproPM", "w2mpro_pm"),
    FieldSpec::double(Q::MagErr(Band::WiseW2), "e_W2mproPM", "w2sigmpro_pm"),
    FieldSpec::double(Q::Pmra, "pmRA", "pmra").with(ARCSEC_TO_MAS),
    FieldSpec::double(Q::PmraErr, "e_pmRA", "sigpmra").with(ARCSEC_TO_MAS),
    FieldSpec::double(Q::Pmdec, "pmDE", "pmdec").with(ARCSEC_TO_MAS),
    FieldSpec::double(Q::PmdecErr, "e_pmDE", "sigpmdec").with(ARCSEC_TO_MAS),
    FieldSpec::text(Q::Extra("cc_flags"), "ccf", "cc_flags"),
    FieldSpec::text(Q::Extra("ab_flags"), "abf", "ab_flags"),
];

const PHOTOMETRY: &[BandSpec] = &[
    BandSpec::with_error(Band::WiseW1),
    BandSpec::with_error(Band::WiseW2),
];

const COLORS: &[ColorSpec] = &[ColorSpec::new(Band::WiseW1, Band::WiseW2)];

const COLUMNS: &[ColumnSpec] = &[
    TARGET_DISTANCE,
    SOURCE_ID,
    RA,
    DEC,
    RA_ERR,
    DEC_ERR,
    ColumnSpec::field("W1", Q::Mag(Band::WiseW1), MAG),
    ColumnSpec::field("W1 err", Q::MagErr(Band::WiseW1), MAG),
    ColumnSpec::field("W2", Q::Mag(Band::WiseW2), MAG),
    ColumnSpec::field("W2 err", Q::MagErr(Band::WiseW2), MAG),
    PMRA,
    PMRA_ERR,
    PMDEC,
    PMDEC_ERR,
    TOTAL_PM,
    ColumnSpec::field("cc flags", Q::Extra("cc_flags"), TEXT),
    ColumnSpec::field("ab flags", Q::Extra("ab_flags"), TEXT).tip("Artifact flags"),
    ColumnSpec::new("W1-W2", ColumnSource::Color(Band::WiseW1, Band::WiseW2), MAG),
];

pub(super) static SCHEMA: SurveySchema = SurveySchema {
    survey: Survey::CatWise,
    name: "CatWISE2020",
    id_kind: IdKind::Text,
    capabilities: Capabilities::EXTINCTION.union(Capabilities::PROPER_MOTION),
    fields: FIELDS,
    photometry: PHOTOMETRY,
    colors: COLORS,
    columns: COLUMNS,
    vizier: Some(QueryPlan::new(TapService::Vizier, "II/365/catwise")),
    native: Some(QueryPlan::new(TapService::Irsa, "catwise_2020")),
};
