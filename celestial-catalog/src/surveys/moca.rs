//! Montreal Open Clusters and Associations database (Gagné et al.).

use super::prelude::*;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::long(Q::SourceId, "", "moca_oid"),
    FieldSpec::text(Q::Extra("designation"), "", "designation"),
    FieldSpec::double(Q::Ra, "", "ra"),
    FieldSpec::double(Q::Dec, "", "dec"),
    FieldSpec::double(Q::Pmra, "", "pmra"),
    FieldSpec::double(Q::PmraErr, "", "epmra"),
    FieldSpec::double(Q::Pmdec, "", "pmdec"),
    FieldSpec::double(Q::PmdecErr, "", "epmdec"),
    FieldSpec::double(Q::Parallax, "", "plx"),
    FieldSpec::double(Q::ParallaxErr, "", "eplx"),
    FieldSpec::double(Q::RadialVelocity, "", "rv"),
    FieldSpec::double(Q::RadialVelocityErr, "", "erv"),
    FieldSpec::text(Q::Extra("association"), "", "moca_aid"),
    FieldSpec::text(Q::Extra("spectral_type"), "", "spt"),
];

const COLUMNS: &[ColumnSpec] = &[
    TARGET_DISTANCE,
    SOURCE_ID,
    ColumnSpec::field("designation", Q::Extra("designation"), TEXT),
    RA,
    DEC,
    ColumnSpec::field("association", Q::Extra("association"), TEXT)
        .tip("MOCA association identifier"),
    ColumnSpec::field("spectral type", Q::Extra("spectral_type"), TEXT),
    PLX,
    PLX_ERR,
    PMRA,
    PMRA_ERR,
    PMDEC,
    PMDEC_ERR,
    RV,
    RV_ERR,
    PLX_DISTANCE,
    TOTAL_PM,
    TAN_VELOCITY,
    TOT_VELOCITY,
];

pub(super) static SCHEMA: SurveySchema = SurveySchema {
    survey: Survey::Moca,
    name: "MOCA",
    id_kind: IdKind::Numeric,
    capabilities: Capabilities::PROPER_MOTION,
    fields: FIELDS,
    photometry: &[],
    colors: &[],
    columns: COLUMNS,
    vizier: None,
    native: Some(QueryPlan::new(TapService::MocaDb, "summary_all_objects")),
};
