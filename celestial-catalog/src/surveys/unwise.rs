//! unWISE catalog (Schlafly et al. 2019), Vega magnitudes from the
//! NOIRLab Data Lab copy.

use super::prelude::*;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text(Q::SourceId, "", "unwise_objid"),
    FieldSpec::double(Q::Ra, "", "ra"),
    FieldSpec::double(Q::Dec, "", "dec"),
    FieldSpec::double(Q::Mag(Band::WiseW1), "", "mag_w1_vg"),
    FieldSpec::double(Q::Mag(Band::WiseW2), "", "mag_w2_vg"),
    FieldSpec::double(Q::Extra("qf_w1"), "", "qf_w1"),
    FieldSpec::double(Q::Extra("qf_w2"), "", "qf_w2"),
    FieldSpec::double(Q::Extra("fracflux_w1"), "", "fracflux_w1"),
    FieldSpec::double(Q::Extra("fracflux_w2"), "", "fracflux_w2"),
];

const PHOTOMETRY: &[BandSpec] = &[BandSpec::new(Band::WiseW1), BandSpec::new(Band::WiseW2)];

const COLORS: &[ColorSpec] = &[ColorSpec::new(Band::WiseW1, Band::WiseW2)];

const COLUMNS: &[ColumnSpec] = &[
    TARGET_DISTANCE,
    SOURCE_ID,
    RA,
    DEC,
    ColumnSpec::field("W1", Q::Mag(Band::WiseW1), MAG),
    ColumnSpec::field("W2", Q::Mag(Band::WiseW2), MAG),
    ColumnSpec::field("qf W1", Q::Extra("qf_w1"), GENERIC)
        .tip("PSF-weighted fraction of good pixels"),
    ColumnSpec::field("qf W2", Q::Extra("qf_w2"), GENERIC),
    ColumnSpec::field("fracflux W1", Q::Extra("fracflux_w1"), GENERIC)
        .tip("PSF-weighted fraction of flux from this source"),
    ColumnSpec::field("fracflux W2", Q::Extra("fracflux_w2"), GENERIC),
    ColumnSpec::new("W1-W2", ColumnSource::Color(Band::WiseW1, Band::WiseW2), MAG),
];

pub(super) static SCHEMA: SurveySchema = SurveySchema {
    survey: Survey::UnWise,
    name: "unWISE",
    id_kind: IdKind::Text,
    capabilities: Capabilities::EXTINCTION,
    fields: FIELDS,
    photometry: PHOTOMETRY,
    colors: COLORS,
    columns: COLUMNS,
    vizier: None,
    native: Some(QueryPlan::new(TapService::NoirLab, "unwise_dr1.object")),
};
