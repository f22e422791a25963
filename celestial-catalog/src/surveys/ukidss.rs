//! UKIDSS Large Area Survey DR9 (Lawrence et al. 2007).

use super::prelude::*;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text(Q::SourceId, "UKIDSS", ""),
    FieldSpec::double(Q::Ra, "RAJ2000", ""),
    FieldSpec::double(Q::Dec, "DEJ2000", ""),
    FieldSpec::double(Q::Mag(Band::UkirtY), "Ymag", ""),
    FieldSpec::double(Q::MagErr(Band::UkirtY), "e_Ymag", ""),
    FieldSpec::double(Q::Mag(Band::UkirtJ), "Jmag1", ""),
    FieldSpec::double(Q::MagErr(Band::UkirtJ), "e_Jmag1", ""),
    FieldSpec::double(Q::Mag(Band::UkirtH), "Hmag", ""),
    FieldSpec::double(Q::MagErr(Band::UkirtH), "e_Hmag", ""),
    FieldSpec::double(Q::Mag(Band::UkirtK), "Kmag", ""),
    FieldSpec::double(Q::MagErr(Band::UkirtK), "e_Kmag", ""),
    FieldSpec::integer(Q::Extra("class"), "cl", ""),
];

const PHOTOMETRY: &[BandSpec] = &[
    BandSpec::new(Band::UkirtY),
    BandSpec::new(Band::UkirtJ),
    BandSpec::new(Band::UkirtH),
    BandSpec::new(Band::UkirtK),
];

const COLORS: &[ColorSpec] = &[
    ColorSpec::new(Band::UkirtY, Band::UkirtJ),
    ColorSpec::new(Band::UkirtJ, Band::UkirtH),
    ColorSpec::new(Band::UkirtH, Band::UkirtK),
    ColorSpec::new(Band::UkirtJ, Band::UkirtK),
];

const COLUMNS: &[ColumnSpec] = &[
    TARGET_DISTANCE,
    SOURCE_ID,
    RA,
    DEC,
    ColumnSpec::field("class", Q::Extra("class"), INTEGER)
        .tip("Merged class: -1 star, 1 galaxy, -2 probable star, -3 probable galaxy, 0 noise"),
    ColumnSpec::field("Y", Q::Mag(Band::UkirtY), MAG),
    ColumnSpec::field("Y err", Q::MagErr(Band::UkirtY), MAG),
    ColumnSpec::field("J", Q::Mag(Band::UkirtJ), MAG),
    ColumnSpec::field("J err", Q::MagErr(Band::UkirtJ), MAG),
    ColumnSpec::field("H", Q::Mag(Band::UkirtH), MAG),
    ColumnSpec::field("H err", Q::MagErr(Band::UkirtH), MAG),
    ColumnSpec::field("K", Q::Mag(Band::UkirtK), MAG),
    ColumnSpec::field("K err", Q::MagErr(Band::UkirtK), MAG),
    ColumnSpec::new("Y-J", ColumnSource::Color(Band::UkirtY, Band::UkirtJ), MAG),
    ColumnSpec::new("J-H", ColumnSource::Color(Band::UkirtJ, Band::UkirtH), MAG),
    ColumnSpec::new("H-K", ColumnSource::Color(Band::UkirtH, Band::UkirtK), MAG),
    ColumnSpec::new("J-K", ColumnSource::Color(Band::UkirtJ, Band::UkirtK), MAG),
];

pub(super) static SCHEMA: SurveySchema = SurveySchema {
    survey: Survey::Ukidss,
    name: "UKIDSS",
    id_kind: IdKind::Text,
    capabilities: Capabilities::EXTINCTION,
    fields: FIELDS,
    photometry: PHOTOMETRY,
    colors: COLORS,
    columns: COLUMNS,
    vizier: Some(QueryPlan::new(TapService::Vizier, "II/319/las9")),
    native: None,
};
