//! Gaia EDR3 white dwarf candidates (Gentile Fusillo et al. 2021).

use super::prelude::*;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text(Q::SourceId, "WDJname", ""),
    FieldSpec::double(Q::Ra, "RA_ICRS", ""),
    FieldSpec::double(Q::Dec, "DE_ICRS", ""),
    FieldSpec::double(Q::Parallax, "Plx", ""),
    FieldSpec::double(Q::ParallaxErr, "e_Plx", ""),
    FieldSpec::double(Q::Pmra, "pmRA", ""),
    FieldSpec::double(Q::Pmdec, "pmDE", ""),
    FieldSpec::double(Q::Mag(Band::GaiaG), "Gmag", ""),
    FieldSpec::double(Q::Mag(Band::GaiaBp), "BPmag", ""),
    FieldSpec::double(Q::Mag(Band::GaiaRp), "RPmag", ""),
    FieldSpec::double(Q::Extra("pwd"), "Pwd", ""),
    FieldSpec::double(Q::Extra("teff_h"), "TeffH", ""),
    FieldSpec::double(Q::Extra("logg_h"), "loggH", ""),
    FieldSpec::double(Q::Extra("mass_h"), "MassH", ""),
    FieldSpec::double(Q::Extra("teff_he"), "TeffHe", ""),
    FieldSpec::double(Q::Extra("logg_he"), "loggHe", ""),
    FieldSpec::double(Q::Extra("mass_he"), "MassHe", ""),
];

const PHOTOMETRY: &[BandSpec] = &[
    BandSpec::new(Band::GaiaG),
    BandSpec::new(Band::GaiaBp),
    BandSpec::new(Band::GaiaRp),
];

const COLORS: &[ColorSpec] = &[
    ColorSpec::new(Band::GaiaBp, Band::GaiaRp),
    ColorSpec::new(Band::GaiaG, Band::GaiaRp),
];

const COLUMNS: &[ColumnSpec] = &[
    TARGET_DISTANCE,
    SOURCE_ID,
    RA,
    DEC,
    PLX,
    PLX_ERR,
    PMRA,
    PMDEC,
    ColumnSpec::field("G", Q::Mag(Band::GaiaG), MAG),
    ColumnSpec::field("BP", Q::Mag(Band::GaiaBp), MAG),
    ColumnSpec::field("RP", Q::Mag(Band::GaiaRp), MAG),
    ColumnSpec::field("Pwd", Q::Extra("pwd"), GENERIC).tip("Probability of being a white dwarf"),
    ColumnSpec::field("teff H", Q::Extra("teff_h"), GENERIC)
        .tip("Teff for a pure-H atmosphere (K)"),
    ColumnSpec::field("logg H", Q::Extra("logg_h"), GENERIC),
    ColumnSpec::field("mass H", Q::Extra("mass_h"), GENERIC)
        .tip("Mass for a pure-H atmosphere (solar masses)"),
    ColumnSpec::field("teff He", Q::Extra("teff_he"), GENERIC)
        .tip("Teff for a pure-He atmosphere (K)"),
    ColumnSpec::field("logg He", Q::Extra("logg_he"), GENERIC),
    ColumnSpec::field("mass He", Q::Extra("mass_he"), GENERIC),
    PLX_DISTANCE,
    TOTAL_PM,
    ColumnSpec::new("BP-RP", ColumnSource::Color(Band::GaiaBp, Band::GaiaRp), MAG),
    ColumnSpec::new("G-RP", ColumnSource::Color(Band::GaiaG, Band::GaiaRp), MAG),
    ColumnSpec::new("M G", ColumnSource::AbsoluteMagnitude(Band::GaiaG), MAG),
];

pub(super) static SCHEMA: SurveySchema = SurveySchema {
    survey: Survey::GaiaWd,
    name: "Gaia WD",
    id_kind: IdKind::Text,
    capabilities: Capabilities::WHITE_DWARF.union(Capabilities::GAIA_CMD),
    fields: FIELDS,
    photometry: PHOTOMETRY,
    colors: COLORS,
    columns: COLUMNS,
    vizier: Some(QueryPlan::new(TapService::Vizier, "J/MNRAS/508/3877/maincat")),
    native: None,
};
