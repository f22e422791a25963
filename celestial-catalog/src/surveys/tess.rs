//! TESS Input Catalog v8.2 (Stassun et al. 2019).

use super::prelude::*;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::long(Q::SourceId, "TIC", ""),
    FieldSpec::double(Q::Ra, "RAJ2000", ""),
    FieldSpec::double(Q::Dec, "DEJ2000", ""),
    FieldSpec::double(Q::Parallax, "Plx", ""),
    FieldSpec::double(Q::ParallaxErr, "e_Plx", ""),
    FieldSpec::double(Q::Pmra, "pmRA", ""),
    FieldSpec::double(Q::PmraErr, "e_pmRA", ""),
    FieldSpec::double(Q::Pmdec, "pmDE", ""),
    FieldSpec::double(Q::PmdecErr, "e_pmDE", ""),
    FieldSpec::double(Q::Mag(Band::TessT), "Tmag", ""),
    FieldSpec::double(Q::MagErr(Band::TessT), "e_Tmag", ""),
    FieldSpec::double(Q::Mag(Band::JohnsonB), "Bmag", ""),
    FieldSpec::double(Q::MagErr(Band::JohnsonB), "e_Bmag", ""),
    FieldSpec::double(Q::Mag(Band::JohnsonV), "Vmag", ""),
    FieldSpec::double(Q::MagErr(Band::JohnsonV), "e_Vmag", ""),
    FieldSpec::double(Q::Mag(Band::GaiaG), "Gmag", ""),
    FieldSpec::double(Q::MagErr(Band::GaiaG), "e_Gmag", ""),
    FieldSpec::double(Q::Mag(Band::TwoMassJ), "Jmag", ""),
    FieldSpec::double(Q::MagErr(Band::TwoMassJ), "e_Jmag", ""),
    FieldSpec::double(Q::Mag(Band::TwoMassH), "Hmag", ""),
    FieldSpec::double(Q::MagErr(Band::TwoMassH), "e_Hmag", ""),
    FieldSpec::double(Q::Mag(Band::TwoMassKs), "Kmag", ""),
    FieldSpec::double(Q::MagErr(Band::TwoMassKs), "e_Kmag", ""),
    FieldSpec::double(Q::Extra("teff"), "Teff", ""),
    FieldSpec::double(Q::Extra("logg"), "logg", ""),
    FieldSpec::double(Q::Extra("radius"), "Rad", ""),
    FieldSpec::double(Q::Extra("mass"), "Mass", ""),
    FieldSpec::double(Q::Extra("dist"), "Dist", ""),
];

const PHOTOMETRY: &[BandSpec] = &[
    BandSpec::new(Band::TessT),
    BandSpec::new(Band::JohnsonB),
    BandSpec::new(Band::JohnsonV),
    BandSpec::new(Band::GaiaG),
    BandSpec::new(Band::TwoMassJ),
    BandSpec::new(Band::TwoMassH),
    BandSpec::new(Band::TwoMassKs),
];

const COLORS: &[ColorSpec] = &[
    ColorSpec::new(Band::JohnsonB, Band::JohnsonV),
    ColorSpec::new(Band::TwoMassJ, Band::TwoMassH),
    ColorSpec::new(Band::TwoMassH, Band::TwoMassKs),
];

const COLUMNS: &[ColumnSpec] = &[
    TARGET_DISTANCE,
    SOURCE_ID,
    RA,
    DEC,
    PLX,
    PLX_ERR,
    PMRA,
    PMRA_ERR,
    PMDEC,
    PMDEC_ERR,
    ColumnSpec::field("T", Q::Mag(Band::TessT), MAG),
    ColumnSpec::field("T err", Q::MagErr(Band::TessT), MAG),
    ColumnSpec::field("B", Q::Mag(Band::JohnsonB), MAG),
    ColumnSpec::field("B err", Q::MagErr(Band::JohnsonB), MAG),
    ColumnSpec::field("V", Q::Mag(Band::JohnsonV), MAG),
    ColumnSpec::field("V err", Q::MagErr(Band::JohnsonV), MAG),
    ColumnSpec::field("G", Q::Mag(Band::GaiaG), MAG),
    ColumnSpec::field("G err", Q::MagErr(Band::GaiaG), MAG),
    ColumnSpec::field("J", Q::Mag(Band::TwoMassJ), MAG),
    ColumnSpec::field("J err", Q::MagErr(Band::TwoMassJ), MAG),
    ColumnSpec::field("H", Q::Mag(Band::TwoMassH), MAG),
    ColumnSpec::field("H err", Q::MagErr(Band::TwoMassH), MAG),
    ColumnSpec::field("K", Q::Mag(Band::TwoMassKs), MAG),
    ColumnSpec::field("K err", Q::MagErr(Band::TwoMassKs), MAG),
    ColumnSpec::field("teff", Q::Extra("teff"), GENERIC).tip("Effective temperature (K)"),
    ColumnSpec::field("logg", Q::Extra("logg"), GENERIC),
    ColumnSpec::field("radius", Q::Extra("radius"), GENERIC).tip("Radius (solar radii)"),
    ColumnSpec::field("mass", Q::Extra("mass"), GENERIC).tip("Mass (solar masses)"),
    ColumnSpec::field("TIC dist", Q::Extra("dist"), DISTANCE).tip("Catalog distance (pc)"),
    PLX_DISTANCE,
    TOTAL_PM,
    TAN_VELOCITY,
    ColumnSpec::new("B-V", ColumnSource::Color(Band::JohnsonB, Band::JohnsonV), MAG),
    ColumnSpec::new("J-H", ColumnSource::Color(Band::TwoMassJ, Band::TwoMassH), MAG),
    ColumnSpec::new("H-K", ColumnSource::Color(Band::TwoMassH, Band::TwoMassKs), MAG),
];

pub(super) static SCHEMA: SurveySchema = SurveySchema {
    survey: Survey::Tess,
    name: "TESS",
    id_kind: IdKind::Numeric,
    capabilities: Capabilities::EXTINCTION.union(Capabilities::PROPER_MOTION),
    fields: FIELDS,
    photometry: PHOTOMETRY,
    colors: COLORS,
    columns: COLUMNS,
    vizier: Some(QueryPlan::new(TapService::Vizier, "IV/39/tic82")),
    native: None,
};
