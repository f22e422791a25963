//! 2MASS All-Sky Point Source Catalog (Skrutskie et al. 2006).

use super::prelude::*;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text(Q::SourceId, "2MASS", "designation"),
    FieldSpec::double(Q::Ra, "RAJ2000", "ra"),
    FieldSpec::double(Q::Dec, "DEJ2000", "dec"),
    FieldSpec::double(Q::RaErr, "errMaj", "err_maj"),
    FieldSpec::double(Q::DecErr, "errMin", "err_min"),
    FieldSpec::double(Q::Mag(Band::TwoMassJ), "Jmag", "j_m"),
    FieldSpec::double(Q::MagErr(Band::TwoMassJ), "e_Jmag", "j_msigcom"),
    FieldSpec::double(Q::Mag(Band::TwoMassH), "Hmag", "h_m"),
    FieldSpec::double(Q::MagErr(Band::TwoMassH), "e_Hmag", "h_msigcom"),
    FieldSpec::double(Q::Mag(Band::TwoMassKs), "Kmag", "k_m"),
    FieldSpec::double(Q::MagErr(Band::TwoMassKs), "e_Kmag", "k_msigcom"),
    FieldSpec::text(Q::Extra("ph_qual"), "Qflg", "ph_qual"),
    FieldSpec::text(Q::Extra("rd_flg"), "Rflg", "rd_flg"),
    FieldSpec::text(Q::Extra("bl_flg"), "Bflg", "bl_flg"),
    FieldSpec::text(Q::Extra("cc_flg"), "Cflg", "cc_flg"),
];

const PHOTOMETRY: &[BandSpec] = &[
    BandSpec::new(Band::TwoMassJ),
    BandSpec::new(Band::TwoMassH),
    BandSpec::new(Band::TwoMassKs),
];

const COLORS: &[ColorSpec] = &[
    ColorSpec::new(Band::TwoMassJ, Band::TwoMassH),
    ColorSpec::new(Band::TwoMassH, Band::TwoMassKs),
    ColorSpec::new(Band::TwoMassJ, Band::TwoMassKs),
];

const COLUMNS: &[ColumnSpec] = &[
    TARGET_DISTANCE,
    SOURCE_ID,
    RA,
    DEC,
    RA_ERR,
    DEC_ERR,
    ColumnSpec::field("J", Q::Mag(Band::TwoMassJ), MAG),
    ColumnSpec::field("J err", Q::MagErr(Band::TwoMassJ), MAG),
    ColumnSpec::field("H", Q::Mag(Band::TwoMassH), MAG),
    ColumnSpec::field("H err", Q::MagErr(Band::TwoMassH), MAG),
    ColumnSpec::field("K", Q::Mag(Band::TwoMassKs), MAG),
    ColumnSpec::field("K err", Q::MagErr(Band::TwoMassKs), MAG),
    ColumnSpec::field("ph qual", Q::Extra("ph_qual"), TEXT).tip("Photometric quality (JHK)"),
    ColumnSpec::field("rd flag", Q::Extra("rd_flg"), TEXT).tip("Read flag"),
    ColumnSpec::field("bl flag", Q::Extra("bl_flg"), TEXT).tip("Blend flag"),
    ColumnSpec::field("cc flag", Q::Extra("cc_flg"), TEXT).tip("Contamination and confusion flag"),
    ColumnSpec::new("J-H", ColumnSource::Color(Band::TwoMassJ, Band::TwoMassH), MAG),
    ColumnSpec::new("H-K", ColumnSource::Color(Band::TwoMassH, Band::TwoMassKs), MAG),
    ColumnSpec::new("J-K", ColumnSource::Color(Band::TwoMassJ, Band::TwoMassKs), MAG),
];

pub(super) static SCHEMA: SurveySchema = SurveySchema {
    survey: Survey::TwoMass,
    name: "2MASS",
    id_kind: IdKind::Text,
    capabilities: Capabilities::EXTINCTION,
    fields: FIELDS,
    photometry: PHOTOMETRY,
    colors: COLORS,
    columns: COLUMNS,
    vizier: Some(QueryPlan::new(TapService::Vizier, "II/246/out")),
    native: Some(QueryPlan::new(TapService::Irsa, "fp_psc")),
};
