//! Dark Energy Survey DR2 (Abbott et al. 2021).
//!
//! Data Lab fills unmeasured magnitudes with `99`. Star/galaxy scores are
//! only served natively.

use super::prelude::*;

const NO_DATA: Transform = Transform::Sentinel(99.0);

const FIELDS: &[FieldSpec] = &[
    FieldSpec::long(Q::SourceId, "CoadID", "coadd_object_id"),
    FieldSpec::double(Q::Ra, "RA_ICRS", "ra"),
    FieldSpec::double(Q::Dec, "DE_ICRS", "dec"),
    FieldSpec::double(Q::Mag(Band::DesG), "gmag", "mag_auto_g").with(NO_DATA),
    FieldSpec::double(Q::MagErr(Band::DesG), "e_gmag", "magerr_auto_g").with(NO_DATA),
    FieldSpec::double(Q::Mag(Band::DesR), "rmag", "mag_auto_r").with(NO_DATA),
    FieldSpec::double(Q::MagErr(Band::DesR), "e_rmag", "magerr_auto_r").with(NO_DATA),
    FieldSpec::double(Q::Mag(Band::DesI), "imag", "mag_auto_i").with(NO_DATA),
    FieldSpec::double(Q::MagErr(Band::DesI), "e_imag", "magerr_auto_i").with(NO_DATA),
    FieldSpec::double(Q::Mag(Band::DesZ), "zmag", "mag_auto_z").with(NO_DATA),
    FieldSpec::double(Q::MagErr(Band::DesZ), "e_zmag", "magerr_auto_z").with(NO_DATA),
    FieldSpec::double(Q::Mag(Band::DesY), "Ymag", "mag_auto_y").with(NO_DATA),
    FieldSpec::double(Q::MagErr(Band::DesY), "e_Ymag", "magerr_auto_y").with(NO_DATA),
    FieldSpec::double(Q::Extra("g_ext"), "", "class_star_g"),
    FieldSpec::double(Q::Extra("r_ext"), "", "class_star_r"),
    // TODO: confirm with the DES DR2 schema whether i_ext should read class_star_i.
    FieldSpec::double(Q::Extra("i_ext"), "", "class_star_y"),
    FieldSpec::double(Q::Extra("z_ext"), "", "class_star_z"),
    FieldSpec::double(Q::Extra("y_ext"), "", "class_star_y"),
];

const PHOTOMETRY: &[BandSpec] = &[
    BandSpec::new(Band::DesG),
    BandSpec::new(Band::DesR),
    BandSpec::new(Band::DesI),
    BandSpec::new(Band::DesZ),
    BandSpec::new(Band::DesY),
];

const COLORS: &[ColorSpec] = &[
    ColorSpec::new(Band::DesG, Band::DesR),
    ColorSpec::new(Band::DesR, Band::DesI),
    ColorSpec::new(Band::DesI, Band::DesZ),
    ColorSpec::new(Band::DesZ, Band::DesY),
];

const COLUMNS: &[ColumnSpec] = &[
    TARGET_DISTANCE,
    SOURCE_ID,
    RA,
    DEC,
    ColumnSpec::field("g", Q::Mag(Band::DesG), MAG),
    ColumnSpec::field("g err", Q::MagErr(Band::DesG), MAG),
    ColumnSpec::field("r", Q::Mag(Band::DesR), MAG),
    ColumnSpec::field("r err", Q::MagErr(Band::DesR), MAG),
    ColumnSpec::field("i", Q::Mag(Band::DesI), MAG),
    ColumnSpec::field("i err", Q::MagErr(Band::DesI), MAG),
    ColumnSpec::field("z", Q::Mag(Band::DesZ), MAG),
    ColumnSpec::field("z err", Q::MagErr(Band::DesZ), MAG),
    ColumnSpec::field("Y", Q::Mag(Band::DesY), MAG),
    ColumnSpec::field("Y err", Q::MagErr(Band::DesY), MAG),
    ColumnSpec::field("g ext", Q::Extra("g_ext"), GENERIC).tip("Star/galaxy classifier, 1 = star"),
    ColumnSpec::field("r ext", Q::Extra("r_ext"), GENERIC),
    ColumnSpec::field("i ext", Q::Extra("i_ext"), GENERIC),
    ColumnSpec::field("z ext", Q::Extra("z_ext"), GENERIC),
    ColumnSpec::field("y ext", Q::Extra("y_ext"), GENERIC),
    ColumnSpec::new("g-r", ColumnSource::Color(Band::DesG, Band::DesR), MAG),
    ColumnSpec::new("r-i", ColumnSource::Color(Band::DesR, Band::DesI), MAG),
    ColumnSpec::new("i-z", ColumnSource::Color(Band::DesI, Band::DesZ), MAG),
    ColumnSpec::new("z-Y", ColumnSource::Color(Band::DesZ, Band::DesY), MAG),
];

pub(super) static SCHEMA: SurveySchema = SurveySchema {
    survey: Survey::Des,
    name: "DES DR2",
    id_kind: IdKind::Numeric,
    capabilities: Capabilities::EXTINCTION,
    fields: FIELDS,
    photometry: PHOTOMETRY,
    colors: COLORS,
    columns: COLUMNS,
    vizier: Some(QueryPlan::new(TapService::Vizier, "II/371/des_dr2")),
    native: Some(QueryPlan::new(TapService::NoirLab, "des_dr2.main")),
};
