//! AllWISE source catalog (Cutri et al. 2013).

use super::prelude::*;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text(Q::SourceId, "AllWISE", "designation"),
    FieldSpec::double(Q::Ra, "RAJ2000", "ra"),
    FieldSpec::double(Q::Dec, "DEJ2000", "dec"),
    FieldSpec::double(Q::RaErr, "eeMaj", "sigra"),
    FieldSpec::double(Q::DecErr, "eeMin", "sigdec"),
    FieldSpec::double(Q::Mag(Band::WiseW1), "W1mag", "w1mpro"),
    FieldSpec::double(Q::MagErr(Band::WiseW1), "e_W1mag", "w1sigmpro"),
    FieldSpec::double(Q::Mag(Band::WiseW2), "W2mag", "w2mpro"),
    FieldSpec::double(Q::MagErr(Band::WiseW2), "e_W2mag", "w2sigmpro"),
    FieldSpec::double(Q::Mag(Band::WiseW3), "W3mag", "w3mpro"),
    FieldSpec::double(Q::MagErr(Band::WiseW3), "e_W3mag", "w3sigmpro"),
    FieldSpec::double(Q::Mag(Band::WiseW4), "W4mag", "w4mpro"),
    FieldSpec::double(Q::MagErr(Band::WiseW4), "e_W4mag", "w4sigmpro"),
    FieldSpec::double(Q::Mag(Band::TwoMassJ), "Jmag", "j_m_2mass"),
    FieldSpec::double(Q::MagErr(Band::TwoMassJ), "e_Jmag", "j_msig_2mass"),
    FieldSpec::double(Q::Mag(Band::TwoMassH), "Hmag", "h_m_2mass"),
    FieldSpec::double(Q::MagErr(Band::TwoMassH), "e_Hmag", "h_msig_2mass"),
    FieldSpec::double(Q::Mag(Band::TwoMassKs), "Kmag", "k_m_2mass"),
    FieldSpec::double(Q::MagErr(Band::TwoMassKs), "e_Kmag", "k_msig_2mass"),
    FieldSpec::double(Q::Pmra, "pmRA", "pmra"),
    FieldSpec::double(Q::PmraErr, "e_pmRA", "sigpmra"),
    FieldSpec::double(Q::Pmdec, "pmDE", "pmdec"),
    FieldSpec::double(Q::PmdecErr, "e_pmDE", "sigpmdec"),
    FieldSpec::text(Q::Extra("cc_flags"), "ccf", "cc_flags"),
    FieldSpec::integer(Q::Extra("ext_flg"), "ex", "ext_flg"),
    FieldSpec::text(Q::Extra("ph_qual"), "qph", "ph_qual"),
];

const PHOTOMETRY: &[BandSpec] = &[
    BandSpec::with_error(Band::WiseW1),
    BandSpec::with_error(Band::WiseW2),
    BandSpec::with_error(Band::WiseW3),
    BandSpec::with_error(Band::WiseW4),
    BandSpec::new(Band::TwoMassJ),
    BandSpec::new(Band::TwoMassH),
    BandSpec::new(Band::TwoMassKs),
];

const COLORS: &[ColorSpec] = &[
    ColorSpec::new(Band::WiseW1, Band::WiseW2),
    ColorSpec::new(Band::WiseW2, Band::WiseW3),
    ColorSpec::new(Band::WiseW3, Band::WiseW4),
    ColorSpec::new(Band::TwoMassJ, Band::TwoMassH),
    ColorSpec::new(Band::TwoMassH, Band::TwoMassKs),
    ColorSpec::new(Band::TwoMassKs, Band::WiseW1),
];

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
    ColumnSpec::field("W3", Q::Mag(Band::WiseW3), MAG),
    ColumnSpec::field("W3 err", Q::MagErr(Band::WiseW3), MAG),
    ColumnSpec::field("W4", Q::Mag(Band::WiseW4), MAG),
    ColumnSpec::field("W4 err", Q::MagErr(Band::WiseW4), MAG),
    ColumnSpec::field("J", Q::Mag(Band::TwoMassJ), MAG),
    ColumnSpec::field("J err", Q::MagErr(Band::TwoMassJ), MAG),
    ColumnSpec::field("H", Q::Mag(Band::TwoMassH), MAG),
    ColumnSpec::field("H err", Q::MagErr(Band::TwoMassH), MAG),
    ColumnSpec::field("K", Q::Mag(Band::TwoMassKs), MAG),
    ColumnSpec::field("K err", Q::MagErr(Band::TwoMassKs), MAG),
    PMRA,
    PMRA_ERR,
    PMDEC,
    PMDEC_ERR,
    TOTAL_PM,
    ColumnSpec::field("cc flags", Q::Extra("cc_flags"), TEXT)
        .tip("Contamination and confusion flags (D,P,H,O per band)"),
    ColumnSpec::field("ext flag", Q::Extra("ext_flg"), INTEGER).tip("Extended source flag"),
    ColumnSpec::field("ph qual", Q::Extra("ph_qual"), TEXT).tip("Photometric quality per band"),
    ColumnSpec::new("W1-W2", ColumnSource::Color(Band::WiseW1, Band::WiseW2), MAG),
    ColumnSpec::new("W2-W3", ColumnSource::Color(Band::WiseW2, Band::WiseW3), MAG),
    ColumnSpec::new("W3-W4", ColumnSource::Color(Band::WiseW3, Band::WiseW4), MAG),
];

pub(super) static SCHEMA: SurveySchema = SurveySchema {
    survey: Survey::AllWise,
    name: "AllWISE",
    id_kind: IdKind::Text,
    capabilities: Capabilities::EXTINCTION.union(Capabilities::PROPER_MOTION),
    fields: FIELDS,
    photometry: PHOTOMETRY,
    colors: COLORS,
    columns: COLUMNS,
    vizier: Some(QueryPlan::new(TapService::Vizier, "II/328/allwise")),
    native: Some(QueryPlan::new(TapService::Irsa, "allwise_p3as_psd")),
};
