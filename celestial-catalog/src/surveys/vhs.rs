//! VISTA Hemisphere Survey DR5 (McMahon et al. 2013), 2 arcsec aperture
//! magnitudes.

use super::prelude::*;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::long(Q::SourceId, "srcID", ""),
    FieldSpec::double(Q::Ra, "RAJ2000", ""),
    FieldSpec::double(Q::Dec, "DEJ2000", ""),
    FieldSpec::double(Q::Mag(Band::VistaY), "Yap3", ""),
    FieldSpec::double(Q::MagErr(Band::VistaY), "e_Yap3", ""),
    FieldSpec::double(Q::Mag(Band::VistaJ), "Jap3", ""),
    FieldSpec::double(Q::MagErr(Band::VistaJ), "e_Jap3", ""),
    FieldSpec::double(Q::Mag(Band::VistaH), "Hap3", ""),
    FieldSpec::double(Q::MagErr(Band::VistaH), "e_Hap3", ""),
    FieldSpec::double(Q::Mag(Band::VistaKs), "Ksap3", ""),
    FieldSpec::double(Q::MagErr(Band::VistaKs), "e_Ksap3", ""),
];

const PHOTOMETRY: &[BandSpec] = &[
    BandSpec::new(Band::VistaY),
    BandSpec::new(Band::VistaJ),
    BandSpec::new(Band::VistaH),
    BandSpec::new(Band::VistaKs),
];

const COLORS: &[ColorSpec] = &[
    ColorSpec::new(Band::VistaY, Band::VistaJ),
    ColorSpec::new(Band::VistaJ, Band::VistaH),
    ColorSpec::new(Band::VistaH, Band::VistaKs),
    ColorSpec::new(Band::VistaJ, Band::VistaKs),
];

const COLUMNS: &[ColumnSpec] = &[
    TARGET_DISTANCE,
    SOURCE_ID,
    RA,
    DEC,
    ColumnSpec::field("Y", Q::Mag(Band::VistaY), MAG),
    ColumnSpec::field("Y err", Q::MagErr(Band::VistaY), MAG),
    ColumnSpec::field("J", Q::Mag(Band::VistaJ), MAG),
    ColumnSpec::field("J err", Q::MagErr(Band::VistaJ), MAG),
    ColumnSpec::field("H", Q::Mag(Band::VistaH), MAG),
    ColumnSpec::field("H err", Q::MagErr(Band::VistaH), MAG),
    ColumnSpec::field("K", Q::Mag(Band::VistaKs), MAG),
    ColumnSpec::field("K err", Q::MagErr(Band::VistaKs), MAG),
    ColumnSpec::new("Y-J", ColumnSource::Color(Band::VistaY, Band::VistaJ), MAG),
    ColumnSpec::new("J-H", ColumnSource::Color(Band::VistaJ, Band::VistaH), MAG),
    ColumnSpec::new("H-K", ColumnSource::Color(Band::VistaH, Band::VistaKs), MAG),
    ColumnSpec::new("J-K", ColumnSource::Color(Band::VistaJ, Band::VistaKs), MAG),
];

pub(super) static SCHEMA: SurveySchema = SurveySchema {
    survey: Survey::Vhs,
    name: "VHS",
    id_kind: IdKind::Numeric,
    capabilities: Capabilities::EXTINCTION,
    fields: FIELDS,
    photometry: PHOTOMETRY,
    colors: COLORS,
    columns: COLUMNS,
    vizier: Some(QueryPlan::new(TapService::Vizier, "II/367/vhs_dr5")),
    native: None,
};
