//! UKIRT Hemisphere Survey DR1 (Dye et al. 2018), J band only.

use super::prelude::*;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text(Q::SourceId, "UHS", ""),
    FieldSpec::double(Q::Ra, "RAJ2000", ""),
    FieldSpec::double(Q::Dec, "DEJ2000", ""),
    FieldSpec::double(Q::Mag(Band::UkirtJ), "Jmag", ""),
    FieldSpec::double(Q::MagErr(Band::UkirtJ), "e_Jmag", ""),
];

const COLUMNS: &[ColumnSpec] = &[
    TARGET_DISTANCE,
    SOURCE_ID,
    RA,
    DEC,
    ColumnSpec::field("J", Q::Mag(Band::UkirtJ), MAG),
    ColumnSpec::field("J err", Q::MagErr(Band::UkirtJ), MAG),
];

pub(super) static SCHEMA: SurveySchema = SurveySchema {
    survey: Survey::Uhs,
    name: "UHS",
    id_kind: IdKind::Text,
    capabilities: Capabilities::EXTINCTION,
    fields: FIELDS,
    photometry: &[BandSpec::new(Band::UkirtJ)],
    colors: &[],
    columns: COLUMNS,
    vizier: Some(QueryPlan::new(TapService::Vizier, "II/366/uhsdr1")),
    native: None,
};
