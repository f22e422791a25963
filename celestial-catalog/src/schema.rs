//! Declarative survey descriptors.
//!
//! A [`SurveySchema`] is static data describing one survey: which column
//! carries each logical [`Quantity`] under each query dialect, how raw values
//! are transformed (unit scaling, sentinel values, flux-to-magnitude errors),
//! which bands and colors the survey offers, which columns the flat export
//! shows, and where the survey can be queried.
//!
//! [`CatalogRecord`](crate::CatalogRecord) interprets a row through its schema,
//! so adding a survey means writing one more descriptor, not one more type.

use crate::band::Band;
use crate::dialect::{Dialect, QueryPlan};
use crate::surveys::Survey;
use crate::value::{IdKind, ValueKind};
use bitflags::bitflags;
use celestial_core::constants::MAG_ERROR_PER_FLUX_SNR;
use celestial_core::math::sanitize;
use celestial_core::rounding::DecimalFormat;

bitflags! {
    /// Optional behaviours a survey supports.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// Photometry can be dereddened with per-band extinction values.
        const EXTINCTION    = 1 << 0;
        /// Proper motions with errors, eligible for spurious-motion checks.
        const PROPER_MOTION = 1 << 1;
        /// Gaia G, BP and RP usable on white dwarf color diagrams.
        const WHITE_DWARF   = 1 << 2;
        /// Gaia BP−RP against M_G color-magnitude diagram.
        const GAIA_CMD      = 1 << 3;
    }
}

/// A logical quantity a survey row may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    SourceId,
    Ra,
    Dec,
    RaErr,
    DecErr,
    Parallax,
    ParallaxErr,
    Pmra,
    PmraErr,
    Pmdec,
    PmdecErr,
    RadialVelocity,
    RadialVelocityErr,
    Mag(Band),
    MagErr(Band),
    /// A survey-specific column with no shared meaning (flags, types, fits).
    Extra(&'static str),
}

/// Raw-value rewrite applied after parsing a numeric cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Identity,
    /// Multiply by a factor (unit change).
    Scale(f64),
    /// The given value means "not measured" and becomes `0.0`.
    Sentinel(f64),
    /// Cell holds a flux signal-to-noise ratio; store `2.5 / ln 10 / snr`.
    MagErrorFromFluxOverError,
}

impl Transform {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Identity => value,
            Self::Scale(factor) => sanitize(value * factor),
            Self::Sentinel(sentinel) if value == sentinel => 0.0,
            Self::Sentinel(_) => value,
            Self::MagErrorFromFluxOverError if value == 0.0 => 0.0,
            Self::MagErrorFromFluxOverError => sanitize(MAG_ERROR_PER_FLUX_SNR / value),
        }
    }
}

/// One logical field and its column name in each dialect.
///
/// An empty name means the dialect does not deliver the field; the record
/// then holds the sentinel for it. Each dialect carries its own transform,
/// since providers publish the same quantity in different units.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub quantity: Quantity,
    pub vizier: &'static str,
    pub native: &'static str,
    pub kind: ValueKind,
    pub vizier_transform: Transform,
    pub native_transform: Transform,
}

impl FieldSpec {
    pub const fn double(quantity: Quantity, vizier: &'static str, native: &'static str) -> Self {
        Self {
            quantity,
            vizier,
            native,
            kind: ValueKind::Double,
            vizier_transform: Transform::Identity,
            native_transform: Transform::Identity,
        }
    }

    pub const fn text(quantity: Quantity, vizier: &'static str, native: &'static str) -> Self {
        Self {
            kind: ValueKind::Text,
            ..Self::double(quantity, vizier, native)
        }
    }

    pub const fn long(quantity: Quantity, vizier: &'static str, native: &'static str) -> Self {
        Self {
            kind: ValueKind::Long,
            ..Self::double(quantity, vizier, native)
        }
    }

    pub const fn integer(quantity: Quantity, vizier: &'static str, native: &'static str) -> Self {
        Self {
            kind: ValueKind::Integer,
            ..Self::double(quantity, vizier, native)
        }
    }

    /// Applies `transform` under both dialects.
    pub const fn with(self, transform: Transform) -> Self {
        Self {
            vizier_transform: transform,
            native_transform: transform,
            ..self
        }
    }

    /// Applies `transform` to the native column only.
    pub const fn native_with(self, transform: Transform) -> Self {
        Self {
            native_transform: transform,
            ..self
        }
    }

    pub fn transform(&self, dialect: Dialect) -> Transform {
        match dialect {
            Dialect::VizierTap => self.vizier_transform,
            Dialect::Native => self.native_transform,
        }
    }

    /// Column name under `dialect`, `None` when the dialect lacks the field.
    pub fn column(&self, dialect: Dialect) -> Option<&'static str> {
        let name = match dialect {
            Dialect::VizierTap => self.vizier,
            Dialect::Native => self.native,
        };
        (!name.is_empty()).then_some(name)
    }
}

/// A band the survey publishes.
#[derive(Debug, Clone, Copy)]
pub struct BandSpec {
    pub band: Band,
    /// Only report the band when its error is non-zero as well.
    pub require_error: bool,
}

impl BandSpec {
    pub const fn new(band: Band) -> Self {
        Self {
            band,
            require_error: false,
        }
    }

    pub const fn with_error(band: Band) -> Self {
        Self {
            band,
            require_error: true,
        }
    }
}

/// A color index `blue − red`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpec {
    pub blue: Band,
    pub red: Band,
}

impl ColorSpec {
    pub const fn new(blue: Band, red: Band) -> Self {
        Self { blue, red }
    }
}

/// What an exported column shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnSource {
    Field(Quantity),
    TargetDistance,
    ParallacticDistance,
    TotalProperMotion,
    TangentialVelocity,
    TotalVelocity,
    Color(Band, Band),
    AbsoluteMagnitude(Band),
}

impl ColumnSource {
    /// Derived columns are computed from other fields rather than read.
    pub fn is_computed(&self) -> bool {
        !matches!(self, Self::Field(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnFormat {
    Text,
    Integer,
    Decimal(DecimalFormat),
}

/// One exported column: title, source, formatting policy and tooltip.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub title: &'static str,
    pub source: ColumnSource,
    pub format: ColumnFormat,
    pub tooltip: Option<&'static str>,
}

impl ColumnSpec {
    pub const fn new(title: &'static str, source: ColumnSource, format: ColumnFormat) -> Self {
        Self {
            title,
            source,
            format,
            tooltip: None,
        }
    }

    pub const fn field(title: &'static str, quantity: Quantity, format: ColumnFormat) -> Self {
        Self::new(title, ColumnSource::Field(quantity), format)
    }

    pub const fn tip(self, tooltip: &'static str) -> Self {
        Self {
            tooltip: Some(tooltip),
            ..self
        }
    }
}

/// Formats shared by most descriptors.
pub mod formats {
    use super::ColumnFormat;
    use celestial_core::rounding::DecimalFormat;

    pub const TEXT: ColumnFormat = ColumnFormat::Text;
    pub const INTEGER: ColumnFormat = ColumnFormat::Integer;
    /// Positions in degrees.
    pub const COORD: ColumnFormat = ColumnFormat::Decimal(DecimalFormat::Fixed(7));
    /// Position errors, parallaxes and proper motions.
    pub const ASTROMETRY: ColumnFormat = ColumnFormat::Decimal(DecimalFormat::TrimZeros(4));
    pub const MAG: ColumnFormat = ColumnFormat::Decimal(DecimalFormat::Fixed(3));
    pub const DISTANCE: ColumnFormat = ColumnFormat::Decimal(DecimalFormat::Fixed(3));
    pub const VELOCITY: ColumnFormat = ColumnFormat::Decimal(DecimalFormat::Fixed(2));
    pub const GENERIC: ColumnFormat = ColumnFormat::Decimal(DecimalFormat::TrimZeros(6));
}

/// Static description of one survey.
#[derive(Debug)]
pub struct SurveySchema {
    pub survey: Survey,
    /// Display name, also the key used for catalog selection.
    pub name: &'static str,
    pub id_kind: IdKind,
    pub capabilities: Capabilities,
    pub fields: &'static [FieldSpec],
    pub photometry: &'static [BandSpec],
    pub colors: &'static [ColorSpec],
    pub columns: &'static [ColumnSpec],
    pub vizier: Option<QueryPlan>,
    pub native: Option<QueryPlan>,
}

impl SurveySchema {
    pub fn column_titles(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.title).collect()
    }

    /// Result columns read under `dialect`, in field order, without repeats.
    pub fn column_names(&self, dialect: Dialect) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::with_capacity(self.fields.len());
        for name in self.fields.iter().filter_map(|f| f.column(dialect)) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    pub fn field_index(&self, quantity: Quantity) -> Option<usize> {
        self.fields.iter().position(|f| f.quantity == quantity)
    }

    pub fn has_error(&self, band: Band) -> bool {
        self.field_index(Quantity::MagErr(band)).is_some()
    }

    pub fn supports(&self, dialect: Dialect) -> bool {
        self.plan(dialect).is_some()
    }

    pub fn plan(&self, dialect: Dialect) -> Option<&QueryPlan> {
        match dialect {
            Dialect::VizierTap => self.vizier.as_ref(),
            Dialect::Native => self.native.as_ref(),
        }
    }

    /// `dialect` if the survey offers it, otherwise the dialect it does offer.
    pub fn resolve(&self, dialect: Dialect) -> Dialect {
        if self.supports(dialect) {
            dialect
        } else {
            dialect.other()
        }
    }

    pub fn is_capable(&self, capability: Capabilities) -> bool {
        self.capabilities.contains(capability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_scale() {
        assert_eq!(Transform::Scale(1000.0).apply(0.0125), 12.5);
        assert_eq!(Transform::Scale(1000.0).apply(0.0), 0.0);
    }

    #[test]
    fn test_transform_sentinel() {
        assert_eq!(Transform::Sentinel(-999.0).apply(-999.0), 0.0);
        assert_eq!(Transform::Sentinel(-999.0).apply(17.2), 17.2);
        assert_eq!(Transform::Sentinel(99.0).apply(99.0), 0.0);
    }

    #[test]
    fn test_transform_flux_over_error() {
        let err = Transform::MagErrorFromFluxOverError.apply(100.0);
        assert!((err - 0.010857362047581294).abs() < 1e-15);
        assert_eq!(Transform::MagErrorFromFluxOverError.apply(0.0), 0.0);
    }

    #[test]
    fn test_field_column_by_dialect() {
        let field = FieldSpec::double(Quantity::Ra, "RA_ICRS", "ra");
        assert_eq!(field.column(Dialect::VizierTap), Some("RA_ICRS"));
        assert_eq!(field.column(Dialect::Native), Some("ra"));

        let vizier_only = FieldSpec::double(Quantity::Extra("ccf"), "ccf", "");
        assert_eq!(vizier_only.column(Dialect::Native), None);
    }

    #[test]
    fn test_transform_by_dialect() {
        let both = FieldSpec::double(Quantity::PmraErr, "e_pmRA", "sigpmra")
            .with(Transform::Scale(2.0));
        assert_eq!(both.transform(Dialect::VizierTap), Transform::Scale(2.0));
        assert_eq!(both.transform(Dialect::Native), Transform::Scale(2.0));

        let native_only = FieldSpec::double(Quantity::MagErr(Band::GaiaG), "e_Gmag", "snr")
            .native_with(Transform::MagErrorFromFluxOverError);
        assert_eq!(native_only.transform(Dialect::VizierTap), Transform::Identity);
        assert_eq!(
            native_only.transform(Dialect::Native),
            Transform::MagErrorFromFluxOverError
        );
    }

    #[test]
    fn test_const_builders() {
        const F: FieldSpec = FieldSpec::double(Quantity::PmraErr, "e_pmRA", "sigpmra")
            .with(Transform::Scale(2.0));
        assert_eq!(F.native_transform, Transform::Scale(2.0));
        const C: ColumnSpec =
            ColumnSpec::field("pmra", Quantity::Pmra, formats::ASTROMETRY).tip("mas/yr");
        assert_eq!(C.tooltip, Some("mas/yr"));
        assert!(!C.source.is_computed());
        assert!(ColumnSource::TargetDistance.is_computed());
    }
}
