//! The generic catalog record.
//!
//! A [`CatalogRecord`] is one result row of one survey, interpreted through the
//! survey's [`SurveySchema`]. It keeps the raw row so it can be re-parsed by
//! [`CatalogRecord::copy`], exposes the normalized fields, and derives
//! distances, absolute magnitudes, velocities and colors on demand.
//!
//! # Sentinel rule
//!
//! `0.0` means "not measured" for every numeric field. Any derivation with a
//! missing input yields `0.0`, never NaN.
//!
//! # Mutability
//!
//! After construction only the target, pixel, search radius and (for surveys
//! with [`Capabilities::EXTINCTION`]) the magnitudes through
//! [`CatalogRecord::apply_extinction_correction`] change.
//!
//! ```
//! use celestial_catalog::{CatalogRecord, ColumnMap, Dialect, Survey};
//! use std::sync::Arc;
//!
//! let schema = Survey::TwoMass.schema();
//! let headers = schema.column_names(Dialect::VizierTap);
//! let columns = Arc::new(ColumnMap::from_headers(&headers));
//! let mut row = vec![String::new(); headers.len()];
//! row[0] = "00424433+4116075".into();
//! row[1] = "10.684708".into();
//! row[2] = "41.268750".into();
//!
//! let record = CatalogRecord::from_row(schema, Dialect::VizierTap, columns, row.into())?;
//! assert_eq!(record.catalog_name(), "2MASS");
//! assert_eq!(record.column_values().len(), record.column_titles().len());
//! # Ok::<(), celestial_core::SurveyError>(())
//! ```

use crate::band::{Band, ExtinctionBand};
use crate::color::{ColorBound, ColorKey, ColorSet};
use crate::columns::ColumnMap;
use crate::dialect::{build_query_url, Dialect};
use crate::element::{Alignment, CatalogElement, SortKind};
use crate::schema::{Capabilities, ColumnFormat, ColumnSource, Quantity, SurveySchema};
use crate::surveys::Survey;
use crate::value::{SourceId, Value, ValueKind};
use celestial_core::astrometry::{
    absolute_magnitude_from_parallax, absolute_magnitude_from_parallax_error, addition_error,
    angular_distance, is_proper_motion_faulty, is_proper_motion_spurious, parallactic_distance,
    tangential_velocity, total_proper_motion, total_velocity,
};
use celestial_core::constants::DEG_ARCSEC;
use celestial_core::math::sanitize;
use celestial_core::numeric::replace_nan_values_by_zero;
use celestial_core::{SkyPosition, SurveyError, SurveyResult};
use once_cell::sync::OnceCell;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A magnitude and its error, both `0.0` when absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Magnitude {
    pub value: f64,
    pub error: f64,
}

/// Image-space coordinates assigned by an image viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPosition {
    pub x: f64,
    pub y: f64,
}

/// A point on the Gaia BP−RP / M_G diagram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CmdPoint {
    pub bp_rp: f64,
    pub absolute_g: f64,
}

/// Gaia colors used for white dwarf classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhiteDwarfColors {
    pub g_rp: f64,
    pub bp_rp: f64,
    pub absolute_g: f64,
}

#[derive(Clone)]
pub struct CatalogRecord {
    schema: &'static SurveySchema,
    dialect: Dialect,
    columns: Arc<ColumnMap>,
    row: Arc<[String]>,
    source_id: SourceId,
    values: Vec<Value>,
    target: Option<SkyPosition>,
    pixel: Option<PixelPosition>,
    search_radius: f64,
    extinction_applied: u32,
    elements: OnceCell<Vec<CatalogElement>>,
}

impl CatalogRecord {
    /// Parses one result row.
    ///
    /// Reads the column names of `dialect` (or of the dialect the survey
    /// actually offers). A required column absent from `columns` fails with
    /// [`SurveyError::MissingColumn`]; a short row reads its missing cells as
    /// empty. The raw row is kept untouched for [`copy`](Self::copy).
    pub fn from_row(
        schema: &'static SurveySchema,
        dialect: Dialect,
        columns: Arc<ColumnMap>,
        row: Arc<[String]>,
    ) -> SurveyResult<Self> {
        let dialect = schema.resolve(dialect);
        let cleaned = replace_nan_values_by_zero(&row);

        let mut values = Vec::with_capacity(schema.fields.len());
        let mut source_id = None;
        for field in schema.fields {
            let cell = match field.column(dialect) {
                Some(name) => {
                    let index = columns
                        .index(name)
                        .ok_or_else(|| SurveyError::missing_column(schema.name, name))?;
                    cleaned.get(index).map_or("", String::as_str)
                }
                None => "",
            };
            if field.quantity == Quantity::SourceId {
                source_id = Some(SourceId::parse(schema.id_kind, cell));
            }
            let value = match Value::parse(field.kind, cell) {
                Value::Double(v) => Value::Double(field.transform(dialect).apply(v)),
                other => other,
            };
            values.push(value);
        }

        let source_id = source_id.ok_or_else(|| {
            SurveyError::missing_column(schema.name, "source identifier")
        })?;

        Ok(Self {
            schema,
            dialect,
            columns,
            row,
            source_id,
            values,
            target: None,
            pixel: None,
            search_radius: 0.0,
            extinction_applied: 0,
            elements: OnceCell::new(),
        })
    }

    /// A fresh record re-parsed from the retained raw row.
    ///
    /// Target, pixel, search radius and extinction correction are not carried
    /// over.
    pub fn copy(&self) -> SurveyResult<Self> {
        Self::from_row(
            self.schema,
            self.dialect,
            Arc::clone(&self.columns),
            Arc::clone(&self.row),
        )
    }

    pub fn schema(&self) -> &'static SurveySchema {
        self.schema
    }

    pub fn survey(&self) -> Survey {
        self.schema.survey
    }

    pub fn catalog_name(&self) -> &'static str {
        self.schema.name
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn source_id(&self) -> &SourceId {
        &self.source_id
    }

    pub fn raw_row(&self) -> &[String] {
        &self.row
    }

    pub fn value(&self, quantity: Quantity) -> Option<&Value> {
        self.schema.field_index(quantity).map(|i| &self.values[i])
    }

    /// A survey-specific extra field by name.
    pub fn extra(&self, name: &'static str) -> Option<&Value> {
        self.value(Quantity::Extra(name))
    }

    /// Numeric value of `quantity`, the sentinel when the survey lacks it.
    pub fn number(&self, quantity: Quantity) -> f64 {
        self.value(quantity).map_or(0.0, Value::as_f64)
    }

    pub fn ra(&self) -> f64 {
        self.number(Quantity::Ra)
    }

    pub fn dec(&self) -> f64 {
        self.number(Quantity::Dec)
    }

    pub fn position(&self) -> SkyPosition {
        SkyPosition::new(self.ra(), self.dec())
    }

    /// Position error in RA, arcsec.
    pub fn ra_err(&self) -> f64 {
        self.number(Quantity::RaErr)
    }

    /// Position error in Dec, arcsec.
    pub fn dec_err(&self) -> f64 {
        self.number(Quantity::DecErr)
    }

    pub fn parallax(&self) -> f64 {
        self.number(Quantity::Parallax)
    }

    pub fn parallax_err(&self) -> f64 {
        self.number(Quantity::ParallaxErr)
    }

    pub fn pmra(&self) -> f64 {
        self.number(Quantity::Pmra)
    }

    pub fn pmra_err(&self) -> f64 {
        self.number(Quantity::PmraErr)
    }

    pub fn pmdec(&self) -> f64 {
        self.number(Quantity::Pmdec)
    }

    pub fn pmdec_err(&self) -> f64 {
        self.number(Quantity::PmdecErr)
    }

    pub fn radial_velocity(&self) -> f64 {
        self.number(Quantity::RadialVelocity)
    }

    pub fn radial_velocity_err(&self) -> f64 {
        self.number(Quantity::RadialVelocityErr)
    }

    pub fn magnitude(&self, band: Band) -> f64 {
        self.number(Quantity::Mag(band))
    }

    pub fn magnitude_error(&self, band: Band) -> f64 {
        self.number(Quantity::MagErr(band))
    }

    pub fn target(&self) -> Option<SkyPosition> {
        self.target
    }

    pub fn set_target(&mut self, target: SkyPosition) {
        self.target = Some(target);
    }

    pub fn pixel(&self) -> Option<PixelPosition> {
        self.pixel
    }

    pub fn set_pixel(&mut self, pixel: PixelPosition) {
        self.pixel = Some(pixel);
    }

    /// Search radius in arcsec used for [`requery_url`](Self::requery_url).
    pub fn search_radius(&self) -> f64 {
        self.search_radius
    }

    pub fn set_search_radius(&mut self, radius_arcsec: f64) {
        self.search_radius = radius_arcsec;
    }

    /// Distance to the target in arcsec, `0.0` before a target is attached.
    pub fn target_distance(&self) -> f64 {
        self.target
            .map_or(0.0, |t| angular_distance(t, self.position(), DEG_ARCSEC))
    }

    pub fn parallactic_distance(&self) -> f64 {
        parallactic_distance(self.parallax())
    }

    pub fn total_proper_motion(&self) -> f64 {
        total_proper_motion(self.pmra(), self.pmdec())
    }

    pub fn tangential_velocity(&self) -> f64 {
        tangential_velocity(self.pmra(), self.pmdec(), self.parallax())
    }

    pub fn total_velocity(&self) -> f64 {
        total_velocity(self.radial_velocity(), self.tangential_velocity())
    }

    /// Bands with a measurement, honoring each band's error requirement.
    pub fn bands(&self) -> BTreeMap<Band, Magnitude> {
        self.schema
            .photometry
            .iter()
            .filter_map(|spec| {
                let value = self.magnitude(spec.band);
                let error = self.magnitude_error(spec.band);
                let present = value != 0.0 && (!spec.require_error || error != 0.0);
                present.then_some((spec.band, Magnitude { value, error }))
            })
            .collect()
    }

    /// Every color the survey declares, plus `(min)`/`(max)` brackets for
    /// colors whose two bands both carry errors.
    ///
    /// Magnitudes are shifted to Vega only when `to_vega` is set. A color
    /// with a missing operand is `0.0`, and so are its brackets.
    pub fn colors(&self, to_vega: bool) -> ColorSet {
        let mut set = ColorSet::default();
        for spec in self.schema.colors {
            let (blue, red) = (spec.blue, spec.red);
            let (mut m_blue, mut m_red) = (self.magnitude(blue), self.magnitude(red));
            if to_vega {
                m_blue = blue.to_vega(m_blue);
                m_red = red.to_vega(m_red);
            }
            let color = if m_blue == 0.0 || m_red == 0.0 {
                0.0
            } else {
                sanitize(m_blue - m_red)
            };

            let key = ColorKey::nominal(blue, red);
            set.push(key, color);

            if self.schema.has_error(blue) && self.schema.has_error(red) {
                let error = addition_error(self.magnitude_error(blue), self.magnitude_error(red));
                let (low, high) = if color == 0.0 {
                    (0.0, 0.0)
                } else {
                    (sanitize(color - error), sanitize(color + error))
                };
                set.push(key.with_bound(ColorBound::MinusError), low);
                set.push(key.with_bound(ColorBound::PlusError), high);
            }
        }
        set
    }

    pub fn absolute_magnitude(&self, band: Band) -> f64 {
        absolute_magnitude_from_parallax(self.magnitude(band), self.parallax())
    }

    pub fn absolute_magnitude_error(&self, band: Band) -> f64 {
        absolute_magnitude_from_parallax_error(
            self.magnitude(band),
            self.magnitude_error(band),
            self.parallax(),
            self.parallax_err(),
        )
    }

    /// Absolute magnitudes of every present band; empty without a parallax.
    pub fn absolute_magnitudes(&self) -> BTreeMap<Band, Magnitude> {
        self.bands()
            .into_keys()
            .filter_map(|band| {
                let value = self.absolute_magnitude(band);
                (value != 0.0).then(|| {
                    (
                        band,
                        Magnitude {
                            value,
                            error: self.absolute_magnitude_error(band),
                        },
                    )
                })
            })
            .collect()
    }

    /// Subtracts per-band extinction from every measured magnitude.
    ///
    /// Bands without a matching entry in `extinction` and sentinel magnitudes
    /// are left alone. Not idempotent: each call subtracts again. A previously
    /// loaded element projection is discarded.
    pub fn apply_extinction_correction(
        &mut self,
        extinction: &HashMap<ExtinctionBand, f64>,
    ) -> SurveyResult<()> {
        if !self.schema.is_capable(Capabilities::EXTINCTION) {
            return Err(SurveyError::extinction_unsupported(self.schema.name));
        }
        for spec in self.schema.photometry {
            let Some(amount) = spec
                .band
                .extinction_band()
                .and_then(|eb| extinction.get(&eb).copied())
            else {
                continue;
            };
            let Some(index) = self.schema.field_index(Quantity::Mag(spec.band)) else {
                continue;
            };
            if let Value::Double(mag) = &mut self.values[index] {
                if *mag != 0.0 {
                    *mag = sanitize(*mag - amount);
                }
            }
        }
        self.extinction_applied += 1;
        self.elements = OnceCell::new();
        Ok(())
    }

    /// Number of times extinction correction has been applied.
    pub fn extinction_applied(&self) -> u32 {
        self.extinction_applied
    }

    pub fn column_titles(&self) -> Vec<&'static str> {
        self.schema.column_titles()
    }

    pub fn column_values(&self) -> Vec<String> {
        self.schema
            .columns
            .iter()
            .map(|column| self.format_column(column.source, column.format))
            .collect()
    }

    /// Builds the element projection on first call and returns it.
    pub fn load_elements(&self) -> &[CatalogElement] {
        self.elements.get_or_init(|| self.build_elements())
    }

    /// The loaded projection, empty until [`load_elements`](Self::load_elements).
    pub fn elements(&self) -> &[CatalogElement] {
        self.elements.get().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn elements_loaded(&self) -> bool {
        self.elements.get().is_some()
    }

    /// Query URL for a cone around `(ra, dec)` in this record's dialect.
    pub fn query_url(&self, ra: f64, dec: f64, radius_arcsec: f64) -> SurveyResult<String> {
        build_query_url(self.schema, self.dialect, ra, dec, radius_arcsec)
    }

    /// Query URL around this record's own position with its search radius.
    pub fn requery_url(&self) -> SurveyResult<String> {
        self.query_url(self.ra(), self.dec(), self.search_radius)
    }

    pub fn gaia_cmd_point(&self) -> Option<CmdPoint> {
        if !self.schema.is_capable(Capabilities::GAIA_CMD) {
            return None;
        }
        Some(CmdPoint {
            bp_rp: self.difference(Band::GaiaBp, Band::GaiaRp),
            absolute_g: self.absolute_magnitude(Band::GaiaG),
        })
    }

    pub fn white_dwarf_colors(&self) -> Option<WhiteDwarfColors> {
        if !self.schema.is_capable(Capabilities::WHITE_DWARF) {
            return None;
        }
        Some(WhiteDwarfColors {
            g_rp: self.difference(Band::GaiaG, Band::GaiaRp),
            bp_rp: self.difference(Band::GaiaBp, Band::GaiaRp),
            absolute_g: self.absolute_magnitude(Band::GaiaG),
        })
    }

    /// `true` when either proper-motion component has S/N below 3.
    pub fn has_spurious_proper_motion(&self) -> bool {
        self.schema.is_capable(Capabilities::PROPER_MOTION)
            && (is_proper_motion_spurious(self.pmra(), self.pmra_err())
                || is_proper_motion_spurious(self.pmdec(), self.pmdec_err()))
    }

    fn difference(&self, blue: Band, red: Band) -> f64 {
        let (a, b) = (self.magnitude(blue), self.magnitude(red));
        if a == 0.0 || b == 0.0 {
            0.0
        } else {
            sanitize(a - b)
        }
    }

    fn source_number(&self, source: ColumnSource) -> f64 {
        match source {
            ColumnSource::Field(quantity) => self.number(quantity),
            ColumnSource::TargetDistance => self.target_distance(),
            ColumnSource::ParallacticDistance => self.parallactic_distance(),
            ColumnSource::TotalProperMotion => self.total_proper_motion(),
            ColumnSource::TangentialVelocity => self.tangential_velocity(),
            ColumnSource::TotalVelocity => self.total_velocity(),
            ColumnSource::Color(blue, red) => self.difference(blue, red),
            ColumnSource::AbsoluteMagnitude(band) => self.absolute_magnitude(band),
        }
    }

    fn format_column(&self, source: ColumnSource, format: ColumnFormat) -> String {
        if source == ColumnSource::Field(Quantity::SourceId) {
            return self.source_id.to_string();
        }
        match format {
            ColumnFormat::Text => match source {
                ColumnSource::Field(quantity) => self
                    .value(quantity)
                    .map(ToString::to_string)
                    .unwrap_or_default(),
                derived => self.source_number(derived).to_string(),
            },
            ColumnFormat::Integer => format!("{}", self.source_number(source).round() as i64),
            ColumnFormat::Decimal(policy) => policy.apply(self.source_number(source)),
        }
    }

    fn is_faulty(&self, source: ColumnSource) -> bool {
        match source {
            ColumnSource::Field(Quantity::Pmra) => {
                is_proper_motion_faulty(self.pmra(), self.pmra_err())
            }
            ColumnSource::Field(Quantity::Pmdec) => {
                is_proper_motion_faulty(self.pmdec(), self.pmdec_err())
            }
            ColumnSource::TotalProperMotion | ColumnSource::TangentialVelocity => {
                is_proper_motion_faulty(self.pmra(), self.pmra_err())
                    || is_proper_motion_faulty(self.pmdec(), self.pmdec_err())
            }
            _ => false,
        }
    }

    fn build_elements(&self) -> Vec<CatalogElement> {
        self.schema
            .columns
            .iter()
            .map(|column| {
                let is_text = match column.format {
                    ColumnFormat::Text => true,
                    _ => matches!(
                        column.source,
                        ColumnSource::Field(q) if self.field_kind(q) == Some(ValueKind::Text)
                    ),
                };
                CatalogElement {
                    name: column.title.to_string(),
                    value: self.format_column(column.source, column.format),
                    alignment: if is_text { Alignment::Left } else { Alignment::Right },
                    sort: if is_text { SortKind::Text } else { SortKind::Numeric },
                    tooltip: column.tooltip.map(str::to_string),
                    computed: column.source.is_computed(),
                    faulty: self.is_faulty(column.source),
                }
            })
            .collect()
    }

    fn field_kind(&self, quantity: Quantity) -> Option<ValueKind> {
        self.schema
            .field_index(quantity)
            .map(|i| self.schema.fields[i].kind)
    }
}

impl PartialEq for CatalogRecord {
    fn eq(&self, other: &Self) -> bool {
        self.schema.survey == other.schema.survey && self.source_id == other.source_id
    }
}

impl Eq for CatalogRecord {}

impl Hash for CatalogRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source_id.hash(state);
    }
}

impl fmt::Debug for CatalogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogRecord")
            .field("catalog", &self.schema.name)
            .field("dialect", &self.dialect)
            .field("source_id", &self.source_id)
            .field("ra", &self.ra())
            .field("dec", &self.dec())
            .field("target", &self.target)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn record(survey: Survey, dialect: Dialect, cells: &[(&str, &str)]) -> CatalogRecord {
        let schema = survey.schema();
        let headers = schema.column_names(dialect);
        let mut row = vec![String::new(); headers.len()];
        for (name, value) in cells {
            let index = headers.iter().position(|h| h == name).unwrap();
            row[index] = value.to_string();
        }
        let columns = Arc::new(ColumnMap::from_headers(&headers));
        CatalogRecord::from_row(schema, dialect, columns, row.into()).unwrap()
    }

    fn hash_of(record: &CatalogRecord) -> u64 {
        let mut hasher = DefaultHasher::new();
        record.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_dialects_read_different_columns() {
        let vizier = record(
            Survey::GaiaDr3,
            Dialect::VizierTap,
            &[("Source", "42"), ("RA_ICRS", "10.5"), ("DE_ICRS", "-3.25"), ("Plx", "10")],
        );
        let native = record(
            Survey::GaiaDr3,
            Dialect::Native,
            &[("source_id", "42"), ("ra", "10.5"), ("dec", "-3.25"), ("parallax", "10")],
        );
        assert_eq!(vizier.position(), native.position());
        assert_eq!(vizier.parallactic_distance(), 100.0);
        assert_eq!(vizier, native);
    }

    #[test]
    fn test_missing_column_is_reported() {
        let schema = Survey::AllWise.schema();
        let columns = Arc::new(ColumnMap::from_headers(&["AllWISE", "RAJ2000"]));
        let row: Arc<[String]> = vec!["J1".to_string(), "1.0".to_string()].into();
        let err = CatalogRecord::from_row(schema, Dialect::VizierTap, columns, row).unwrap_err();
        match err {
            SurveyError::MissingColumn { catalog, column } => {
                assert_eq!(catalog, "AllWISE");
                assert_eq!(column, "DEJ2000");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_nan_cells_and_short_rows_read_as_sentinel() {
        let schema = Survey::TwoMass.schema();
        let headers = schema.column_names(Dialect::VizierTap);
        let columns = Arc::new(ColumnMap::from_headers(&headers));
        let row: Arc<[String]> =
            vec!["J0".to_string(), "1.0".to_string(), "NaN".to_string()].into();
        let rec = CatalogRecord::from_row(schema, Dialect::VizierTap, columns, row).unwrap();
        assert_eq!(rec.dec(), 0.0);
        assert_eq!(rec.magnitude(Band::TwoMassJ), 0.0);
        assert_eq!(rec.raw_row()[2], "NaN");
    }

    #[test]
    fn test_equality_and_hash_ignore_other_fields() {
        let cells_a = [("AllWISE", "J1"), ("RAJ2000", "1")];
        let cells_b = [("AllWISE", "J1"), ("RAJ2000", "2")];
        let mut a = record(Survey::AllWise, Dialect::VizierTap, &cells_a);
        let b = record(Survey::AllWise, Dialect::VizierTap, &cells_b);
        a.set_target(SkyPosition::new(5.0, 5.0));
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let c = record(Survey::AllWise, Dialect::VizierTap, &[("AllWISE", "J2")]);
        assert_ne!(a, c);
    }

    #[test]
    fn test_colors_with_sentinel_operand() {
        let rec = record(
            Survey::TwoMass,
            Dialect::VizierTap,
            &[("2MASS", "x"), ("Jmag", "12.0"), ("e_Jmag", "0.02"), ("Kmag", "0")],
        );
        let colors = rec.colors(false);
        assert_eq!(colors.nominal(Band::TwoMassJ, Band::TwoMassKs), Some(0.0));
        assert_eq!(colors.bounds(Band::TwoMassJ, Band::TwoMassKs), Some((0.0, 0.0)));
    }

    #[test]
    fn test_colors_with_error_bounds() {
        let rec = record(
            Survey::TwoMass,
            Dialect::VizierTap,
            &[
                ("2MASS", "x"),
                ("Jmag", "12.0"),
                ("e_Jmag", "0.03"),
                ("Kmag", "11.0"),
                ("e_Kmag", "0.04"),
            ],
        );
        let (low, high) = rec.colors(false).bounds(Band::TwoMassJ, Band::TwoMassKs).unwrap();
        assert!((low - 0.95).abs() < 1e-12);
        assert!((high - 1.05).abs() < 1e-12);
    }

    #[test]
    fn test_vega_shift_only_on_request() {
        let rec = record(
            Survey::Sdss,
            Dialect::VizierTap,
            &[("objID", "1"), ("gmag", "18.0"), ("rmag", "17.5")],
        );
        let ab = rec.colors(false).nominal(Band::SdssG, Band::SdssR).unwrap();
        let vega = rec.colors(true).nominal(Band::SdssG, Band::SdssR).unwrap();
        assert!((ab - 0.5).abs() < 1e-12);
        assert!((vega - (0.5 - (-0.08) + 0.16)).abs() < 1e-12);
    }

    #[test]
    fn test_extinction_correction() {
        let mut rec = record(
            Survey::Sdss,
            Dialect::VizierTap,
            &[("objID", "1"), ("gmag", "18.5"), ("rmag", "0")],
        );
        let extinction =
            HashMap::from([(ExtinctionBand::SdssG, 0.2), (ExtinctionBand::SdssR, 0.1)]);
        rec.apply_extinction_correction(&extinction).unwrap();
        assert!((rec.magnitude(Band::SdssG) - 18.3).abs() < 1e-12);
        assert_eq!(rec.magnitude(Band::SdssR), 0.0);

        rec.apply_extinction_correction(&extinction).unwrap();
        assert!((rec.magnitude(Band::SdssG) - 18.1).abs() < 1e-12);
        assert_eq!(rec.extinction_applied(), 2);
    }

    #[test]
    fn test_extinction_unsupported() {
        let mut rec = record(Survey::GaiaDr3, Dialect::Native, &[("source_id", "1")]);
        let err = rec.apply_extinction_correction(&HashMap::new()).unwrap_err();
        assert!(matches!(err, SurveyError::ExtinctionUnsupported { .. }));
    }

    #[test]
    fn test_extinction_refreshes_elements() {
        let mut rec = record(
            Survey::Sdss,
            Dialect::VizierTap,
            &[("objID", "1"), ("gmag", "18.5")],
        );
        rec.load_elements();
        assert!(rec.elements_loaded());
        rec.apply_extinction_correction(&HashMap::from([(ExtinctionBand::SdssG, 0.2)]))
            .unwrap();
        assert!(!rec.elements_loaded());
        let g = rec
            .load_elements()
            .iter()
            .find(|e| e.name == "g")
            .unwrap()
            .value
            .clone();
        assert_eq!(g, "18.300");
    }

    #[test]
    fn test_copy_reparses_raw_row() {
        let mut rec = record(
            Survey::Sdss,
            Dialect::VizierTap,
            &[("objID", "7"), ("gmag", "18.5")],
        );
        rec.set_target(SkyPosition::new(1.0, 1.0));
        rec.apply_extinction_correction(&HashMap::from([(ExtinctionBand::SdssG, 0.5)]))
            .unwrap();
        let fresh = rec.copy().unwrap();
        assert_eq!(fresh, rec);
        assert_eq!(fresh.magnitude(Band::SdssG), 18.5);
        assert!(fresh.target().is_none());
        assert_eq!(fresh.extinction_applied(), 0);
    }

    #[test]
    fn test_bands_require_error() {
        let rec = record(
            Survey::AllWise,
            Dialect::VizierTap,
            &[("AllWISE", "J1"), ("W1mag", "14.2"), ("e_W1mag", "0.03"), ("W2mag", "13.9")],
        );
        let bands = rec.bands();
        assert!(bands.contains_key(&Band::WiseW1));
        assert!(!bands.contains_key(&Band::WiseW2));
    }

    #[test]
    fn test_elements_match_titles() {
        let rec = record(Survey::GaiaDr3, Dialect::Native, &[("source_id", "1"), ("ra", "1.5")]);
        assert!(rec.elements().is_empty());
        let elements = rec.load_elements();
        assert_eq!(elements.len(), rec.column_titles().len());
        for (element, title) in elements.iter().zip(rec.column_titles()) {
            assert_eq!(element.name, title);
        }
        let values: Vec<&str> = elements.iter().map(|e| e.value.as_str()).collect();
        assert_eq!(values, rec.column_values());
    }

    #[test]
    fn test_faulty_proper_motion_flag() {
        let rec = record(
            Survey::GaiaDr3,
            Dialect::Native,
            &[
                ("source_id", "1"),
                ("pmra", "1.0"),
                ("pmra_error", "2.0"),
                ("pmdec", "5.0"),
                ("pmdec_error", "0.1"),
            ],
        );
        let elements = rec.load_elements();
        let pmra = elements.iter().find(|e| e.name == "pmra").unwrap();
        let pmdec = elements.iter().find(|e| e.name == "pmdec").unwrap();
        assert!(pmra.faulty);
        assert!(!pmdec.faulty);
        assert!(rec.has_spurious_proper_motion());
    }

    #[test]
    fn test_gaia_capabilities() {
        let rec = record(
            Survey::GaiaDr3,
            Dialect::Native,
            &[
                ("source_id", "1"),
                ("parallax", "100"),
                ("phot_g_mean_mag", "10.0"),
                ("phot_bp_mean_mag", "10.5"),
                ("phot_rp_mean_mag", "9.4"),
            ],
        );
        let cmd = rec.gaia_cmd_point().unwrap();
        assert!((cmd.bp_rp - 1.1).abs() < 1e-12);
        assert!((cmd.absolute_g - 10.0).abs() < 1e-12);
        let wd = rec.white_dwarf_colors().unwrap();
        assert!((wd.g_rp - 0.6).abs() < 1e-12);

        let twomass = record(Survey::TwoMass, Dialect::VizierTap, &[("2MASS", "x")]);
        assert!(twomass.gaia_cmd_point().is_none());
        assert!(twomass.white_dwarf_colors().is_none());
    }

    #[test]
    fn test_gaia_vizier_magnitude_errors_read_as_published() {
        for survey in [Survey::GaiaDr2, Survey::GaiaDr3] {
            let rec = record(
                survey,
                Dialect::VizierTap,
                &[
                    ("Source", "1"),
                    ("Gmag", "15.0"),
                    ("e_Gmag", "0.0028"),
                    ("RPmag", "14.0"),
                    ("e_RPmag", "0.004"),
                ],
            );
            assert_eq!(rec.magnitude_error(Band::GaiaG), 0.0028, "{}", survey);
            assert_eq!(rec.magnitude_error(Band::GaiaRp), 0.004, "{}", survey);

            let spread = (0.0028f64.powi(2) + 0.004f64.powi(2)).sqrt();
            let (low, high) = rec
                .colors(false)
                .bounds(Band::GaiaG, Band::GaiaRp)
                .unwrap();
            assert!((low - (1.0 - spread)).abs() < 1e-12, "{}", survey);
            assert!((high - (1.0 + spread)).abs() < 1e-12, "{}", survey);
        }
    }

    #[test]
    fn test_gaia_native_magnitude_errors_from_flux_snr() {
        for survey in [Survey::GaiaDr2, Survey::GaiaDr3] {
            let rec = record(
                survey,
                Dialect::Native,
                &[
                    ("source_id", "1"),
                    ("phot_g_mean_mag", "15.0"),
                    ("phot_g_mean_flux_over_error", "100"),
                    ("phot_rp_mean_flux_over_error", "0"),
                ],
            );
            let err = rec.magnitude_error(Band::GaiaG);
            assert!((err - 0.010857362047581294).abs() < 1e-15, "{}", survey);
            assert_eq!(rec.magnitude_error(Band::GaiaRp), 0.0, "{}", survey);
        }
    }

    #[test]
    fn test_catwise_proper_motion_in_mas_per_year() {
        let vizier = record(
            Survey::CatWise,
            Dialect::VizierTap,
            &[("Name", "J1"), ("pmRA", "0.125"), ("e_pmRA", "0.02"), ("pmDE", "-0.5")],
        );
        let native = record(
            Survey::CatWise,
            Dialect::Native,
            &[("source_name", "J1"), ("pmra", "0.125"), ("sigpmra", "0.02"), ("pmdec", "-0.5")],
        );
        for rec in [&vizier, &native] {
            assert!((rec.pmra() - 125.0).abs() < 1e-9);
            assert!((rec.pmra_err() - 20.0).abs() < 1e-9);
            assert!((rec.pmdec() + 500.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_requery_url_uses_search_radius() {
        let mut rec = record(
            Survey::TwoMass,
            Dialect::VizierTap,
            &[("2MASS", "x"), ("RAJ2000", "10"), ("DEJ2000", "20")],
        );
        rec.set_search_radius(36.0);
        let url = rec.requery_url().unwrap();
        assert!(url.contains("0.01"));
    }

    #[test]
    fn test_record_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CatalogRecord>();
    }
}
