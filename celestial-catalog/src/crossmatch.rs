//! Cross-matching catalog records against a common target.
//!
//! Records from each catalog are kept separate: there is no identity fusion
//! across surveys. Within a catalog, records are ordered by their distance to
//! the target, nearest first.

use crate::dialect::Dialect;
use crate::record::CatalogRecord;
use crate::schema::SurveySchema;
use crate::service::ResultTable;
use crate::surveys::Survey;
use celestial_core::{SkyPosition, SurveyError, SurveyResult};
use std::sync::Arc;
use tracing::debug;

/// Links every record to `target` and sorts by target distance.
///
/// The sort is stable, so records at equal distance keep provider order.
pub fn attach_target_and_sort(records: &mut [CatalogRecord], target: SkyPosition) {
    for record in records.iter_mut() {
        record.set_target(target);
    }
    records.sort_by(|a, b| a.target_distance().total_cmp(&b.target_distance()));
}

/// The record closest to its target; the first one on ties.
pub fn nearest(records: &[CatalogRecord]) -> Option<&CatalogRecord> {
    records
        .iter()
        .min_by(|a, b| a.target_distance().total_cmp(&b.target_distance()))
}

pub fn within_radius(records: &[CatalogRecord], radius_arcsec: f64) -> Vec<&CatalogRecord> {
    records
        .iter()
        .filter(|r| r.target_distance() <= radius_arcsec)
        .collect()
}

/// Outcome of one catalog in a multi-catalog search.
#[derive(Debug)]
pub struct CatalogResult {
    pub survey: Survey,
    /// Sorted by target distance; empty when the catalog failed.
    pub records: Vec<CatalogRecord>,
    pub failure: Option<SurveyError>,
}

impl CatalogResult {
    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }

    pub fn nearest(&self) -> Option<&CatalogRecord> {
        nearest(&self.records)
    }
}

/// Merges per-catalog outcomes, preserving catalog order.
///
/// Successful catalogs are attached to `target` and sorted. A failed catalog
/// contributes an empty list and keeps its error.
pub fn merge_catalog_results(
    target: SkyPosition,
    results: Vec<(Survey, SurveyResult<Vec<CatalogRecord>>)>,
) -> Vec<CatalogResult> {
    results
        .into_iter()
        .map(|(survey, outcome)| match outcome {
            Ok(mut records) => {
                attach_target_and_sort(&mut records, target);
                CatalogResult {
                    survey,
                    records,
                    failure: None,
                }
            }
            Err(error) => CatalogResult {
                survey,
                records: Vec::new(),
                failure: Some(error),
            },
        })
        .collect()
}

/// All records of all catalogs, catalog by catalog.
pub fn concatenate(results: &[CatalogResult]) -> Vec<&CatalogRecord> {
    results.iter().flat_map(|r| r.records.iter()).collect()
}

/// Builds one record per row of `table`.
///
/// Rows failing with [`SurveyError::MissingColumn`] are skipped; any other
/// failure aborts the table.
pub fn parse_rows(
    schema: &'static SurveySchema,
    dialect: Dialect,
    table: &ResultTable,
) -> SurveyResult<Vec<CatalogRecord>> {
    let columns = Arc::new(table.column_map());
    let mut records = Vec::with_capacity(table.rows.len());
    let mut skipped = 0usize;
    for row in &table.rows {
        let row: Arc<[String]> = row.clone().into();
        match CatalogRecord::from_row(schema, dialect, Arc::clone(&columns), row) {
            Ok(record) => records.push(record),
            Err(SurveyError::MissingColumn { column, .. }) => {
                skipped += 1;
                debug!(catalog = schema.name, column = %column, "skipping row");
            }
            Err(other) => return Err(other),
        }
    }
    if skipped > 0 {
        debug!(catalog = schema.name, skipped, "rows skipped for missing columns");
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_core::constants::DEG_ARCSEC;

    fn two_mass_table(offsets_arcsec: &[f64]) -> ResultTable {
        let columns = Survey::TwoMass
            .schema()
            .column_names(Dialect::VizierTap)
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();
        let rows = offsets_arcsec
            .iter()
            .enumerate()
            .map(|(i, offset)| {
                let mut row = vec![String::new(); columns.len()];
                row[0] = format!("J{}", i);
                row[1] = "10.0".to_string();
                row[2] = format!("{}", 20.0 + offset / DEG_ARCSEC);
                row
            })
            .collect();
        ResultTable::new(columns, rows)
    }

    fn two_mass_records(offsets_arcsec: &[f64]) -> Vec<CatalogRecord> {
        let table = two_mass_table(offsets_arcsec);
        parse_rows(Survey::TwoMass.schema(), Dialect::VizierTap, &table).unwrap()
    }

    #[test]
    fn test_sort_by_target_distance() {
        let mut records = two_mass_records(&[5.0, 1.0, 3.0]);
        attach_target_and_sort(&mut records, SkyPosition::new(10.0, 20.0));
        let distances: Vec<f64> = records.iter().map(|r| r.target_distance()).collect();
        assert!((distances[0] - 1.0).abs() < 1e-6);
        assert!((distances[1] - 3.0).abs() < 1e-6);
        assert!((distances[2] - 5.0).abs() < 1e-6);
        assert_eq!(records[0].source_id().to_string(), "J1");
    }

    #[test]
    fn test_ties_keep_provider_order() {
        let mut records = two_mass_records(&[2.0, 2.0, 1.0]);
        attach_target_and_sort(&mut records, SkyPosition::new(10.0, 20.0));
        let ids: Vec<String> = records.iter().map(|r| r.source_id().to_string()).collect();
        assert_eq!(ids, vec!["J2", "J0", "J1"]);
    }

    #[test]
    fn test_nearest_and_within_radius() {
        let mut records = two_mass_records(&[4.0, 0.5, 2.5]);
        assert!(nearest(&[]).is_none());
        attach_target_and_sort(&mut records, SkyPosition::new(10.0, 20.0));
        assert_eq!(nearest(&records).unwrap().source_id().to_string(), "J1");
        assert_eq!(within_radius(&records, 3.0).len(), 2);
        assert!(within_radius(&records, 0.1).is_empty());
    }

    #[test]
    fn test_merge_keeps_failures_separate() {
        let target = SkyPosition::new(10.0, 20.0);
        let results = merge_catalog_results(
            target,
            vec![
                (Survey::TwoMass, Ok(two_mass_records(&[3.0, 1.0]))),
                (
                    Survey::AllWise,
                    Err(SurveyError::service_unavailable("AllWISE", "HTTP status 503")),
                ),
            ],
        );
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].survey, Survey::TwoMass);
        assert!(!results[0].is_failure());
        assert_eq!(results[0].nearest().unwrap().source_id().to_string(), "J1");
        assert_eq!(results[0].records[0].target(), Some(target));
        assert!(results[1].is_failure());
        assert!(results[1].records.is_empty());
        assert_eq!(concatenate(&results).len(), 2);
    }

    #[test]
    fn test_parse_rows_skips_missing_columns() {
        let table = ResultTable::new(
            vec!["2MASS".to_string(), "RAJ2000".to_string()],
            vec![vec!["J0".to_string(), "1.0".to_string()]],
        );
        let records = parse_rows(Survey::TwoMass.schema(), Dialect::VizierTap, &table).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_rows_shares_columns() {
        let records = two_mass_records(&[1.0, 2.0]);
        assert_eq!(records.len(), 2);
        assert!((records[1].dec() - (20.0 + 2.0 / DEG_ARCSEC)).abs() < 1e-12);
    }
}
