//! Batch cross-matching of a target list.
//!
//! Targets come from a CSV file with a `name,ra,dec` header; coordinates may
//! be decimal degrees or sexagesimal. For every selected catalog one CSV is
//! written holding the nearest match of each target:
//!
//! ```text
//! target,target ra,target dec,<catalog column titles...>
//! ```
//!
//! Targets without a match keep their row with empty catalog columns.

use crate::crossmatch::CatalogResult;
use crate::record::CatalogRecord;
use crate::search::search_surveys;
use crate::service::QueryService;
use crate::surveys::Survey;
use celestial_core::rounding::round_to_n_dec;
use celestial_core::{SkyPosition, SurveyError, SurveyResult};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct BatchTarget {
    pub name: String,
    pub position: SkyPosition,
}

#[derive(Debug, Deserialize)]
struct TargetRow {
    name: String,
    ra: String,
    dec: String,
}

pub fn read_targets<R: Read>(reader: R) -> SurveyResult<Vec<BatchTarget>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut targets = Vec::new();
    for (line, row) in reader.deserialize::<TargetRow>().enumerate() {
        let row = row.map_err(|e| SurveyError::invalid_input("targets", &e.to_string()))?;
        let position = SkyPosition::parse(&format!("{} {}", row.ra, row.dec)).map_err(|e| {
            let message = format!("row {} ({}): {}", line + 1, row.name, e);
            SurveyError::invalid_input("targets", &message)
        })?;
        targets.push(BatchTarget {
            name: row.name,
            position,
        });
    }
    Ok(targets)
}

pub fn read_targets_file(path: &Path) -> SurveyResult<Vec<BatchTarget>> {
    read_targets(File::open(path)?)
}

/// Nearest matches of one catalog, one entry per target.
#[derive(Debug)]
pub struct NearestMatches {
    pub survey: Survey,
    pub matches: Vec<(BatchTarget, Option<CatalogRecord>)>,
    pub failures: usize,
}

impl NearestMatches {
    fn new(survey: Survey) -> Self {
        Self {
            survey,
            matches: Vec::new(),
            failures: 0,
        }
    }

    pub fn matched(&self) -> usize {
        self.matches.iter().filter(|(_, m)| m.is_some()).count()
    }

    fn record(&mut self, target: &BatchTarget, result: &CatalogResult) {
        if result.is_failure() {
            self.failures += 1;
        }
        self.matches.push((target.clone(), result.nearest().cloned()));
    }

    /// Writes the CSV described in the module docs.
    pub fn write_csv<W: Write>(&self, writer: W) -> SurveyResult<()> {
        let titles = self.survey.schema().column_titles();
        let mut out = csv::Writer::from_writer(writer);

        let mut header = vec!["target", "target ra", "target dec"];
        header.extend(titles.iter().copied());
        out.write_record(&header).map_err(csv_error)?;

        for (target, record) in &self.matches {
            let mut row = vec![
                target.name.clone(),
                round_to_n_dec(target.position.ra, 7),
                round_to_n_dec(target.position.dec, 7),
            ];
            match record {
                Some(record) => row.extend(record.column_values()),
                None => row.extend(titles.iter().map(|_| String::new())),
            }
            out.write_record(&row).map_err(csv_error)?;
        }
        out.flush()?;
        Ok(())
    }
}

fn csv_error(error: csv::Error) -> SurveyError {
    SurveyError::Io(error.into())
}

/// Searches every target and collects the nearest match per catalog.
///
/// Targets are searched one after the other; the catalogs of one target are
/// queried concurrently.
pub async fn collect_nearest<S>(
    service: &S,
    targets: &[BatchTarget],
    surveys: &[Survey],
    radius_arcsec: f64,
) -> Vec<NearestMatches>
where
    S: QueryService + ?Sized,
{
    let mut by_survey: BTreeMap<Survey, NearestMatches> = BTreeMap::new();
    for target in targets {
        let results = search_surveys(service, surveys, target.position, radius_arcsec).await;
        for result in &results {
            by_survey
                .entry(result.survey)
                .or_insert_with(|| NearestMatches::new(result.survey))
                .record(target, result);
        }
        info!(target = %target.name, "target searched");
    }
    surveys
        .iter()
        .filter_map(|survey| by_survey.remove(survey))
        .collect()
}

/// Runs a batch and writes `<out_dir>/<survey key>.csv` per catalog.
pub async fn run_batch<S>(
    service: &S,
    targets: &[BatchTarget],
    surveys: &[Survey],
    radius_arcsec: f64,
    out_dir: &Path,
) -> SurveyResult<Vec<(NearestMatches, PathBuf)>>
where
    S: QueryService + ?Sized,
{
    fs::create_dir_all(out_dir)?;
    let collected = collect_nearest(service, targets, surveys, radius_arcsec).await;

    let mut written = Vec::with_capacity(collected.len());
    for matches in collected {
        let path = out_dir.join(format!("{}.csv", matches.survey.key()));
        matches.write_csv(File::create(&path)?)?;
        if matches.failures > 0 {
            warn!(
                catalog = matches.survey.name(),
                failures = matches.failures,
                "catalog failed for some targets"
            );
        }
        info!(
            catalog = matches.survey.name(),
            matched = matches.matched(),
            path = %path.display(),
            "batch results written"
        );
        written.push((matches, path));
    }
    Ok(written)
}
