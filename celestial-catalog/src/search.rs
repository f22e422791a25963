//! Concurrent cone search across several catalogs.

use crate::crossmatch::{merge_catalog_results, parse_rows, CatalogResult};
use crate::dialect::{build_query_url, select_dialect};
use crate::record::CatalogRecord;
use crate::service::QueryService;
use crate::surveys::Survey;
use celestial_core::{SkyPosition, SurveyResult};
use futures::future::join_all;
use tracing::{info, warn};

/// Queries one catalog around `target`.
///
/// The dialect follows the process-wide preference. Every returned record
/// carries `radius_arcsec` as its search radius; target linkage is left to
/// the caller.
pub async fn search_survey<S>(
    service: &S,
    survey: Survey,
    target: SkyPosition,
    radius_arcsec: f64,
) -> SurveyResult<Vec<CatalogRecord>>
where
    S: QueryService + ?Sized,
{
    let schema = survey.schema();
    let dialect = select_dialect(schema);
    let url = build_query_url(schema, dialect, target.ra, target.dec, radius_arcsec)?;
    let table = service.fetch(schema.name, &url).await?;
    let mut records = parse_rows(schema, dialect, &table)?;
    for record in &mut records {
        record.set_search_radius(radius_arcsec);
    }
    Ok(records)
}

/// Queries every catalog in `surveys` concurrently.
///
/// Results come back in `surveys` order, each sorted by distance to
/// `target`. A failing catalog yields an empty list with its error and never
/// aborts the others.
pub async fn search_surveys<S>(
    service: &S,
    surveys: &[Survey],
    target: SkyPosition,
    radius_arcsec: f64,
) -> Vec<CatalogResult>
where
    S: QueryService + ?Sized,
{
    let outcomes = join_all(surveys.iter().map(|&survey| async move {
        let outcome = search_survey(service, survey, target, radius_arcsec).await;
        match &outcome {
            Ok(records) => info!(
                catalog = survey.name(),
                matches = records.len(),
                "catalog searched"
            ),
            Err(error) => warn!(catalog = survey.name(), %error, "catalog search failed"),
        }
        (survey, outcome)
    }))
    .await;

    merge_catalog_results(target, outcomes)
}
