//! Query dialects and query URL construction.
//!
//! Most surveys are reachable two ways: through the VizieR TAP mirror, and
//! through the provider's own service. Column names differ between the two
//! even when the semantics are identical, so a record always remembers the
//! dialect it was parsed under.
//!
//! Which dialect is used for surveys offering both is a process-wide switch,
//! set from [`SearchSettings`](crate::SearchSettings) or the command line.
//!
//! # Radial clauses
//!
//! | Service | Clause |
//! |---------|--------|
//! | VizieR, IRSA, ESAC, SIMBAD | `1=CONTAINS(POINT('ICRS', ra, dec), CIRCLE('ICRS', ra0, dec0, r))` |
//! | NOIRLab Data Lab, MOCAdb | `q3c_radial_query(ra, dec, ra0, dec0, r)` |
//! | MAST catalogs API | `ra=…&dec=…&radius=…` query parameters |
//!
//! The radius `r` is always in degrees.

use crate::schema::{Quantity, SurveySchema};
use celestial_core::constants::DEG_ARCSEC;
use celestial_core::{SurveyError, SurveyResult};
use reqwest::Url;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    VizierTap,
    Native,
}

impl Dialect {
    pub fn other(self) -> Self {
        match self {
            Self::VizierTap => Self::Native,
            Self::Native => Self::VizierTap,
        }
    }
}

static VIZIER_PREFERRED: AtomicBool = AtomicBool::new(false);

/// Routes surveys that offer both dialects through VizieR TAP (`true`) or
/// their native service (`false`).
pub fn set_vizier_preferred(preferred: bool) {
    VIZIER_PREFERRED.store(preferred, Ordering::Relaxed);
}

pub fn vizier_preferred() -> bool {
    VIZIER_PREFERRED.load(Ordering::Relaxed)
}

/// Dialect to query `schema` with under the current process-wide preference.
pub fn select_dialect(schema: &SurveySchema) -> Dialect {
    let preferred = if vizier_preferred() {
        Dialect::VizierTap
    } else {
        Dialect::Native
    };
    schema.resolve(preferred)
}

/// A remote query endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TapService {
    Vizier,
    Irsa,
    Esac,
    Simbad,
    NoirLab,
    MocaDb,
    Mast,
}

impl TapService {
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Vizier => "https://tapvizier.cds.unistra.fr/TAPVizieR/tap/sync",
            Self::Irsa => "https://irsa.ipac.caltech.edu/TAP/sync",
            Self::Esac => "https://gea.esac.esa.int/tap-server/tap/sync",
            Self::Simbad => "https://simbad.cds.unistra.fr/simbad/sim-tap/sync",
            Self::NoirLab => "https://datalab.noirlab.edu/query/query",
            Self::MocaDb => "https://mocadb.ca/api/query",
            Self::Mast => "https://catalogs.mast.stsci.edu/api/v0.1",
        }
    }

    fn uses_q3c(self) -> bool {
        matches!(self, Self::NoirLab | Self::MocaDb)
    }
}

/// Where and how a survey is queried in one dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryPlan {
    pub service: TapService,
    /// Table name, join expression, or for MAST the `catalog/release/table` path.
    pub table: &'static str,
}

impl QueryPlan {
    pub const fn new(service: TapService, table: &'static str) -> Self {
        Self { service, table }
    }
}

/// Builds the query URL for a cone of `radius_arcsec` around `(ra, dec)`.
///
/// The selected columns are exactly the schema's column names for `dialect`,
/// in schema order. The returned URL is fully percent-encoded.
pub fn build_query_url(
    schema: &SurveySchema,
    dialect: Dialect,
    ra: f64,
    dec: f64,
    radius_arcsec: f64,
) -> SurveyResult<String> {
    let plan = schema.plan(dialect).ok_or_else(|| {
        SurveyError::invalid_input(
            "query dialect",
            &format!("{} cannot be queried through {:?}", schema.name, dialect),
        )
    })?;
    let columns = schema.column_names(dialect);
    let radius = radius_arcsec / DEG_ARCSEC;
    let position_column = |quantity| {
        schema
            .field_index(quantity)
            .and_then(|i| schema.fields[i].column(dialect))
            .ok_or_else(|| SurveyError::missing_column(schema.name, &format!("{:?}", quantity)))
    };
    let ra_column = position_column(Quantity::Ra)?;
    let dec_column = position_column(Quantity::Dec)?;

    let url = match plan.service {
        TapService::Mast => {
            let base = format!("{}/{}.csv", plan.service.endpoint(), plan.table);
            let column_list = format!("[{}]", columns.join(","));
            Url::parse_with_params(
                &base,
                &[
                    ("ra", ra.to_string()),
                    ("dec", dec.to_string()),
                    ("radius", radius.to_string()),
                    ("nDetections.gt", "1".to_string()),
                    ("columns", column_list),
                ],
            )
        }
        service if service.uses_q3c() => {
            let sql = format!(
                "SELECT {} FROM {} WHERE q3c_radial_query({}, {}, {}, {}, {})",
                columns.join(", "),
                plan.table,
                ra_column,
                dec_column,
                ra,
                dec,
                radius
            );
            let params = match service {
                TapService::NoirLab => [("sql", sql.as_str()), ("ofmt", "csv")],
                _ => [("query", sql.as_str()), ("format", "csv")],
            };
            Url::parse_with_params(service.endpoint(), &params)
        }
        service => {
            let adql = format!(
                "SELECT {} FROM {} \
                 WHERE 1=CONTAINS(POINT('ICRS', {}, {}), CIRCLE('ICRS', {}, {}, {}))",
                columns.iter().map(|c| quote_identifier(c)).collect::<Vec<_>>().join(", "),
                quote_table(plan.table),
                quote_identifier(ra_column),
                quote_identifier(dec_column),
                ra,
                dec,
                radius
            );
            Url::parse_with_params(
                service.endpoint(),
                &[
                    ("REQUEST", "doQuery"),
                    ("LANG", "ADQL"),
                    ("FORMAT", "csv"),
                    ("QUERY", adql.as_str()),
                ],
            )
        }
    };

    url.map(String::from)
        .map_err(|e| SurveyError::invalid_input("query url", &e.to_string()))
}

/// ADQL delimited identifier for names that are not regular identifiers.
fn quote_identifier(name: &str) -> String {
    let regular = name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
    if regular {
        name.to_string()
    } else {
        format!("\"{}\"", name)
    }
}

/// VizieR table names contain slashes and must be quoted; joins and dotted
/// schema names are passed through.
fn quote_table(table: &str) -> String {
    if table.contains('/') {
        format!("\"{}\"", table)
    } else {
        table.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surveys::Survey;

    fn decoded(url: &str) -> String {
        let parsed = Url::parse(url).unwrap();
        parsed
            .query_pairs()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }

    #[test]
    fn test_dialect_other() {
        assert_eq!(Dialect::VizierTap.other(), Dialect::Native);
        assert_eq!(Dialect::Native.other(), Dialect::VizierTap);
    }

    #[test]
    fn test_quote_identifier() {
        assert_eq!(quote_identifier("RA_ICRS"), "RA_ICRS");
        assert_eq!(quote_identifier("allfluxes.J"), "allfluxes.J");
        assert_eq!(quote_identifier("2MASS"), "\"2MASS\"");
        assert_eq!(quote_identifier("B-V"), "\"B-V\"");
    }

    #[test]
    fn test_vizier_adql_url() {
        let schema = Survey::TwoMass.schema();
        let url = build_query_url(schema, Dialect::VizierTap, 10.5, -20.25, 36.0).unwrap();
        assert!(url.starts_with("https://tapvizier.cds.unistra.fr/TAPVizieR/tap/sync?"));
        let query = decoded(&url);
        assert!(query.contains("REQUEST=doQuery"));
        assert!(query.contains("FROM \"II/246/out\""));
        assert!(query.contains("\"2MASS\""));
        let cone = concat!(
            "1=CONTAINS(POINT('ICRS', RAJ2000, DEJ2000), ",
            "CIRCLE('ICRS', 10.5, -20.25, 0.01))"
        );
        assert!(query.contains(cone));
    }

    #[test]
    fn test_q3c_url() {
        let schema = Survey::NoirLab.schema();
        let url = build_query_url(schema, Dialect::Native, 150.0, 2.0, 18.0).unwrap();
        assert!(url.starts_with("https://datalab.noirlab.edu/query/query?"));
        let query = decoded(&url);
        assert!(query.contains("FROM nsc_dr2.object"));
        assert!(query.contains("q3c_radial_query(ra, dec, 150, 2, 0.005)"));
    }

    #[test]
    fn test_mast_url() {
        let schema = Survey::PanStarrs.schema();
        let url = build_query_url(schema, Dialect::Native, 200.0, 30.0, 7.2).unwrap();
        let endpoint = "https://catalogs.mast.stsci.edu/api/v0.1/panstarrs/dr2/mean.csv?";
        assert!(url.starts_with(endpoint));
        let query = decoded(&url);
        assert!(query.contains("ra=200&dec=30&radius=0.002"));
        assert!(query.contains("columns=[objID,"));
    }

    #[test]
    fn test_unsupported_dialect() {
        let schema = Survey::Sdss.schema();
        assert!(build_query_url(schema, Dialect::Native, 0.0, 0.0, 5.0).is_err());
    }

    #[test]
    fn test_url_is_percent_encoded() {
        let schema = Survey::GaiaDr3.schema();
        let url = build_query_url(schema, Dialect::Native, 1.0, 2.0, 5.0).unwrap();
        assert!(!url.contains(' '));
        assert!(!url.contains('\''));
    }
}
