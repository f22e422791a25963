//! Query service behaviour over HTTP and the multi-catalog search built on it.

use async_trait::async_trait;
use celestial_catalog::schema::Quantity;
use celestial_catalog::{
    run_batch, search_surveys, select_dialect, BatchTarget, HttpQueryService, QueryService,
    ResultTable, SkyPosition, Survey, SurveyError, SurveyResult,
};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn http_service() -> HttpQueryService {
    HttpQueryService::new("survey-tests", Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_fetch_csv_success() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sync"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("designation,ra,dec\nJ1,10.0,20.0\nJ2,10.001,20.001\n"),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/sync", mock_server.uri());
    let table = http_service().fetch("2MASS", &url).await.unwrap();
    assert_eq!(table.columns, vec!["designation", "ra", "dec"]);
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows[1][0], "J2");
}

#[tokio::test]
async fn test_fetch_http_503() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sync"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let url = format!("{}/sync", mock_server.uri());
    let err = http_service().fetch("SIMBAD", &url).await.unwrap_err();
    match err {
        SurveyError::ServiceUnavailable { catalog, message } => {
            assert_eq!(catalog, "SIMBAD");
            assert!(message.contains("503"), "{}", message);
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_votable_error_document() {
    let mock_server = MockServer::start().await;
    let body = r#"<?xml version="1.0"?>
<VOTABLE><RESOURCE type="results">
<INFO name="QUERY_STATUS" value="ERROR">Table "nope" unknown</INFO>
</RESOURCE></VOTABLE>"#;
    Mock::given(method("GET"))
        .and(path("/sync"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&mock_server)
        .await;

    let url = format!("{}/sync", mock_server.uri());
    let err = http_service().fetch("AllWISE", &url).await.unwrap_err();
    assert!(matches!(err, SurveyError::MalformedResponse { .. }), "{:?}", err);
    assert!(err.to_string().contains("unknown"));
}

#[tokio::test]
async fn test_fetch_unreachable_host() {
    let mock_server = MockServer::start().await;
    let url = format!("{}/sync", mock_server.uri());
    drop(mock_server);

    let err = http_service().fetch("DES DR2", &url).await.unwrap_err();
    assert!(matches!(err, SurveyError::ServiceUnavailable { .. }), "{:?}", err);
}

enum Reply {
    Table(ResultTable),
    Down,
}

/// Answers by catalog name and remembers every URL it was asked for.
struct StubService {
    replies: HashMap<&'static str, Reply>,
    requested: Mutex<Vec<String>>,
}

impl StubService {
    fn new() -> Self {
        Self {
            replies: HashMap::new(),
            requested: Mutex::new(Vec::new()),
        }
    }

    fn with(mut self, survey: Survey, reply: Reply) -> Self {
        self.replies.insert(survey.name(), reply);
        self
    }
}

#[async_trait]
impl QueryService for StubService {
    async fn fetch(&self, catalog: &str, url: &str) -> SurveyResult<ResultTable> {
        self.requested.lock().unwrap().push(url.to_string());
        match self.replies.get(catalog) {
            Some(Reply::Table(table)) => Ok(table.clone()),
            Some(Reply::Down) | None => {
                Err(SurveyError::service_unavailable(catalog, "connection refused"))
            }
        }
    }
}

/// Rows for `survey` in the dialect a search will pick, one per `(id, ra, dec)`.
fn table_for(survey: Survey, sources: &[(&str, f64, f64)]) -> ResultTable {
    let schema = survey.schema();
    let dialect = select_dialect(schema);
    let names = schema.column_names(dialect);
    let column = |quantity| {
        let index = schema.field_index(quantity).unwrap();
        schema.fields[index].column(dialect).unwrap()
    };
    let (id, ra, dec) = (column(Quantity::SourceId), column(Quantity::Ra), column(Quantity::Dec));

    let rows = sources
        .iter()
        .map(|(source, source_ra, source_dec)| {
            names
                .iter()
                .map(|name| {
                    if *name == id {
                        source.to_string()
                    } else if *name == ra {
                        source_ra.to_string()
                    } else if *name == dec {
                        source_dec.to_string()
                    } else {
                        String::new()
                    }
                })
                .collect()
        })
        .collect();
    ResultTable::new(names.into_iter().map(str::to_string).collect(), rows)
}

#[tokio::test]
async fn test_search_surveys_sorted_and_tagged() {
    let target = SkyPosition::new(10.0, 20.0);
    let service = StubService::new()
        .with(
            Survey::TwoMass,
            Reply::Table(table_for(
                Survey::TwoMass,
                &[("far", 10.0, 20.003), ("near", 10.0, 20.0005), ("mid", 10.0, 20.001)],
            )),
        )
        .with(
            Survey::AllWise,
            Reply::Table(table_for(Survey::AllWise, &[("J0040", 10.0, 20.0002)])),
        );

    let results = search_surveys(&service, &[Survey::TwoMass, Survey::AllWise], target, 36.0).await;
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].survey, Survey::TwoMass);
    assert_eq!(results[1].survey, Survey::AllWise);

    let ids: Vec<String> = results[0]
        .records
        .iter()
        .map(|r| r.source_id().to_string())
        .collect();
    assert_eq!(ids, vec!["near", "mid", "far"]);
    assert!((results[0].records[0].target_distance() - 1.8).abs() < 1e-6);
    assert!(results[0].records.iter().all(|r| r.search_radius() == 36.0));
    assert_eq!(results[1].nearest().unwrap().source_id().to_string(), "J0040");

    let requested = service.requested.lock().unwrap();
    assert_eq!(requested.len(), 2);
    assert!(requested.iter().all(|url| url.contains("0.01")), "{:?}", requested);
}

#[tokio::test]
async fn test_search_surveys_failure_is_isolated() {
    let target = SkyPosition::new(10.0, 20.0);
    let service = StubService::new()
        .with(Survey::Simbad, Reply::Down)
        .with(
            Survey::TwoMass,
            Reply::Table(table_for(Survey::TwoMass, &[("J1", 10.0, 20.0)])),
        );

    let results = search_surveys(&service, &[Survey::Simbad, Survey::TwoMass], target, 5.0).await;
    assert_eq!(results.len(), 2);

    assert!(results[0].is_failure());
    assert!(results[0].records.is_empty());
    assert!(matches!(
        results[0].failure,
        Some(SurveyError::ServiceUnavailable { .. })
    ));

    assert!(!results[1].is_failure());
    assert_eq!(results[1].records.len(), 1);
}

#[tokio::test]
async fn test_search_surveys_missing_position_column() {
    let target = SkyPosition::new(10.0, 20.0);
    let table = ResultTable::new(
        vec!["unrelated".to_string()],
        vec![vec!["1".to_string()]],
    );
    let service = StubService::new().with(Survey::TwoMass, Reply::Table(table));

    let results = search_surveys(&service, &[Survey::TwoMass], target, 5.0).await;
    assert!(!results[0].is_failure());
    assert!(results[0].records.is_empty());
}

#[tokio::test]
async fn test_run_batch_writes_one_file_per_catalog() {
    let service = StubService::new()
        .with(
            Survey::TwoMass,
            Reply::Table(table_for(Survey::TwoMass, &[("J1", 10.0, 20.0)])),
        )
        .with(Survey::Simbad, Reply::Down);
    let targets = vec![
        BatchTarget {
            name: "first".to_string(),
            position: SkyPosition::new(10.0, 20.0),
        },
        BatchTarget {
            name: "second".to_string(),
            position: SkyPosition::new(10.0, 20.001),
        },
    ];

    let temp_dir = TempDir::new().unwrap();
    let out_dir = temp_dir.path().join("matches");
    let written = run_batch(&service, &targets, &[Survey::TwoMass, Survey::Simbad], 10.0, &out_dir)
        .await
        .unwrap();
    assert_eq!(written.len(), 2);

    let (two_mass, two_mass_path) = &written[0];
    assert_eq!(two_mass.survey, Survey::TwoMass);
    assert_eq!(two_mass.matched(), 2);
    assert_eq!(two_mass_path, &out_dir.join("2mass.csv"));

    let text = std::fs::read_to_string(two_mass_path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("first,"));
    assert!(lines[2].starts_with("second,"));

    let (simbad, simbad_path) = &written[1];
    assert_eq!(simbad.matched(), 0);
    assert_eq!(simbad.failures, 2);
    assert_eq!(std::fs::read_to_string(simbad_path).unwrap().lines().count(), 3);
}
