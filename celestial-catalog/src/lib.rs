//! Survey catalog entries, query URLs and target cross-matching.
//!
//! One generic [`CatalogRecord`] type covers every supported survey. Each
//! survey is a static [`SurveySchema`] describing its columns under the two
//! query dialects (VizieR TAP and the provider's own service), its photometry
//! and colors, its exported columns and where it can be queried.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`band`] | Photometric bands, AB/Vega offsets, [`ExtinctionBand`] keys |
//! | [`value`] | Typed cell values and source identifiers |
//! | [`schema`] | [`SurveySchema`] descriptors, [`Capabilities`], column formats |
//! | [`surveys`] | [`Survey`] and one descriptor per survey |
//! | [`columns`] | Case-tolerant column name lookup |
//! | [`record`] | [`CatalogRecord`] and its derived quantities |
//! | [`color`] | Color indices with error bounds |
//! | [`element`] | [`CatalogElement`] display projection |
//! | [`dialect`] | [`Dialect`] selection and query URL construction |
//! | [`crossmatch`] | Target attachment, nearest match, per-catalog results |
//! | [`service`] | [`QueryService`] trait and the HTTP/CSV implementation |
//! | [`search`] | Concurrent multi-catalog search |
//! | [`settings`] | [`SearchSettings`] JSON configuration |
//! | [`batch`] | Nearest-match CSV export for a list of targets |
//!
//! # Quick Start
//!
//! ```no_run
//! use celestial_catalog::{search_surveys, HttpQueryService, SearchSettings, SkyPosition, Survey};
//!
//! # async fn run() -> celestial_core::SurveyResult<()> {
//! let settings = SearchSettings::default();
//! settings.apply();
//! let service = settings.query_service()?;
//!
//! let target = SkyPosition::parse("10.684708 41.26875")?;
//! let results = search_surveys(&service, &[Survey::GaiaDr3, Survey::AllWise], target, 5.0).await;
//! for result in &results {
//!     if let Some(nearest) = result.nearest() {
//!         println!("{}: {} at {:.2}\"", result.survey, nearest.source_id(), nearest.target_distance());
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **`cli`**: enables the `survey-search` binary.

pub mod band;
pub mod batch;
pub mod color;
pub mod columns;
pub mod crossmatch;
pub mod dialect;
pub mod element;
pub mod record;
pub mod schema;
pub mod search;
pub mod service;
pub mod settings;
pub mod surveys;
pub mod value;

pub use band::{Band, ExtinctionBand, MagnitudeSystem};
pub use batch::{read_targets, run_batch, BatchTarget};
pub use celestial_core::{SkyPosition, SurveyError, SurveyResult};
pub use color::{ColorBound, ColorKey, ColorSet};
pub use columns::ColumnMap;
pub use crossmatch::{attach_target_and_sort, nearest, within_radius, CatalogResult};
pub use dialect::{build_query_url, select_dialect, set_vizier_preferred, Dialect};
pub use element::CatalogElement;
pub use record::{CatalogRecord, Magnitude};
pub use schema::{Capabilities, SurveySchema};
pub use search::{search_survey, search_surveys};
pub use service::{HttpQueryService, QueryService, ResultTable};
pub use settings::SearchSettings;
pub use surveys::Survey;
pub use value::SourceId;
