//! Search settings, stored as JSON.
//!
//! ```json
//! {
//!   "use_vizier_tap": false,
//!   "radius_arcsec": 10.0,
//!   "timeout_secs": 30,
//!   "user_agent": "celestial-catalog/0.1.0",
//!   "catalogs": ["gaia-dr3", "allwise", "2mass"]
//! }
//! ```
//!
//! Missing fields take their defaults. An empty `catalogs` list selects every
//! survey.

use crate::dialect::set_vizier_preferred;
use crate::service::HttpQueryService;
use crate::surveys::Survey;
use celestial_core::{SurveyError, SurveyResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Query surveys offering both dialects through VizieR TAP.
    pub use_vizier_tap: bool,
    pub radius_arcsec: f64,
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Survey names or keys.
    pub catalogs: Vec<String>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            use_vizier_tap: false,
            radius_arcsec: 10.0,
            timeout_secs: HttpQueryService::DEFAULT_TIMEOUT.as_secs(),
            user_agent: HttpQueryService::DEFAULT_USER_AGENT.to_string(),
            catalogs: Vec::new(),
        }
    }
}

impl SearchSettings {
    pub fn from_json(json: &str) -> SurveyResult<Self> {
        let settings: Self = serde_json::from_str(json)
            .map_err(|e| SurveyError::invalid_input("settings", &e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> SurveyResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn save(&self, path: &Path) -> SurveyResult<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| SurveyError::invalid_input("settings", &e.to_string()))?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> SurveyResult<()> {
        if !(self.radius_arcsec.is_finite() && self.radius_arcsec > 0.0) {
            return Err(SurveyError::invalid_input(
                "settings",
                &format!("radius_arcsec must be positive, got {}", self.radius_arcsec),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(SurveyError::invalid_input("settings", "timeout_secs must be positive"));
        }
        self.surveys().map(|_| ())
    }

    /// Publishes the dialect preference process-wide.
    pub fn apply(&self) {
        set_vizier_preferred(self.use_vizier_tap);
    }

    /// Selected surveys in listed order, or all surveys for an empty list.
    pub fn surveys(&self) -> SurveyResult<Vec<Survey>> {
        if self.catalogs.is_empty() {
            return Ok(Survey::ALL.to_vec());
        }
        let mut surveys = Vec::with_capacity(self.catalogs.len());
        for name in &self.catalogs {
            let survey: Survey = name.parse()?;
            if !surveys.contains(&survey) {
                surveys.push(survey);
            }
        }
        Ok(surveys)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn query_service(&self) -> SurveyResult<HttpQueryService> {
        HttpQueryService::new(&self.user_agent, self.timeout())
    }
}
