//! Result types returned by the search API.
//!
//! Model replies are loosely typed: explicit `null`s fall back to defaults
//! and numbers that arrive as prose (`"ranking": "Top 100"`) become `None`.

use chrono::NaiveDate;
use grad_core::enums::UniversityTag;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, DefaultOnNull, serde_as};

/// Minimum admission scores a university publishes.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreRequirements {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub gpa: Option<f64>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub gre: Option<u32>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub toefl: Option<u32>,
}

/// One university as described by the model. Field names are camelCase on the wire.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniversitySearchResult {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub name: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub location: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub country: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub ranking: Option<u32>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub acceptance_rate: Option<f64>,
    /// Annual tuition in USD.
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub tuition: Option<f64>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub programs: Vec<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub website: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub requirements: ScoreRequirements,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub description: String,
}

impl UniversitySearchResult {
    /// The deadline as a date, if the model gave one in `YYYY-MM-DD` form.
    #[must_use]
    pub fn deadline_date(&self) -> Option<NaiveDate> {
        self.deadline
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").ok())
    }

    /// `"City, Country"` unless the location already names the country.
    #[must_use]
    pub fn display_location(&self) -> String {
        if self.country.is_empty() || self.location.contains(&self.country) {
            self.location.clone()
        } else if self.location.is_empty() {
            self.country.clone()
        } else {
            format!("{}, {}", self.location, self.country)
        }
    }
}

/// A recommended university with the model's reasoning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(flatten)]
    pub university: UniversitySearchResult,
    #[serde(default)]
    pub match_reason: Option<String>,
    /// `reach`, `target` or `safety` as free text.
    #[serde(default)]
    pub category: Option<String>,
}

impl Recommendation {
    /// Category as a tag, ignoring case; `None` for anything unrecognized.
    #[must_use]
    pub fn tag(&self) -> Option<UniversityTag> {
        let category = self.category.as_deref()?.trim().to_ascii_lowercase();
        UniversityTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == category)
    }
}

/// What the applicant is looking for, interpolated into the recommendation prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub interests: Vec<String>,
    pub preferred_locations: Vec<String>,
    pub budget_range: String,
    pub academic_background: String,
}

#[serde_as]
#[derive(Deserialize)]
pub(crate) struct SearchEnvelope {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub universities: Vec<UniversitySearchResult>,
}

#[serde_as]
#[derive(Deserialize)]
pub(crate) struct RecommendationEnvelope {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}
