//! The applicant's own test scores, used by requirement checks.

use grad_core::views::requirements::ApplicantScores;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApplicantConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gre: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toefl: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<f64>,
}

impl ApplicantConfig {
    pub const fn is_configured(&self) -> bool {
        self.gre.is_some() || self.toefl.is_some() || self.gpa.is_some()
    }

    pub const fn scores(&self) -> ApplicantScores {
        ApplicantScores {
            gre: self.gre,
            toefl: self.toefl,
            gpa: self.gpa,
        }
    }
}
