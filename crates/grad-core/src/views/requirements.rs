//! Compare a university's admission requirements against the applicant's scores.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Requirement;

/// The applicant's own test scores. `None` means not yet taken or not entered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ApplicantScores {
    pub gre: Option<u32>,
    pub toefl: Option<u32>,
    pub gpa: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Met,
    Pending,
    Unknown,
}

impl CheckStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Met => "met",
            Self::Pending => "pending",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequirementItem {
    pub name: &'static str,
    pub required: bool,
    pub target: String,
    pub score: Option<String>,
    pub status: CheckStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequirementCheck {
    pub university_id: String,
    pub items: Vec<RequirementItem>,
    /// Share of required items that are met, 0-100.
    pub completion: f64,
}

fn score_status<T: PartialOrd>(target: T, score: Option<T>) -> CheckStatus {
    match score {
        Some(s) if s >= target => CheckStatus::Met,
        Some(_) => CheckStatus::Pending,
        None => CheckStatus::Unknown,
    }
}

fn numeric_item<T>(name: &'static str, target: T, score: Option<T>, zero: T) -> RequirementItem
where
    T: PartialOrd + Copy + ToString,
{
    let required = target > zero;
    RequirementItem {
        name,
        required,
        target: if required {
            target.to_string()
        } else {
            "Not required".to_string()
        },
        score: score.map(|s| s.to_string()),
        status: if required {
            score_status(target, score)
        } else {
            CheckStatus::Met
        },
    }
}

/// Build the checklist and completion percentage for one requirement row.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn check_requirement(requirement: &Requirement, scores: &ApplicantScores) -> RequirementCheck {
    let mut items = vec![
        numeric_item("GRE", requirement.gre, scores.gre, 0),
        numeric_item("TOEFL", requirement.toefl, scores.toefl, 0),
        numeric_item("GPA", requirement.gpa, scores.gpa, 0.0),
    ];

    let background = requirement
        .background
        .as_deref()
        .map(str::trim)
        .filter(|b| !b.is_empty());
    items.push(RequirementItem {
        name: "Background",
        required: background.is_some(),
        target: background.unwrap_or("Not required").to_string(),
        score: None,
        status: CheckStatus::Met,
    });

    let required = items.iter().filter(|i| i.required).count();
    let met = items
        .iter()
        .filter(|i| i.required && i.status == CheckStatus::Met)
        .count();
    let completion = if required == 0 {
        0.0
    } else {
        met as f64 / required as f64 * 100.0
    };

    RequirementCheck {
        university_id: requirement.university_id.clone(),
        items,
        completion,
    }
}
