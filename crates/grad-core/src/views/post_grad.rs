//! Post-graduation outcome ratings and portfolio summary.

use serde::Serialize;

use crate::entities::PostGradInfo;

#[must_use]
pub const fn salary_band(average_salary: i64) -> &'static str {
    if average_salary >= 120_000 {
        "High"
    } else if average_salary >= 90_000 {
        "Good"
    } else if average_salary >= 70_000 {
        "Average"
    } else {
        "Below Average"
    }
}

#[must_use]
pub fn placement_rating(rate: f64) -> &'static str {
    if rate >= 90.0 {
        "Excellent"
    } else if rate >= 80.0 {
        "Good"
    } else if rate >= 70.0 {
        "Average"
    } else {
        "Below Average"
    }
}

/// Work-authorization badge for a program.
#[must_use]
pub const fn visa_badge(info: &PostGradInfo) -> &'static str {
    match (info.opt_eligible, info.stem_designated) {
        (true, true) => "OPT + STEM Extension",
        (true, false) => "OPT Eligible",
        _ => "Limited Options",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PostGradSummary {
    pub schools: usize,
    pub opt_eligible: usize,
    pub stem_designated: usize,
    pub h1b_sponsorship: usize,
    pub average_salary: Option<i64>,
    pub average_placement_rate: Option<f64>,
}

impl PostGradSummary {
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
    pub fn from_infos(infos: &[PostGradInfo]) -> Self {
        if infos.is_empty() {
            return Self::default();
        }
        let n = infos.len();
        let salary_total: i64 = infos.iter().map(|i| i.average_salary).sum();
        let placement_total: f64 = infos.iter().map(|i| i.job_placement_rate).sum();

        Self {
            schools: n,
            opt_eligible: infos.iter().filter(|i| i.opt_eligible).count(),
            stem_designated: infos.iter().filter(|i| i.stem_designated).count(),
            h1b_sponsorship: infos.iter().filter(|i| i.h1b_sponsorship).count(),
            average_salary: Some(salary_total / n as i64),
            average_placement_rate: Some(placement_total / n as f64),
        }
    }
}
