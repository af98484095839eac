//! Application-season timeline.
//!
//! Five fixed phases. The furthest-along university decides which phase is
//! current; everything before it is completed and everything after is pending.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::University;
use crate::enums::ApplicationStatus;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Research,
    Preparation,
    Application,
    Waiting,
    Decision,
}

impl Phase {
    pub const ALL: [Self; 5] = [
        Self::Research,
        Self::Preparation,
        Self::Application,
        Self::Waiting,
        Self::Decision,
    ];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Research => "Research & Shortlist",
            Self::Preparation => "Test Prep & Documents",
            Self::Application => "Submit Applications",
            Self::Waiting => "Await Decisions",
            Self::Decision => "Make a Decision",
        }
    }

    #[must_use]
    pub const fn period(self) -> &'static str {
        match self {
            Self::Research => "May - Aug",
            Self::Preparation => "Aug - Oct",
            Self::Application => "Oct - Dec",
            Self::Waiting => "Jan - Mar",
            Self::Decision => "Mar - Apr",
        }
    }

    /// Phase a single application has reached.
    #[must_use]
    pub const fn for_status(status: ApplicationStatus) -> Self {
        match status {
            ApplicationStatus::Researching => Self::Research,
            ApplicationStatus::Applied | ApplicationStatus::Pending => Self::Waiting,
            ApplicationStatus::Admitted | ApplicationStatus::Rejected => Self::Decision,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStatus {
    Completed,
    Current,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineStep {
    pub phase: Phase,
    pub title: &'static str,
    pub period: &'static str,
    pub status: PhaseStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timeline {
    pub current: Phase,
    pub steps: Vec<TimelineStep>,
    /// Completed phases as a percentage of all phases.
    pub progress: f64,
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn build_timeline(universities: &[University]) -> Timeline {
    let current = universities
        .iter()
        .map(|u| Phase::for_status(u.status))
        .max()
        .unwrap_or(Phase::Research);

    let steps: Vec<TimelineStep> = Phase::ALL
        .iter()
        .map(|&phase| TimelineStep {
            phase,
            title: phase.title(),
            period: phase.period(),
            status: match phase.cmp(&current) {
                std::cmp::Ordering::Less => PhaseStatus::Completed,
                std::cmp::Ordering::Equal => PhaseStatus::Current,
                std::cmp::Ordering::Greater => PhaseStatus::Pending,
            },
        })
        .collect();

    let completed = steps
        .iter()
        .filter(|s| s.status == PhaseStatus::Completed)
        .count();

    Timeline {
        current,
        progress: completed as f64 / Phase::ALL.len() as f64 * 100.0,
        steps,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::views::fixtures::{date, university};

    #[test]
    fn empty_list_starts_at_research() {
        let timeline = build_timeline(&[]);
        assert_eq!(timeline.current, Phase::Research);
        assert_eq!(timeline.steps[0].status, PhaseStatus::Current);
        assert!(timeline.progress.abs() < f64::EPSILON);
    }

    #[test]
    fn furthest_status_wins() {
        let a = university("uni-1", "A", "X", date(2025, 1, 1));
        let mut b = university("uni-2", "B", "X", date(2025, 1, 1));
        b.status = ApplicationStatus::Pending;

        let timeline = build_timeline(&[a, b]);
        assert_eq!(timeline.current, Phase::Waiting);
        let statuses: Vec<PhaseStatus> = timeline.steps.iter().map(|s| s.status).collect();
        assert_eq!(
            statuses,
            vec![
                PhaseStatus::Completed,
                PhaseStatus::Completed,
                PhaseStatus::Completed,
                PhaseStatus::Current,
                PhaseStatus::Pending,
            ]
        );
        assert!((timeline.progress - 60.0).abs() < 1e-9);
    }

    #[test]
    fn decision_reached() {
        let mut a = university("uni-1", "A", "X", date(2025, 1, 1));
        a.status = ApplicationStatus::Rejected;
        let timeline = build_timeline(&[a]);
        assert_eq!(timeline.current, Phase::Decision);
        assert!((timeline.progress - 80.0).abs() < 1e-9);
    }
}
