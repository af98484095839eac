//! Status, tag, and type enums for gradtrack records.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and expose `as_str()` for SQL storage. The stored strings match the CHECK
//! constraints in the `grad-db` schema.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ApplicationStatus
// ---------------------------------------------------------------------------

/// Where an application to a university stands.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Researching,
    Applied,
    Admitted,
    Rejected,
    Pending,
}

impl ApplicationStatus {
    pub const ALL: [Self; 5] = [
        Self::Researching,
        Self::Applied,
        Self::Admitted,
        Self::Rejected,
        Self::Pending,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Researching => "researching",
            Self::Applied => "applied",
            Self::Admitted => "admitted",
            Self::Rejected => "rejected",
            Self::Pending => "pending",
        }
    }

    /// Whether a decision has been received for this application.
    #[must_use]
    pub const fn is_decided(self) -> bool {
        matches!(self, Self::Admitted | Self::Rejected)
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// UniversityTag
// ---------------------------------------------------------------------------

/// User-assigned admission risk category.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum UniversityTag {
    Reach,
    #[default]
    Target,
    Safety,
}

impl UniversityTag {
    pub const ALL: [Self; 3] = [Self::Reach, Self::Target, Self::Safety];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reach => "reach",
            Self::Target => "target",
            Self::Safety => "safety",
        }
    }
}

impl fmt::Display for UniversityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DeadlineType
// ---------------------------------------------------------------------------

/// What a deadline is for.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineType {
    Application,
    Document,
    Recommendation,
    #[default]
    Other,
}

impl DeadlineType {
    pub const ALL: [Self; 4] = [
        Self::Application,
        Self::Document,
        Self::Recommendation,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Application => "application",
            Self::Document => "document",
            Self::Recommendation => "recommendation",
            Self::Other => "other",
        }
    }

    /// Capitalized label for display (`"Application"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Application => "Application",
            Self::Document => "Document",
            Self::Recommendation => "Recommendation",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for DeadlineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DocumentType
// ---------------------------------------------------------------------------

/// Kind of application document.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Statement of purpose.
    Sop,
    Cv,
    Recommendation,
    Transcript,
    #[default]
    Other,
}

impl DocumentType {
    pub const ALL: [Self; 5] = [
        Self::Sop,
        Self::Cv,
        Self::Recommendation,
        Self::Transcript,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sop => "sop",
            Self::Cv => "cv",
            Self::Recommendation => "recommendation",
            Self::Transcript => "transcript",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Serde roundtrip tests ---

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(
        status_researching,
        ApplicationStatus,
        ApplicationStatus::Researching,
        "researching"
    );
    test_serde_roundtrip!(
        status_admitted,
        ApplicationStatus,
        ApplicationStatus::Admitted,
        "admitted"
    );
    test_serde_roundtrip!(tag_reach, UniversityTag, UniversityTag::Reach, "reach");
    test_serde_roundtrip!(
        deadline_recommendation,
        DeadlineType,
        DeadlineType::Recommendation,
        "recommendation"
    );
    test_serde_roundtrip!(document_sop, DocumentType, DocumentType::Sop, "sop");
    test_serde_roundtrip!(
        document_transcript,
        DocumentType,
        DocumentType::Transcript,
        "transcript"
    );

    // --- as_str agrees with serde ---

    #[test]
    fn as_str_matches_serde_for_all_variants() {
        for status in ApplicationStatus::ALL {
            assert_eq!(
                serde_json::to_string(&status).unwrap(),
                format!("\"{}\"", status.as_str())
            );
        }
        for tag in UniversityTag::ALL {
            assert_eq!(
                serde_json::to_string(&tag).unwrap(),
                format!("\"{}\"", tag.as_str())
            );
        }
        for kind in DeadlineType::ALL {
            assert_eq!(
                serde_json::to_string(&kind).unwrap(),
                format!("\"{}\"", kind.as_str())
            );
        }
        for kind in DocumentType::ALL {
            assert_eq!(
                serde_json::to_string(&kind).unwrap(),
                format!("\"{}\"", kind.as_str())
            );
        }
    }

    #[test]
    fn defaults_match_store_defaults() {
        assert_eq!(ApplicationStatus::default(), ApplicationStatus::Researching);
        assert_eq!(UniversityTag::default(), UniversityTag::Target);
        assert_eq!(DeadlineType::default(), DeadlineType::Other);
        assert_eq!(DocumentType::default(), DocumentType::Other);
    }

    #[test]
    fn unknown_variant_is_rejected() {
        let parsed: Result<UniversityTag, _> = serde_json::from_str("\"dream\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn decided_statuses() {
        assert!(ApplicationStatus::Admitted.is_decided());
        assert!(ApplicationStatus::Rejected.is_decided());
        assert!(!ApplicationStatus::Pending.is_decided());
    }
}
