//! Client-side filter and sort for list views.
//!
//! Each query applies independent predicates per field (all must match), then
//! a single comparator keyed by one field. Sorting is stable, so ties keep the
//! order the store returned.

use std::cmp::Ordering;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Deadline, Document, University};
use crate::enums::{ApplicationStatus, DeadlineType, DocumentType, UniversityTag};

/// Column a university list can be sorted by.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Name,
    Deadline,
    Location,
    Status,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Current sort column and direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SortState {
    pub key: SortKey,
    pub order: SortOrder,
}

impl SortState {
    #[must_use]
    pub const fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    /// Column-header click: the same column flips direction, a new column
    /// starts ascending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.order = self.order.toggled();
        } else {
            self.key = key;
            self.order = SortOrder::Asc;
        }
    }

    fn compare(self, a: &University, b: &University) -> Ordering {
        let ordering = match self.key {
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Deadline => a.deadline.cmp(&b.deadline),
            SortKey::Location => a.location.to_lowercase().cmp(&b.location.to_lowercase()),
            SortKey::Status => a.status.as_str().cmp(b.status.as_str()),
        };
        self.order.apply(ordering)
    }
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn normalized(term: Option<&str>) -> Option<String> {
    term.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

// ---------------------------------------------------------------------------
// Universities
// ---------------------------------------------------------------------------

/// Filters and sort for the university table. `None` fields match everything.
#[derive(Debug, Clone, Default)]
pub struct UniversityQuery {
    /// Substring over name, program name, and location (case-insensitive).
    pub search: Option<String>,
    pub status: Option<ApplicationStatus>,
    pub tag: Option<UniversityTag>,
    /// Substring over location (case-insensitive).
    pub location: Option<String>,
    pub sort: SortState,
}

impl UniversityQuery {
    #[must_use]
    pub fn matches(&self, university: &University) -> bool {
        let search = normalized(self.search.as_deref());
        let location = normalized(self.location.as_deref());
        self.matches_normalized(university, search.as_deref(), location.as_deref())
    }

    fn matches_normalized(
        &self,
        university: &University,
        search: Option<&str>,
        location: Option<&str>,
    ) -> bool {
        let matches_search = search.is_none_or(|term| {
            contains_ci(&university.name, term)
                || contains_ci(&university.program_name, term)
                || contains_ci(&university.location, term)
        });
        let matches_status = self.status.is_none_or(|s| university.status == s);
        let matches_tag = self.tag.is_none_or(|t| university.tag == t);
        let matches_location = location.is_none_or(|term| contains_ci(&university.location, term));

        matches_search && matches_status && matches_tag && matches_location
    }

    /// Filter then sort, borrowing from `items`.
    #[must_use]
    pub fn apply<'a>(&self, items: &'a [University]) -> Vec<&'a University> {
        let search = normalized(self.search.as_deref());
        let location = normalized(self.location.as_deref());

        let mut filtered: Vec<&University> = items
            .iter()
            .filter(|u| self.matches_normalized(u, search.as_deref(), location.as_deref()))
            .collect();
        filtered.sort_by(|a, b| self.sort.compare(a, b));
        filtered
    }
}

/// Distinct locations in first-seen order, for building a location filter.
#[must_use]
pub fn unique_locations(items: &[University]) -> Vec<String> {
    let mut seen = Vec::<String>::new();
    for university in items {
        if !seen.contains(&university.location) {
            seen.push(university.location.clone());
        }
    }
    seen
}

// ---------------------------------------------------------------------------
// Deadlines
// ---------------------------------------------------------------------------

/// Filters for deadline lists. Results are ordered by date, then title.
#[derive(Debug, Clone, Default)]
pub struct DeadlineQuery {
    pub university_id: Option<String>,
    pub deadline_type: Option<DeadlineType>,
    pub completed: Option<bool>,
    /// Substring over title and notes (case-insensitive).
    pub search: Option<String>,
}

impl DeadlineQuery {
    #[must_use]
    pub fn apply<'a>(&self, items: &'a [Deadline]) -> Vec<&'a Deadline> {
        let search = normalized(self.search.as_deref());
        let mut filtered: Vec<&Deadline> = items
            .iter()
            .filter(|d| {
                self.university_id
                    .as_deref()
                    .is_none_or(|id| d.university_id == id)
                    && self.deadline_type.is_none_or(|t| d.deadline_type == t)
                    && self.completed.is_none_or(|c| d.completed == c)
                    && search.as_deref().is_none_or(|term| {
                        contains_ci(&d.title, term)
                            || d.notes.as_deref().is_some_and(|n| contains_ci(n, term))
                    })
            })
            .collect();
        filtered.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.title.cmp(&b.title)));
        filtered
    }
}

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

/// Which university a document filter is scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentScope {
    University(String),
    /// Documents not tied to any university.
    General,
}

/// Filters for document lists. Results are ordered by most recently updated.
#[derive(Debug, Clone, Default)]
pub struct DocumentQuery {
    pub scope: Option<DocumentScope>,
    pub doc_type: Option<DocumentType>,
    /// Substring over name and content (case-insensitive).
    pub search: Option<String>,
}

impl DocumentQuery {
    #[must_use]
    pub fn apply<'a>(&self, items: &'a [Document]) -> Vec<&'a Document> {
        let search = normalized(self.search.as_deref());
        let mut filtered: Vec<&Document> = items
            .iter()
            .filter(|doc| {
                let in_scope = match &self.scope {
                    None => true,
                    Some(DocumentScope::General) => doc.university_id.is_none(),
                    Some(DocumentScope::University(id)) => {
                        doc.university_id.as_deref() == Some(id.as_str())
                    }
                };
                in_scope
                    && self.doc_type.is_none_or(|t| doc.doc_type == t)
                    && search.as_deref().is_none_or(|term| {
                        contains_ci(&doc.name, term)
                            || doc.content.as_deref().is_some_and(|c| contains_ci(c, term))
                    })
            })
            .collect();
        filtered.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        filtered
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::views::fixtures::{date, deadline, document, ts, university};

    fn sample() -> Vec<University> {
        let mut mit = university("uni-1", "MIT", "Cambridge, MA", date(2024, 12, 15));
        mit.status = ApplicationStatus::Applied;
        mit.tag = UniversityTag::Reach;

        let mut stanford = university("uni-2", "stanford", "Stanford, CA", date(2024, 12, 1));
        stanford.program_name = "MS Statistics".into();

        let mut ucla = university("uni-3", "UCLA", "Los Angeles, CA", date(2025, 1, 5));
        ucla.tag = UniversityTag::Safety;
        ucla.status = ApplicationStatus::Admitted;

        vec![mit, stanford, ucla]
    }

    fn ids(items: &[&University]) -> Vec<String> {
        items.iter().map(|u| u.id.clone()).collect()
    }

    #[test]
    fn empty_query_sorts_by_name_case_insensitively() {
        let items = sample();
        let result = UniversityQuery::default().apply(&items);
        assert_eq!(ids(&result), vec!["uni-1", "uni-2", "uni-3"]);
    }

    #[rstest]
    #[case("stat", vec!["uni-2"])]
    #[case("CA", vec!["uni-2", "uni-3"])]
    #[case("cambridge", vec!["uni-1"])]
    #[case("  ", vec!["uni-1", "uni-2", "uni-3"])]
    #[case("nowhere", vec![])]
    fn search_spans_name_program_and_location(#[case] term: &str, #[case] expected: Vec<&str>) {
        let items = sample();
        let query = UniversityQuery {
            search: Some(term.into()),
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&items)), expected);
    }

    #[test]
    fn predicates_combine_with_and() {
        let items = sample();
        let query = UniversityQuery {
            location: Some("ca".into()),
            tag: Some(UniversityTag::Safety),
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&items)), vec!["uni-3"]);

        let query = UniversityQuery {
            status: Some(ApplicationStatus::Applied),
            tag: Some(UniversityTag::Safety),
            ..Default::default()
        };
        assert!(query.apply(&items).is_empty());
    }

    #[rstest]
    #[case(SortKey::Deadline, SortOrder::Asc, vec!["uni-2", "uni-1", "uni-3"])]
    #[case(SortKey::Deadline, SortOrder::Desc, vec!["uni-3", "uni-1", "uni-2"])]
    #[case(SortKey::Location, SortOrder::Asc, vec!["uni-1", "uni-3", "uni-2"])]
    #[case(SortKey::Status, SortOrder::Asc, vec!["uni-3", "uni-1", "uni-2"])]
    #[case(SortKey::Name, SortOrder::Desc, vec!["uni-3", "uni-2", "uni-1"])]
    fn sorts_by_selected_key(
        #[case] key: SortKey,
        #[case] order: SortOrder,
        #[case] expected: Vec<&str>,
    ) {
        let items = sample();
        let query = UniversityQuery {
            sort: SortState::new(key, order),
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&items)), expected);
    }

    #[test]
    fn toggle_flips_same_column_and_resets_new_column() {
        let mut state = SortState::default();
        state.toggle(SortKey::Name);
        assert_eq!(state, SortState::new(SortKey::Name, SortOrder::Desc));
        state.toggle(SortKey::Deadline);
        assert_eq!(state, SortState::new(SortKey::Deadline, SortOrder::Asc));
        state.toggle(SortKey::Deadline);
        assert_eq!(state.order, SortOrder::Desc);
    }

    #[test]
    fn unique_locations_keeps_first_seen_order() {
        let mut items = sample();
        items.push(university("uni-4", "Caltech", "Stanford, CA", date(2024, 12, 1)));
        assert_eq!(
            unique_locations(&items),
            vec!["Cambridge, MA", "Stanford, CA", "Los Angeles, CA"]
        );
    }

    #[test]
    fn deadline_query_filters_and_orders_by_date() {
        let mut done = deadline("ddl-1", "uni-1", "Submit SOP", date(2024, 11, 20));
        done.completed = true;
        let late = deadline("ddl-2", "uni-1", "Application", date(2024, 12, 15));
        let other = deadline("ddl-3", "uni-2", "Letters", date(2024, 11, 1));
        let items = vec![done, late, other];

        let open: Vec<&str> = DeadlineQuery {
            completed: Some(false),
            ..Default::default()
        }
        .apply(&items)
        .iter()
        .map(|d| d.id.as_str())
        .collect();
        assert_eq!(open, vec!["ddl-3", "ddl-2"]);

        let for_uni: Vec<&str> = DeadlineQuery {
            university_id: Some("uni-1".into()),
            search: Some("sop".into()),
            ..Default::default()
        }
        .apply(&items)
        .iter()
        .map(|d| d.id.as_str())
        .collect();
        assert_eq!(for_uni, vec!["ddl-1"]);
    }

    #[test]
    fn document_query_scopes_general_documents() {
        let general = document("doc-1", None, "Master CV");
        let mut tied = document("doc-2", Some("uni-1"), "MIT SOP");
        tied.updated_at = ts(2024, 10, 1);
        let items = vec![general, tied];

        let general_only = DocumentQuery {
            scope: Some(DocumentScope::General),
            ..Default::default()
        }
        .apply(&items);
        assert_eq!(general_only.len(), 1);
        assert_eq!(general_only[0].id, "doc-1");

        let all = DocumentQuery::default().apply(&items);
        assert_eq!(all[0].id, "doc-2", "most recently updated first");
    }
}
