use chrono::NaiveDate;
use grad_ai::UniversitySearchResult;
use grad_core::enums::{ApplicationStatus, UniversityTag};
use grad_db::repos::NewUniversity;

const FALLBACK_PROGRAM: &str = "Graduate Program";
const FALLBACK_LOCATION: &str = "Unknown";

/// A search result as a new tracked university.
///
/// Starts in `researching`; the deadline falls back to `today` when the
/// result has none or it is not an ISO date. A result with neither location
/// nor country is filed under "Unknown".
pub fn from_search_result(
    result: &UniversitySearchResult,
    tag: Option<UniversityTag>,
    today: NaiveDate,
) -> NewUniversity {
    NewUniversity {
        name: result.name.clone(),
        program_name: result
            .programs
            .iter()
            .find(|p| !p.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| FALLBACK_PROGRAM.to_string()),
        url: result.website.clone().filter(|w| !w.trim().is_empty()),
        location: Some(result.display_location())
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_LOCATION.to_string()),
        deadline: result.deadline_date().unwrap_or(today),
        status: ApplicationStatus::Researching,
        tag: tag.unwrap_or(UniversityTag::Target),
        application_fee: None,
        notes: Some(result.description.clone()).filter(|d| !d.trim().is_empty()),
    }
}

/// Pick the result at `index`, with a readable error when out of range.
pub fn pick<T>(items: &[T], index: usize) -> anyhow::Result<&T> {
    items.get(index).ok_or_else(|| {
        anyhow::anyhow!(
            "--save {index} is out of range: the search returned {} result(s)",
            items.len()
        )
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 1).unwrap()
    }

    #[test]
    fn converts_with_parsed_deadline() {
        let result = UniversitySearchResult {
            name: "ETH Zurich".into(),
            location: "Zurich".into(),
            country: "Switzerland".into(),
            programs: vec!["MSc Computer Science".into(), "MSc Robotics".into()],
            deadline: Some("2024-12-15".into()),
            website: Some("https://ethz.ch".into()),
            description: "Top technical university.".into(),
            ..Default::default()
        };

        let new = from_search_result(&result, Some(UniversityTag::Reach), today());
        assert_eq!(new.program_name, "MSc Computer Science");
        assert_eq!(new.location, "Zurich, Switzerland");
        assert_eq!(new.deadline, NaiveDate::from_ymd_opt(2024, 12, 15).unwrap());
        assert_eq!(new.status, ApplicationStatus::Researching);
        assert_eq!(new.tag, UniversityTag::Reach);
        assert_eq!(new.url.as_deref(), Some("https://ethz.ch"));
    }

    #[test]
    fn sparse_result_uses_fallbacks() {
        let result = UniversitySearchResult {
            name: "TU Munich".into(),
            deadline: Some("December 15".into()),
            ..Default::default()
        };

        let new = from_search_result(&result, None, today());
        assert_eq!(new.program_name, FALLBACK_PROGRAM);
        assert_eq!(new.deadline, today());
        assert_eq!(new.tag, UniversityTag::Target);
        assert_eq!(new.notes, None);
        assert_eq!(new.location, FALLBACK_LOCATION);
    }

    #[test]
    fn country_alone_becomes_location() {
        let result = UniversitySearchResult {
            name: "KAIST".into(),
            country: "South Korea".into(),
            ..Default::default()
        };
        assert_eq!(from_search_result(&result, None, today()).location, "South Korea");
    }

    #[test]
    fn pick_reports_out_of_range() {
        let items = vec![1, 2];
        assert_eq!(*pick(&items, 1).unwrap(), 2);
        assert!(pick(&items, 2).unwrap_err().to_string().contains("2 result(s)"));
    }
}
