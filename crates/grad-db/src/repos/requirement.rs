//! Requirement repository: one row per university, written by upsert.

use chrono::Utc;

use grad_core::entities::Requirement;
use grad_core::errors::require_range;
use grad_core::ids::PREFIX_REQUIREMENT;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, get_u32, parse_datetime};
use crate::service::GradService;

const SELECT_COLS: &str =
    "id, user_id, university_id, gre, toefl, gpa, background, notes, created_at, updated_at";

/// Requirement values. Zero means "not required".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequirementInput {
    pub gre: u32,
    pub toefl: u32,
    pub gpa: f64,
    pub background: Option<String>,
    pub notes: Option<String>,
}

impl RequirementInput {
    fn validate(&self) -> Result<(), DatabaseError> {
        require_range("gre", self.gre, 0, 340)?;
        require_range("toefl", self.toefl, 0, 120)?;
        require_range("gpa", self.gpa, 0.0, 10.0)?;
        Ok(())
    }
}

fn row_to_requirement(row: &libsql::Row) -> Result<Requirement, DatabaseError> {
    Ok(Requirement {
        id: row.get::<String>(0)?,
        user_id: row.get::<String>(1)?,
        university_id: row.get::<String>(2)?,
        gre: get_u32(row, 3)?,
        toefl: get_u32(row, 4)?,
        gpa: row.get::<f64>(5)?,
        background: get_opt_string(row, 6)?,
        notes: get_opt_string(row, 7)?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
        updated_at: parse_datetime(&row.get::<String>(9)?)?,
    })
}

impl GradService {
    /// Insert or replace the requirement row for a university. The row keeps
    /// its id and `created_at` across upserts.
    pub async fn upsert_requirement(
        &self,
        university_id: &str,
        input: &RequirementInput,
    ) -> Result<Requirement, DatabaseError> {
        input.validate()?;
        self.require_university(university_id).await?;

        let now = Utc::now().to_rfc3339();
        let id = self.db().generate_id(PREFIX_REQUIREMENT).await?;

        self.db()
            .execute(
                "INSERT INTO requirements (id, user_id, university_id, gre, toefl, gpa, \
                 background, notes, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
                 ON CONFLICT (user_id, university_id) DO UPDATE SET
                     gre = excluded.gre,
                     toefl = excluded.toefl,
                     gpa = excluded.gpa,
                     background = excluded.background,
                     notes = excluded.notes,
                     updated_at = excluded.updated_at",
                libsql::params![
                    id.as_str(),
                    self.user_id(),
                    university_id,
                    i64::from(input.gre),
                    i64::from(input.toefl),
                    input.gpa,
                    input.background.as_deref(),
                    input.notes.as_deref(),
                    now.as_str(),
                    now.as_str()
                ],
            )
            .await?;

        self.get_requirement_for_university(university_id).await
    }

    pub async fn get_requirement_for_university(
        &self,
        university_id: &str,
    ) -> Result<Requirement, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM requirements WHERE university_id = ?1 AND user_id = ?2"
                ),
                libsql::params![university_id, self.user_id()],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("requirement", university_id))?;
        row_to_requirement(&row)
    }

    pub async fn list_requirements(&self) -> Result<Vec<Requirement>, DatabaseError> {
        let (owner_filter, owner_params) = self.owner_filter("user_id", 1);
        let sql = format!(
            "SELECT {SELECT_COLS} FROM requirements WHERE 1=1 {owner_filter} ORDER BY created_at ASC"
        );
        let mut rows = self
            .db()
            .query(&sql, libsql::params_from_iter(owner_params))
            .await?;

        let mut requirements = Vec::new();
        while let Some(row) = rows.next().await? {
            requirements.push(row_to_requirement(&row)?);
        }
        Ok(requirements)
    }

    pub async fn delete_requirement(&self, university_id: &str) -> Result<(), DatabaseError> {
        let deleted = self
            .db()
            .execute(
                "DELETE FROM requirements WHERE university_id = ?1 AND user_id = ?2",
                libsql::params![university_id, self.user_id()],
            )
            .await?;
        if deleted == 0 {
            return Err(DatabaseError::not_found("requirement", university_id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{day, seed_university, test_service};

    #[tokio::test]
    async fn upsert_inserts_then_replaces() {
        let svc = test_service().await;
        let uni = seed_university(&svc, "MIT", day(2024, 12, 15)).await;

        let first = svc
            .upsert_requirement(
                &uni.id,
                &RequirementInput {
                    gre: 320,
                    toefl: 100,
                    gpa: 3.5,
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(first.id.starts_with("req-"));
        assert_eq!(first.gre, 320);

        let second = svc
            .upsert_requirement(
                &uni.id,
                &RequirementInput {
                    gre: 0,
                    toefl: 90,
                    gpa: 3.0,
                    background: Some("Calculus".into()),
                    notes: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(second.id, first.id, "upsert keeps the row id");
        assert_eq!(second.gre, 0);
        assert_eq!(second.background.as_deref(), Some("Calculus"));
        assert_eq!(svc.list_requirements().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn upsert_validates_and_checks_university() {
        let svc = test_service().await;
        let bad = svc
            .upsert_requirement(
                "uni-x",
                &RequirementInput {
                    toefl: 150,
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(bad, Err(DatabaseError::Core(_))));

        let missing = svc
            .upsert_requirement("uni-x", &RequirementInput::default())
            .await;
        assert!(missing.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn cascade_and_delete() {
        let svc = test_service().await;
        let a = seed_university(&svc, "A", day(2024, 12, 15)).await;
        let b = seed_university(&svc, "B", day(2024, 12, 15)).await;
        svc.upsert_requirement(&a.id, &RequirementInput::default())
            .await
            .unwrap();
        svc.upsert_requirement(&b.id, &RequirementInput::default())
            .await
            .unwrap();

        svc.delete_university(&a.id).await.unwrap();
        assert!(
            svc.get_requirement_for_university(&a.id)
                .await
                .unwrap_err()
                .is_not_found()
        );

        svc.delete_requirement(&b.id).await.unwrap();
        assert!(svc.delete_requirement(&b.id).await.unwrap_err().is_not_found());
        assert!(svc.list_requirements().await.unwrap().is_empty());
    }
}
