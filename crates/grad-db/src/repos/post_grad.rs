//! Post-graduation info repository: one row per university, written by upsert.

use chrono::Utc;

use grad_core::entities::PostGradInfo;
use grad_core::errors::require_range;
use grad_core::ids::PREFIX_POST_GRAD;

use crate::error::DatabaseError;
use crate::helpers::{encode_string_list, get_bool, get_opt_string, parse_datetime, parse_string_list};
use crate::service::GradService;

const SELECT_COLS: &str = "id, user_id, university_id, opt_eligible, stem_designated, \
     h1b_sponsorship, average_salary, top_employers, job_placement_rate, notes, created_at, \
     updated_at";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostGradInput {
    pub opt_eligible: bool,
    pub stem_designated: bool,
    pub h1b_sponsorship: bool,
    pub average_salary: i64,
    pub top_employers: Vec<String>,
    pub job_placement_rate: f64,
    pub notes: Option<String>,
}

impl PostGradInput {
    fn validate(&self) -> Result<(), DatabaseError> {
        require_range("average_salary", self.average_salary, 0, i64::MAX)?;
        require_range("job_placement_rate", self.job_placement_rate, 0.0, 100.0)?;
        Ok(())
    }
}

fn row_to_post_grad(row: &libsql::Row) -> Result<PostGradInfo, DatabaseError> {
    Ok(PostGradInfo {
        id: row.get::<String>(0)?,
        user_id: row.get::<String>(1)?,
        university_id: row.get::<String>(2)?,
        opt_eligible: get_bool(row, 3)?,
        stem_designated: get_bool(row, 4)?,
        h1b_sponsorship: get_bool(row, 5)?,
        average_salary: row.get::<i64>(6)?,
        top_employers: parse_string_list(&row.get::<String>(7)?)?,
        job_placement_rate: row.get::<f64>(8)?,
        notes: get_opt_string(row, 9)?,
        created_at: parse_datetime(&row.get::<String>(10)?)?,
        updated_at: parse_datetime(&row.get::<String>(11)?)?,
    })
}

impl GradService {
    pub async fn upsert_post_grad(
        &self,
        university_id: &str,
        input: &PostGradInput,
    ) -> Result<PostGradInfo, DatabaseError> {
        input.validate()?;
        self.require_university(university_id).await?;

        let now = Utc::now().to_rfc3339();
        let id = self.db().generate_id(PREFIX_POST_GRAD).await?;
        let employers = encode_string_list(&input.top_employers)?;

        self.db()
            .execute(
                "INSERT INTO post_grad_info (id, user_id, university_id, opt_eligible, \
                 stem_designated, h1b_sponsorship, average_salary, top_employers, \
                 job_placement_rate, notes, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
                 ON CONFLICT (user_id, university_id) DO UPDATE SET
                     opt_eligible = excluded.opt_eligible,
                     stem_designated = excluded.stem_designated,
                     h1b_sponsorship = excluded.h1b_sponsorship,
                     average_salary = excluded.average_salary,
                     top_employers = excluded.top_employers,
                     job_placement_rate = excluded.job_placement_rate,
                     notes = excluded.notes,
                     updated_at = excluded.updated_at",
                libsql::params![
                    id.as_str(),
                    self.user_id(),
                    university_id,
                    i64::from(input.opt_eligible),
                    i64::from(input.stem_designated),
                    i64::from(input.h1b_sponsorship),
                    input.average_salary,
                    employers,
                    input.job_placement_rate,
                    input.notes.as_deref(),
                    now.as_str(),
                    now.as_str()
                ],
            )
            .await?;

        self.get_post_grad_for_university(university_id).await
    }

    pub async fn get_post_grad_for_university(
        &self,
        university_id: &str,
    ) -> Result<PostGradInfo, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM post_grad_info WHERE university_id = ?1 AND user_id = ?2"
                ),
                libsql::params![university_id, self.user_id()],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("post-grad info", university_id))?;
        row_to_post_grad(&row)
    }

    pub async fn list_post_grad(&self) -> Result<Vec<PostGradInfo>, DatabaseError> {
        let (owner_filter, owner_params) = self.owner_filter("user_id", 1);
        let sql = format!(
            "SELECT {SELECT_COLS} FROM post_grad_info WHERE 1=1 {owner_filter} ORDER BY created_at ASC"
        );
        let mut rows = self
            .db()
            .query(&sql, libsql::params_from_iter(owner_params))
            .await?;

        let mut infos = Vec::new();
        while let Some(row) = rows.next().await? {
            infos.push(row_to_post_grad(&row)?);
        }
        Ok(infos)
    }

    pub async fn delete_post_grad(&self, university_id: &str) -> Result<(), DatabaseError> {
        let deleted = self
            .db()
            .execute(
                "DELETE FROM post_grad_info WHERE university_id = ?1 AND user_id = ?2",
                libsql::params![university_id, self.user_id()],
            )
            .await?;
        if deleted == 0 {
            return Err(DatabaseError::not_found("post-grad info", university_id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{day, seed_university, test_service};

    fn input() -> PostGradInput {
        PostGradInput {
            opt_eligible: true,
            stem_designated: true,
            h1b_sponsorship: false,
            average_salary: 125_000,
            top_employers: vec!["Google".into(), "Jane Street".into()],
            job_placement_rate: 94.0,
            notes: None,
        }
    }

    #[tokio::test]
    async fn upsert_roundtrips_employers() {
        let svc = test_service().await;
        let uni = seed_university(&svc, "CMU", day(2024, 12, 10)).await;

        let info = svc.upsert_post_grad(&uni.id, &input()).await.unwrap();
        assert!(info.id.starts_with("pgi-"));
        assert_eq!(info.top_employers, vec!["Google", "Jane Street"]);
        assert!(info.opt_eligible && info.stem_designated && !info.h1b_sponsorship);

        let replaced = svc
            .upsert_post_grad(
                &uni.id,
                &PostGradInput {
                    top_employers: Vec::new(),
                    h1b_sponsorship: true,
                    ..input()
                },
            )
            .await
            .unwrap();
        assert_eq!(replaced.id, info.id);
        assert!(replaced.top_employers.is_empty());
        assert!(replaced.h1b_sponsorship);
        assert_eq!(svc.list_post_grad().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn rejects_placement_over_100() {
        let svc = test_service().await;
        let uni = seed_university(&svc, "CMU", day(2024, 12, 10)).await;
        let err = svc
            .upsert_post_grad(
                &uni.id,
                &PostGradInput {
                    job_placement_rate: 101.0,
                    ..input()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::Core(_)));
    }

    #[tokio::test]
    async fn delete_and_cascade() {
        let svc = test_service().await;
        let a = seed_university(&svc, "A", day(2024, 12, 10)).await;
        let b = seed_university(&svc, "B", day(2024, 12, 10)).await;
        svc.upsert_post_grad(&a.id, &input()).await.unwrap();
        svc.upsert_post_grad(&b.id, &input()).await.unwrap();

        svc.delete_post_grad(&a.id).await.unwrap();
        assert!(svc.delete_post_grad(&a.id).await.unwrap_err().is_not_found());

        svc.delete_university(&b.id).await.unwrap();
        assert!(svc.list_post_grad().await.unwrap().is_empty());
    }
}
