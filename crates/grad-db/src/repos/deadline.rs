//! Deadline repository: CRUD, completion toggling, per-university listing.

use chrono::{NaiveDate, Utc};

use grad_core::entities::{Deadline, DeadlineWithUniversity};
use grad_core::enums::DeadlineType;
use grad_core::errors::require_text;
use grad_core::ids::PREFIX_DEADLINE;

use crate::error::DatabaseError;
use crate::helpers::{
    format_date, get_bool, get_opt_string, parse_date, parse_datetime, parse_enum,
};
use crate::service::GradService;
use crate::updates::SetClauses;
use crate::updates::deadline::DeadlineUpdate;

const SELECT_COLS: &str = "d.id, d.user_id, d.university_id, d.title, d.date, d.type, d.completed, \
     d.notes, d.created_at, d.updated_at";

#[derive(Debug, Clone, Default)]
pub struct NewDeadline {
    pub university_id: String,
    pub title: String,
    pub date: NaiveDate,
    pub deadline_type: DeadlineType,
    pub completed: bool,
    pub notes: Option<String>,
}

fn row_to_deadline(row: &libsql::Row) -> Result<Deadline, DatabaseError> {
    Ok(Deadline {
        id: row.get::<String>(0)?,
        user_id: row.get::<String>(1)?,
        university_id: row.get::<String>(2)?,
        title: row.get::<String>(3)?,
        date: parse_date(&row.get::<String>(4)?)?,
        deadline_type: parse_enum(&row.get::<String>(5)?)?,
        completed: get_bool(row, 6)?,
        notes: get_opt_string(row, 7)?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
        updated_at: parse_datetime(&row.get::<String>(9)?)?,
    })
}

/// Deadline columns followed by `u.name, u.program_name`.
fn row_to_joined(row: &libsql::Row) -> Result<DeadlineWithUniversity, DatabaseError> {
    Ok(DeadlineWithUniversity {
        deadline: row_to_deadline(row)?,
        university_name: row.get::<String>(10)?,
        program_name: row.get::<String>(11)?,
    })
}

impl GradService {
    /// Create a deadline under one of the owner's universities.
    ///
    /// # Errors
    ///
    /// `DatabaseError::NotFound` if the university does not exist for the owner.
    pub async fn create_deadline(&self, new: &NewDeadline) -> Result<Deadline, DatabaseError> {
        require_text("title", &new.title)?;
        self.require_university(&new.university_id).await?;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_DEADLINE).await?;

        self.db()
            .execute(
                "INSERT INTO deadlines (id, user_id, university_id, title, date, type, completed, \
                 notes, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                libsql::params![
                    id.as_str(),
                    self.user_id(),
                    new.university_id.as_str(),
                    new.title.as_str(),
                    format_date(new.date),
                    new.deadline_type.as_str(),
                    i64::from(new.completed),
                    new.notes.as_deref(),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(Deadline {
            id,
            user_id: self.user_id().to_string(),
            university_id: new.university_id.clone(),
            title: new.title.clone(),
            date: new.date,
            deadline_type: new.deadline_type,
            completed: new.completed,
            notes: new.notes.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_deadline(&self, id: &str) -> Result<DeadlineWithUniversity, DatabaseError> {
        let (owner_filter, owner_params) = self.owner_filter("d.user_id", 2);
        let sql = format!(
            "SELECT {SELECT_COLS}, u.name, u.program_name
             FROM deadlines d JOIN universities u ON u.id = d.university_id
             WHERE d.id = ?1 {owner_filter}"
        );
        let mut params: Vec<libsql::Value> = vec![id.into()];
        params.extend(owner_params);

        let mut rows = self.db().query(&sql, libsql::params_from_iter(params)).await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("deadline", id))?;
        row_to_joined(&row)
    }

    /// The owner's deadlines with university names, soonest first.
    pub async fn list_deadlines(
        &self,
        limit: Option<u32>,
    ) -> Result<Vec<DeadlineWithUniversity>, DatabaseError> {
        let (owner_filter, owner_params) = self.owner_filter("d.user_id", 1);
        let limit_clause = limit.map(|l| format!("LIMIT {l}")).unwrap_or_default();
        let sql = format!(
            "SELECT {SELECT_COLS}, u.name, u.program_name
             FROM deadlines d JOIN universities u ON u.id = d.university_id
             WHERE 1=1 {owner_filter}
             ORDER BY d.date ASC, d.title ASC {limit_clause}"
        );
        let mut rows = self
            .db()
            .query(&sql, libsql::params_from_iter(owner_params))
            .await?;

        let mut deadlines = Vec::new();
        while let Some(row) = rows.next().await? {
            deadlines.push(row_to_joined(&row)?);
        }
        Ok(deadlines)
    }

    pub async fn list_deadlines_for_university(
        &self,
        university_id: &str,
    ) -> Result<Vec<Deadline>, DatabaseError> {
        self.require_university(university_id).await?;

        let (owner_filter, owner_params) = self.owner_filter("d.user_id", 2);
        let sql = format!(
            "SELECT {SELECT_COLS} FROM deadlines d
             WHERE d.university_id = ?1 {owner_filter}
             ORDER BY d.date ASC, d.title ASC"
        );
        let mut params: Vec<libsql::Value> = vec![university_id.into()];
        params.extend(owner_params);

        let mut rows = self.db().query(&sql, libsql::params_from_iter(params)).await?;
        let mut deadlines = Vec::new();
        while let Some(row) = rows.next().await? {
            deadlines.push(row_to_deadline(&row)?);
        }
        Ok(deadlines)
    }

    pub async fn update_deadline(
        &self,
        id: &str,
        update: &DeadlineUpdate,
    ) -> Result<DeadlineWithUniversity, DatabaseError> {
        let mut sets = SetClauses::default();

        if let Some(ref university_id) = update.university_id {
            self.require_university(university_id).await?;
            sets.push("university_id", university_id.as_str());
        }
        if let Some(ref title) = update.title {
            require_text("title", title)?;
            sets.push("title", title.as_str());
        }
        if let Some(date) = update.date {
            sets.push("date", format_date(date));
        }
        if let Some(deadline_type) = update.deadline_type {
            sets.push("type", deadline_type.as_str());
        }
        if let Some(completed) = update.completed {
            sets.push("completed", i64::from(completed));
        }
        if let Some(ref notes) = update.notes {
            sets.push("notes", notes.as_deref());
        }

        if sets.is_empty() {
            return self.get_deadline(id).await;
        }

        sets.push("updated_at", Utc::now().to_rfc3339());
        let id_idx = sets.next_idx();
        sets.extend_params([id.into()]);
        let (owner_filter, owner_params) = self.owner_filter("user_id", id_idx + 1);
        sets.extend_params(owner_params);
        let (set_sql, params) = sets.finish();

        let sql = format!("UPDATE deadlines SET {set_sql} WHERE id = ?{id_idx} {owner_filter}");
        let changed = self
            .db()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed == 0 {
            return Err(DatabaseError::not_found("deadline", id));
        }

        self.get_deadline(id).await
    }

    /// Mark a deadline done or reopen it.
    pub async fn set_deadline_completed(
        &self,
        id: &str,
        completed: bool,
    ) -> Result<DeadlineWithUniversity, DatabaseError> {
        let changed = self
            .db()
            .execute(
                "UPDATE deadlines SET completed = ?1, updated_at = ?2 WHERE id = ?3 AND user_id = ?4",
                libsql::params![
                    i64::from(completed),
                    Utc::now().to_rfc3339(),
                    id,
                    self.user_id()
                ],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::not_found("deadline", id));
        }
        tracing::debug!(%id, completed, "set deadline completion");
        self.get_deadline(id).await
    }

    pub async fn delete_deadline(&self, id: &str) -> Result<(), DatabaseError> {
        let deleted = self
            .db()
            .execute(
                "DELETE FROM deadlines WHERE id = ?1 AND user_id = ?2",
                libsql::params![id, self.user_id()],
            )
            .await?;
        if deleted == 0 {
            return Err(DatabaseError::not_found("deadline", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{day, seed_university, test_service};
    use crate::updates::deadline::DeadlineUpdateBuilder;

    fn new_deadline(university_id: &str, title: &str, date: NaiveDate) -> NewDeadline {
        NewDeadline {
            university_id: university_id.into(),
            title: title.into(),
            date,
            deadline_type: DeadlineType::Application,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_and_get_joins_university() {
        let svc = test_service().await;
        let uni = seed_university(&svc, "MIT", day(2024, 12, 15)).await;

        let created = svc
            .create_deadline(&new_deadline(&uni.id, "Submit application", day(2024, 12, 15)))
            .await
            .unwrap();
        assert!(created.id.starts_with("ddl-"));
        assert!(!created.completed);

        let fetched = svc.get_deadline(&created.id).await.unwrap();
        assert_eq!(fetched.deadline.title, "Submit application");
        assert_eq!(fetched.deadline.deadline_type, DeadlineType::Application);
        assert_eq!(fetched.university_name, "MIT");
        assert_eq!(fetched.program_name, "MS Computer Science");
    }

    #[tokio::test]
    async fn create_for_missing_university_is_not_found() {
        let svc = test_service().await;
        let err = svc
            .create_deadline(&new_deadline("uni-ghost", "Essay", day(2024, 12, 1)))
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { entity: "university", .. }));
    }

    #[tokio::test]
    async fn list_orders_by_date() {
        let svc = test_service().await;
        let a = seed_university(&svc, "A", day(2024, 12, 15)).await;
        let b = seed_university(&svc, "B", day(2024, 12, 15)).await;
        svc.create_deadline(&new_deadline(&a.id, "Late", day(2025, 1, 5)))
            .await
            .unwrap();
        svc.create_deadline(&new_deadline(&b.id, "Early", day(2024, 11, 1)))
            .await
            .unwrap();
        svc.create_deadline(&new_deadline(&a.id, "Mid", day(2024, 12, 1)))
            .await
            .unwrap();

        let titles: Vec<String> = svc
            .list_deadlines(None)
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.deadline.title)
            .collect();
        assert_eq!(titles, vec!["Early", "Mid", "Late"]);

        let for_a = svc.list_deadlines_for_university(&a.id).await.unwrap();
        assert_eq!(for_a.len(), 2);
        assert_eq!(for_a[0].title, "Mid");
    }

    #[tokio::test]
    async fn complete_and_reopen() {
        let svc = test_service().await;
        let uni = seed_university(&svc, "MIT", day(2024, 12, 15)).await;
        let d = svc
            .create_deadline(&new_deadline(&uni.id, "Letters", day(2024, 12, 1)))
            .await
            .unwrap();

        assert!(svc.set_deadline_completed(&d.id, true).await.unwrap().deadline.completed);
        assert!(!svc.set_deadline_completed(&d.id, false).await.unwrap().deadline.completed);
        assert!(
            svc.set_deadline_completed("ddl-none", true)
                .await
                .unwrap_err()
                .is_not_found()
        );
    }

    #[tokio::test]
    async fn update_can_move_between_universities() {
        let svc = test_service().await;
        let a = seed_university(&svc, "A", day(2024, 12, 15)).await;
        let b = seed_university(&svc, "B", day(2024, 12, 15)).await;
        let d = svc
            .create_deadline(&new_deadline(&a.id, "SOP", day(2024, 12, 1)))
            .await
            .unwrap();

        let moved = svc
            .update_deadline(
                &d.id,
                &DeadlineUpdateBuilder::new()
                    .university_id(b.id.clone())
                    .deadline_type(DeadlineType::Document)
                    .build(),
            )
            .await
            .unwrap();
        assert_eq!(moved.deadline.university_id, b.id);
        assert_eq!(moved.university_name, "B");
        assert_eq!(moved.deadline.deadline_type, DeadlineType::Document);

        let bad = svc
            .update_deadline(
                &d.id,
                &DeadlineUpdateBuilder::new().university_id("uni-ghost").build(),
            )
            .await;
        assert!(bad.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn deleting_university_cascades_to_deadlines() {
        let svc = test_service().await;
        let uni = seed_university(&svc, "MIT", day(2024, 12, 15)).await;
        let d = svc
            .create_deadline(&new_deadline(&uni.id, "App", day(2024, 12, 15)))
            .await
            .unwrap();

        svc.delete_university(&uni.id).await.unwrap();
        assert!(svc.get_deadline(&d.id).await.unwrap_err().is_not_found());
        assert!(svc.list_deadlines(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_deadline_once() {
        let svc = test_service().await;
        let uni = seed_university(&svc, "MIT", day(2024, 12, 15)).await;
        let d = svc
            .create_deadline(&new_deadline(&uni.id, "App", day(2024, 12, 15)))
            .await
            .unwrap();
        svc.delete_deadline(&d.id).await.unwrap();
        assert!(svc.delete_deadline(&d.id).await.unwrap_err().is_not_found());
    }
}
