//! University repository: CRUD and bulk delete.

use chrono::{NaiveDate, Utc};

use grad_core::entities::University;
use grad_core::enums::{ApplicationStatus, UniversityTag};
use grad_core::errors::{require_range, require_text};
use grad_core::ids::PREFIX_UNIVERSITY;

use crate::error::DatabaseError;
use crate::helpers::{format_date, get_opt_string, parse_date, parse_datetime, parse_enum};
use crate::service::GradService;
use crate::updates::SetClauses;
use crate::updates::university::UniversityUpdate;

const SELECT_COLS: &str = "id, user_id, name, program_name, url, location, deadline, status, tag, \
     application_fee, notes, created_at, updated_at";

/// Fields for a new university. Defaults give status `researching`, tag `target`.
#[derive(Debug, Clone, Default)]
pub struct NewUniversity {
    pub name: String,
    pub program_name: String,
    pub url: Option<String>,
    pub location: String,
    pub deadline: NaiveDate,
    pub status: ApplicationStatus,
    pub tag: UniversityTag,
    pub application_fee: Option<i64>,
    pub notes: Option<String>,
}

fn row_to_university(row: &libsql::Row) -> Result<University, DatabaseError> {
    Ok(University {
        id: row.get::<String>(0)?,
        user_id: row.get::<String>(1)?,
        name: row.get::<String>(2)?,
        program_name: row.get::<String>(3)?,
        url: get_opt_string(row, 4)?,
        location: row.get::<String>(5)?,
        deadline: parse_date(&row.get::<String>(6)?)?,
        status: parse_enum(&row.get::<String>(7)?)?,
        tag: parse_enum(&row.get::<String>(8)?)?,
        application_fee: row.get::<Option<i64>>(9)?,
        notes: get_opt_string(row, 10)?,
        created_at: parse_datetime(&row.get::<String>(11)?)?,
        updated_at: parse_datetime(&row.get::<String>(12)?)?,
    })
}

fn validate_fee(fee: Option<i64>) -> Result<(), DatabaseError> {
    if let Some(fee) = fee {
        require_range("application_fee", fee, 0, i64::MAX)?;
    }
    Ok(())
}

impl GradService {
    pub async fn create_university(&self, new: &NewUniversity) -> Result<University, DatabaseError> {
        require_text("name", &new.name)?;
        require_text("program_name", &new.program_name)?;
        require_text("location", &new.location)?;
        validate_fee(new.application_fee)?;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_UNIVERSITY).await?;

        self.db()
            .execute(
                "INSERT INTO universities (id, user_id, name, program_name, url, location, deadline, \
                 status, tag, application_fee, notes, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
                libsql::params![
                    id.as_str(),
                    self.user_id(),
                    new.name.as_str(),
                    new.program_name.as_str(),
                    new.url.as_deref(),
                    new.location.as_str(),
                    format_date(new.deadline),
                    new.status.as_str(),
                    new.tag.as_str(),
                    new.application_fee,
                    new.notes.as_deref(),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        tracing::debug!(%id, name = %new.name, "created university");

        Ok(University {
            id,
            user_id: self.user_id().to_string(),
            name: new.name.clone(),
            program_name: new.program_name.clone(),
            url: new.url.clone(),
            location: new.location.clone(),
            deadline: new.deadline,
            status: new.status,
            tag: new.tag,
            application_fee: new.application_fee,
            notes: new.notes.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_university(&self, id: &str) -> Result<University, DatabaseError> {
        let (owner_filter, owner_params) = self.owner_filter("user_id", 2);
        let sql = format!("SELECT {SELECT_COLS} FROM universities WHERE id = ?1 {owner_filter}");
        let mut params: Vec<libsql::Value> = vec![id.into()];
        params.extend(owner_params);

        let mut rows = self.db().query(&sql, libsql::params_from_iter(params)).await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("university", id))?;
        row_to_university(&row)
    }

    /// All of the owner's universities, nearest deadline first.
    pub async fn list_universities(
        &self,
        limit: Option<u32>,
    ) -> Result<Vec<University>, DatabaseError> {
        let (owner_filter, owner_params) = self.owner_filter("user_id", 1);
        let limit_clause = limit.map(|l| format!("LIMIT {l}")).unwrap_or_default();
        let sql = format!(
            "SELECT {SELECT_COLS} FROM universities WHERE 1=1 {owner_filter}
             ORDER BY deadline ASC, name ASC {limit_clause}"
        );
        let mut rows = self
            .db()
            .query(&sql, libsql::params_from_iter(owner_params))
            .await?;

        let mut universities = Vec::new();
        while let Some(row) = rows.next().await? {
            universities.push(row_to_university(&row)?);
        }
        Ok(universities)
    }

    pub async fn update_university(
        &self,
        id: &str,
        update: &UniversityUpdate,
    ) -> Result<University, DatabaseError> {
        let mut sets = SetClauses::default();

        if let Some(ref name) = update.name {
            require_text("name", name)?;
            sets.push("name", name.as_str());
        }
        if let Some(ref program_name) = update.program_name {
            require_text("program_name", program_name)?;
            sets.push("program_name", program_name.as_str());
        }
        if let Some(ref url) = update.url {
            sets.push("url", url.as_deref());
        }
        if let Some(ref location) = update.location {
            require_text("location", location)?;
            sets.push("location", location.as_str());
        }
        if let Some(deadline) = update.deadline {
            sets.push("deadline", format_date(deadline));
        }
        if let Some(status) = update.status {
            sets.push("status", status.as_str());
        }
        if let Some(tag) = update.tag {
            sets.push("tag", tag.as_str());
        }
        if let Some(fee) = update.application_fee {
            validate_fee(fee)?;
            sets.push("application_fee", fee);
        }
        if let Some(ref notes) = update.notes {
            sets.push("notes", notes.as_deref());
        }

        if sets.is_empty() {
            return self.get_university(id).await;
        }

        sets.push("updated_at", Utc::now().to_rfc3339());
        let id_idx = sets.next_idx();
        sets.extend_params([id.into()]);
        let (owner_filter, owner_params) = self.owner_filter("user_id", id_idx + 1);
        sets.extend_params(owner_params);
        let (set_sql, params) = sets.finish();

        let sql = format!("UPDATE universities SET {set_sql} WHERE id = ?{id_idx} {owner_filter}");
        let changed = self
            .db()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed == 0 {
            return Err(DatabaseError::not_found("university", id));
        }

        self.get_university(id).await
    }

    /// Delete one university. Its deadlines, requirements and post-grad rows
    /// cascade; its documents become general.
    pub async fn delete_university(&self, id: &str) -> Result<(), DatabaseError> {
        let (owner_filter, owner_params) = self.owner_filter("user_id", 2);
        let sql = format!("DELETE FROM universities WHERE id = ?1 {owner_filter}");
        let mut params: Vec<libsql::Value> = vec![id.into()];
        params.extend(owner_params);

        let deleted = self
            .db()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if deleted == 0 {
            return Err(DatabaseError::not_found("university", id));
        }
        tracing::debug!(%id, "deleted university");
        Ok(())
    }

    /// Bulk delete in one transaction. Unknown ids are skipped; returns how
    /// many rows were removed.
    pub async fn delete_universities(&self, ids: &[String]) -> Result<u64, DatabaseError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let tx = self.db().conn().transaction().await?;
        let mut deleted = 0;
        for id in ids {
            deleted += tx
                .execute(
                    "DELETE FROM universities WHERE id = ?1 AND user_id = ?2",
                    libsql::params![id.as_str(), self.user_id()],
                )
                .await?;
        }
        tx.commit().await?;

        tracing::debug!(requested = ids.len(), deleted, "bulk deleted universities");
        Ok(deleted)
    }
}
