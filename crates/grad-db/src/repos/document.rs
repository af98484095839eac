//! Document repository.

use chrono::Utc;

use grad_core::entities::Document;
use grad_core::enums::DocumentType;
use grad_core::errors::require_text;
use grad_core::ids::PREFIX_DOCUMENT;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, get_u32, parse_datetime, parse_enum};
use crate::service::GradService;
use crate::updates::SetClauses;
use crate::updates::document::DocumentUpdate;

const SELECT_COLS: &str = "id, user_id, university_id, name, doc_type, content, file_url, version, \
     created_at, updated_at";

#[derive(Debug, Clone, Default)]
pub struct NewDocument {
    /// `None` for a general document.
    pub university_id: Option<String>,
    pub name: String,
    pub doc_type: DocumentType,
    pub content: Option<String>,
    pub file_url: Option<String>,
}

fn row_to_document(row: &libsql::Row) -> Result<Document, DatabaseError> {
    Ok(Document {
        id: row.get::<String>(0)?,
        user_id: row.get::<String>(1)?,
        university_id: get_opt_string(row, 2)?,
        name: row.get::<String>(3)?,
        doc_type: parse_enum(&row.get::<String>(4)?)?,
        content: get_opt_string(row, 5)?,
        file_url: get_opt_string(row, 6)?,
        version: get_u32(row, 7)?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
        updated_at: parse_datetime(&row.get::<String>(9)?)?,
    })
}

impl GradService {
    pub async fn create_document(&self, new: &NewDocument) -> Result<Document, DatabaseError> {
        require_text("name", &new.name)?;
        if let Some(ref university_id) = new.university_id {
            self.require_university(university_id).await?;
        }

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_DOCUMENT).await?;

        self.db()
            .execute(
                "INSERT INTO documents (id, user_id, university_id, name, doc_type, content, \
                 file_url, version, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 1, ?8, ?9)",
                libsql::params![
                    id.as_str(),
                    self.user_id(),
                    new.university_id.as_deref(),
                    new.name.as_str(),
                    new.doc_type.as_str(),
                    new.content.as_deref(),
                    new.file_url.as_deref(),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(Document {
            id,
            user_id: self.user_id().to_string(),
            university_id: new.university_id.clone(),
            name: new.name.clone(),
            doc_type: new.doc_type,
            content: new.content.clone(),
            file_url: new.file_url.clone(),
            version: 1,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_document(&self, id: &str) -> Result<Document, DatabaseError> {
        let (owner_filter, owner_params) = self.owner_filter("user_id", 2);
        let sql = format!("SELECT {SELECT_COLS} FROM documents WHERE id = ?1 {owner_filter}");
        let mut params: Vec<libsql::Value> = vec![id.into()];
        params.extend(owner_params);

        let mut rows = self.db().query(&sql, libsql::params_from_iter(params)).await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("document", id))?;
        row_to_document(&row)
    }

    /// The owner's documents, most recently updated first.
    pub async fn list_documents(&self, limit: Option<u32>) -> Result<Vec<Document>, DatabaseError> {
        let (owner_filter, owner_params) = self.owner_filter("user_id", 1);
        let limit_clause = limit.map(|l| format!("LIMIT {l}")).unwrap_or_default();
        let sql = format!(
            "SELECT {SELECT_COLS} FROM documents WHERE 1=1 {owner_filter}
             ORDER BY updated_at DESC {limit_clause}"
        );
        let mut rows = self
            .db()
            .query(&sql, libsql::params_from_iter(owner_params))
            .await?;

        let mut documents = Vec::new();
        while let Some(row) = rows.next().await? {
            documents.push(row_to_document(&row)?);
        }
        Ok(documents)
    }

    pub async fn list_documents_for_university(
        &self,
        university_id: &str,
    ) -> Result<Vec<Document>, DatabaseError> {
        self.require_university(university_id).await?;

        let mut rows = self
            .db()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM documents
                     WHERE university_id = ?1 AND user_id = ?2
                     ORDER BY updated_at DESC"
                ),
                libsql::params![university_id, self.user_id()],
            )
            .await?;

        let mut documents = Vec::new();
        while let Some(row) = rows.next().await? {
            documents.push(row_to_document(&row)?);
        }
        Ok(documents)
    }

    /// Partial update. With `bump_version`, a change to content or file also
    /// increments `version`.
    pub async fn update_document(
        &self,
        id: &str,
        update: &DocumentUpdate,
    ) -> Result<Document, DatabaseError> {
        let mut sets = SetClauses::default();

        if let Some(ref university_id) = update.university_id {
            if let Some(uid) = university_id {
                self.require_university(uid).await?;
            }
            sets.push("university_id", university_id.as_deref());
        }
        if let Some(ref name) = update.name {
            require_text("name", name)?;
            sets.push("name", name.as_str());
        }
        if let Some(doc_type) = update.doc_type {
            sets.push("doc_type", doc_type.as_str());
        }
        if let Some(ref content) = update.content {
            sets.push("content", content.as_deref());
        }
        if let Some(ref file_url) = update.file_url {
            sets.push("file_url", file_url.as_deref());
        }
        if update.bump_version && update.changes_body() {
            sets.push_raw("version = version + 1");
        }

        if sets.is_empty() {
            return self.get_document(id).await;
        }

        sets.push("updated_at", Utc::now().to_rfc3339());
        let id_idx = sets.next_idx();
        sets.extend_params([id.into()]);
        let (owner_filter, owner_params) = self.owner_filter("user_id", id_idx + 1);
        sets.extend_params(owner_params);
        let (set_sql, params) = sets.finish();

        let sql = format!("UPDATE documents SET {set_sql} WHERE id = ?{id_idx} {owner_filter}");
        let changed = self
            .db()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed == 0 {
            return Err(DatabaseError::not_found("document", id));
        }

        self.get_document(id).await
    }

    /// Increment `version` without changing anything else.
    pub async fn bump_document_version(&self, id: &str) -> Result<Document, DatabaseError> {
        let changed = self
            .db()
            .execute(
                "UPDATE documents SET version = version + 1, updated_at = ?1
                 WHERE id = ?2 AND user_id = ?3",
                libsql::params![Utc::now().to_rfc3339(), id, self.user_id()],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::not_found("document", id));
        }
        self.get_document(id).await
    }

    pub async fn delete_document(&self, id: &str) -> Result<(), DatabaseError> {
        let deleted = self
            .db()
            .execute(
                "DELETE FROM documents WHERE id = ?1 AND user_id = ?2",
                libsql::params![id, self.user_id()],
            )
            .await?;
        if deleted == 0 {
            return Err(DatabaseError::not_found("document", id));
        }
        Ok(())
    }
}
