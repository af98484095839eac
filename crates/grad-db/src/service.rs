//! Service layer scoping every statement to one owner.
//!
//! `GradService` wraps `GradDb` and the active [`Owner`]. All repo methods are
//! implemented as `impl GradService` blocks in [`crate::repos`].

use grad_core::identity::Owner;

use crate::GradDb;
use crate::error::DatabaseError;

pub struct GradService {
    db: GradDb,
    owner: Owner,
}

impl GradService {
    /// Open a local database for `owner`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str, owner: Owner) -> Result<Self, DatabaseError> {
        let db = GradDb::open_local(db_path).await?;
        Ok(Self { db, owner })
    }

    #[must_use]
    pub const fn from_db(db: GradDb, owner: Owner) -> Self {
        Self { db, owner }
    }

    #[must_use]
    pub const fn db(&self) -> &GradDb {
        &self.db
    }

    #[must_use]
    pub const fn owner(&self) -> &Owner {
        &self.owner
    }

    pub(crate) fn user_id(&self) -> &str {
        &self.owner.user_id
    }

    /// `AND <column> = ?N` clause plus its parameter.
    ///
    /// `column` is `user_id` or an alias-qualified form like `d.user_id`.
    pub(crate) fn owner_filter(
        &self,
        column: &str,
        start_idx: usize,
    ) -> (String, Vec<libsql::Value>) {
        (
            format!("AND {column} = ?{start_idx}"),
            vec![self.owner.user_id.as_str().into()],
        )
    }

    /// Fail with `NotFound` unless the owner has a university with this id.
    pub(crate) async fn require_university(&self, university_id: &str) -> Result<(), DatabaseError> {
        let mut rows = self
            .db
            .query(
                "SELECT 1 FROM universities WHERE id = ?1 AND user_id = ?2",
                libsql::params![university_id, self.user_id()],
            )
            .await?;
        if rows.next().await?.is_none() {
            return Err(DatabaseError::not_found("university", university_id));
        }
        Ok(())
    }
}
