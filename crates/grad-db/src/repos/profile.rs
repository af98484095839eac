//! Profile repository. The profile id is the owner id.

use chrono::Utc;

use grad_core::entities::Profile;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime};
use crate::service::GradService;
use crate::updates::SetClauses;
use crate::updates::profile::ProfileUpdate;

fn row_to_profile(row: &libsql::Row) -> Result<Profile, DatabaseError> {
    Ok(Profile {
        id: row.get::<String>(0)?,
        email: get_opt_string(row, 1)?,
        full_name: get_opt_string(row, 2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
        updated_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl GradService {
    /// Create the owner's profile if missing; an existing row is left as is.
    pub async fn ensure_profile(
        &self,
        email: Option<&str>,
        full_name: Option<&str>,
    ) -> Result<Profile, DatabaseError> {
        let now = Utc::now().to_rfc3339();
        let inserted = self
            .db()
            .execute(
                "INSERT OR IGNORE INTO profiles (id, email, full_name, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![self.user_id(), email, full_name, now.as_str(), now.as_str()],
            )
            .await?;
        if inserted > 0 {
            tracing::info!(user_id = self.user_id(), "created profile");
        }
        self.get_profile().await
    }

    pub async fn get_profile(&self) -> Result<Profile, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                "SELECT id, email, full_name, created_at, updated_at FROM profiles WHERE id = ?1",
                [self.user_id()],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("profile", self.user_id()))?;
        row_to_profile(&row)
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile, DatabaseError> {
        let mut sets = SetClauses::default();
        if let Some(ref email) = update.email {
            sets.push("email", email.as_deref());
        }
        if let Some(ref full_name) = update.full_name {
            sets.push("full_name", full_name.as_deref());
        }
        if sets.is_empty() {
            return self.get_profile().await;
        }

        sets.push("updated_at", Utc::now().to_rfc3339());
        let id_idx = sets.next_idx();
        sets.extend_params([self.user_id().into()]);
        let (set_sql, params) = sets.finish();

        let changed = self
            .db()
            .execute(
                &format!("UPDATE profiles SET {set_sql} WHERE id = ?{id_idx}"),
                libsql::params_from_iter(params),
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::not_found("profile", self.user_id()));
        }
        self.get_profile().await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{test_service, test_service_for};
    use crate::updates::profile::ProfileUpdateBuilder;

    #[tokio::test]
    async fn ensure_is_idempotent() {
        let svc = test_service().await;
        assert!(svc.get_profile().await.unwrap_err().is_not_found());

        let first = svc.ensure_profile(Some("ada@example.com"), None).await.unwrap();
        assert_eq!(first.id, "tester");
        assert_eq!(first.email.as_deref(), Some("ada@example.com"));

        let again = svc.ensure_profile(Some("other@example.com"), None).await.unwrap();
        assert_eq!(again.email.as_deref(), Some("ada@example.com"));
    }

    #[tokio::test]
    async fn profile_id_follows_owner() {
        let svc = test_service_for("grace").await;
        let profile = svc.ensure_profile(None, Some("Grace Hopper")).await.unwrap();
        assert_eq!(profile.id, "grace");
        assert_eq!(profile.full_name.as_deref(), Some("Grace Hopper"));
    }

    #[tokio::test]
    async fn update_sets_and_clears() {
        let svc = test_service().await;
        svc.ensure_profile(None, None).await.unwrap();

        let named = svc
            .update_profile(
                &ProfileUpdateBuilder::new()
                    .full_name(Some("Ada Lovelace".into()))
                    .email(Some("ada@example.com".into()))
                    .build(),
            )
            .await
            .unwrap();
        assert_eq!(named.full_name.as_deref(), Some("Ada Lovelace"));

        let cleared = svc
            .update_profile(&ProfileUpdateBuilder::new().email(None).build())
            .await
            .unwrap();
        assert_eq!(cleared.email, None);
        assert_eq!(cleared.full_name.as_deref(), Some("Ada Lovelace"));
    }

    #[tokio::test]
    async fn update_without_profile_is_not_found() {
        let svc = test_service().await;
        let err = svc
            .update_profile(&ProfileUpdateBuilder::new().email(None).build())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
