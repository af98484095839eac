//! Shared test utilities for grad-db unit tests.

use chrono::NaiveDate;
use grad_core::identity::Owner;
use grad_core::entities::University;

use crate::GradDb;
use crate::repos::university::NewUniversity;
use crate::service::GradService;

/// In-memory service owned by `"tester"`.
pub async fn test_service() -> GradService {
    test_service_for("tester").await
}

pub async fn test_service_for(user_id: &str) -> GradService {
    let db = GradDb::open_local(":memory:").await.unwrap();
    GradService::from_db(db, Owner::new(user_id))
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Insert a university with sensible defaults.
pub async fn seed_university(svc: &GradService, name: &str, deadline: NaiveDate) -> University {
    svc.create_university(&NewUniversity {
        name: name.into(),
        program_name: "MS Computer Science".into(),
        location: "Boston, MA".into(),
        deadline,
        ..Default::default()
    })
    .await
    .unwrap()
}
