//! On-disk behavior: data survives reopen and owners stay isolated.

use chrono::NaiveDate;
use grad_core::enums::{ApplicationStatus, DeadlineType, DocumentType};
use grad_core::identity::Owner;
use grad_db::repos::{NewDeadline, NewDocument, NewUniversity, PostGradInput, RequirementInput};
use grad_db::service::GradService;
use grad_db::updates::deadline::DeadlineUpdateBuilder;
use grad_db::updates::document::DocumentUpdateBuilder;
use pretty_assertions::assert_eq;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn stanford() -> NewUniversity {
    NewUniversity {
        name: "Stanford University".into(),
        program_name: "MS Statistics".into(),
        location: "Stanford, CA".into(),
        deadline: day(2024, 12, 3),
        status: ApplicationStatus::Applied,
        ..Default::default()
    }
}

#[tokio::test]
async fn data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gradtrack.db");
    let path = path.to_str().unwrap();

    let uni_id = {
        let svc = GradService::new_local(path, Owner::new("local")).await.unwrap();
        let uni = svc.create_university(&stanford()).await.unwrap();
        svc.create_deadline(&NewDeadline {
            university_id: uni.id.clone(),
            title: "Application".into(),
            date: day(2024, 12, 3),
            deadline_type: DeadlineType::Application,
            ..Default::default()
        })
        .await
        .unwrap();
        uni.id
    };

    let svc = GradService::new_local(path, Owner::new("local")).await.unwrap();
    let uni = svc.get_university(&uni_id).await.unwrap();
    assert_eq!(uni.name, "Stanford University");
    assert_eq!(uni.status, ApplicationStatus::Applied);
    assert_eq!(svc.list_deadlines_for_university(&uni_id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn owners_share_a_file_but_not_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shared.db");
    let path = path.to_str().unwrap();

    let alice = GradService::new_local(path, Owner::new("alice")).await.unwrap();
    let bob = GradService::new_local(path, Owner::new("bob")).await.unwrap();

    let uni = alice.create_university(&stanford()).await.unwrap();

    assert!(bob.list_universities(None).await.unwrap().is_empty());
    assert!(bob.get_university(&uni.id).await.unwrap_err().is_not_found());

    // Bob cannot hang his own rows off Alice's university.
    let err = bob
        .create_deadline(&NewDeadline {
            university_id: uni.id.clone(),
            title: "Sneaky".into(),
            date: day(2024, 12, 1),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    assert_eq!(alice.list_universities(None).await.unwrap().len(), 1);
}

#[tokio::test]
async fn child_rows_of_other_owners_behave_as_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shared.db");
    let path = path.to_str().unwrap();

    let alice = GradService::new_local(path, Owner::new("alice")).await.unwrap();
    let bob = GradService::new_local(path, Owner::new("bob")).await.unwrap();

    let uni = alice.create_university(&stanford()).await.unwrap();
    let deadline = alice
        .create_deadline(&NewDeadline {
            university_id: uni.id.clone(),
            title: "Application".into(),
            date: day(2024, 12, 3),
            ..Default::default()
        })
        .await
        .unwrap();
    let doc = alice
        .create_document(&NewDocument {
            university_id: Some(uni.id.clone()),
            name: "Stanford SOP".into(),
            doc_type: DocumentType::Sop,
            content: Some("Draft".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    alice
        .upsert_requirement(&uni.id, &RequirementInput { gre: 320, ..Default::default() })
        .await
        .unwrap();
    alice
        .upsert_post_grad(&uni.id, &PostGradInput { opt_eligible: true, ..Default::default() })
        .await
        .unwrap();

    // Writes that point at Alice's university.
    let doc_err = bob
        .create_document(&NewDocument {
            university_id: Some(uni.id.clone()),
            name: "Mine".into(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(doc_err.is_not_found());
    assert!(
        bob.upsert_requirement(&uni.id, &RequirementInput::default())
            .await
            .unwrap_err()
            .is_not_found()
    );
    assert!(
        bob.upsert_post_grad(&uni.id, &PostGradInput::default())
            .await
            .unwrap_err()
            .is_not_found()
    );

    let own = bob.create_university(&stanford()).await.unwrap();
    let own_deadline = bob
        .create_deadline(&NewDeadline {
            university_id: own.id.clone(),
            title: "Mine".into(),
            date: day(2024, 12, 1),
            ..Default::default()
        })
        .await
        .unwrap();
    let moved = DeadlineUpdateBuilder::new().university_id(uni.id.clone()).build();
    assert!(
        bob.update_deadline(&own_deadline.id, &moved)
            .await
            .unwrap_err()
            .is_not_found()
    );
    let own_doc = bob
        .create_document(&NewDocument {
            name: "CV".into(),
            doc_type: DocumentType::Cv,
            ..Default::default()
        })
        .await
        .unwrap();
    let attached = DocumentUpdateBuilder::new().university_id(Some(uni.id.clone())).build();
    assert!(
        bob.update_document(&own_doc.id, &attached)
            .await
            .unwrap_err()
            .is_not_found()
    );

    // Reads and deletes of Alice's rows.
    assert!(bob.get_deadline(&deadline.id).await.unwrap_err().is_not_found());
    assert!(
        bob.set_deadline_completed(&deadline.id, true)
            .await
            .unwrap_err()
            .is_not_found()
    );
    assert!(bob.delete_deadline(&deadline.id).await.unwrap_err().is_not_found());
    let bob_deadlines: Vec<String> = bob
        .list_deadlines(None)
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.deadline.id)
        .collect();
    assert_eq!(bob_deadlines, vec![own_deadline.id.clone()]);

    assert!(bob.get_document(&doc.id).await.unwrap_err().is_not_found());
    assert!(bob.bump_document_version(&doc.id).await.unwrap_err().is_not_found());
    assert!(bob.delete_document(&doc.id).await.unwrap_err().is_not_found());
    let bob_docs: Vec<String> = bob
        .list_documents(None)
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.id)
        .collect();
    assert_eq!(bob_docs, vec![own_doc.id.clone()]);

    assert!(
        bob.get_requirement_for_university(&uni.id)
            .await
            .unwrap_err()
            .is_not_found()
    );
    assert!(bob.list_requirements().await.unwrap().is_empty());
    assert!(bob.delete_requirement(&uni.id).await.unwrap_err().is_not_found());
    assert!(
        bob.get_post_grad_for_university(&uni.id)
            .await
            .unwrap_err()
            .is_not_found()
    );
    assert!(bob.list_post_grad().await.unwrap().is_empty());
    assert!(bob.delete_post_grad(&uni.id).await.unwrap_err().is_not_found());

    // Alice's rows are untouched.
    let kept = alice.get_deadline(&deadline.id).await.unwrap();
    assert!(!kept.deadline.completed);
    assert_eq!(alice.get_document(&doc.id).await.unwrap().version, 1);
    assert_eq!(alice.get_requirement_for_university(&uni.id).await.unwrap().gre, 320);
    assert!(alice.get_post_grad_for_university(&uni.id).await.unwrap().opt_eligible);
}
