use axum::http::Method;
use chrono::{Duration, Local, NaiveDate};
use client::{NoticeApi, NoticeForm, SubmitEndpoint, SubmitOutcome};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{
    fields, AppErrorKind, AttachmentFile, Department, NoticeType, TargetOption,
    CONNECTIVITY_MESSAGE, UNEXPECTED_MESSAGE,
};

use crate::common::{self, MockApi};

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn filled_form() -> NoticeForm {
    let mut form = NoticeForm::new();
    form.set_title("Quarterly town hall");
    form.set_body("Join us in the main hall at 4pm.");
    form.set_notice_type(Some(NoticeType::AdvisoryPersonalReminder));
    form.set_publish_date(Some(today()));
    form
}

fn created() -> serde_json::Value {
    json!({ "status": true, "statusCode": 201, "message": "Notice created" })
}

#[tokio::test]
async fn test_publish_all_departments_posts_one_multipart_request() {
    let mock = MockApi::builder()
        .reply(Method::POST, "/api/notices", 201, created())
        .start()
        .await;
    let mut form = filled_form();

    let outcome = form
        .submit(&mock.client, SubmitEndpoint::Publish, today())
        .await;

    assert_eq!(outcome, Some(SubmitOutcome::Published));
    let request = mock.only_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.text(fields::NOTICE_TITLE), vec!["Quarterly town hall"]);
    assert_eq!(request.text(fields::NOTICE_TYPE), vec!["ADVISORY_PERSONAL_REMINDER"]);
    let expected_date = today().format("%Y-%m-%d").to_string();
    assert_eq!(request.text(fields::PUBLISH_DATE), vec![expected_date.as_str()]);
    assert_eq!(request.text(fields::TARGET_DEPARTMENTS), vec!["ALL_DEPARTMENTS"]);
    assert!(request.text(fields::EMPLOYEE_ID).is_empty());
    assert!(request.files().is_empty());
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn test_department_selection_repeats_target_field() {
    let mock = MockApi::builder()
        .reply(Method::POST, "/api/notices", 200, created())
        .start()
        .await;
    let mut form = filled_form();
    form.select_target(TargetOption::Department(Department::Sales));
    form.select_target(TargetOption::Department(Department::It));

    form.submit(&mock.client, SubmitEndpoint::Publish, today())
        .await
        .expect("publish should succeed");

    assert_eq!(
        mock.only_request().text(fields::TARGET_DEPARTMENTS),
        vec!["SALES", "IT"]
    );
}

#[tokio::test]
async fn test_individual_draft_sends_employee_fields_and_files() {
    let mock = MockApi::builder()
        .reply(Method::POST, "/api/notices/drafts", 201, created())
        .start()
        .await;
    let mut form = filled_form();
    form.select_target(TargetOption::Individual);
    form.set_employee_id("EMP003");
    form.set_employee_name("Rina Das");
    form.set_position("Analyst");
    form.set_publish_date(Some(today() + Duration::days(3)));
    assert!(form.add_attachments(vec![
        AttachmentFile::new("memo.pdf", b"%PDF-1.4".to_vec()),
        AttachmentFile::new("badge.png", vec![0u8; 16]),
    ]));

    let outcome = form
        .submit(&mock.client, SubmitEndpoint::SaveDraft, today())
        .await;

    assert_eq!(outcome, Some(SubmitOutcome::Drafted));
    let request = mock.only_request();
    assert_eq!(request.path, "/api/notices/drafts");
    assert_eq!(request.text(fields::TARGET_DEPARTMENTS), vec!["INDIVIDUAL"]);
    assert_eq!(request.text(fields::EMPLOYEE_ID), vec!["EMP003"]);
    assert_eq!(request.text(fields::EMPLOYEE_NAME), vec!["Rina Das"]);
    assert_eq!(request.text(fields::POSITION), vec!["Analyst"]);

    let files = request.files();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].name, fields::ATTACHMENTS);
    assert_eq!(files[0].file_name.as_deref(), Some("memo.pdf"));
    assert_eq!(files[0].content_type.as_deref(), Some("application/pdf"));
    assert_eq!(files[0].size, 8);
    assert_eq!(files[1].content_type.as_deref(), Some("image/png"));
}

#[tokio::test]
async fn test_invalid_form_makes_no_request() {
    let mock = MockApi::builder().start().await;
    let mut form = filled_form();
    form.set_title("   ");
    form.set_publish_date(Some(today() - Duration::days(1)));

    let outcome = form
        .submit(&mock.client, SubmitEndpoint::Publish, today())
        .await;

    assert_eq!(outcome, None);
    assert!(mock.requests().is_empty());
    assert_eq!(form.error(fields::NOTICE_TITLE), Some("Notice Title is required"));
    assert_eq!(
        form.error(fields::PUBLISH_DATE),
        Some("Publish Date cannot be before today")
    );
}

#[tokio::test]
async fn test_server_field_errors_land_on_inputs() {
    let mock = MockApi::builder()
        .reply(
            Method::POST,
            "/api/notices",
            400,
            json!({
                "message": "Validation failed",
                "errors": { "noticeTitle": ["Title must be unique"] }
            }),
        )
        .start()
        .await;
    let mut form = filled_form();

    let outcome = form
        .submit(&mock.client, SubmitEndpoint::Publish, today())
        .await;

    assert_eq!(outcome, None);
    assert_eq!(form.error(fields::NOTICE_TITLE), Some("Title must be unique"));
    assert_eq!(form.banner(), None);
}

#[tokio::test]
async fn test_server_message_becomes_banner() {
    let mock = MockApi::builder()
        .reply(
            Method::POST,
            "/api/notices",
            409,
            json!({ "message": "A notice with this title already exists" }),
        )
        .start()
        .await;
    let mut form = filled_form();

    form.submit(&mock.client, SubmitEndpoint::Publish, today())
        .await;

    assert_eq!(form.banner(), Some("A notice with this title already exists"));
    assert!(form.errors().is_empty());
}

#[tokio::test]
async fn test_other_success_status_is_unexpected() {
    let mock = MockApi::builder()
        .reply(Method::POST, "/api/notices", 202, json!({}))
        .start()
        .await;
    let mut form = filled_form();

    let outcome = form
        .submit(&mock.client, SubmitEndpoint::Publish, today())
        .await;

    assert_eq!(outcome, None);
    assert_eq!(form.banner(), Some(UNEXPECTED_MESSAGE));
}

#[tokio::test]
async fn test_unreachable_api_shows_connectivity_banner() {
    let client = common::unreachable_client().await;
    let mut form = filled_form();

    let outcome = form.submit(&client, SubmitEndpoint::SaveDraft, today()).await;

    assert_eq!(outcome, None);
    assert_eq!(form.banner(), Some(CONNECTIVITY_MESSAGE));
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn test_stalled_api_times_out_with_connectivity_banner() {
    let client = common::stalled_client().await;
    let mut form = filled_form();

    let submission = form.begin_submit(today()).expect("valid draft");
    let result = client.submit_notice(SubmitEndpoint::Publish, &submission).await;
    let err = result.clone().unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Connectivity);
    assert_eq!(err.message, CONNECTIVITY_MESSAGE);

    form.finish_submit(SubmitEndpoint::Publish, result);
    assert_eq!(form.outcome(), None);
    assert_eq!(form.banner(), Some(CONNECTIVITY_MESSAGE));
    assert!(!form.is_submitting());
}
