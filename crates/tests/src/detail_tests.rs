use axum::http::Method;
use client::{DetailFetcher, DetailState};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::DETAIL_FAILED_MESSAGE;

use crate::common::{self, MockApi};

#[tokio::test]
async fn test_detail_loads_body_and_attachments() {
    let mut notice = common::notice_json("n1", "Salary revision", "published");
    notice["noticeBody"] = json!("Revised pay scales apply from April.");
    notice["createdAt"] = json!("2026-03-01T09:30:00.000Z");
    notice["attachments"] = json!([
        { "_id": "a1", "filePath": "uploads\\scales.pdf", "fileName": "scales.pdf" },
        { "filePath": "uploads/extra.png" }
    ]);
    let mock = MockApi::builder()
        .reply(
            Method::GET,
            "/api/notices/n1",
            200,
            common::envelope(json!({ "notice": notice })),
        )
        .start()
        .await;

    let mut detail = DetailFetcher::new();
    detail.load(&mock.client, "n1").await;

    let loaded = detail.notice().expect("notice should be loaded");
    assert_eq!(
        loaded.notice_body.as_deref(),
        Some("Revised pay scales apply from April.")
    );
    assert_eq!(loaded.attachments.len(), 2);
    assert_eq!(loaded.attachments[0].href(), "uploads/scales.pdf");
    assert_eq!(loaded.attachments[1].label(1), "Attachment 2");
    assert_eq!(mock.only_request().path, "/api/notices/n1");
}

#[tokio::test]
async fn test_missing_notice_shows_failure_and_retries_same_id() {
    let mock = MockApi::builder()
        .reply(
            Method::GET,
            "/api/notices/gone",
            404,
            json!({ "message": "Notice not found" }),
        )
        .start()
        .await;

    let mut detail = DetailFetcher::new();
    detail.load(&mock.client, "gone").await;

    assert_eq!(
        detail.state(),
        &DetailState::Failed {
            id: "gone".into(),
            message: "Notice not found".into(),
        }
    );
    let retry = detail.retry().expect("retry after failure");
    assert_eq!(retry.id, "gone");
}

#[tokio::test]
async fn test_success_envelope_without_data_is_unexpected() {
    let mock = MockApi::builder()
        .reply(
            Method::GET,
            "/api/notices/n1",
            200,
            json!({ "status": true, "statusCode": 200 }),
        )
        .start()
        .await;

    let mut detail = DetailFetcher::new();
    detail.load(&mock.client, "n1").await;

    assert_eq!(
        detail.state(),
        &DetailState::Failed {
            id: "n1".into(),
            message: DETAIL_FAILED_MESSAGE.into(),
        }
    );
}
