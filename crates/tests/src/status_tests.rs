use axum::http::Method;
use client::{DraftList, NoticeApi, NoticeList};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{NoticeFilters, NoticeStatus, PUBLISH_FAILED_MESSAGE};

use crate::common::{self, MockApi};

async fn loaded_list(mock: &MockApi) -> NoticeList {
    let page = mock
        .client
        .list_notices(None, &NoticeFilters::default())
        .await
        .unwrap();
    NoticeList::new(page)
}

fn listing() -> serde_json::Value {
    common::page_json(
        vec![
            common::notice_json("n1", "Salary revision", "published"),
            common::notice_json("n2", "Office move", "unpublished"),
        ],
        json!({ "currentPage": 1, "totalPages": 1, "totalCount": 2 }),
    )
}

#[tokio::test]
async fn test_toggle_patches_opposite_status() {
    let mock = MockApi::builder()
        .reply(Method::GET, "/api/notices", 200, listing())
        .reply(
            Method::PATCH,
            "/api/notices/n1/status",
            200,
            json!({ "status": true, "statusCode": 200, "message": "Status updated" }),
        )
        .start()
        .await;
    let mut list = loaded_list(&mock).await;

    assert!(list.toggle_status(&mock.client, "n1").await);

    let requests = mock.requests();
    let patch = &requests[1];
    assert_eq!(patch.method, Method::PATCH);
    assert_eq!(patch.path, "/api/notices/n1/status");
    assert_eq!(patch.json, Some(json!({ "status": "unpublished" })));
    assert_eq!(list.notices()[0].status, NoticeStatus::Unpublished);
}

#[tokio::test]
async fn test_failed_toggle_reports_on_its_row() {
    let mock = MockApi::builder()
        .reply(Method::GET, "/api/notices", 200, listing())
        .reply(
            Method::PATCH,
            "/api/notices/n2/status",
            409,
            json!({ "message": "Notice is locked" }),
        )
        .start()
        .await;
    let mut list = loaded_list(&mock).await;

    assert!(!list.toggle_status(&mock.client, "n2").await);

    assert_eq!(list.rows().error("n2"), Some("Notice is locked"));
    assert_eq!(list.rows().error("n1"), None);
    assert_eq!(list.notices()[1].status, NoticeStatus::Unpublished);
    assert!(!list.rows().is_pending("n2"));
}

#[tokio::test]
async fn test_ids_are_path_escaped() {
    let mock = MockApi::builder()
        .reply(
            Method::PATCH,
            "/api/notices/a%20b/status",
            200,
            json!({ "status": true, "statusCode": 200 }),
        )
        .start()
        .await;

    mock.client
        .set_status("a b", NoticeStatus::Published)
        .await
        .unwrap();

    assert_eq!(mock.only_request().path, "/api/notices/a%20b/status");
}

fn drafts_page() -> serde_json::Value {
    common::page_json(
        vec![
            common::notice_json("d1", "Leave policy", "draft"),
            common::notice_json("d2", "Bonus", "draft"),
        ],
        json!({ "currentPage": 1, "totalPages": 1, "totalCount": 2 }),
    )
}

#[tokio::test]
async fn test_publish_draft_patches_publish_endpoint() {
    let mock = MockApi::builder()
        .reply(Method::GET, "/api/notices/drafts", 200, drafts_page())
        .reply(
            Method::PATCH,
            "/api/notices/drafts/d1/publish",
            200,
            json!({ "status": true, "statusCode": 200, "message": "Notice published" }),
        )
        .start()
        .await;

    let mut drafts = DraftList::new(mock.client.list_drafts(None).await.unwrap());

    assert!(drafts.publish(&mock.client, "d1").await);

    let requests = mock.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].method, Method::PATCH);
    assert_eq!(requests[1].path, "/api/notices/drafts/d1/publish");
    assert!(!drafts.rows().is_pending("d1"));
}

#[tokio::test]
async fn test_rejected_publish_falls_back_to_default_message() {
    let mock = MockApi::builder()
        .reply(Method::GET, "/api/notices/drafts", 200, drafts_page())
        .reply(
            Method::PATCH,
            "/api/notices/drafts/d2/publish",
            200,
            json!({ "status": false, "statusCode": 400 }),
        )
        .start()
        .await;

    let mut drafts = DraftList::new(mock.client.list_drafts(None).await.unwrap());

    assert!(!drafts.publish(&mock.client, "d2").await);
    assert_eq!(drafts.rows().error("d2"), Some(PUBLISH_FAILED_MESSAGE));
    assert_eq!(drafts.notices().len(), 2);
}
