use axum::http::Method;
use client::{DraftList, NoticeApi, NoticeList};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{
    AppErrorKind, NoticeFilters, NoticeStatus, CONNECTIVITY_MESSAGE, LIST_FAILED_MESSAGE,
};

use crate::common::{self, MockApi};

fn three_pages() -> serde_json::Value {
    json!({
        "currentPage": 2,
        "totalPages": 3,
        "totalCount": 25,
        "hasNextPage": true,
        "hasPrevPage": true
    })
}

#[tokio::test]
async fn test_list_sends_page_and_non_empty_filters() {
    let mock = MockApi::builder()
        .reply(
            Method::GET,
            "/api/notices",
            200,
            common::page_json(
                vec![common::notice_json("n1", "Salary revision", "published")],
                three_pages(),
            ),
        )
        .start()
        .await;

    let filters = NoticeFilters {
        department: "HR".into(),
        search: "EMP002".into(),
        status: "published".into(),
        publish_date: String::new(),
    };
    let page = mock.client.list_notices(Some(2), &filters).await.unwrap();

    let request = mock.only_request();
    assert_eq!(
        request.query_pairs(),
        vec![
            ("page", "2"),
            ("status", "published"),
            ("department", "HR"),
            ("search", "EMP002"),
        ]
    );
    assert_eq!(page.notices.len(), 1);
    assert_eq!(page.notices[0].status, NoticeStatus::Published);
    assert_eq!(page.total_count(), 25);
    assert_eq!(page.visible_pagination().map(|p| p.total_pages), Some(3));
}

#[tokio::test]
async fn test_first_page_without_filters_sends_no_query() {
    let mock = MockApi::builder()
        .reply(
            Method::GET,
            "/api/notices",
            200,
            common::envelope(json!({ "notices": [] })),
        )
        .start()
        .await;

    let page = mock
        .client
        .list_notices(None, &NoticeFilters::default())
        .await
        .unwrap();

    assert!(mock.only_request().query.is_empty());
    assert!(page.notices.is_empty());
    assert!(page.visible_pagination().is_none());
}

#[tokio::test]
async fn test_envelope_404_is_not_found() {
    let mock = MockApi::builder()
        .reply(
            Method::GET,
            "/api/notices",
            200,
            json!({ "status": false, "statusCode": 404, "message": "No notices for this filter" }),
        )
        .start()
        .await;

    let err = mock
        .client
        .list_notices(None, &NoticeFilters::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.message, "No notices for this filter");
}

#[tokio::test]
async fn test_http_404_is_not_found() {
    let mock = MockApi::builder()
        .reply(
            Method::GET,
            "/api/notices",
            404,
            json!({ "message": "Page not found" }),
        )
        .start()
        .await;

    let err = mock
        .client
        .list_notices(Some(9), &NoticeFilters::default())
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.message, "Page not found");
}

#[tokio::test]
async fn test_unsuccessful_envelope_uses_server_message() {
    let mock = MockApi::builder()
        .reply(
            Method::GET,
            "/api/notices",
            200,
            json!({ "status": false, "statusCode": 500, "message": "Database unavailable" }),
        )
        .start()
        .await;

    let err = mock
        .client
        .list_notices(None, &NoticeFilters::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Server);
    assert_eq!(err.message, "Database unavailable");
}

#[tokio::test]
async fn test_server_error_without_message_falls_back() {
    let mock = MockApi::builder()
        .reply(Method::GET, "/api/notices", 500, json!({}))
        .start()
        .await;

    let err = mock
        .client
        .list_notices(None, &NoticeFilters::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Server);
    assert_eq!(err.message, LIST_FAILED_MESSAGE);
}

#[tokio::test]
async fn test_unreachable_api_is_connectivity_error() {
    let client = common::unreachable_client().await;

    let err = client
        .list_notices(None, &NoticeFilters::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Connectivity);
}

#[tokio::test]
async fn test_stalled_api_times_out_as_connectivity_error() {
    let client = common::stalled_client().await;

    let err = client
        .list_notices(None, &NoticeFilters::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Connectivity);
    assert_eq!(err.message, CONNECTIVITY_MESSAGE);
}

#[tokio::test]
async fn test_unknown_status_row_keeps_page() {
    let mock = MockApi::builder()
        .reply(
            Method::GET,
            "/api/notices",
            200,
            common::page_json(
                vec![
                    common::notice_json("n1", "Salary revision", "published"),
                    common::notice_json("n2", "Old handbook", "archived"),
                ],
                json!({ "currentPage": 1, "totalPages": 1, "totalCount": 2 }),
            ),
        )
        .start()
        .await;

    let page = mock
        .client
        .list_notices(None, &NoticeFilters::default())
        .await
        .unwrap();
    let mut list = NoticeList::new(page);

    assert_eq!(list.notices().len(), 2);
    assert_eq!(list.notices()[1].status, NoticeStatus::Other("archived".into()));
    assert_eq!(list.notices()[1].status.label(), "archived");
    assert_eq!(list.published_count(), 1);
    assert_eq!(list.unpublished_count(), 0);
    assert_eq!(list.begin_toggle("n2"), None);
}

#[tokio::test]
async fn test_null_publish_date_row_keeps_page() {
    let mut undated = common::notice_json("n2", "Undated memo", "unpublished");
    undated["publishDate"] = json!(null);
    let mock = MockApi::builder()
        .reply(
            Method::GET,
            "/api/notices",
            200,
            common::page_json(
                vec![common::notice_json("n1", "Salary revision", "published"), undated],
                json!({ "currentPage": 1, "totalPages": 1, "totalCount": 2 }),
            ),
        )
        .start()
        .await;

    let page = mock
        .client
        .list_notices(None, &NoticeFilters::default())
        .await
        .unwrap();

    assert_eq!(page.notices.len(), 2);
    assert_eq!(page.notices[0].publish_date, "2026-03-10");
    assert_eq!(page.notices[1].publish_date, "");
    assert_eq!(page.notices[1].status, NoticeStatus::Unpublished);
}

#[tokio::test]
async fn test_drafts_listing_uses_drafts_endpoint() {
    let mock = MockApi::builder()
        .reply(
            Method::GET,
            "/api/notices/drafts",
            200,
            common::page_json(
                vec![
                    common::notice_json("d1", "Leave policy", "draft"),
                    common::notice_json("d2", "Bonus", "draft"),
                ],
                json!({ "currentPage": 1, "totalPages": 1, "totalCount": 2 }),
            ),
        )
        .start()
        .await;

    let page = mock.client.list_drafts(None).await.unwrap();
    let drafts = DraftList::new(page);

    let request = mock.only_request();
    assert_eq!(request.path, "/api/notices/drafts");
    assert!(request.query.is_empty());
    assert_eq!(drafts.notices().len(), 2);
    assert_eq!(drafts.total_count(), 2);
}

#[tokio::test]
async fn test_refetched_page_replaces_rows() {
    let mock = MockApi::builder()
        .reply(
            Method::GET,
            "/api/notices",
            200,
            common::page_json(
                vec![
                    common::notice_json("n1", "Salary revision", "published"),
                    common::notice_json("n2", "Office move", "unpublished"),
                ],
                three_pages(),
            ),
        )
        .start()
        .await;

    let mut list = NoticeList::default();
    list.toggle_all();
    let page = mock
        .client
        .list_notices(Some(2), &NoticeFilters::default())
        .await
        .unwrap();
    list.replace_page(page);

    assert_eq!(list.ids().collect::<Vec<_>>(), vec!["n1", "n2"]);
    assert_eq!(list.published_count(), 1);
    assert_eq!(list.rows().selected_count(), 0);
}
