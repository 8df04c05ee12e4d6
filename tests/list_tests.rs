use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use cakemail_client::{CakeMailError, ListStatus, ListsSortBy, SortDirection};
use common::{form_body, setup_test_client, TEST_API_KEY};

#[tokio::test]
async fn test_get_list_with_details() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/List/GetInfo"))
        .and(header("apikey", TEST_API_KEY))
        .and(form_body(&[
            ("user_key", "user-123"),
            ("list_id", "321"),
            ("no_details", "false"),
            ("with_engagement", "true"),
        ]))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": {
                "id": 321,
                "name": "Newsletter",
                "status": "active",
                "language": "en_US",
                "created_on": "2020-05-17 11:22:33",
                "sender_email": "news@example.com",
                "b_hb_limit": 1,
                "engagement": 0,
                "active": 1200,
                "bounced": 3
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let list = client
        .lists()
        .get("user-123", 321)
        .calculate_engagement(true)
        .send()
        .await
        .unwrap();

    assert_eq!(list.id, 321);
    assert_eq!(list.name, "Newsletter");
    assert_eq!(list.status.as_deref(), Some("active"));
    assert_eq!(list.engagement, Some(0));
    assert_eq!(list.active_count, Some(1200));
    assert_eq!(list.pending_count, None);
    assert_eq!(list.b_hb_limit, Some(1));
    assert!(list.created_on.is_some());
}

#[tokio::test]
async fn test_get_list_without_details() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/List/GetInfo"))
        .and(form_body(&[
            ("user_key", "user-123"),
            ("list_id", "321"),
            ("no_details", "true"),
            ("with_engagement", "false"),
            ("client_id", "9"),
        ]))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": { "id": 321, "name": "Newsletter" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let list = client
        .lists()
        .get("user-123", 321)
        .include_details(false)
        .client_id(9)
        .send()
        .await
        .unwrap();

    assert_eq!(list.active_count, None);
    assert_eq!(list.engagement, None);
}

#[tokio::test]
async fn test_list_lists_with_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/List/GetList"))
        .and(form_body(&[
            ("user_key", "user-123"),
            ("status", "archived"),
            ("name", "news"),
            ("sort_by", "created_on"),
            ("direction", "desc"),
            ("limit", "10"),
        ]))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": {
                "lists": [
                    { "id": 1, "name": "news 2019", "status": "archived" },
                    { "id": 2, "name": "news 2020", "status": "archived" }
                ]
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let lists = client
        .lists()
        .list("user-123")
        .status(ListStatus::Archived)
        .name("news")
        .sort_by(ListsSortBy::CreatedOn)
        .direction(SortDirection::Descending)
        .limit(10)
        .send()
        .await
        .unwrap();

    let names: Vec<&str> = lists.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["news 2019", "news 2020"]);
}

#[tokio::test]
async fn test_count_lists() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/List/GetList"))
        .and(form_body(&[
            ("user_key", "user-123"),
            ("count", "true"),
            ("status", "active"),
        ]))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": { "count": 14 }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let count = client
        .lists()
        .count("user-123")
        .status(ListStatus::Active)
        .send()
        .await
        .unwrap();

    assert_eq!(count, 14);
}

#[tokio::test]
async fn test_delete_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/List/Delete"))
        .and(form_body(&[("user_key", "user-123"), ("list_id", "321")]))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let deleted = client.lists().delete("user-123", 321).send().await.unwrap();
    assert!(deleted);
}

#[tokio::test]
async fn test_unknown_list_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/List/GetInfo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "failed",
            "data": "List ID not found"
        })))
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    match client.lists().get("user-123", 999).send().await {
        Err(CakeMailError::ApiError { message, .. }) => assert_eq!(message, "List ID not found"),
        other => panic!("expected ApiError, got {other:?}"),
    }
}
