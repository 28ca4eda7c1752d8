// ABOUTME: Event resource tests covering every operation shape
// ABOUTME: Pins pagination clamping, the create-via-redirect rule, and update/delete results
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde_json::json;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use podium_client::resources::events;
use podium_client::{Error, FetchOptions, ListOptions, PodiumClient, PodiumConfig, PodiumToken};

fn client_for(server: &MockServer) -> PodiumClient {
    let config = PodiumConfig::new("test_id", "test_secret").with_base_url(server.uri());
    PodiumClient::new(config).unwrap()
}

fn token() -> PodiumToken {
    PodiumToken::new("test_token", "test_type", 1)
}

fn event_record() -> serde_json::Value {
    json!({
        "id": "test",
        "URI": "test/events/test",
        "devices_uri": "test/devices",
        "title": "test title",
        "start_time": "test_time",
        "end_time": "test_end",
        "venue_uri": "test/venue",
        "private": false,
    })
}

#[tokio::test]
async fn list_uses_the_default_collection_and_clamps_per_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/events"))
        .and(header("Authorization", "Bearer test_token"))
        .and(query_param("start", "0"))
        .and(query_param("per_page", "100"))
        .and(query_param("expand", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "events": [event_record()],
            "total": 1,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    // 150 exceeds the server maximum and must go out as 100.
    let options = ListOptions::window(0, 150);
    let page = events::list_events(&client, &token(), None, &options)
        .await
        .unwrap();

    assert_eq!(page.len(), 1);
    assert_eq!(page.total, 1);
    assert_eq!(page.payload_name, "events");
    assert_eq!(page.next_uri, None);
    assert_eq!(page.prev_uri, None);
    assert_eq!(page.payload[0].event_id, "test");
    assert_eq!(page.payload[0].uri, "test/events/test");
}

#[tokio::test]
async fn list_follows_an_explicit_endpoint_with_its_own_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/events"))
        .and(query_param("start", "20"))
        .and(query_param("per_page", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "events": [],
            "total": 40,
            "prevURI": "prev-page",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let endpoint = format!("{}/api/v1/events?start=20&per_page=20", server.uri());
    let options = ListOptions {
        expand: None,
        ..ListOptions::default()
    };
    let page = events::list_events(&client, &token(), Some(&endpoint), &options)
        .await
        .unwrap();
    assert!(page.is_empty());
    assert_eq!(page.total, 40);
    assert_eq!(page.prev_uri.as_deref(), Some("prev-page"));
}

#[tokio::test]
async fn get_maps_the_named_payload_with_renames() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/events/test"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "event": event_record() })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let uri = format!("{}/api/v1/events/test", server.uri());
    let event = events::get_event(&client, &token(), &uri, &FetchOptions::default())
        .await
        .unwrap();
    assert_eq!(event.event_id, "test");
    assert_eq!(event.uri, "test/events/test");
    assert_eq!(event.title.as_deref(), Some("test title"));
    assert_eq!(event.venue_uri.as_deref(), Some("test/venue"));
    assert_eq!(event.private, Some(false));
}

#[tokio::test]
async fn create_resolves_only_through_the_redirect() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/events"))
        .and(body_string(
            "event%5Btitle%5D=test+event&event%5Bstart_time%5D=2016-06-27&event%5Bend_time%5D=2016-06-28",
        ))
        .respond_with(
            ResponseTemplate::new(302).insert_header("Location", "test/events/new"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let redirect = events::create_event(
        &client,
        &token(),
        "test event",
        "2016-06-27",
        "2016-06-28",
        None,
    )
    .await
    .unwrap();
    assert_eq!(redirect.location, "test/events/new");
    assert_eq!(redirect.object_type, "event");
}

#[tokio::test]
async fn create_without_a_redirect_is_an_error_even_with_a_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/events"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "event": event_record() })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = events::create_event(&client, &token(), "t", "s", "e", None)
        .await
        .unwrap_err();
    assert!(matches!(error, Error::MissingLocation));
}

#[tokio::test]
async fn update_sends_only_supplied_fields_and_returns_the_uri() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/events/test"))
        .and(body_string("event%5Btitle%5D=new_title"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "event updated",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let uri = format!("{}/api/v1/events/test", server.uri());
    let update = events::EventUpdate {
        title: Some("new_title".to_owned()),
        ..events::EventUpdate::default()
    };
    let (raw, updated_uri) = events::update_event(&client, &token(), &uri, &update)
        .await
        .unwrap();
    assert_eq!(raw["message"], "event updated");
    assert_eq!(updated_uri, uri);
}

#[tokio::test]
async fn delete_resolves_to_the_targeted_uri_not_the_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/events/test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "event deleted",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let uri = format!("{}/api/v1/events/test", server.uri());
    let deleted = events::delete_event(&client, &token(), &uri).await.unwrap();
    assert_eq!(deleted, uri);
}
