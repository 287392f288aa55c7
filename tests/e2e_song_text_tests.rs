//! End-to-end tests for verse pagination of song lyrics

mod common;

use common::{TestClient, TestServer, KNOWN_GROUP, KNOWN_SONG};
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn text_page(client: &TestClient, id: i64, query: &[(&str, &str)]) -> Value {
    let response = client.get_song_text(&id.to_string(), query).await;
    assert_eq!(response.status(), StatusCode::OK);
    response.json().await.unwrap()
}

#[tokio::test]
async fn test_text_defaults_to_first_verse() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());
    let id = client.add_song_id(KNOWN_GROUP, KNOWN_SONG).await;

    let verses = text_page(&client, id, &[]).await;
    assert_eq!(
        verses,
        json!(["Ooh baby, don't you know I suffer?\nOoh baby, can you hear me moan?"])
    );
}

#[tokio::test]
async fn test_text_pages_through_verses() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());
    let id = client.add_song_id(KNOWN_GROUP, KNOWN_SONG).await;

    assert_eq!(
        text_page(&client, id, &[("page", "2")]).await,
        json!(["Ooh\nWe're so cold"])
    );
    assert_eq!(
        text_page(&client, id, &[("page", "2"), ("limit", "2")]).await,
        json!(["I thought I was a fool for no one"])
    );
    assert_eq!(
        text_page(&client, id, &[("limit", "10")]).await
            .as_array()
            .unwrap()
            .len(),
        3
    );
    assert_eq!(text_page(&client, id, &[("page", "4")]).await, json!([]));
}

#[tokio::test]
async fn test_text_of_missing_song_is_not_found() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get_song_text("12345", &[]).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Song not found");
}

#[tokio::test]
async fn test_text_rejects_bad_parameters() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());
    let id = client.add_song_id(KNOWN_GROUP, KNOWN_SONG).await;

    let response = client.get_song_text("abc", &[]).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    for query in [[("page", "0")], [("page", "x")], [("limit", "0")]] {
        let response = client.get_song_text(&id.to_string(), &query).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{:?}", query);
    }
}
