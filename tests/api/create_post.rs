use crate::common::{assert_status, json_body};
use crate::stub_api::spawn_stub_api;
use fake::Fake;
use fake::faker::lorem::en::{Paragraph, Sentence};
use posts_contract::expectations::{malformed_post_payloads, valid_new_post};

#[tokio::test]
async fn create_post_with_valid_body_returns_201() {
    // Arrange
    let stub = spawn_stub_api().await;
    let api = &stub.api;
    let payload = valid_new_post().to_json();

    // Act
    let response = api.create_post(Some(&payload)).await;

    // Assert
    assert_status(&response, 201, "POST /posts with a valid body");
}

#[tokio::test]
async fn create_post_with_valid_body_echoes_it_with_an_id() {
    let stub = spawn_stub_api().await;
    let api = &stub.api;
    let payload = serde_json::json!({"title": "foo", "body": "bar", "userId": 1});

    let body = json_body(api.create_post(Some(&payload)).await).await;

    assert_eq!(body.as_object().unwrap().len(), 4);
    assert_eq!(body["userId"], 1);
    assert_eq!(body["title"], "foo");
    assert_eq!(body["body"], "bar");
    assert!(body.get("id").is_some());
}

#[tokio::test]
async fn create_post_echoes_arbitrary_text() {
    let stub = spawn_stub_api().await;
    let api = &stub.api;
    let title: String = Sentence(1..4).fake();
    let text: String = Paragraph(1..3).fake();
    let payload = serde_json::json!({"title": title, "body": text, "userId": 7});

    let body = json_body(api.create_post(Some(&payload)).await).await;

    assert_eq!(body["title"], title.as_str());
    assert_eq!(body["body"], text.as_str());
    assert_eq!(body["userId"], 7);
}

#[tokio::test]
async fn create_post_with_malformed_body_returns_400() {
    let stub = spawn_stub_api().await;
    let api = &stub.api;

    for (description, payload) in malformed_post_payloads() {
        let response = api.create_post(payload.as_ref()).await;

        assert_status(&response, 400, &format!("POST /posts with {}", description));
    }
}
