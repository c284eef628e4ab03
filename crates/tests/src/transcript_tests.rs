use crate::fixtures::test_app::TestApp;
use serde_json::Value;

#[tokio::test]
async fn push_and_read_preserves_order() {
    let app = TestApp::spawn().await;
    let meeting_id = app.start_meeting("Standup", &["Alice", "Bob"]).await;

    let resp = app
        .push_lines(
            &meeting_id,
            serde_json::json!([
                { "speaker": "Alice", "text": "Hello" },
                { "speaker": "Bob", "text": "World" },
                { "speaker": "Alice", "text": "Shipping on Friday" },
            ]),
        )
        .await;

    assert_eq!(resp.status().as_u16(), 200);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["buffered"], 3);
    assert_eq!(json["total"], 3);

    let resp = app
        .client
        .get(app.url(&format!("/api/meeting/{}/transcript", meeting_id)))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    let json: Value = resp.json().await.unwrap();
    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["text"], "Hello");
    assert_eq!(entries[1]["speaker"], "Bob");
    assert_eq!(entries[2]["text"], "Shipping on Friday");
}

#[tokio::test]
async fn repeated_batches_accumulate() {
    let app = TestApp::spawn().await;
    let meeting_id = app.start_meeting("Standup", &[]).await;

    app.push_lines(
        &meeting_id,
        serde_json::json!([{ "speaker": "Alice", "text": "one" }]),
    )
    .await;
    let resp = app
        .push_lines(
            &meeting_id,
            serde_json::json!([
                { "speaker": "Bob", "text": "two" },
                { "speaker": "Bob", "text": "three" },
            ]),
        )
        .await;

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["buffered"], 2);
    assert_eq!(json["total"], 3);
}

#[tokio::test]
async fn language_defaults_to_primary() {
    let app = TestApp::spawn().await;
    let meeting_id = app.start_meeting("Standup", &[]).await;

    app.push_lines(
        &meeting_id,
        serde_json::json!([
            { "speaker": "Ali", "text": "Selamat pagi", "language": "ms-MY" },
            { "speaker": "Alice", "text": "Good morning" },
        ]),
    )
    .await;

    let resp = app
        .client
        .get(app.url(&format!("/api/meeting/{}/transcript", meeting_id)))
        .send()
        .await
        .unwrap();
    let json: Value = resp.json().await.unwrap();
    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries[0]["language"], "ms-MY");
    assert_eq!(entries[1]["language"], "en-US");
}

#[tokio::test]
async fn empty_text_rejects_whole_batch() {
    let app = TestApp::spawn().await;
    let meeting_id = app.start_meeting("Standup", &[]).await;

    let resp = app
        .push_lines(
            &meeting_id,
            serde_json::json!([
                { "speaker": "Alice", "text": "kept?" },
                { "speaker": "Bob", "text": "   " },
            ]),
        )
        .await;
    assert_eq!(resp.status().as_u16(), 422);

    // Nothing from the rejected batch was appended
    let resp = app
        .client
        .get(app.url(&format!("/api/meeting/{}/transcript", meeting_id)))
        .send()
        .await
        .unwrap();
    let json: Value = resp.json().await.unwrap();
    assert!(json["entries"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn push_to_unknown_meeting_is_not_found() {
    let app = TestApp::spawn().await;

    let resp = app
        .push_lines(
            &uuid::Uuid::new_v4().to_string(),
            serde_json::json!([{ "speaker": "Alice", "text": "Hello" }]),
        )
        .await;

    assert_eq!(resp.status().as_u16(), 404);
}

#[tokio::test]
async fn transcript_is_gone_after_meeting_end() {
    let app = TestApp::spawn().await;
    let meeting_id = app.start_meeting("Short", &[]).await;

    app.client
        .post(app.url(&format!("/api/meeting/{}/end", meeting_id)))
        .send()
        .await
        .unwrap();

    let resp = app
        .client
        .get(app.url(&format!("/api/meeting/{}/transcript", meeting_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);
}
