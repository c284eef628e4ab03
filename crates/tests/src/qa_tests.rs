use crate::fixtures::test_app::TestApp;

#[tokio::test]
async fn qa_without_completion_backend_is_unavailable() {
    let app = TestApp::spawn().await;
    let meeting_id = app.start_meeting("Planning", &["Alice"]).await;

    app.push_lines(
        &meeting_id,
        serde_json::json!([{ "speaker": "Alice", "text": "We ship in September" }]),
    )
    .await;

    let resp = app
        .client
        .post(app.url(&format!("/api/meeting/{}/qa", meeting_id)))
        .json(&serde_json::json!({ "question": "When do we ship?" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 503);
}

#[tokio::test]
async fn empty_question_is_rejected() {
    let app = TestApp::spawn().await;
    let meeting_id = app.start_meeting("Planning", &[]).await;

    let resp = app
        .client
        .post(app.url(&format!("/api/meeting/{}/qa", meeting_id)))
        .json(&serde_json::json!({ "question": "  " }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 422);
}

#[tokio::test]
async fn qa_on_invalid_meeting_id_is_bad_request() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/api/meeting/not-a-uuid/qa"))
        .json(&serde_json::json!({ "question": "Anything?" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 400);
}

#[tokio::test]
async fn health_check_is_ok() {
    let app = TestApp::spawn().await;

    let resp = app.client.get(app.url("/health")).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "ok");
}
