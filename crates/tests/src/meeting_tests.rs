use crate::fixtures::test_app::TestApp;
use serde_json::Value;

#[tokio::test]
async fn start_meeting_returns_active_session() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/api/meeting"))
        .json(&serde_json::json!({
            "title": "Sprint Planning",
            "participants": ["Alice", "Bob"],
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 201);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "active");
    uuid::Uuid::parse_str(json["meeting_id"].as_str().unwrap()).unwrap();
}

#[tokio::test]
async fn start_meeting_defaults_title() {
    let app = TestApp::spawn().await;

    let meeting_id = {
        let resp = app
            .client
            .post(app.url("/api/meeting"))
            .json(&serde_json::json!({}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), 201);
        let json: Value = resp.json().await.unwrap();
        json["meeting_id"].as_str().unwrap().to_string()
    };

    let resp = app
        .client
        .get(app.url(&format!("/api/meeting/{}", meeting_id)))
        .send()
        .await
        .unwrap();
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["title"], "Untitled Meeting");
}

#[tokio::test]
async fn get_meeting_session() {
    let app = TestApp::spawn().await;
    let meeting_id = app.start_meeting("Weekly Sync", &["Alice"]).await;

    let resp = app
        .client
        .get(app.url(&format!("/api/meeting/{}", meeting_id)))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["title"], "Weekly Sync");
    assert_eq!(json["status"], "active");
    assert_eq!(json["participants"][0], "Alice");
}

#[tokio::test]
async fn get_unknown_meeting_is_not_found() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .get(app.url(&format!("/api/meeting/{}", uuid::Uuid::new_v4())))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 404);
}

#[tokio::test]
async fn invalid_meeting_id_is_bad_request() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .get(app.url("/api/meeting/not-a-uuid"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 400);
}

#[tokio::test]
async fn end_meeting_without_transcript_returns_fallback_minutes() {
    let app = TestApp::spawn().await;
    let meeting_id = app.start_meeting("Silent Meeting", &["Alice", "Bob"]).await;

    let resp = app
        .client
        .post(app.url(&format!("/api/meeting/{}/end", meeting_id)))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    let minutes: Value = resp.json().await.unwrap();
    assert_eq!(minutes["meeting_id"], meeting_id);
    assert_eq!(
        minutes["summary"],
        "No transcript was recorded for this meeting."
    );
    assert_eq!(minutes["attendees"][0], "Alice");
    assert_eq!(minutes["attendees"][1], "Bob");

    // Session is marked ended
    let resp = app
        .client
        .get(app.url(&format!("/api/meeting/{}", meeting_id)))
        .send()
        .await
        .unwrap();
    let session: Value = resp.json().await.unwrap();
    assert_eq!(session["status"], "ended");
    assert!(!session["ended_at"].is_null());
}

#[tokio::test]
async fn minutes_are_persisted_after_end() {
    let app = TestApp::spawn().await;
    let meeting_id = app.start_meeting("Retro", &[]).await;

    app.client
        .post(app.url(&format!("/api/meeting/{}/end", meeting_id)))
        .send()
        .await
        .unwrap();

    let resp = app
        .client
        .get(app.url(&format!("/api/meeting/{}/minutes", meeting_id)))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    let minutes: Value = resp.json().await.unwrap();
    assert_eq!(minutes["meeting_id"], meeting_id);
    assert_eq!(minutes["title"], "Retro");
}

#[tokio::test]
async fn end_unknown_meeting_is_not_found() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url(&format!("/api/meeting/{}/end", uuid::Uuid::new_v4())))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 404);
}

#[tokio::test]
async fn minutes_before_end_are_not_found() {
    let app = TestApp::spawn().await;
    let meeting_id = app.start_meeting("In Progress", &[]).await;

    let resp = app
        .client
        .get(app.url(&format!("/api/meeting/{}/minutes", meeting_id)))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 404);
}

#[tokio::test]
async fn end_with_transcript_needs_completion_backend() {
    let app = TestApp::spawn().await;
    let meeting_id = app.start_meeting("Planning", &["Alice"]).await;

    let resp = app
        .push_lines(
            &meeting_id,
            serde_json::json!([
                { "speaker": "Alice", "text": "Let's ship in September" },
            ]),
        )
        .await;
    assert_eq!(resp.status().as_u16(), 200);

    // No completion API key configured in tests: summarizing a non-empty
    // transcript is a 503, and the session stays active.
    let resp = app
        .client
        .post(app.url(&format!("/api/meeting/{}/end", meeting_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 503);

    let resp = app
        .client
        .get(app.url(&format!("/api/meeting/{}", meeting_id)))
        .send()
        .await
        .unwrap();
    let session: Value = resp.json().await.unwrap();
    assert_eq!(session["status"], "active");
}
