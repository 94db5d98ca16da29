use axum::body::Body;
use axum::http::{Request, StatusCode};
use bible_cli::{router, CorpusProvider, CorpusSource, HttpState};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tower::ServiceExt;

const CORPUS: &str = r#"{
    "verses": [
        {"reference": "John 3:16", "text": "For God so loved the world", "summary": "God's love"},
        {"reference": "Romans 8:28", "text": "all things work together for good", "summary": "Providence"}
    ],
    "perspectives": [
        {"title": "P1", "bullets": ["a"]},
        {"title": "P2", "bullets": ["b"]},
        {"title": "P3", "bullets": ["c"]},
        {"title": "P4", "bullets": ["d"]}
    ],
    "meditations": [
        {"date": "2024-01-01", "reference": "John 3:16", "summary": "Rest in love",
         "application_questions": ["Whom will you love today?"], "prayer": "Thank you."},
        {"date": "2024-01-02", "reference": "Romans 8:28", "summary": "Trust",
         "application_questions": [], "prayer": "Amen."}
    ],
    "meditation_prompts": ["Read it aloud.", "Sit quietly."]
}"#;

fn provider_for(path: &Path, reload: bool) -> CorpusProvider {
    CorpusProvider::new(CorpusSource::File(path.to_path_buf()), reload)
}

async fn get(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).expect("json body"))
}

fn setup(reload: bool) -> (tempfile::TempDir, std::path::PathBuf, axum::Router) {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("corpus.json");
    fs::write(&path, CORPUS).unwrap();
    let app = router(Arc::new(HttpState::new(provider_for(&path, reload))));
    (temp, path, app)
}

#[tokio::test]
async fn health_is_ok() {
    let (_temp, _path, app) = setup(false);
    let (status, body) = get(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn search_exact_reference_hit() {
    let (_temp, _path, app) = setup(false);
    let (status, body) = get(&app, "/api/search?query=John%203%3A16").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["query"], "John 3:16");
    assert_eq!(body["results"][0]["reference"], "John 3:16");
    assert_eq!(body["results"][0]["perspectives"].as_array().unwrap().len(), 3);
    assert_eq!(body["results"][0]["meditation"]["reference"], "John 3:16");
    assert_eq!(body["suggestions"], json!([]));
}

#[tokio::test]
async fn search_miss_without_overlap() {
    let (_temp, _path, app) = setup(false);
    let (status, body) = get(&app, "/api/search?query=grace").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"query": "grace", "results": [], "suggestions": []})
    );
}

#[tokio::test]
async fn search_miss_with_suggestions() {
    let (_temp, _path, app) = setup(false);
    let (_, body) = get(&app, "/api/search?query=good%20things").await;
    assert_eq!(body["results"], json!([]));
    assert_eq!(
        body["suggestions"],
        json!([{
            "reference": "Romans 8:28",
            "text": "all things work together for good",
            "summary": "Providence"
        }])
    );
}

#[tokio::test]
async fn search_requires_query() {
    let (_temp, _path, app) = setup(false);
    for uri in ["/api/search", "/api/search?query=", "/api/search?query=%20%20"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
        assert_eq!(body["code"], "invalid_request");
    }
}

#[tokio::test]
async fn malformed_query_string_uses_error_envelope() {
    let (_temp, _path, app) = setup(false);
    for uri in [
        "/api/search?query=a&query=b",
        "/api/meditate?query=a&query=b",
        "/api/today?date=2024-01-01&date=x",
    ] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
        assert_eq!(body["code"], "invalid_request", "{uri}");
        assert!(body["message"].as_str().unwrap().contains("duplicate field"), "{uri}");
    }
}

#[tokio::test]
async fn meditate_hit_and_miss() {
    let (_temp, _path, app) = setup(false);
    let (_, hit) = get(&app, "/api/meditate?query=loved").await;
    assert_eq!(
        hit["result"],
        json!({
            "reference": "John 3:16",
            "summary": "God's love",
            "prompts": ["Read it aloud.", "Sit quietly."]
        })
    );

    let (status, miss) = get(&app, "/api/meditate?query=loved%3A").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(miss["result"], Value::Null);
    assert_eq!(miss["suggestions"], json!([]));
}

#[tokio::test]
async fn today_with_explicit_date() {
    let (_temp, _path, app) = setup(false);
    let (status, body) = get(&app, "/api/today?date=2024-01-02").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "date": "2024-01-02",
            "reference": "Romans 8:28",
            "summary": "Trust",
            "application_questions": [],
            "prayer": "Amen."
        })
    );
}

#[tokio::test]
async fn today_fallback_rotates_by_ordinal() {
    let (_temp, _path, app) = setup(false);
    // 2030-01-01 has ordinal 741078, an even number.
    let (_, body) = get(&app, "/api/today?date=2030-01-01").await;
    assert_eq!(body["reference"], "John 3:16");
}

#[tokio::test]
async fn today_without_date_uses_clock() {
    let (_temp, _path, app) = setup(false);
    let (status, body) = get(&app, "/api/today").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["date"].as_str().map(str::len), Some(10));
}

#[tokio::test]
async fn today_rejects_bad_date() {
    let (_temp, _path, app) = setup(false);
    let (status, body) = get(&app, "/api/today?date=2024-13-01").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "invalid_request");
}

#[tokio::test]
async fn listings_return_whole_corpus() {
    let (_temp, _path, app) = setup(false);
    let (_, verses) = get(&app, "/api/verses").await;
    assert_eq!(verses["verses"].as_array().unwrap().len(), 2);
    let (_, perspectives) = get(&app, "/api/perspectives").await;
    assert_eq!(perspectives["perspectives"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn cached_corpus_survives_file_changes() {
    let (_temp, path, app) = setup(false);
    let (_, before) = get(&app, "/api/verses").await;
    fs::write(&path, CORPUS.replace("Romans 8:28", "Romans 8:29")).unwrap();
    let (_, after) = get(&app, "/api/verses").await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn reload_mode_rereads_corpus() {
    let (_temp, path, app) = setup(true);
    fs::write(&path, CORPUS.replace("Romans 8:28", "Romans 8:29")).unwrap();
    let (_, body) = get(&app, "/api/verses").await;
    assert_eq!(body["verses"][1]["reference"], "Romans 8:29");

    fs::remove_file(&path).unwrap();
    let (status, body) = get(&app, "/api/verses").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "corpus_unavailable");
}
