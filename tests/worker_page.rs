//! End-to-end page tests against a throwaway upstream worker API.
//!
//! Each test spins up a local axum server standing in for the worker API,
//! points the app at it, and drives the page route with `oneshot`.

use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use helpermatch_web::app::{create_app, AppState};
use helpermatch_web::config::{Environment, Settings};
use helpermatch_web::services::WorkerApiClient;

async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn app_for(base_url: &str) -> Router {
    let settings = Settings {
        env: Environment::Dev,
        server_addr: "127.0.0.1:0".to_string(),
        worker_api_url: base_url.to_string(),
        public_dir: "public".to_string(),
        public_base_url: "http://localhost:8080".to_string(),
    };
    let worker_api = WorkerApiClient::new(base_url).unwrap();
    create_app(AppState::new(settings, worker_api))
}

async fn get_page(app: Router, path: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn maria() -> Value {
    json!({
        "data": {
            "id": 42,
            "user_id": 7,
            "fullname": "Maria Santos",
            "nationality": { "id": 1, "name_in": "Filipino" },
            "image": null,
            "worker_overseas_detail_info": {
                "worker_id": 42,
                "eregistration_file": "https://cdn.example/x.png"
            }
        }
    })
}

#[tokio::test]
async fn renders_full_profile_for_valid_worker() {
    let upstream = spawn_upstream(Router::new().route("/:id", get(|| async { Json(maria()) }))).await;
    let (status, body) = get_page(app_for(&upstream), "/worker/42").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Maria Santos"));
    assert!(body.contains("1, Filipino"));
    assert!(body.contains("src=\"https://cdn.example/x.png\""));
    assert!(body.contains("Expanded Profile"));
    assert!(body.contains("I'm Interested"));
}

#[tokio::test]
async fn direct_image_beats_eregistration_file() {
    let payload = json!({
        "data": {
            "id": 1,
            "user_id": 2,
            "image": "https://cdn.example/direct.png",
            "worker_overseas_detail_info": {
                "worker_id": 1,
                "eregistration_file": "https://cdn.example/file.png"
            }
        }
    });
    let upstream = spawn_upstream(
        Router::new().route("/:id", get(move || async move { Json(payload.clone()) })),
    )
    .await;
    let (status, body) = get_page(app_for(&upstream), "/worker/1").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("src=\"https://cdn.example/direct.png\""));
}

#[tokio::test]
async fn upstream_404_shows_only_error_notice() {
    let upstream = spawn_upstream(
        Router::new().route("/:id", get(|| async { StatusCode::NOT_FOUND })),
    )
    .await;
    let (status, body) = get_page(app_for(&upstream), "/worker/99").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Failed to load worker data."));
    assert!(!body.contains("Expanded Profile"));
    assert!(!body.contains("Expectations"));
}

#[tokio::test]
async fn upstream_500_maps_to_bad_gateway() {
    let upstream = spawn_upstream(
        Router::new().route("/:id", get(|| async { StatusCode::INTERNAL_SERVER_ERROR })),
    )
    .await;
    let (status, body) = get_page(app_for(&upstream), "/worker/5").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.contains("Failed to load worker data."));
}

#[tokio::test]
async fn payload_missing_id_shows_error_notice() {
    let upstream = spawn_upstream(Router::new().route(
        "/:id",
        get(|| async { Json(json!({ "data": { "user_id": 2 } })) }),
    ))
    .await;
    let (status, body) = get_page(app_for(&upstream), "/worker/7").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.contains("Failed to load worker data."));
    assert!(!body.contains("Expanded Profile"));
}

#[tokio::test]
async fn malformed_eregistration_url_shows_error_notice() {
    let upstream = spawn_upstream(Router::new().route(
        "/:id",
        get(|| async {
            Json(json!({
                "data": {
                    "id": 1,
                    "user_id": 2,
                    "worker_overseas_detail_info": {
                        "worker_id": 1,
                        "eregistration_file": "not a url"
                    }
                }
            }))
        }),
    ))
    .await;
    let (status, body) = get_page(app_for(&upstream), "/worker/1").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.contains("Failed to load worker data."));
}

#[tokio::test]
async fn non_json_body_shows_error_notice() {
    let upstream =
        spawn_upstream(Router::new().route("/:id", get(|| async { "not json" }))).await;
    let (status, body) = get_page(app_for(&upstream), "/worker/1").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.contains("Failed to load worker data."));
}

#[tokio::test]
async fn worker_fetch_disables_response_caching() {
    let seen: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
    let recorded = seen.clone();
    let upstream = spawn_upstream(Router::new().route(
        "/:id",
        get(move |headers: HeaderMap| {
            let recorded = recorded.clone();
            async move {
                *recorded.lock().unwrap() = headers
                    .get(header::CACHE_CONTROL)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                Json(maria())
            }
        }),
    ))
    .await;

    let (status, _) = get_page(app_for(&upstream), "/worker/42").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(seen.lock().unwrap().as_deref(), Some("no-store"));
}

#[tokio::test]
async fn health_reports_version() {
    let app = app_for("http://127.0.0.1:9");
    let (status, body) = get_page(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    let parsed: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed["status"], "ok");
    assert_eq!(parsed["version"], env!("CARGO_PKG_VERSION"));
}
