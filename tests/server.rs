mod common;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use common::{fake_client, repo, user, FakeSource, FakeTransport};
use github_profile_analyzer::models::ProfileAnalysis;
use github_profile_analyzer::pipeline::analyze_profile;
use github_profile_analyzer::server::{create_router, AppState};
use std::collections::HashMap;
use std::sync::Arc;
use tower::ServiceExt;

fn source() -> FakeSource {
    FakeSource {
        account: Some(user("octocat", Some("The Octocat"))),
        repositories: Some(vec![
            repo("octocat", "Hello-World", Some("Ruby"), 2500, false),
            repo("octocat", "Spoon-Knife", Some("HTML"), 12000, false),
        ]),
        readmes: HashMap::from([(
            "octocat/Hello-World".to_string(),
            "My first repository on GitHub".to_string(),
        )]),
        ..Default::default()
    }
}

fn state() -> AppState {
    AppState {
        source: Arc::new(source()),
    }
}

fn missing_state() -> AppState {
    AppState {
        source: Arc::new(FakeSource::default()),
    }
}

async fn get(state: AppState, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
    let response = create_router(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, _, body) = get(missing_state(), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("alive"));
}

#[tokio::test]
async fn test_analysis_json() {
    let (status, _, body) = get(state(), "/api/users/octocat").await;
    assert_eq!(status, StatusCode::OK);

    let analysis: ProfileAnalysis = serde_json::from_str(&body).unwrap();
    assert_eq!(analysis.account.login, "octocat");
    assert_eq!(analysis.top_repositories[0].name, "Spoon-Knife");
    assert!(analysis.keywords.contains("repository"));
}

#[tokio::test]
async fn test_analysis_json_not_found() {
    let (status, _, body) = get(missing_state(), "/api/users/ghost").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("\"error\""));
}

#[tokio::test]
async fn test_report_download() {
    let (status, headers, body) = get(state(), "/api/users/octocat/report").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "text/plain; charset=utf-8");
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"octocat_report.txt\""
    );
    assert!(body.starts_with("GitHub Profile Analysis Report for The Octocat"));
    assert!(body.contains("- Spoon-Knife (12000 ★)\n- Hello-World (2500 ★)\n"));
}

#[tokio::test]
async fn test_dashboard_page() {
    let (status, _, body) = get(state(), "/?username=octocat").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("The Octocat"));
    assert!(body.contains("class=\"chip\""));
    assert!(body.contains("download=\"octocat_report.txt\""));
}

#[tokio::test]
async fn test_dashboard_download_is_displayed_report() {
    let (_, _, body) = get(state(), "/?username=octocat").await;

    let prefix = "href=\"data:text/plain;charset=utf-8,";
    let start = body.find(prefix).expect("download link") + prefix.len();
    let end = start + body[start..].find('"').expect("closing quote");
    let downloaded: String = url::form_urlencoded::parse(format!("r={}", &body[start..end]).as_bytes())
        .next()
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default();

    let analysis = analyze_profile(&source(), "octocat")
        .await
        .unwrap()
        .into_analysis()
        .unwrap();
    assert_eq!(downloaded, analysis.report());
}

#[tokio::test]
async fn test_dashboard_invalid_username() {
    let state = AppState {
        source: Arc::new(fake_client(FakeTransport::new())),
    };
    let (status, _, body) = get(state, "/?username=a%2Fb").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Invalid GitHub username."));
    assert!(!body.contains("Could not find GitHub user."));
}

#[tokio::test]
async fn test_dashboard_messages() {
    let (status, _, body) = get(state(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Analyze"));

    let (_, _, body) = get(state(), "/?username=").await;
    assert!(body.contains("Please enter a username."));

    let (status, _, body) = get(missing_state(), "/?username=ghost").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Could not find GitHub user."));
}
