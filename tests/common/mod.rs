#![allow(dead_code)]

use async_trait::async_trait;
use github_profile_analyzer::config::{ApiToken, GitHubConfig};
use github_profile_analyzer::error::{ProfileAnalyzerError, Result};
use github_profile_analyzer::github::{
    ApiRequest, ApiResponse, GitHubClient, HttpTransport, ProfileSource,
};
use github_profile_analyzer::types::{GitHubRepo, GitHubUser};
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const TEST_TOKEN: &str = "test_token";

pub fn test_config() -> GitHubConfig {
    GitHubConfig::new(ApiToken::new(TEST_TOKEN).expect("valid token"))
}

/// Canned responses keyed by path plus query, e.g. `/users/alice/repos?per_page=100&page=1`.
#[derive(Clone, Default)]
pub struct FakeTransport {
    responses: Arc<Mutex<HashMap<String, (StatusCode, String)>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, path: &str, status: StatusCode, body: impl Into<String>) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body.into()));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requested_paths(&self) -> Vec<String> {
        self.requests().iter().map(|r| request_key(r)).collect()
    }
}

fn request_key(request: &ApiRequest) -> String {
    match request.url.query() {
        Some(query) => format!("{}?{}", request.url.path(), query),
        None => request.url.path().to_string(),
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn get(&self, request: &ApiRequest) -> Result<ApiResponse> {
        self.requests.lock().unwrap().push(request.clone());
        let key = request_key(request);
        let (status, body) = self
            .responses
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or((StatusCode::NOT_FOUND, r#"{"message":"Not Found"}"#.to_string()));
        Ok(ApiResponse { status, body })
    }
}

pub fn fake_client(transport: FakeTransport) -> GitHubClient<FakeTransport> {
    GitHubClient::with_transport(test_config(), transport)
}

pub fn user(login: &str, name: Option<&str>) -> GitHubUser {
    GitHubUser {
        login: login.to_string(),
        name: name.map(str::to_string),
        avatar_url: Some(format!("https://avatars.githubusercontent.com/{}", login)),
        html_url: format!("https://github.com/{}", login),
        public_repos: 2,
        followers: 10,
        created_at: "2011-09-03T15:26:22Z".parse().ok(),
    }
}

pub fn repo(owner: &str, name: &str, language: Option<&str>, stars: u32, fork: bool) -> GitHubRepo {
    GitHubRepo {
        name: name.to_string(),
        full_name: format!("{}/{}", owner, name),
        language: language.map(str::to_string),
        stargazers_count: stars,
        fork,
        html_url: format!("https://github.com/{}/{}", owner, name),
    }
}

/// In-memory [`ProfileSource`] that counts every call.
#[derive(Default)]
pub struct FakeSource {
    pub account: Option<GitHubUser>,
    pub repositories: Option<Vec<GitHubRepo>>,
    pub readmes: HashMap<String, String>,
    pub fail_readmes: bool,
    pub calls: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProfileSource for FakeSource {
    async fn fetch_account(&self, login: &str) -> Result<Option<GitHubUser>> {
        self.calls.lock().unwrap().push(format!("account:{}", login));
        Ok(self.account.clone())
    }

    async fn fetch_repositories(&self, login: &str) -> Result<Option<Vec<GitHubRepo>>> {
        self.calls.lock().unwrap().push(format!("repos:{}", login));
        Ok(self.repositories.clone())
    }

    async fn fetch_readme(&self, full_name: &str) -> Result<String> {
        self.calls.lock().unwrap().push(format!("readme:{}", full_name));
        if self.fail_readmes {
            return Err(ProfileAnalyzerError::IoError(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "connection reset",
            )));
        }
        Ok(self.readmes.get(full_name).cloned().unwrap_or_default())
    }
}
