use crate::config::{ApiToken, GitHubConfig};
use crate::error::{ProfileAnalyzerError, Result};
use crate::types::{GitHubRepo, GitHubUser};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};
use url::Url;

pub const JSON_MEDIA_TYPE: &str = "application/vnd.github.v3+json";
pub const RAW_MEDIA_TYPE: &str = "application/vnd.github.v3.raw";

/// A single authenticated GET against the API.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub url: Url,
    pub accept: &'static str,
    pub token: ApiToken,
}

#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Wire-level seam under [`GitHubClient`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, request: &ApiRequest) -> Result<ApiResponse>;
}

/// The three reads the analysis pipeline needs.
///
/// Non-success HTTP statuses are not errors here: a missing account or a failed
/// page yields `None`, a missing README yields empty text. `Err` means the
/// request itself could not be carried out.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_account(&self, login: &str) -> Result<Option<GitHubUser>>;

    async fn fetch_repositories(&self, login: &str) -> Result<Option<Vec<GitHubRepo>>>;

    async fn fetch_readme(&self, full_name: &str) -> Result<String>;
}

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()?;

        Ok(ReqwestTransport { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let response = self
            .client
            .get(request.url.clone())
            .header(ACCEPT, request.accept)
            .header(AUTHORIZATION, request.token.authorization_header())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        Ok(ApiResponse { status, body })
    }
}

pub struct GitHubClient<T = ReqwestTransport> {
    config: GitHubConfig,
    transport: T,
}

impl GitHubClient<ReqwestTransport> {
    pub fn new(config: GitHubConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(GitHubClient { config, transport })
    }
}

impl<T: HttpTransport> GitHubClient<T> {
    pub fn with_transport(config: GitHubConfig, transport: T) -> Self {
        GitHubClient { config, transport }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.config.api_base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ProfileAnalyzerError::ConfigError(format!(
                    "API base URL cannot be used as a base: {}",
                    self.config.api_base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get(&self, url: Url, accept: &'static str) -> Result<ApiResponse> {
        let request = ApiRequest {
            url,
            accept,
            token: self.config.token.clone(),
        };
        self.transport.get(&request).await
    }
}

fn validate_login(login: &str) -> Result<&str> {
    let login = login.trim();
    if login.is_empty() || login.contains('/') {
        return Err(ProfileAnalyzerError::InvalidIdentifier(login.to_string()));
    }
    Ok(login)
}

fn split_full_name(full_name: &str) -> Result<(&str, &str)> {
    match full_name.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok((owner, name))
        }
        _ => Err(ProfileAnalyzerError::InvalidIdentifier(full_name.to_string())),
    }
}

#[async_trait]
impl<T: HttpTransport> ProfileSource for GitHubClient<T> {
    async fn fetch_account(&self, login: &str) -> Result<Option<GitHubUser>> {
        let login = validate_login(login)?;
        let url = self.endpoint(&["users", login])?;
        let response = self.get(url, JSON_MEDIA_TYPE).await?;

        if !response.status.is_success() {
            debug!(login, status = %response.status, "account lookup returned no account");
            return Ok(None);
        }

        let user: GitHubUser = serde_json::from_str(&response.body)?;
        debug!(login = %user.login, public_repos = user.public_repos, "fetched account");
        Ok(Some(user))
    }

    async fn fetch_repositories(&self, login: &str) -> Result<Option<Vec<GitHubRepo>>> {
        let login = validate_login(login)?;
        let per_page = self.config.per_page.to_string();
        let mut repositories = Vec::new();
        let mut page: u32 = 1;

        loop {
            let mut url = self.endpoint(&["users", login, "repos"])?;
            url.query_pairs_mut()
                .append_pair("per_page", &per_page)
                .append_pair("page", &page.to_string());

            let response = self.get(url, JSON_MEDIA_TYPE).await?;
            if !response.status.is_success() {
                warn!(login, page, status = %response.status, "repository page request failed");
                return Ok(None);
            }

            let batch: Vec<GitHubRepo> = serde_json::from_str(&response.body)?;
            if batch.is_empty() {
                break;
            }

            debug!(login, page, count = batch.len(), "fetched repository page");
            repositories.extend(batch);
            page += 1;
        }

        debug!(login, total = repositories.len(), "fetched all repositories");
        Ok(Some(repositories))
    }

    async fn fetch_readme(&self, full_name: &str) -> Result<String> {
        let (owner, name) = split_full_name(full_name)?;
        let url = self.endpoint(&["repos", owner, name, "readme"])?;
        let response = self.get(url, RAW_MEDIA_TYPE).await?;

        if !response.status.is_success() {
            debug!(full_name, status = %response.status, "no README available");
            return Ok(String::new());
        }

        Ok(response.body)
    }
}
