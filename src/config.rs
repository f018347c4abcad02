use crate::error::{ProfileAnalyzerError, Result};
use std::fmt;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_PER_PAGE: u32 = 100;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("GitHub Profile Analyzer/", env!("CARGO_PKG_VERSION"));

/// Bearer credential for the GitHub API. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(ProfileAnalyzerError::ConfigError(
                "GitHub token must not be empty".to_string(),
            ));
        }
        Ok(ApiToken(trimmed.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

/// Everything the fetcher needs, passed in at construction.
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    pub api_base_url: Url,
    pub token: ApiToken,
    pub per_page: u32,
    pub timeout: Duration,
    pub user_agent: String,
}

impl GitHubConfig {
    pub fn new(token: ApiToken) -> Self {
        GitHubConfig {
            // Constant URL, always parses.
            api_base_url: Url::parse(DEFAULT_API_BASE_URL).expect("default API URL is valid"),
            token,
            per_page: DEFAULT_PER_PAGE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn with_api_base_url(mut self, api_base_url: &str) -> Result<Self> {
        let url = Url::parse(api_base_url)?;
        if url.cannot_be_a_base() {
            return Err(ProfileAnalyzerError::ConfigError(format!(
                "API base URL cannot be used as a base: {}",
                api_base_url
            )));
        }
        self.api_base_url = url;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Result<Self> {
        if per_page == 0 || per_page > 100 {
            return Err(ProfileAnalyzerError::ConfigError(format!(
                "page size must be between 1 and 100, got {}",
                per_page
            )));
        }
        self.per_page = per_page;
        Ok(self)
    }
}
