use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// GitHub API response structures

/// `GET /users/{login}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl GitHubUser {
    /// Display name, or the login when the account has none.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => &self.login,
        }
    }

    /// Creation date as `YYYY-MM-DD`, empty when unknown.
    pub fn member_since(&self) -> String {
        self.created_at
            .map(|created| created.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

/// One entry of `GET /users/{login}/repos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub fork: bool,
    pub html_url: String,
}

impl GitHubRepo {
    /// Primary language, treating an empty string as undetected.
    pub fn primary_language(&self) -> Option<&str> {
        self.language.as_deref().filter(|language| !language.is_empty())
    }
}
