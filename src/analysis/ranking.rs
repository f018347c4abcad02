use crate::types::GitHubRepo;

pub const MAX_TOP_REPOSITORIES: usize = 5;

/// The most starred repositories, ties kept in source order.
pub fn top_repositories(repos: &[GitHubRepo]) -> Vec<GitHubRepo> {
    let mut ranked: Vec<&GitHubRepo> = repos.iter().collect();
    ranked.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    ranked
        .into_iter()
        .take(MAX_TOP_REPOSITORIES)
        .cloned()
        .collect()
}
