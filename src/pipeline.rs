use crate::analysis::{analyze_languages, extract_keywords, top_repositories};
use crate::error::Result;
use crate::github::ProfileSource;
use crate::models::{AnalysisOutcome, ProfileAnalysis};
use crate::types::GitHubRepo;
use std::collections::BTreeSet;
use tracing::{info, warn};

/// Runs one analysis: account, repositories, READMEs, aggregates.
///
/// Stops after the account lookup when the account does not exist. Every later
/// failure degrades to empty data so a report can always be built.
pub async fn analyze_profile<S>(source: &S, login: &str) -> Result<AnalysisOutcome>
where
    S: ProfileSource + ?Sized,
{
    let account = match source.fetch_account(login).await? {
        Some(account) => account,
        None => {
            info!(login, "account not found");
            return Ok(AnalysisOutcome::AccountNotFound);
        }
    };

    let repositories = match source.fetch_repositories(login).await {
        Ok(Some(repositories)) => repositories,
        Ok(None) => {
            warn!(login, "repository listing unavailable");
            Vec::new()
        }
        Err(e) => {
            warn!(login, error = %e, "repository listing failed");
            Vec::new()
        }
    };

    let languages = analyze_languages(&repositories);
    let top = top_repositories(&repositories);
    let keywords = repository_keywords(source, &repositories).await;

    info!(
        login = %account.login,
        repositories = repositories.len(),
        languages = languages.len(),
        keywords = keywords.len(),
        "analysis complete"
    );

    Ok(AnalysisOutcome::Found(Box::new(ProfileAnalysis {
        identifier: login.trim().to_string(),
        account,
        repository_count: repositories.len(),
        languages,
        top_repositories: top,
        keywords,
    })))
}

/// README text of every non-fork repository, in collection order.
pub async fn collect_readmes<S>(source: &S, repositories: &[GitHubRepo]) -> Vec<String>
where
    S: ProfileSource + ?Sized,
{
    let mut readmes = Vec::new();
    for repo in repositories.iter().filter(|repo| !repo.fork) {
        let text = match source.fetch_readme(&repo.full_name).await {
            Ok(text) => text,
            Err(e) => {
                warn!(full_name = %repo.full_name, error = %e, "README fetch failed");
                String::new()
            }
        };
        readmes.push(text);
    }
    readmes
}

/// Keyword set for a repository collection.
pub async fn repository_keywords<S>(source: &S, repositories: &[GitHubRepo]) -> BTreeSet<String>
where
    S: ProfileSource + ?Sized,
{
    let readmes = collect_readmes(source, repositories).await;
    extract_keywords(&readmes)
}
