use crate::models::LanguageCount;
use crate::types::GitHubRepo;

pub const MAX_LANGUAGES: usize = 5;

/// Counts repositories per primary language, most common first.
///
/// Repositories without a detected language are skipped. Equal counts keep the
/// order in which each language was first seen.
pub fn analyze_languages(repos: &[GitHubRepo]) -> Vec<LanguageCount> {
    let mut tally: Vec<LanguageCount> = Vec::new();

    for language in repos.iter().filter_map(GitHubRepo::primary_language) {
        match tally.iter_mut().find(|entry| entry.language == language) {
            Some(entry) => entry.count += 1,
            None => tally.push(LanguageCount {
                language: language.to_string(),
                count: 1,
            }),
        }
    }

    // sort_by is stable
    tally.sort_by(|a, b| b.count.cmp(&a.count));
    tally.truncate(MAX_LANGUAGES);
    tally
}
