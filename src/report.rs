use crate::models::LanguageCount;
use crate::types::{GitHubRepo, GitHubUser};
use std::collections::BTreeSet;
use std::fmt::Write;

pub const REPORT_MIME_TYPE: &str = "text/plain; charset=utf-8";

/// `<identifier>_report.txt`
pub fn report_filename(identifier: &str) -> String {
    format!("{}_report.txt", identifier)
}

/// Plain-text summary offered for download. Field order is fixed.
pub fn build_report(
    account: &GitHubUser,
    languages: &[LanguageCount],
    top_repositories: &[GitHubRepo],
    keywords: &BTreeSet<String>,
) -> String {
    let mut report = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(
        report,
        "GitHub Profile Analysis Report for {}",
        account.display_name()
    );
    let _ = writeln!(report, "{}\n", "=".repeat(40));

    let _ = writeln!(report, "--- User Stats ---");
    let _ = writeln!(report, "Public Repos: {}", account.public_repos);
    let _ = writeln!(report, "Followers: {}", account.followers);
    let _ = writeln!(report, "Member Since: {}\n", account.member_since());

    let _ = writeln!(report, "--- Top 5 Repositories by Stars ---");
    for repo in top_repositories {
        let _ = writeln!(report, "- {} ({} ★)", repo.name, repo.stargazers_count);
    }
    report.push('\n');

    let _ = writeln!(report, "--- Top 5 Programming Languages ---");
    if languages.is_empty() {
        let _ = writeln!(report, "No language data found.");
    } else {
        for entry in languages {
            let _ = writeln!(report, "- {}: {} repos", entry.language, entry.count);
        }
    }
    report.push('\n');

    let _ = writeln!(report, "--- Top Project Keywords ---");
    let keywords: Vec<&str> = keywords.iter().map(String::as_str).collect();
    let _ = writeln!(report, "{}", keywords.join(", "));

    report
}
