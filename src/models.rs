use crate::report;
use crate::types::{GitHubRepo, GitHubUser};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One row of the language tally
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCount {
    pub language: String,
    pub count: usize,
}

/// Aggregates computed for one account in a single run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileAnalysis {
    /// Username as entered, which names the report file.
    pub identifier: String,
    pub account: GitHubUser,
    /// Number of repositories fetched, zero when the listing failed.
    pub repository_count: usize,
    pub languages: Vec<LanguageCount>,
    pub top_repositories: Vec<GitHubRepo>,
    pub keywords: BTreeSet<String>,
}

impl ProfileAnalysis {
    pub fn report(&self) -> String {
        report::build_report(
            &self.account,
            &self.languages,
            &self.top_repositories,
            &self.keywords,
        )
    }

    pub fn report_filename(&self) -> String {
        report::report_filename(&self.identifier)
    }
}

/// Result of analysing an identifier.
///
/// A missing account is an expected outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    Found(Box<ProfileAnalysis>),
    AccountNotFound,
}

impl AnalysisOutcome {
    pub fn into_analysis(self) -> Option<ProfileAnalysis> {
        match self {
            AnalysisOutcome::Found(analysis) => Some(*analysis),
            AnalysisOutcome::AccountNotFound => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AnalysisOutcome::AccountNotFound)
    }
}
