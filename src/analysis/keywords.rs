use super::stop_words::is_stop_word;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

pub const MAX_KEYWORDS: usize = 15;

static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"http\S+|www\S+|https\S+").expect("valid URL pattern"));
static MARKDOWN_IMAGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[.*?\]\(.*?\)").expect("valid image pattern"));
static HTML_TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<.*?>").expect("valid tag pattern"));
static NON_ALPHA_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z\s]").expect("valid character pattern"));

/// Strips URLs, markdown images, HTML tags and anything that is not an ASCII
/// letter or whitespace, then lowercases.
pub fn clean_text(text: &str) -> String {
    let text = URL_PATTERN.replace_all(text, "");
    let text = MARKDOWN_IMAGE_PATTERN.replace_all(&text, "");
    let text = HTML_TAG_PATTERN.replace_all(&text, "");
    let text = NON_ALPHA_PATTERN.replace_all(&text, "");
    text.to_lowercase()
}

fn tokenize(document: &str) -> impl Iterator<Item = &str> {
    document
        .split_whitespace()
        .filter(|token| token.len() >= 2 && !is_stop_word(token))
}

/// The keyword vocabulary of the README documents, at most [`MAX_KEYWORDS`] terms.
///
/// Terms are counted across the whole corpus after stop-word filtering and the
/// most frequent are kept, equal counts in column (alphabetical) order. An
/// empty vocabulary gives an empty set.
pub fn extract_keywords<S: AsRef<str>>(documents: &[S]) -> BTreeSet<String> {
    if documents.iter().all(|doc| doc.as_ref().is_empty()) {
        return BTreeSet::new();
    }

    let cleaned: Vec<String> = documents.iter().map(|doc| clean_text(doc.as_ref())).collect();
    if cleaned.iter().all(String::is_empty) {
        return BTreeSet::new();
    }

    let mut corpus_frequency: BTreeMap<&str, usize> = BTreeMap::new();
    for token in cleaned.iter().flat_map(|doc| tokenize(doc)) {
        *corpus_frequency.entry(token).or_insert(0) += 1;
    }

    if corpus_frequency.is_empty() {
        debug!(documents = documents.len(), "empty vocabulary after cleaning");
        return BTreeSet::new();
    }

    // BTreeMap iterates in column order and sort_by is stable
    let mut ranked: Vec<(&str, usize)> = corpus_frequency.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(term, _)| term.to_string())
        .collect()
}
