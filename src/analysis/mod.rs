//! Pure aggregations over one account's repositories.

pub mod keywords;
pub mod languages;
pub mod ranking;
mod stop_words;

pub use keywords::{clean_text, extract_keywords, MAX_KEYWORDS};
pub use languages::{analyze_languages, MAX_LANGUAGES};
pub use ranking::{top_repositories, MAX_TOP_REPOSITORIES};
