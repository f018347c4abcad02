use crate::models::{LanguageCount, ProfileAnalysis};
use colored::*;
use std::fmt::Write;

pub const NOT_FOUND_MESSAGE: &str = "Could not find GitHub user. Please check the username.";
pub const EMPTY_USERNAME_MESSAGE: &str = "Please enter a username.";
pub const INVALID_USERNAME_MESSAGE: &str = "Invalid GitHub username.";
pub const NO_CHART_MESSAGE: &str = "Not enough language data to generate a chart.";
pub const NO_REPOSITORIES_MESSAGE: &str = "No public repositories found.";
pub const NO_KEYWORDS_MESSAGE: &str = "No keywords found in READMEs.";

const BAR_WIDTH: usize = 30;

/// Bar lengths proportional to count, the largest filling `width`.
pub fn bar_lengths(languages: &[LanguageCount], width: usize) -> Vec<usize> {
    let max = languages.iter().map(|entry| entry.count).max().unwrap_or(0);
    if max == 0 {
        return vec![0; languages.len()];
    }
    languages
        .iter()
        .map(|entry| (entry.count * width + max - 1) / max)
        .collect()
}

/// Colored terminal rendering of one analysis.
pub fn render_terminal(analysis: &ProfileAnalysis) -> String {
    let mut out = String::new();
    let account = &analysis.account;

    let _ = writeln!(out, "{}", account.display_name().bold().green());
    let _ = writeln!(out, "{}", account.html_url.underline().blue());
    if let Some(avatar) = &account.avatar_url {
        let _ = writeln!(out, "Avatar: {}", avatar.dimmed());
    }
    let _ = writeln!(out, "{}\n", "=".repeat(50).dimmed());

    let _ = writeln!(out, "{}", "User Stats".bold());
    let _ = writeln!(out, "Public Repos: {}", account.public_repos);
    let _ = writeln!(out, "Followers: {}", account.followers);
    let _ = writeln!(out, "Member Since: {}\n", account.member_since());

    let _ = writeln!(out, "{}", "Language Breakdown".bold());
    if analysis.languages.is_empty() {
        let _ = writeln!(out, "{}", NO_CHART_MESSAGE.yellow());
    } else {
        let label_width = analysis
            .languages
            .iter()
            .map(|entry| entry.language.len())
            .max()
            .unwrap_or(0);
        let lengths = bar_lengths(&analysis.languages, BAR_WIDTH);
        for (entry, length) in analysis.languages.iter().zip(lengths) {
            let _ = writeln!(
                out,
                "{:<width$} {} {}",
                entry.language,
                "█".repeat(length).cyan(),
                entry.count,
                width = label_width
            );
        }
    }
    out.push('\n');

    let _ = writeln!(out, "{}", "Top Repositories by Stars".bold());
    if analysis.top_repositories.is_empty() {
        let _ = writeln!(out, "{}", NO_REPOSITORIES_MESSAGE.yellow());
    } else {
        for repo in &analysis.top_repositories {
            let _ = writeln!(
                out,
                "{:<30} {:>8} ★  {}",
                repo.name,
                repo.stargazers_count,
                repo.html_url.dimmed()
            );
        }
    }
    out.push('\n');

    let _ = writeln!(out, "{}", "Project Keywords".bold());
    if analysis.keywords.is_empty() {
        let _ = writeln!(out, "{}", NO_KEYWORDS_MESSAGE.yellow());
    } else {
        let chips: Vec<String> = analysis
            .keywords
            .iter()
            .map(|keyword| format!("[{}]", keyword).on_bright_black().to_string())
            .collect();
        let _ = writeln!(out, "{}", chips.join(" "));
    }

    out
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const PAGE_STYLE: &str = "body{font-family:sans-serif;margin:2rem;color:#2C3E50}\
.cols{display:flex;gap:2rem;flex-wrap:wrap}\
.chart{display:flex;align-items:flex-end;gap:.5rem;height:200px}\
.bar{background:#3498DB;width:48px}\
.chip{background:#ECF0F1;color:#2C3E50;border-radius:12px;padding:4px 8px;margin:2px;display:inline-block;font-size:.8rem}\
.error{color:#C0392B}.warning{color:#B9770E}\
table{border-collapse:collapse}td,th{padding:4px 8px;border-bottom:1px solid #ddd;text-align:left}";

/// Full HTML page: the username form, then either a message or the dashboard.
pub fn render_page(username: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\">\
<title>GitHub Profile Analyzer</title><style>{style}</style></head><body>\
<h1>GitHub Profile Analyzer</h1>\
<form method=\"get\" action=\"/\"><label>Enter a GitHub Username: \
<input type=\"text\" name=\"username\" value=\"{username}\"></label> \
<button type=\"submit\">Analyze</button></form>{body}</body></html>",
        style = PAGE_STYLE,
        username = escape_html(username),
        body = body
    )
}

/// `data:` URL carrying the report text, so the download is the report of the
/// run on screen.
pub fn report_data_url(report: &str) -> String {
    // byte_serialize writes spaces as '+' and a literal '+' as %2B
    let encoded: String = url::form_urlencoded::byte_serialize(report.as_bytes()).collect();
    format!("data:text/plain;charset=utf-8,{}", encoded.replace('+', "%20"))
}

pub fn render_message(class: &str, message: &str) -> String {
    format!("<p class=\"{}\">{}</p>", class, escape_html(message))
}

/// Dashboard section of the HTML page.
pub fn render_html(analysis: &ProfileAnalysis) -> String {
    let account = &analysis.account;
    let login = escape_html(&account.login);
    let mut out = String::new();

    out.push_str("<div class=\"cols\"><div>");
    if let Some(avatar) = &account.avatar_url {
        let _ = write!(
            out,
            "<img src=\"{}\" width=\"140\" alt=\"{}\">",
            escape_html(avatar),
            login
        );
    }
    let _ = write!(
        out,
        "<h2><a href=\"{}\">{}</a></h2>",
        escape_html(&account.html_url),
        escape_html(account.display_name())
    );
    let _ = write!(
        out,
        "<h3>User Stats</h3><p>Public Repos: {}<br>Followers: {}<br>Member Since: {}</p>",
        account.public_repos,
        account.followers,
        escape_html(&account.member_since())
    );
    let _ = write!(
        out,
        "<p><a href=\"{}\" download=\"{}\">Download Report</a></p>",
        report_data_url(&analysis.report()),
        escape_html(&analysis.report_filename())
    );
    out.push_str("</div><div><h3>Language Breakdown</h3>");

    if analysis.languages.is_empty() {
        out.push_str(&render_message("warning", NO_CHART_MESSAGE));
    } else {
        out.push_str("<div class=\"chart\">");
        for (entry, height) in analysis
            .languages
            .iter()
            .zip(bar_lengths(&analysis.languages, 100))
        {
            let _ = write!(
                out,
                "<div title=\"{lang}: {count}\"><div class=\"bar\" style=\"height:{height}%\"></div>{lang}</div>",
                lang = escape_html(&entry.language),
                count = entry.count,
                height = height
            );
        }
        out.push_str("</div>");
    }
    out.push_str("</div></div>");

    out.push_str("<h3>Top Repositories &amp; Project Keywords</h3><div class=\"cols\"><div>");
    out.push_str("<strong>Top Repositories by Stars</strong>");
    if analysis.top_repositories.is_empty() {
        out.push_str(&render_message("warning", NO_REPOSITORIES_MESSAGE));
    } else {
        out.push_str("<table><tr><th>Repository</th><th>Stars ★</th><th>Link to Repo</th></tr>");
        for repo in &analysis.top_repositories {
            let url = escape_html(&repo.html_url);
            let _ = write!(
                out,
                "<tr><td>{}</td><td>{}</td><td><a href=\"{}\">{}</a></td></tr>",
                escape_html(&repo.name),
                repo.stargazers_count,
                url,
                url
            );
        }
        out.push_str("</table>");
    }
    out.push_str("</div><div><strong>Project Keywords</strong><div>");
    if analysis.keywords.is_empty() {
        out.push_str(&render_message("warning", NO_KEYWORDS_MESSAGE));
    } else {
        for keyword in &analysis.keywords {
            let _ = write!(out, "<span class=\"chip\">{}</span>", escape_html(keyword));
        }
    }
    out.push_str("</div></div></div>");

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(counts: &[(&str, usize)]) -> Vec<LanguageCount> {
        counts
            .iter()
            .map(|(language, count)| LanguageCount {
                language: language.to_string(),
                count: *count,
            })
            .collect()
    }

    #[test]
    fn bars_scale_to_largest() {
        assert_eq!(bar_lengths(&tally(&[("Rust", 4), ("C", 2), ("Go", 1)]), 20), vec![20, 10, 5]);
        assert!(bar_lengths(&[], 20).is_empty());
    }

    #[test]
    fn data_url_round_trips_report_text() {
        let report = "Title for a+b\n- x (5 ★)\n\"<&>\"";
        let url = report_data_url(report);
        let payload = url
            .strip_prefix("data:text/plain;charset=utf-8,")
            .expect("data URL prefix");
        assert!(!payload.contains(' ') && !payload.contains('+') && !payload.contains('"'));

        let bytes: Vec<u8> = url::form_urlencoded::parse(format!("t={}", payload).as_bytes())
            .next()
            .map(|(_, value)| value.into_owned().into_bytes())
            .unwrap_or_default();
        assert_eq!(String::from_utf8(bytes).unwrap(), report);
    }

    #[test]
    fn html_is_escaped() {
        assert_eq!(escape_html("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }
}
