//! Text helpers shared by every view: escaping, relative dates, counts and
//! description sanitizing.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};
use maud::html;
use scraper::{ElementRef, Html};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Escapes text for insertion into markup. Absent or empty input yields "".
pub fn escape_html(text: Option<&str>) -> String {
    match text {
        Some(text) if !text.is_empty() => html! { (text) }.into_string(),
        _ => String::new(),
    }
}

/// Relative "posted" label for a timestamp, measured against the current time.
pub fn format_date(input: Option<&str>) -> String {
    format_date_at(input, Utc::now())
}

/// Relative label for `input` as seen at `now`.
///
/// The day difference is rounded up, so anything within the last 24 hours
/// reads "yesterday" and exactly one day is still "yesterday".
pub fn format_date_at(input: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(date) = input.and_then(parse_timestamp) else {
        return "recently".to_string();
    };

    let diff_ms = (now - date).num_milliseconds().abs();
    let days = (diff_ms + DAY_MS - 1) / DAY_MS;

    if days == 1 {
        "yesterday".to_string()
    } else if days < 7 {
        format!("{days} days ago")
    } else if days < 30 {
        format!("{} weeks ago", (days + 6) / 7)
    } else if days < 365 {
        format!("{} months ago", (days + 29) / 30)
    } else {
        date.with_timezone(&Local).format("%-m/%-d/%Y").to_string()
    }
}

/// RFC 3339, `YYYY-MM-DD HH:MM:SS` (UTC) or a bare date (UTC midnight).
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `12345` -> `12,345`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Elements whose whole subtree is discarded.
const DROPPED: &[&str] = &[
    "script", "style", "iframe", "object", "embed", "noscript", "template", "form", "input",
    "button", "textarea", "select", "svg", "math",
];

/// Elements kept as-is (without attributes).
const ALLOWED: &[&str] = &[
    "p", "ul", "ol", "li", "strong", "em", "b", "i", "u", "h1", "h2", "h3", "h4", "h5", "h6",
    "code", "pre", "blockquote",
];

/// Re-emits a rich-text job description keeping only harmless formatting.
///
/// Text is always escaped. Unknown elements are unwrapped to their children;
/// links keep their target only for http(s) and mailto.
pub fn sanitize_description(raw: &str) -> String {
    let fragment = Html::parse_fragment(raw);
    let mut out = String::with_capacity(raw.len());
    write_children(fragment.root_element(), &mut out);
    out
}

fn write_children(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(&escape_html(Some(&**text)));
        } else if let Some(child) = ElementRef::wrap(child) {
            write_element(child, out);
        }
    }
}

fn write_element(element: ElementRef<'_>, out: &mut String) {
    let name = element.value().name();
    if DROPPED.contains(&name) {
        return;
    }

    match name {
        "br" | "hr" => {
            out.push('<');
            out.push_str(name);
            out.push('>');
        }
        "a" => match element.value().attr("href").filter(|href| is_safe_href(href)) {
            Some(href) => {
                out.push_str("<a href=\"");
                out.push_str(&escape_html(Some(href)));
                out.push_str("\" rel=\"nofollow noopener\">");
                write_children(element, out);
                out.push_str("</a>");
            }
            None => write_children(element, out),
        },
        _ if ALLOWED.contains(&name) => {
            out.push('<');
            out.push_str(name);
            out.push('>');
            write_children(element, out);
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
        _ => write_children(element, out),
    }
}

fn is_safe_href(href: &str) -> bool {
    let href = href.trim().to_ascii_lowercase();
    href.starts_with("http://") || href.starts_with("https://") || href.starts_with("mailto:")
}
