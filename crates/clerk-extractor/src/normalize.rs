//! Cleanup of extracted opinion text before prompting

use regex::Regex;
use std::sync::LazyLock;

static STRAY_PERIOD_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.+,").expect("valid period-comma regex"));
static WRAPPED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\n\s*").expect("valid wrapped-line regex"));
static PAGE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(\d{1,4})").expect("valid page-marker regex"));
static BARE_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(\S)").expect("valid newline regex"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Normalize raw opinion text for prompting
///
/// Rules, in order:
/// 1. a period run directly before a comma collapses to the comma
/// 2. whitespace spanning a line break becomes one space
/// 3. star-paging markers (`*436`) become `[Page 436]`
/// 4. a line break before non-whitespace becomes a space
/// 5. remaining whitespace runs become one space; the ends are trimmed
///
/// The result holds no line breaks and `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    let text = STRAY_PERIOD_COMMA.replace_all(text, ",");
    let text = WRAPPED_LINE.replace_all(&text, " ");
    let text = PAGE_MARKER.replace_all(&text, "[Page ${1}]");
    let text = BARE_NEWLINE.replace_all(&text, " ${1}");
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    text.trim().to_string()
}
