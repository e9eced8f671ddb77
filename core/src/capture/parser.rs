//! Capture parser
//!
//! Splits one line of free text into a task title, a set of labels, and a
//! priority. Labels are written inline as `@label`, `@"multi word"`, or
//! `@'multi word'`; priority as `!!0`-`!!4` on the user scale.

use std::sync::OnceLock;

use regex::Regex;

use super::priority::Priority;

/// Structured result of one capture line. Built once per capture, handed to
/// the gateway, then discarded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedCapture {
    /// Input with every matched label/priority token removed, then trimmed.
    /// May be empty; rejecting empty titles is the caller's business.
    pub title: String,
    /// Distinct labels in the order found (pass order, then position).
    /// Comparison is case-sensitive.
    pub labels: Vec<String>,
    pub priority: Priority,
}

fn bare_label_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // First label char must not be a double quote, otherwise quoted tokens
    // would be eaten here before their own pass runs.
    RE.get_or_init(|| Regex::new(r#"@[^\s"]\S*"#).expect("bare label regex is valid"))
}

fn double_quoted_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"@"[^"]+""#).expect("double quoted label regex is valid"))
}

fn single_quoted_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // The inner class excludes only a double quote. Longstanding behavior,
    // kept as-is even though it looks asymmetric.
    RE.get_or_init(|| Regex::new(r#"@'[^"]+'"#).expect("single quoted label regex is valid"))
}

fn priority_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"!![0-4]").expect("priority regex is valid"))
}

/// Parses one line of capture input.
///
/// Four extraction-and-strip passes run in a fixed order: bare labels,
/// double-quoted labels, single-quoted labels, priority markers. Each pass
/// collects every match in its class and then deletes them from the working
/// text before the next pass runs; the order is load-bearing because later
/// patterns must not re-match text an earlier pass consumed. Whatever text
/// survives all four passes becomes the title (trimmed).
///
/// Never fails: input without any recognizable token simply comes back as
/// the title with no labels and an unspecified priority.
pub fn parse(input: &str) -> ParsedCapture {
    let mut labels: Vec<String> = Vec::new();

    let (tokens, text) = extract_pass(input, bare_label_regex(), false);
    for tok in tokens {
        let label = tok.strip_prefix('@').unwrap_or(&tok);
        push_unique(&mut labels, label);
    }

    let (tokens, text) = extract_pass(&text, double_quoted_regex(), true);
    for tok in tokens {
        let label = tok
            .strip_prefix("@\"")
            .and_then(|t| t.strip_suffix('"'))
            .unwrap_or(&tok);
        push_unique(&mut labels, label);
    }

    let (tokens, text) = extract_pass(&text, single_quoted_regex(), true);
    for tok in tokens {
        let label = tok
            .strip_prefix("@'")
            .and_then(|t| t.strip_suffix('\''))
            .unwrap_or(&tok);
        push_unique(&mut labels, label);
    }

    let (tokens, title) = extract_pass(&text, priority_regex(), true);
    let mut priority = Priority::NONE;
    for tok in tokens {
        let value = tok.strip_prefix("!!").and_then(|d| d.parse::<u8>().ok());
        // An explicit !!0 is stripped from the text but never recorded and
        // never overrides an earlier nonzero marker. The last nonzero
        // marker wins.
        if let Some(p) = value.filter(|p| *p != 0) {
            priority = Priority::from_user(p).unwrap_or(Priority::NONE);
        }
    }

    ParsedCapture {
        title,
        labels,
        priority,
    }
}

/// One token-class pass: collects every match of `re` that sits on a token
/// boundary, then returns the matched tokens together with the working text
/// with those matches (and their single leading separator space) removed.
///
/// A match must be preceded by whitespace or the start of the line. When
/// `needs_trailing_boundary` is set it must also be followed by whitespace
/// or the end of the line; boundary checks do not consume text, so adjacent
/// tokens separated by a single space are all seen.
fn extract_pass(text: &str, re: &Regex, needs_trailing_boundary: bool) -> (Vec<String>, String) {
    let mut tokens = Vec::new();
    let mut spans: Vec<(usize, usize)> = Vec::new();

    for m in re.find_iter(text) {
        let lead_ok = m.start() == 0
            || text[..m.start()]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_whitespace());
        if !lead_ok {
            continue;
        }
        if needs_trailing_boundary {
            let trail_ok = m.end() == text.len()
                || text[m.end()..]
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_whitespace());
            if !trail_ok {
                continue;
            }
        }

        tokens.push(m.as_str().to_string());

        let mut start = m.start();
        if let Some(ws) = text[..start].chars().next_back().filter(|c| c.is_whitespace()) {
            // Swallow the separator so removal leaves no double space.
            start -= ws.len_utf8();
        }
        spans.push((start, m.end()));
    }

    let mut rest = String::with_capacity(text.len());
    let mut pos = 0;
    for (start, end) in spans {
        rest.push_str(&text[pos..start]);
        pos = end;
    }
    rest.push_str(&text[pos..]);

    (tokens, rest.trim().to_string())
}

fn push_unique(labels: &mut Vec<String>, label: &str) {
    if !labels.iter().any(|l| l == label) {
        labels.push(label.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn labels(parsed: &ParsedCapture) -> Vec<&str> {
        parsed.labels.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_empty_input() {
        let parsed = parse("");
        assert_eq!(parsed.title, "");
        assert!(parsed.labels.is_empty());
        assert_eq!(parsed.priority, Priority::NONE);
    }

    #[test]
    fn test_whitespace_only_input() {
        let parsed = parse("   \t ");
        assert_eq!(parsed.title, "");
        assert!(parsed.labels.is_empty());
    }

    #[test]
    fn test_plain_text_passes_through() {
        let parsed = parse("Buy milk");
        assert_eq!(parsed.title, "Buy milk");
        assert!(parsed.labels.is_empty());
        assert_eq!(parsed.priority, Priority::NONE);
    }

    #[test]
    fn test_label_and_priority() {
        let parsed = parse("Call mom @family !!2");
        assert_eq!(parsed.title, "Call mom");
        assert_eq!(labels(&parsed), vec!["family"]);
        assert_eq!(parsed.priority.user(), 2);
    }

    #[test]
    fn test_mixed_classes_order_follows_passes() {
        // The bare pass runs before the quoted pass, so "urgent" is found
        // first even though it appears later in the text.
        let parsed = parse(r#"Plan trip @"work travel" @urgent !!4"#);
        assert_eq!(parsed.title, "Plan trip");
        assert_eq!(labels(&parsed), vec!["urgent", "work travel"]);
        assert_eq!(parsed.priority.user(), 4);
    }

    #[test]
    fn test_duplicate_labels_collapse() {
        let parsed = parse("@x @x task");
        assert_eq!(parsed.title, "task");
        assert_eq!(labels(&parsed), vec!["x"]);
    }

    #[test]
    fn test_duplicate_across_passes_collapses() {
        let parsed = parse(r#"@x @"x" task"#);
        assert_eq!(parsed.title, "task");
        assert_eq!(labels(&parsed), vec!["x"]);
    }

    #[test]
    fn test_label_dedup_is_case_sensitive() {
        let parsed = parse("@Work @work task");
        assert_eq!(labels(&parsed), vec!["Work", "work"]);
    }

    #[test]
    fn test_last_priority_marker_wins() {
        let parsed = parse("task !!1 !!3");
        assert_eq!(parsed.title, "task");
        assert_eq!(parsed.priority.user(), 3);
    }

    #[test]
    fn test_explicit_zero_is_unspecified() {
        let parsed = parse("task !!0");
        assert_eq!(parsed.title, "task");
        assert_eq!(parsed.priority, Priority::NONE);
    }

    #[test]
    fn test_zero_does_not_override_earlier_marker() {
        let parsed = parse("task !!2 !!0");
        assert_eq!(parsed.title, "task");
        assert_eq!(parsed.priority.user(), 2);
    }

    #[test]
    fn test_label_at_end_of_line() {
        // The bare pattern anchors only on the leading boundary.
        let parsed = parse("buy milk @errands");
        assert_eq!(parsed.title, "buy milk");
        assert_eq!(labels(&parsed), vec!["errands"]);
    }

    #[test]
    fn test_at_sign_inside_word_is_not_a_label() {
        let parsed = parse("mail alice@example.com today");
        assert_eq!(parsed.title, "mail alice@example.com today");
        assert!(parsed.labels.is_empty());
    }

    #[test]
    fn test_bare_at_sign_stays_in_title() {
        let parsed = parse("meet @ noon");
        assert_eq!(parsed.title, "meet @ noon");
        assert!(parsed.labels.is_empty());
    }

    #[test]
    fn test_removal_leaves_single_internal_spaces() {
        let parsed = parse("before @x after @y end");
        assert_eq!(parsed.title, "before after end");
        assert_eq!(labels(&parsed), vec!["x", "y"]);
    }

    #[test]
    fn test_double_quoted_label_with_spaces() {
        let parsed = parse(r#"@"deep work" write report"#);
        assert_eq!(parsed.title, "write report");
        assert_eq!(labels(&parsed), vec!["deep work"]);
    }

    #[test]
    fn test_double_quoted_needs_trailing_boundary() {
        let parsed = parse(r#"task @"x"y"#);
        assert_eq!(parsed.title, r#"task @"x"y"#);
        assert!(parsed.labels.is_empty());
    }

    #[test]
    fn test_single_quoted_token_is_consumed_by_bare_pass() {
        // The bare pass permits a leading single quote, so it claims the
        // first word of a single-quoted token before the single-quote pass
        // ever sees it. Kept for compatibility.
        let parsed = parse("task @'a b'");
        assert_eq!(parsed.title, "task b'");
        assert_eq!(labels(&parsed), vec!["'a"]);
    }

    #[test]
    fn test_priority_needs_boundaries() {
        let parsed = parse("task !!42");
        assert_eq!(parsed.title, "task !!42");
        assert_eq!(parsed.priority, Priority::NONE);
    }

    #[test]
    fn test_priority_out_of_range_ignored() {
        let parsed = parse("task !!5");
        assert_eq!(parsed.title, "task !!5");
        assert_eq!(parsed.priority, Priority::NONE);
    }

    #[test]
    fn test_title_only_priority() {
        let parsed = parse("!!4");
        assert_eq!(parsed.title, "");
        assert_eq!(parsed.priority.user(), 4);
    }

    #[test]
    fn test_reparse_of_title_is_identity() {
        let first = parse(r#"Plan trip @"work travel" @urgent !!4"#);
        let second = parse(&first.title);
        assert_eq!(second.title, first.title);
        assert!(second.labels.is_empty());
        assert_eq!(second.priority, Priority::NONE);
    }
}
