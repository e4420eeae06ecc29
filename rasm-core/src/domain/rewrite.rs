//! Substitution passes over the input buffer
//!
//! Two strategies share the same table. The suffix pass is the canonical
//! per-keystroke behavior: one forward sweep through the table, each rule
//! tested against the trailing codepoints of the buffer as left by the
//! rules before it. The global pass is the legacy replace-everywhere
//! variant, kept behind a configuration flag.

use crate::domain::table::{Rule, RuleTable};

/// Apply every rule once, in table order, against the buffer tail.
///
/// For each rule whose pattern (n codepoints) equals the trailing n
/// codepoints of the current buffer, the tail is replaced and the sweep
/// continues with the rewritten buffer. Rules are never retried; a pattern
/// longer than the buffer is skipped. Total over every input, including
/// the empty string.
pub fn suffix_pass(table: &RuleTable, text: &str) -> String {
    let (out, _) = suffix_pass_traced(table, text);
    out
}

/// [`suffix_pass`], also reporting which rules fired, in firing order.
pub fn suffix_pass_traced<'a>(table: &'a RuleTable, text: &str) -> (String, Vec<&'a Rule>) {
    let mut buf: Vec<char> = text.chars().collect();
    let mut fired = Vec::new();

    for rule in table.rules() {
        let pattern: Vec<char> = rule.pattern.chars().collect();
        if pattern.is_empty() || pattern.len() > buf.len() {
            continue;
        }
        let start = buf.len() - pattern.len();
        if buf[start..] == pattern[..] {
            buf.truncate(start);
            buf.extend(rule.replacement.chars());
            fired.push(rule);
        }
    }

    (buf.into_iter().collect(), fired)
}

/// Apply rules by descending pattern length, everywhere in the buffer.
///
/// A stable sort keeps authored order among equal-length patterns. Matches
/// mid-string as well as at the tail, and is unaware of word boundaries.
pub fn global_pass(table: &RuleTable, text: &str) -> String {
    let (out, _) = global_pass_traced(table, text);
    out
}

/// [`global_pass`], also reporting which rules fired, in firing order.
pub fn global_pass_traced<'a>(table: &'a RuleTable, text: &str) -> (String, Vec<&'a Rule>) {
    let mut ordered: Vec<&Rule> = table.rules().iter().collect();
    ordered.sort_by(|a, b| b.pattern_len().cmp(&a.pattern_len()));

    let mut out = text.to_string();
    let mut fired = Vec::new();
    for rule in ordered {
        if rule.pattern.is_empty() {
            continue;
        }
        if out.contains(&rule.pattern) {
            out = out.replace(&rule.pattern, &rule.replacement);
            fired.push(rule);
        }
    }

    (out, fired)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::table::Rule;

    fn table(rules: &[(&str, &str)]) -> RuleTable {
        let mut t = RuleTable::empty();
        for &(p, r) in rules {
            t.push(Rule::new(p, r));
        }
        t
    }

    #[test]
    fn test_suffix_pass_matches_tail_only() {
        let t = table(&[("ab", "X")]);
        assert_eq!(suffix_pass(&t, "zzab"), "zzX");
        // Mid-string occurrence is not touched.
        assert_eq!(suffix_pass(&t, "abzz"), "abzz");
    }

    #[test]
    fn test_suffix_pass_is_empty_safe() {
        let t = table(&[("abc", "X")]);
        assert_eq!(suffix_pass(&t, ""), "");
        assert_eq!(suffix_pass(&t, "ab"), "ab"); // pattern longer than buffer
    }

    #[test]
    fn test_suffix_pass_cascades_in_table_order() {
        // The first rule rewrites the tail, the second observes the result.
        let t = table(&[("ab", "cX"), ("X", "Y")]);
        assert_eq!(suffix_pass(&t, "zab"), "zcY");
    }

    #[test]
    fn test_suffix_pass_never_retries_a_rule() {
        // After the second rule recreates "ab" at the tail, the first rule
        // is already past and does not run again.
        let t = table(&[("ab", "q"), ("q", "ab")]);
        assert_eq!(suffix_pass(&t, "ab"), "ab");
    }

    #[test]
    fn test_suffix_pass_skips_empty_patterns() {
        let t = table(&[("", "junk"), ("ab", "X")]);
        assert_eq!(suffix_pass(&t, "ab"), "X");
    }

    #[test]
    fn test_suffix_trace_reports_fired_rules_in_order() {
        let t = table(&[("ab", "cX"), ("zz", "?"), ("X", "Y")]);
        let (out, fired) = suffix_pass_traced(&t, "zab");
        assert_eq!(out, "zcY");
        let patterns: Vec<&str> = fired.iter().map(|r| r.pattern.as_str()).collect();
        assert_eq!(patterns, ["ab", "X"]);
    }

    #[test]
    fn test_global_pass_replaces_everywhere() {
        let t = table(&[("ab", "X")]);
        assert_eq!(global_pass(&t, "ab ab ab"), "X X X");
    }

    #[test]
    fn test_global_pass_prefers_longer_patterns() {
        // Authored order is ("ab", ...) before ("abc", ...); the global
        // strategy still applies the longer pattern first.
        let t = table(&[("ab", "X"), ("abc", "Y")]);
        assert_eq!(global_pass(&t, "abc"), "Y");
    }

    #[test]
    fn test_global_pass_is_stable_among_equal_lengths() {
        let t = table(&[("ab", "X"), ("cd", "ab")]);
        // "ab" runs first (same length, authored earlier), then "cd"
        // produces a fresh "ab" that no rule revisits.
        assert_eq!(global_pass(&t, "cd"), "ab");
    }

    #[test]
    fn test_determinism() {
        let t = table(&[("ab", "cX"), ("X", "Y")]);
        let once = suffix_pass(&t, "zab");
        let twice = suffix_pass(&t, "zab");
        assert_eq!(once, twice);
    }
}
