//! Engine entry point tying the passes together

use crate::config::{Config, RewriteStrategy};
use crate::domain::article;
use crate::domain::dots::DotMap;
use crate::domain::rewrite;
use crate::domain::table::{Rule, RuleTable};

/// The orthography normalization engine.
///
/// Owns the rule table and the dot map; holds no text. [`convert`] is the
/// per-keystroke pipeline (substitution pass, then definite-article
/// assimilation over the last word); the dot lookups serve the dedicated
/// cycle key and consume only the trailing one or two codepoints of the
/// host's buffer.
///
/// Lookups take `&self` and may run concurrently from a shared reference;
/// [`append_rule`] takes `&mut self`, so the borrow checker enforces the
/// exclusive-append, shared-lookup discipline directly.
///
/// [`convert`]: Normalizer::convert
/// [`append_rule`]: Normalizer::append_rule
#[derive(Debug, Clone)]
pub struct Normalizer {
    table: RuleTable,
    dots: DotMap,
    strategy: RewriteStrategy,
}

impl Normalizer {
    /// Engine with the built-in corpus and the suffix-anchored strategy.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Engine with an explicit configuration.
    ///
    /// Extra rules are appended behind the built-in corpus in the order
    /// given, exactly as successive [`Normalizer::append_rule`] calls
    /// would.
    pub fn with_config(config: Config) -> Self {
        let mut table = RuleTable::built_in();
        for rule in config.extra_rules {
            table.push(rule);
        }
        Self {
            table,
            dots: DotMap::built_in(),
            strategy: config.strategy,
        }
    }

    /// Apply the full per-keystroke pipeline to `text`.
    ///
    /// Total over every input, including the empty string; "nothing
    /// applied" is an unchanged return, never an error.
    pub fn convert(&self, text: &str) -> String {
        let rewritten = match self.strategy {
            RewriteStrategy::Suffix => rewrite::suffix_pass(&self.table, text),
            RewriteStrategy::Global => rewrite::global_pass(&self.table, text),
        };
        article::assimilate(&rewritten)
    }

    /// [`convert`](Normalizer::convert), also reporting the substitution
    /// rules that fired, in firing order.
    ///
    /// The assimilation pass is not rule-driven and does not appear in the
    /// trace.
    pub fn convert_traced(&self, text: &str) -> (String, Vec<Rule>) {
        let (rewritten, fired) = match self.strategy {
            RewriteStrategy::Suffix => rewrite::suffix_pass_traced(&self.table, text),
            RewriteStrategy::Global => rewrite::global_pass_traced(&self.table, text),
        };
        let fired = fired.into_iter().cloned().collect();
        (article::assimilate(&rewritten), fired)
    }

    /// Next dotted variant for a single trailing codepoint.
    pub fn next_dot_variant(&self, last: char) -> Option<&'static str> {
        self.dots.next_variant(last)
    }

    /// Expansion for a trailing two-codepoint sequence.
    ///
    /// Always consulted before [`Normalizer::next_dot_variant`]; only the
    /// space-prefixed particle keys are ever present.
    pub fn next_dot_variant_seq(&self, last_two: &str) -> Option<&'static str> {
        self.dots.next_variant_seq(last_two)
    }

    /// Append a rule behind the current table.
    ///
    /// No validation and no deduplication: duplicate and even empty
    /// patterns are accepted silently (an empty pattern never matches).
    pub fn append_rule(&mut self, pattern: impl Into<String>, replacement: impl Into<String>) {
        self.table.push(Rule::new(pattern, replacement));
    }

    /// The live rule table, in application order.
    pub fn rules(&self) -> &[Rule] {
        self.table.rules()
    }

    /// The configured rewrite strategy.
    pub fn strategy(&self) -> RewriteStrategy {
        self.strategy
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
