//! Ngimete text pipeline.
//!
//! Romanized Ngimete text goes through three deterministic stages:
//!
//! ```text
//! raw text ──▶ boundary resolution ──▶ orthography
//!                                         │
//!                 ┌───────────────────────┴──────────────────────┐
//!                 v                                              v
//!     phonemic transcription                            featural script
//!  (encode → syllabify → fix → decode)            (separate | merged glyphs)
//! ```
//!
//! The free functions [`resolve_orthography`], [`transcribe`] and
//! [`render_script`] run the built-in configuration. Build a [`Pipeline`]
//! from a custom [`Config`] to swap rule tables or syllable templates, and use
//! [`Content`] to get every representation of a multi-line block at once.

use regex::Regex;
use std::borrow::Cow;

#[macro_use]
mod macros;
mod api;
mod content;
mod engine;
mod error;
mod rules;

pub use api::{
    Config, Pipeline, Stage, StageSnapshot, TranscriptionTrace, render_script, resolve_orthography, transcribe,
};
pub use content::{Content, Layout, Line, Representation};
pub use engine::{
    BoundaryResolver, BoundaryRule, Glyph, Marks, ScriptMode, ScriptRenderer, Slots, Syllabifier, Template,
};
pub use error::{ConfigError, UnknownVariant};
pub use rules::classes::{ClassTable, GroupTable};

// --- Shared configuration types ---------------------------------------------

/// A fixed, named set of characters (for example "vowels").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharClass {
    name: &'static str,
    members: Vec<char>,
}

impl CharClass {
    /// Build a class from every character of `members`.
    pub fn new(name: &'static str, members: &str) -> Self {
        Self { name, members: members.chars().collect() }
    }

    /// Build a class holding exactly one character.
    pub fn single(name: &'static str, member: char) -> Self {
        Self { name, members: vec![member] }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn contains(&self, ch: char) -> bool {
        self.members.contains(&ch)
    }

    /// Like [`contains`](Self::contains), treating a missing neighbour as a non-member.
    pub fn matches(&self, ch: Option<char>) -> bool {
        ch.is_some_and(|c| self.contains(c))
    }

    pub fn members(&self) -> &[char] {
        &self.members
    }
}

/// Match side of a rewrite [`Rule`].
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Replace every occurrence of a plain string.
    Literal(String),
    /// Replace every match of a regular expression; the replacement may use
    /// `${n}` group references.
    Regex(Regex),
}

/// One step of an ordered rewrite list.
///
/// Rules of a list run one after the other over the whole string; each rule
/// sees the output of the previous one.
#[derive(Debug, Clone)]
pub struct Rule {
    pub name: &'static str,
    pub pattern: Pattern,
    pub replacement: String,
}

impl Rule {
    pub fn literal(name: &'static str, pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Rule { name, pattern: Pattern::Literal(pattern.into()), replacement: replacement.into() }
    }

    pub fn from_regex(name: &'static str, pattern: Regex, replacement: impl Into<String>) -> Self {
        Rule { name, pattern: Pattern::Regex(pattern), replacement: replacement.into() }
    }

    /// Compile `pattern` at runtime, for rules that do not come from the
    /// built-in tables.
    pub fn regex(name: &'static str, pattern: &str, replacement: impl Into<String>) -> Result<Self, ConfigError> {
        let re = Regex::new(pattern).map_err(|source| ConfigError::InvalidRule { name, source })?;
        Ok(Rule::from_regex(name, re, replacement))
    }

    /// Apply this rule to `input`, borrowing when nothing matched.
    pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        match &self.pattern {
            Pattern::Literal(needle) => {
                if needle.is_empty() || !input.contains(needle.as_str()) {
                    Cow::Borrowed(input)
                } else {
                    Cow::Owned(input.replace(needle.as_str(), &self.replacement))
                }
            }
            Pattern::Regex(re) => re.replace_all(input, self.replacement.as_str()),
        }
    }
}

/// Run `rules` over `input` strictly in list order.
pub fn apply_rules(input: &str, rules: &[Rule]) -> String {
    let mut out = input.to_string();
    for rule in rules {
        let next = match rule.apply(&out) {
            Cow::Borrowed(_) => continue,
            Cow::Owned(next) => next,
        };
        out = next;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_regex_rules() {
        // Array of (pattern, replacement, input, expected)
        let cases = [
            (r"([aeiou])\.([aeiou])", "${1}${2}", "ka.i", "kai"),
            (r"^\.+", "", "..ka", "ka"),
            ("s$", "z", "kas kas", "kas kaz"),
        ];

        for (pattern, replacement, input, expected) in cases {
            let rule = Rule::regex("runtime", pattern, replacement).unwrap();
            assert_eq!(rule.apply(input), expected, "pattern {pattern:?}");
        }
    }

    #[test]
    fn invalid_rule_pattern_is_reported() {
        for pattern in ["(", "[a-", "a{2,1}"] {
            let err = Rule::regex("broken", pattern, "").unwrap_err();
            assert!(matches!(err, ConfigError::InvalidRule { name: "broken", .. }), "pattern {pattern:?}");
            assert!(err.to_string().contains("broken"));
        }
    }

    #[test]
    fn rules_run_in_list_order() {
        let rules = [Rule::literal("first", "ab", "c"), Rule::literal("second", "c", "d")];
        assert_eq!(apply_rules("abc", &rules), "dd");
        assert_eq!(apply_rules("xyz", &rules), "xyz");
    }
}
